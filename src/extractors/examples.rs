//! Sentence search page (`sentsearch.php`).

use super::{Document, Field};
use crate::error::ScraperError;
use crate::models::{SampleSentence, WordExamples};
use scraper::Html;

pub const PATH: &str = "sentsearch.php";
pub const PARAM: &str = "word";

const ENGLISH_DEFINITION: Field = Field::text("mainData", "English Definition");
const SIMPLIFIED_SCRIPT: Field = Field::text("mainData", "Simplified Script");
const TRADITIONAL_SCRIPT: Field = Field::text("mainData", "Traditional Script");
const PART_OF_SPEECH: Field = Field::text("mainData", "Part of Speech");

/// Sentence list items in the first cell of the first row.
const SENTENCES: &str = "table#sentences tr:nth-child(1) td:nth-child(1) li";

pub fn parse(html: &str) -> Result<WordExamples, ScraperError> {
    let doc = Document::parse(html);

    let sample_sentences = doc
        .select(SENTENCES)?
        .into_iter()
        .map(|item| split_sentence(&item.inner_html()))
        .collect();

    Ok(WordExamples {
        english_definition: doc.text(&ENGLISH_DEFINITION)?,
        simplified_script: doc.text(&SIMPLIFIED_SCRIPT)?,
        traditional_script: doc.text(&TRADITIONAL_SCRIPT)?,
        part_of_speech: doc.text(&PART_OF_SPEECH)?,
        sample_sentences,
    })
}

/// Splits `english<br>chinese` list item markup into its two halves.
fn split_sentence(inner_html: &str) -> SampleSentence {
    let mut parts = inner_html.split("<br>");
    let english = parts.next().map(fragment_text).unwrap_or_default();
    let chinese = parts.next().map(fragment_text).unwrap_or_default();

    SampleSentence { english, chinese }
}

/// Text content of an HTML fragment, tags stripped.
fn fragment_text(fragment: &str) -> String {
    Html::parse_fragment(fragment)
        .root_element()
        .text()
        .collect::<String>()
        .trim()
        .to_string()
}
