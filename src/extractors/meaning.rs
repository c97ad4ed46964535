//! Word search page (`wordsearch.php`).

use super::{Document, Field, Rows};
use crate::error::ScraperError;
use crate::models::WordMeaning;

pub const PATH: &str = "wordsearch.php";
pub const PARAM: &str = "word";

const ENGLISH_DEFINITION: Field = Field::text("mainData", "English Definition");
const SIMPLIFIED_SCRIPT: Field = Field::text("mainData", "Simplified Script");
const TRADITIONAL_SCRIPT: Field = Field::text("mainData", "Traditional Script");
const PINYIN: Field = Field::text("mainData", "Pinyin");
const EFFECTIVE_PINYIN: Field = Field::text("mainData", "Effective Pinyin");
const ZHUYIN: Field = Field::text("mainData", "Zhuyin");
const CANTONESE: Field = Field::text("mainData", "Cantonese");
const PART_OF_SPEECH: Field = Field::text("mainData", "Part of Speech");
const MEASURE_WORD: Field = Field::text("mainData", "Measure Word");
const PROFICIENCY_LEVEL: Field = Field::text("mainData", "Proficiency Test Level");

// Headers of these tables sit in <thead>, so every body row is data.
const SAME_HEAD: Rows = Rows::body("#sameHead tbody tr");
const SAME_TAIL: Rows = Rows::body("#sameTail tbody tr");

pub fn parse(html: &str) -> Result<WordMeaning, ScraperError> {
    let doc = Document::parse(html);

    Ok(WordMeaning {
        english_definition: doc.text(&ENGLISH_DEFINITION)?,
        simplified_script: doc.text(&SIMPLIFIED_SCRIPT)?,
        traditional_script: doc.text(&TRADITIONAL_SCRIPT)?,
        pinyin: doc.text(&PINYIN)?,
        effective_pinyin: doc.text(&EFFECTIVE_PINYIN)?,
        zhuyin: doc.text(&ZHUYIN)?,
        cantonese: doc.text(&CANTONESE)?,
        part_of_speech: doc.text(&PART_OF_SPEECH)?,
        measure_word: doc.text(&MEASURE_WORD)?,
        proficiency_level: doc.text(&PROFICIENCY_LEVEL)?,
        words_with_same_head_word: doc.column(&SAME_HEAD, 1)?,
        words_with_same_tail_word: doc.column(&SAME_TAIL, 1)?,
    })
}
