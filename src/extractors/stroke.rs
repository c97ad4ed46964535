//! Stroke order page (`character-stroke-order.php`).

use super::{Document, Field};
use crate::error::ScraperError;
use crate::models::StrokeInfo;

pub const PATH: &str = "character-stroke-order.php";
pub const PARAM: &str = "word";

const ENGLISH_DEFINITION: Field = Field::text("mainData", "English Definition");
const SIMPLIFIED_SCRIPT: Field = Field::text("mainData", "Simplified Script");
const TRADITIONAL_SCRIPT: Field = Field::link("mainData", "Traditional Script");
const PART_OF_SPEECH: Field = Field::text("mainData", "Part of Speech");
const KANGXI_RADICAL: Field = Field::link("radical", "Kangxi Radical");
const ADDITIONAL_STROKES: Field = Field::text("radical", "Additional Stroke(s)");
const TOTAL_STROKES: Field = Field::text("radical", "Total Stroke(s)");
const STRUCTURE: Field = Field::attr("structure", "Structure", "span", "title");

/// Maps a stroke order page into a [`StrokeInfo`].
pub fn parse(html: &str) -> Result<StrokeInfo, ScraperError> {
    let doc = Document::parse(html);

    Ok(StrokeInfo {
        english_definition: doc.text(&ENGLISH_DEFINITION)?,
        simplified_script: doc.text(&SIMPLIFIED_SCRIPT)?,
        traditional_script: doc.text(&TRADITIONAL_SCRIPT)?,
        part_of_speech: doc.text(&PART_OF_SPEECH)?,
        kangxi_radical: doc.text(&KANGXI_RADICAL)?,
        additional_strokes: doc.number(&ADDITIONAL_STROKES)?,
        total_strokes: doc.number(&TOTAL_STROKES)?,
        structure: doc.text(&STRUCTURE)?,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const FIXTURE: &str = r#"
        <html><body>
        <table id="mainData">
            <tr><td>English Definition</td><td>good, well; proper, good-looking</td></tr>
            <tr><td>Simplified Script</td><td>好</td></tr>
            <tr><td>Traditional Script</td><td><a href="/chinese/zi/好">好</a> (same)</td></tr>
            <tr><td>Part of Speech</td><td>(adjective)</td></tr>
        </table>
        <table id="radical">
            <tr><td>Kangxi Radical </td><td><a href="/r/38">女</a> (woman)</td></tr>
            <tr><td>Additional Stroke(s)</td><td>3</td></tr>
            <tr><td>Total Stroke(s)</td><td>6</td></tr>
        </table>
        <table id="structure">
            <tr><td>Structure</td><td><span title="Left to right">⿰</span></td></tr>
        </table>
        </body></html>
    "#;

    #[test]
    fn test_parse_stroke_page() {
        let info = parse(FIXTURE).unwrap();
        assert_eq!(info.english_definition, "good, well; proper, good-looking");
        assert_eq!(info.simplified_script, "好");
        assert_eq!(info.traditional_script, "好");
        assert_eq!(info.part_of_speech, "(adjective)");
        assert_eq!(info.kangxi_radical, "女");
        assert_eq!(info.additional_strokes, 3);
        assert_eq!(info.total_strokes, 6);
        assert_eq!(info.structure, "Left to right");
    }

    #[test]
    fn test_empty_page_falls_back() {
        let info = parse("<html><body><p>Session expired</p></body></html>").unwrap();
        assert_eq!(info, StrokeInfo::default());
    }

    #[test]
    fn test_non_numeric_strokes() {
        let html = r#"<table id="radical"><tr><td>Total Stroke(s)</td><td>unknown</td></tr></table>"#;
        assert_eq!(parse(html).unwrap().total_strokes, 0);
    }
}
