//! Etymology page (`character-etymology.php`).

use super::{Document, Field};
use crate::error::ScraperError;
use crate::models::Etymology;

pub const PATH: &str = "character-etymology.php";
pub const PARAM: &str = "zi";

const DEFINITION: Field = Field::text("formation", "Definition");
const FORMATION: Field = Field::text("formation", "Formation");
const SIMPLIFICATION: Field = Field::text("formation", "Simplification");

pub fn parse(html: &str) -> Result<Etymology, ScraperError> {
    let doc = Document::parse(html);

    Ok(Etymology {
        definition: doc.text(&DEFINITION)?,
        formation_method: doc.text(&FORMATION)?,
        simplification_method: doc.text(&SIMPLIFICATION)?,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const FIXTURE: &str = r#"
        <html><body>
        <table id="formation">
            <tr><td>Definition</td><td>good, well</td></tr>
            <tr><td>Formation</td><td>Ideographic: A woman 女 with a son 子</td></tr>
            <tr><td>Simplification</td><td>none</td></tr>
        </table>
        </body></html>
    "#;

    #[test]
    fn test_parse_etymology_page() {
        let etymology = parse(FIXTURE).unwrap();
        assert_eq!(etymology.definition, "good, well");
        assert_eq!(etymology.formation_method, "Ideographic: A woman 女 with a son 子");
        assert_eq!(etymology.simplification_method, "none");
    }

    #[test]
    fn test_missing_formation_table() {
        assert_eq!(parse("<html></html>").unwrap(), Etymology::default());
    }
}
