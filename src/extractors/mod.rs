//! Field extraction from YellowBridge pages.
//!
//! Every page lays its data out as label/value table rows: a `td` holding
//! the label followed by a `td` holding the value. Each extractor declares
//! its fields as a table of [`Field`] entries (table id, label, lookup) and
//! its lists as [`Rows`], so markup changes on the site only touch those
//! tables.

pub mod details;
pub mod etymology;
pub mod examples;
pub mod meaning;
pub mod stroke;

use crate::error::ScraperError;
use crate::models::CodeValue;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

/// Leading integer, `parseInt` style: optional sign, digits, anything after.
static LEADING_INT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?\d+)").unwrap());

/// How a value is read out of the cell next to a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// Trimmed text of the whole cell.
    Text,
    /// Text of the anchors inside the cell.
    LinkText,
    /// Attribute of the first matching element inside the cell.
    Attr {
        element: &'static str,
        name: &'static str,
    },
}

/// A labelled field inside `table#<table>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub table: &'static str,
    pub label: &'static str,
    pub lookup: Lookup,
}

impl Field {
    pub const fn text(table: &'static str, label: &'static str) -> Self {
        Self {
            table,
            label,
            lookup: Lookup::Text,
        }
    }

    pub const fn link(table: &'static str, label: &'static str) -> Self {
        Self {
            table,
            label,
            lookup: Lookup::LinkText,
        }
    }

    pub const fn attr(
        table: &'static str,
        label: &'static str,
        element: &'static str,
        name: &'static str,
    ) -> Self {
        Self {
            table,
            label,
            lookup: Lookup::Attr { element, name },
        }
    }
}

/// Repeated rows making up a list field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rows {
    pub selector: &'static str,
    /// Whether the first matched row is a header.
    pub skip_header: bool,
}

impl Rows {
    /// Rows whose first entry is a header row.
    pub const fn with_header(selector: &'static str) -> Self {
        Self {
            selector,
            skip_header: true,
        }
    }

    /// Rows that are all data.
    pub const fn body(selector: &'static str) -> Self {
        Self {
            selector,
            skip_header: false,
        }
    }
}

/// Compiles a CSS selector, mapping failures into [`ScraperError::Selector`].
pub(crate) fn selector(css: &str) -> Result<Selector, ScraperError> {
    Selector::parse(css).map_err(|e| ScraperError::Selector(format!("{}: {}", css, e)))
}

/// Trimmed text content of an element.
pub(crate) fn element_text(elem: ElementRef) -> String {
    elem.text().collect::<String>().trim().to_string()
}

/// Parses a leading integer, falling back to 0.
pub fn parse_number(text: &str) -> u32 {
    LEADING_INT
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<i64>().ok())
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0)
}

/// A parsed page ready for field lookups.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Finds the cell right after the label cell.
    ///
    /// A cell whose text equals the label wins over one that merely contains
    /// it, so "Semantic" does not resolve to "Specialized Semantic".
    fn value_cell(&self, field: &Field) -> Result<Option<ElementRef<'_>>, ScraperError> {
        let cells = selector(&format!("table#{} td", field.table))?;
        let candidates: Vec<(ElementRef, String)> = self
            .html
            .select(&cells)
            .map(|cell| (cell, element_text(cell)))
            .collect();

        let label_cell = candidates
            .iter()
            .find(|(_, text)| text == field.label)
            .or_else(|| {
                candidates
                    .iter()
                    .find(|(_, text)| text.contains(field.label))
            })
            .map(|(cell, _)| *cell);

        Ok(label_cell.and_then(next_cell))
    }

    /// Reads a text field, empty when the label or value is missing.
    pub fn text(&self, field: &Field) -> Result<String, ScraperError> {
        let Some(cell) = self.value_cell(field)? else {
            return Ok(String::new());
        };

        let value = match field.lookup {
            Lookup::Text => element_text(cell),
            Lookup::LinkText => {
                let links = selector("a")?;
                cell.select(&links)
                    .flat_map(|a| a.text())
                    .collect::<String>()
                    .trim()
                    .to_string()
            }
            Lookup::Attr { element, name } => {
                let target = selector(element)?;
                cell.select(&target)
                    .next()
                    .and_then(|e| e.value().attr(name))
                    .unwrap_or_default()
                    .trim()
                    .to_string()
            }
        };

        Ok(value)
    }

    /// Reads a numeric field, 0 when missing or not a number.
    pub fn number(&self, field: &Field) -> Result<u32, ScraperError> {
        Ok(parse_number(&self.text(field)?))
    }

    /// Returns all elements matching `css`.
    pub fn select(&self, css: &str) -> Result<Vec<ElementRef<'_>>, ScraperError> {
        let sel = selector(css)?;
        Ok(self.html.select(&sel).collect())
    }

    fn rows(&self, rows: &Rows) -> Result<Vec<ElementRef<'_>>, ScraperError> {
        let skip = usize::from(rows.skip_header);
        Ok(self.select(rows.selector)?.into_iter().skip(skip).collect())
    }

    /// Collects the text of one column (1-based) from every data row.
    pub fn column(&self, rows: &Rows, column: usize) -> Result<Vec<String>, ScraperError> {
        let cell = selector(&format!("td:nth-child({})", column))?;

        Ok(self
            .rows(rows)?
            .into_iter()
            .map(|row| row.select(&cell).next().map(element_text).unwrap_or_default())
            .collect())
    }

    /// Collects code/value pairs from the first two columns of every data row.
    pub fn code_values(&self, rows: &Rows) -> Result<Vec<CodeValue>, ScraperError> {
        let code = selector("td:nth-child(1)")?;
        let value = selector("td:nth-child(2)")?;
        let text_of = |row: ElementRef, sel: &Selector| {
            row.select(sel).next().map(element_text).unwrap_or_default()
        };

        Ok(self
            .rows(rows)?
            .into_iter()
            .map(|row| CodeValue {
                code: text_of(row, &code),
                value: text_of(row, &value),
            })
            .collect())
    }
}

/// Next element sibling, if it is a `td` (`td + td`).
fn next_cell(cell: ElementRef<'_>) -> Option<ElementRef<'_>> {
    cell.next_siblings()
        .find_map(ElementRef::wrap)
        .filter(|sibling| sibling.value().name() == "td")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
        <table id="mainData">
            <tr><td>English Definition</td><td> good; well </td></tr>
            <tr><td>Traditional Script</td><td><a href="/x">好</a></td></tr>
            <tr><td>Structure</td><td><span title=" left-to-right ">⿰</span></td></tr>
            <tr><td>Orphan</td></tr>
        </table>
        <table id="related">
            <tr><td>Specialized Semantic</td><td>special</td></tr>
            <tr><td>Semantic</td><td>plain</td></tr>
        </table>
        <table id="codes">
            <tr><th>Code</th><th>Value</th></tr>
            <tr><td>Cangjie</td><td>VND</td></tr>
            <tr><td>Four Corner</td><td>47440</td></tr>
        </table>
        </body></html>
    "#;

    #[test]
    fn test_text_lookup() {
        let doc = Document::parse(PAGE);
        let field = Field::text("mainData", "English Definition");
        assert_eq!(doc.text(&field).unwrap(), "good; well");
    }

    #[test]
    fn test_label_substring_match() {
        let doc = Document::parse(PAGE);
        assert_eq!(
            doc.text(&Field::text("mainData", "Definition")).unwrap(),
            "good; well"
        );
    }

    #[test]
    fn test_exact_label_preferred() {
        let doc = Document::parse(PAGE);
        assert_eq!(doc.text(&Field::text("related", "Semantic")).unwrap(), "plain");
        assert_eq!(
            doc.text(&Field::text("related", "Specialized Semantic"))
                .unwrap(),
            "special"
        );
    }

    #[test]
    fn test_link_and_attr_lookup() {
        let doc = Document::parse(PAGE);
        assert_eq!(
            doc.text(&Field::link("mainData", "Traditional Script"))
                .unwrap(),
            "好"
        );
        assert_eq!(
            doc.text(&Field::attr("mainData", "Structure", "span", "title"))
                .unwrap(),
            "left-to-right"
        );
    }

    #[test]
    fn test_missing_values_are_empty() {
        let doc = Document::parse(PAGE);
        assert_eq!(doc.text(&Field::text("mainData", "Orphan")).unwrap(), "");
        assert_eq!(doc.text(&Field::text("mainData", "Zhuyin")).unwrap(), "");
        assert_eq!(doc.text(&Field::text("nowhere", "Zhuyin")).unwrap(), "");
        assert_eq!(doc.number(&Field::text("mainData", "Orphan")).unwrap(), 0);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("12"), 12);
        assert_eq!(parse_number("  7 strokes"), 7);
        assert_eq!(parse_number("3.9"), 3);
        assert_eq!(parse_number(""), 0);
        assert_eq!(parse_number("n/a"), 0);
        assert_eq!(parse_number("-4"), 0);
        assert_eq!(parse_number("99999999999999999999999"), 0);
    }

    #[test]
    fn test_rows() {
        let doc = Document::parse(PAGE);
        let rows = Rows::with_header("table#codes tr");

        assert_eq!(doc.column(&rows, 1).unwrap(), vec!["Cangjie", "Four Corner"]);
        let pairs = doc.code_values(&rows).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1].code, "Four Corner");
        assert_eq!(pairs[1].value, "47440");

        let all = Rows::body("table#codes tr");
        assert_eq!(doc.column(&all, 2).unwrap(), vec!["", "VND", "47440"]);
    }

    #[test]
    fn test_missing_rows_are_empty() {
        let doc = Document::parse(PAGE);
        let rows = Rows::with_header("table#commonWords tr");
        assert!(doc.column(&rows, 1).unwrap().is_empty());
        assert!(doc.code_values(&rows).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_selector() {
        let doc = Document::parse(PAGE);
        let err = doc.select("td[").unwrap_err();
        assert!(matches!(err, ScraperError::Selector(_)));
    }
}
