//! Console output formatting with ANSI color support.
//!
//! Provides styled terminal output with automatic TTY detection
//! and respect for the NO_COLOR environment variable.

use serde_json::Value;
use std::io::{self, IsTerminal};

/// ANSI style codes for terminal formatting.
#[derive(Debug, Clone, Copy)]
pub enum Style {
    Bold,
    Dim,
    Red,
    Green,
    Blue,
    Magenta,
    Cyan,
    Gray,
}

impl Style {
    /// Returns the ANSI escape code for this style.
    fn code(self) -> &'static str {
        match self {
            Style::Bold => "1",
            Style::Dim => "2",
            Style::Red => "31",
            Style::Green => "32",
            Style::Blue => "34",
            Style::Magenta => "35",
            Style::Cyan => "36",
            Style::Gray => "90",
        }
    }
}

const RESET: &str = "\x1b[0m";

/// Console output handler with color support detection.
#[derive(Debug)]
pub struct Console {
    colors_enabled: bool,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    /// Creates a new Console instance, detecting color support.
    pub fn new() -> Self {
        let colors_enabled = std::env::var("NO_COLOR").is_err() && io::stdout().is_terminal();

        Self { colors_enabled }
    }

    /// Creates a Console with colors explicitly enabled or disabled.
    pub fn with_colors(enabled: bool) -> Self {
        Self {
            colors_enabled: enabled,
        }
    }

    /// Applies ANSI styles to text if colors are enabled.
    pub fn style(&self, text: &str, styles: &[Style]) -> String {
        if !self.colors_enabled || styles.is_empty() {
            return text.to_string();
        }

        let codes: Vec<&str> = styles.iter().map(|s| s.code()).collect();
        format!("\x1b[{}m{}{}", codes.join(";"), text, RESET)
    }

    /// Creates a colored label like `[INFO]`.
    pub fn label(&self, label: &str, color: Style) -> String {
        let styled = self.style(label, &[color, Style::Bold]);
        format!("[{}]", styled)
    }

    pub fn info(&self, message: &str) {
        println!("{} {}", self.label("INFO", Style::Blue), message);
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", self.label("OK", Style::Green), message);
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", self.label("ERROR", Style::Red), message);
    }

    pub fn step(&self, message: &str) {
        println!("{} {}", self.label("STEP", Style::Cyan), message);
    }

    /// Prints a section header in magenta bold.
    pub fn section(&self, message: &str) {
        println!();
        println!("{}", self.style(message, &[Style::Magenta, Style::Bold]));
    }

    /// Returns text styled as muted (dim gray).
    pub fn muted(&self, text: &str) -> String {
        self.style(text, &[Style::Gray, Style::Dim])
    }

    /// Prints a record as indented `key: value` lines.
    pub fn record(&self, value: &Value) {
        for line in self.record_lines(value, 0) {
            println!("{}", line);
        }
    }

    /// Renders a JSON record into display lines.
    ///
    /// Nested objects become sections, lists are printed one item per line
    /// and empty values are shown muted as `-`.
    pub fn record_lines(&self, value: &Value, depth: usize) -> Vec<String> {
        let indent = "  ".repeat(depth);
        let mut lines = Vec::new();

        let Value::Object(fields) = value else {
            lines.push(format!("{}{}", indent, scalar(value)));
            return lines;
        };

        for (key, field) in fields {
            let key = self.style(key, &[Style::Cyan]);
            match field {
                Value::Object(_) => {
                    lines.push(format!("{}{}", indent, self.style(&key, &[Style::Bold])));
                    lines.extend(self.record_lines(field, depth + 1));
                }
                Value::Array(items) if items.is_empty() => {
                    lines.push(format!("{}{}: {}", indent, key, self.muted("-")));
                }
                Value::Array(items) => {
                    lines.push(format!("{}{}:", indent, key));
                    for item in items {
                        let text = match item {
                            Value::Object(pairs) => pairs
                                .values()
                                .map(scalar)
                                .collect::<Vec<_>>()
                                .join(" | "),
                            other => scalar(other),
                        };
                        lines.push(format!("{}  - {}", indent, text));
                    }
                }
                other => {
                    let text = scalar(other);
                    let text = if text.is_empty() {
                        self.muted("-")
                    } else {
                        text
                    };
                    lines.push(format!("{}{}: {}", indent, key, text));
                }
            }
        }

        lines
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_style_disabled() {
        let console = Console::with_colors(false);
        assert_eq!(console.style("hello", &[Style::Red]), "hello");
    }

    #[test]
    fn test_style_enabled() {
        let console = Console::with_colors(true);
        let styled = console.style("hello", &[Style::Bold, Style::Red]);
        assert!(styled.contains("1;31"));
        assert!(styled.contains("hello"));
        assert!(styled.contains(RESET));
    }

    #[test]
    fn test_label() {
        let console = Console::with_colors(false);
        assert_eq!(console.label("INFO", Style::Blue), "[INFO]");
    }

    #[test]
    fn test_record_lines() {
        let console = Console::with_colors(false);
        let record = json!({
            "word": "好",
            "strokeInfo": { "totalStrokes": 6, "structure": "" },
            "sampleSentences": [{ "english": "Hello", "chinese": "你好" }],
            "sameHead": []
        });

        let lines = console.record_lines(&record, 0);
        assert!(lines.contains(&"word: 好".to_string()));
        assert!(lines.contains(&"strokeInfo".to_string()));
        assert!(lines.contains(&"  totalStrokes: 6".to_string()));
        assert!(lines.contains(&"  structure: -".to_string()));
        assert!(lines.contains(&"  - Hello | 你好".to_string()));
        assert!(lines.contains(&"sameHead: -".to_string()));
    }
}
