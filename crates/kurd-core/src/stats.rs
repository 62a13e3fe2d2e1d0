//! Text metrics shown next to each side of a conversion.

use serde::{Deserialize, Serialize};

use crate::unicode::count_arabic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextStatistics {
    /// Unicode scalar values, not bytes or UTF-16 units.
    pub chars: usize,
    pub words: usize,
    /// Segments between `\n`; never 0.
    pub lines: usize,
    /// Code points in the Arabic block.
    #[serde(rename = "scriptChars")]
    pub script_chars: usize,
}

impl TextStatistics {
    pub fn of(text: &str) -> Self {
        Self {
            chars: text.chars().count(),
            words: word_count(text),
            lines: text.split('\n').count(),
            script_chars: count_arabic(text),
        }
    }
}

/// Number of whitespace-separated words; 0 for blank text.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(
            TextStatistics::of(""),
            TextStatistics {
                chars: 0,
                words: 0,
                lines: 1,
                script_chars: 0,
            }
        );
    }

    #[test]
    fn test_lines() {
        assert_eq!(TextStatistics::of("a").lines, 1);
        assert_eq!(TextStatistics::of("a\nb").lines, 2);
        assert_eq!(TextStatistics::of("a\n").lines, 2);
        assert_eq!(TextStatistics::of("\n\n").lines, 3);
    }

    #[test]
    fn test_words() {
        assert_eq!(TextStatistics::of("   ").words, 0);
        assert_eq!(TextStatistics::of("  one  two\tthree\n four ").words, 4);
        assert_eq!(TextStatistics::of("سلام لە").words, 2);
    }

    #[test]
    fn test_chars_count_code_points() {
        let s = TextStatistics::of("\u{644}\u{627}\u{64E} x");
        assert_eq!(s.chars, 5);
        assert_eq!(s.script_chars, 3);
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(TextStatistics::of("ab\ncd")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"chars": 5, "words": 2, "lines": 2, "scriptChars": 0})
        );
    }
}
