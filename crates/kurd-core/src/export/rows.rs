/// One row of the tabular exports: the `index`-th word of each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordRow<'a> {
    /// 1-based.
    pub index: usize,
    pub original: &'a str,
    pub converted: &'a str,
}

impl WordRow<'_> {
    pub fn original_chars(&self) -> usize {
        self.original.chars().count()
    }

    pub fn converted_chars(&self) -> usize {
        self.converted.chars().count()
    }
}

/// Pair the whitespace-separated words of both texts by position.
///
/// The shorter side is padded with empty strings, so the row count is the
/// larger of the two word counts.
pub fn aligned_rows<'a>(original: &'a str, converted: &'a str) -> Vec<WordRow<'a>> {
    let left: Vec<&str> = original.split_whitespace().collect();
    let right: Vec<&str> = converted.split_whitespace().collect();
    let len = left.len().max(right.len());
    (0..len)
        .map(|i| WordRow {
            index: i + 1,
            original: left.get(i).copied().unwrap_or(""),
            converted: right.get(i).copied().unwrap_or(""),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_lengths() {
        let rows = aligned_rows("a b", "x y");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].index, 1);
        assert_eq!((rows[1].original, rows[1].converted), ("b", "y"));
    }

    #[test]
    fn test_pads_shorter_side() {
        let rows = aligned_rows("a b c", "x");
        assert_eq!(rows.len(), 3);
        assert_eq!((rows[2].original, rows[2].converted), ("c", ""));
        assert_eq!(rows[2].converted_chars(), 0);

        let rows = aligned_rows("", "x y");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].original, "");
    }

    #[test]
    fn test_ignores_extra_whitespace() {
        let rows = aligned_rows("  a \n\n b  ", "\tx   y\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].original, "b");
    }

    #[test]
    fn test_empty() {
        assert!(aligned_rows("", "").is_empty());
        assert!(aligned_rows("   ", "\n").is_empty());
    }

    #[test]
    fn test_char_counts_are_code_points() {
        let rows = aligned_rows("\u{644}\u{627}\u{64E}", "\u{6B5}\u{627}");
        assert_eq!(rows[0].original_chars(), 3);
        assert_eq!(rows[0].converted_chars(), 2);
    }
}
