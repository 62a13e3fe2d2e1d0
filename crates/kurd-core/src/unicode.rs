//! Character-level Unicode classification for Arabic-script text.

/// Check the full Arabic block (U+0600..U+06FF). Kurdish letters such as
/// ڕ ڵ ێ ۆ ە live in the same block, so both sides of a conversion count.
pub fn is_arabic(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)
}

/// Harakat and other combining marks used as diacritics (U+064B..U+065F, U+0670).
pub fn is_arabic_mark(c: char) -> bool {
    ('\u{064B}'..='\u{065F}').contains(&c) || c == '\u{0670}'
}

/// Count code points in the Arabic block.
pub fn count_arabic(s: &str) -> usize {
    s.chars().filter(|&c| is_arabic(c)).count()
}
