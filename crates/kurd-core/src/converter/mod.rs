//! Arabic-to-Kurdish transliteration.
//!
//! Two strictly ordered passes over the text:
//! 1. every multi-character pattern, in the table's declared order, replaces
//!    all of its non-overlapping occurrences before the next one is tried.
//!    Later patterns only see text no earlier pattern consumed or produced;
//! 2. each remaining code point goes through the single-character mapping,
//!    unmapped code points pass through.
//!
//! Conversion is pure: no I/O, no logging, no hidden state.


use serde::Serialize;

use crate::rules::{RuleSet, RuleSetId};
use crate::stats::TextStatistics;

/// Text during the pattern pass: `Source` is still open to later patterns,
/// `Replaced` is pattern output and is never matched again.
enum Segment<'a> {
    Source(&'a str),
    Replaced(&'a str),
}

/// Convert `text` with `rule_set`.
pub fn convert(text: &str, rule_set: &RuleSet) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut segments = vec![Segment::Source(text)];
    for rule in rule_set.patterns() {
        let from = rule.from.as_str();
        if !segments
            .iter()
            .any(|seg| matches!(seg, Segment::Source(s) if s.contains(from)))
        {
            continue;
        }
        let mut next = Vec::with_capacity(segments.len() + 2);
        for seg in segments {
            let Segment::Source(s) = seg else {
                next.push(seg);
                continue;
            };
            let mut last = 0;
            for (i, m) in s.match_indices(from) {
                if i > last {
                    next.push(Segment::Source(&s[last..i]));
                }
                next.push(Segment::Replaced(rule.to.as_str()));
                last = i + m.len();
            }
            if last < s.len() {
                next.push(Segment::Source(&s[last..]));
            }
        }
        segments = next;
    }

    let mut out = String::with_capacity(text.len());
    for seg in &segments {
        let (Segment::Source(s) | Segment::Replaced(s)) = seg;
        for c in s.chars() {
            match rule_set.map_char(c) {
                Some(replacement) => out.push_str(replacement),
                None => out.push(c),
            }
        }
    }
    out
}

/// One finished conversion with metrics for both sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    pub original: String,
    pub converted: String,
    pub rule_set: String,
    pub original_stats: TextStatistics,
    pub converted_stats: TextStatistics,
}

/// Convert and compute statistics on both texts.
pub fn transliterate(text: &str, rule_set: &RuleSet) -> ConversionResult {
    let converted = convert(text, rule_set);
    ConversionResult {
        original_stats: TextStatistics::of(text),
        converted_stats: TextStatistics::of(&converted),
        original: text.to_string(),
        converted,
        rule_set: rule_set.id().to_string(),
    }
}

/// [`transliterate`] with a built-in table chosen by selector string.
///
/// Unknown selectors fall back to the default table (see [`RuleSetId::select`]).
pub fn convert_with(text: &str, selector: &str) -> ConversionResult {
    transliterate(text, RuleSetId::select(selector).rule_set())
}
