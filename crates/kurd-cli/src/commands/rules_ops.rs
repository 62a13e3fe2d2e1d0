use std::fs;

use kurd_core::rules::{builtin_toml, RuleSet, RuleSetId};
use kurd_core::unicode::is_arabic_mark;
use unicode_width::UnicodeWidthStr;

/// Spell a pattern out letter by letter; diacritics are shown on a dotted
/// circle so they stay visible on their own.
pub fn describe(pattern: &str) -> String {
    pattern
        .chars()
        .map(|c| {
            if is_arabic_mark(c) {
                format!("\u{25CC}{c}")
            } else {
                c.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" + ")
}

pub fn code_points(s: &str) -> String {
    s.chars()
        .map(|c| format!("U+{:04X}", c as u32))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Mapping reference: patterns in priority order, then single characters.
pub fn render_table(rs: &RuleSet) -> String {
    let rows: Vec<(String, &str, String)> = rs
        .patterns()
        .iter()
        .map(|r| (describe(&r.from), r.to.as_str(), code_points(&r.from)))
        .chain(
            rs.mappings()
                .map(|(c, to)| (c.to_string(), to, code_points(&c.to_string()))),
        )
        .collect();
    let width = rows.iter().map(|(from, _, _)| from.width()).max().unwrap_or(0);
    let pattern_count = rs.patterns().len();

    let mut out = format!("{} ({})\n", rs.label(), rs.id());
    for (i, (from, to, cps)) in rows.iter().enumerate() {
        if i == 0 && pattern_count > 0 {
            out.push_str(&format!("patterns ({pattern_count}, applied first):\n"));
        }
        if i == pattern_count {
            out.push_str(&format!("characters ({}):\n", rs.mapping_count()));
        }
        let pad = " ".repeat(width - from.width());
        out.push_str(&format!("  {from}{pad}  →  {to}\t{cps}\n"));
    }
    out
}

pub fn rules_show(rules: &str) {
    print!("{}", render_table(RuleSetId::select(rules).rule_set()));
}

pub fn rules_export(rules: &str) {
    print!("{}", builtin_toml(RuleSetId::select(rules)));
}

pub fn rules_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let rs = die!(RuleSet::from_toml(&content), "Error: {}");
    println!(
        "OK: {}: {} patterns, {} mappings",
        rs.id(),
        rs.patterns().len(),
        rs.mapping_count()
    );
}
