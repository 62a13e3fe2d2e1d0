use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;

use super::{Rule, RuleSet};

#[derive(Deserialize)]
struct RuleSetConfig {
    meta: MetaConfig,
    #[serde(default)]
    patterns: Vec<Rule>,
    mappings: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct MetaConfig {
    id: String,
    #[serde(default)]
    label: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RuleSetError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[meta] id is empty")]
    EmptyId,
    #[error("unknown rule set id: {0}")]
    UnknownId(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("mapping key must be a single character: {0:?}")]
    InvalidKey(String),
    #[error("pattern must span at least two characters: {0:?}")]
    ShortPattern(String),
    #[error("duplicate pattern: {0:?}")]
    DuplicatePattern(String),
    #[error("pattern {pattern:?} has no single-character fallback for {base:?}")]
    MissingFallback { pattern: String, base: char },
}

/// Parse a rule table TOML into an immutable [`RuleSet`].
///
/// Pattern order in the file is kept as the priority order.
pub fn parse_rule_set_toml(toml_str: &str) -> Result<RuleSet, RuleSetError> {
    let config: RuleSetConfig =
        toml::from_str(toml_str).map_err(|e| RuleSetError::Parse(e.to_string()))?;

    let id = config.meta.id.trim().to_string();
    if id.is_empty() {
        return Err(RuleSetError::EmptyId);
    }
    if config.mappings.is_empty() {
        return Err(RuleSetError::Empty);
    }

    let mut mappings = BTreeMap::new();
    for (key, value) in config.mappings {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                mappings.insert(c, value);
            }
            _ => return Err(RuleSetError::InvalidKey(key)),
        }
    }

    let mut seen = HashSet::new();
    for rule in &config.patterns {
        let mut chars = rule.from.chars();
        let Some(base) = chars.next() else {
            return Err(RuleSetError::ShortPattern(rule.from.clone()));
        };
        if chars.next().is_none() {
            return Err(RuleSetError::ShortPattern(rule.from.clone()));
        }
        if !seen.insert(rule.from.as_str()) {
            return Err(RuleSetError::DuplicatePattern(rule.from.clone()));
        }
        if !mappings.contains_key(&base) {
            return Err(RuleSetError::MissingFallback {
                pattern: rule.from.clone(),
                base,
            });
        }
    }

    let label = config.meta.label.unwrap_or_else(|| id.clone());
    Ok(RuleSet {
        id,
        label,
        patterns: config.patterns,
        mappings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_toml() {
        let toml = r#"
[meta]
id = "mini"
label = "Mini"

[[patterns]]
from = "ab"
to = "X"

[[patterns]]
from = "ac"
to = "Y"

[mappings]
a = "1"
b = "2"
"#;
        let rs = parse_rule_set_toml(toml).unwrap();
        assert_eq!(rs.id(), "mini");
        assert_eq!(rs.label(), "Mini");
        assert_eq!(rs.mapping_count(), 2);
        let froms: Vec<&str> = rs.patterns().iter().map(|r| r.from.as_str()).collect();
        assert_eq!(froms, vec!["ab", "ac"]);
    }

    #[test]
    fn label_defaults_to_id() {
        let toml = "[meta]\nid = \"x\"\n[mappings]\na = \"b\"\n";
        let rs = parse_rule_set_toml(toml).unwrap();
        assert_eq!(rs.label(), "x");
        assert!(rs.patterns().is_empty());
    }

    #[test]
    fn empty_replacement_is_allowed() {
        let toml = "[meta]\nid = \"x\"\n[mappings]\na = \"\"\n";
        let rs = parse_rule_set_toml(toml).unwrap();
        assert_eq!(rs.lookup("a"), Some(""));
    }

    #[test]
    fn error_empty_mappings() {
        let toml = "[meta]\nid = \"x\"\n[mappings]\n";
        let err = parse_rule_set_toml(toml).unwrap_err();
        assert!(matches!(err, RuleSetError::Empty));
    }

    #[test]
    fn error_empty_id() {
        let toml = "[meta]\nid = \"  \"\n[mappings]\na = \"b\"\n";
        let err = parse_rule_set_toml(toml).unwrap_err();
        assert!(matches!(err, RuleSetError::EmptyId));
    }

    #[test]
    fn error_multi_char_key() {
        let toml = "[meta]\nid = \"x\"\n[mappings]\nab = \"c\"\n";
        let err = parse_rule_set_toml(toml).unwrap_err();
        assert!(matches!(err, RuleSetError::InvalidKey(ref k) if k == "ab"));
    }

    #[test]
    fn error_single_char_pattern() {
        let toml = r#"
[meta]
id = "x"
[[patterns]]
from = "a"
to = "b"
[mappings]
a = "b"
"#;
        let err = parse_rule_set_toml(toml).unwrap_err();
        assert!(matches!(err, RuleSetError::ShortPattern(_)));
    }

    #[test]
    fn error_duplicate_pattern() {
        let toml = r#"
[meta]
id = "x"
[[patterns]]
from = "ab"
to = "1"
[[patterns]]
from = "ab"
to = "2"
[mappings]
a = "b"
"#;
        let err = parse_rule_set_toml(toml).unwrap_err();
        assert!(matches!(err, RuleSetError::DuplicatePattern(_)));
    }

    #[test]
    fn error_missing_fallback() {
        let toml = r#"
[meta]
id = "x"
[[patterns]]
from = "zq"
to = "1"
[mappings]
a = "b"
"#;
        let err = parse_rule_set_toml(toml).unwrap_err();
        assert!(matches!(err, RuleSetError::MissingFallback { base: 'z', .. }));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_rule_set_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, RuleSetError::Parse(_)));
    }
}
