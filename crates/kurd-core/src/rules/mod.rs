//! Transliteration rule tables.
//!
//! A [`RuleSet`] pairs an ordered list of multi-character patterns (base
//! letter + diacritic combinations) with a single-character mapping. Two
//! tables ship embedded: `pro` (keyboard remap) and `standard` (phonetic).

mod config;
mod table;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::settings::settings;

pub use config::{parse_rule_set_toml, RuleSetError};

/// One substitution: `from` is replaced by `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub from: String,
    pub to: String,
}

/// Selector for the built-in tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSetId {
    #[default]
    Pro,
    Standard,
}

impl RuleSetId {
    pub const ALL: [RuleSetId; 2] = [RuleSetId::Pro, RuleSetId::Standard];

    pub fn as_str(self) -> &'static str {
        match self {
            RuleSetId::Pro => "pro",
            RuleSetId::Standard => "standard",
        }
    }

    /// Resolve a caller-supplied selector, falling back to the configured
    /// default table when it names no known table.
    ///
    /// The fallback is deliberate and never an error; it is reported as a
    /// `warn` event so it stays visible in traces.
    pub fn select(selector: &str) -> RuleSetId {
        match selector.parse() {
            Ok(id) => id,
            Err(_) => {
                let fallback = settings().rules.default_id();
                warn!(selector, fallback = fallback.as_str(), "unknown rule set, using default");
                fallback
            }
        }
    }

    pub fn rule_set(self) -> &'static RuleSet {
        RuleSet::builtin(self)
    }
}

impl FromStr for RuleSetId {
    type Err = RuleSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("pro") {
            Ok(RuleSetId::Pro)
        } else if s.eq_ignore_ascii_case("standard") {
            Ok(RuleSetId::Standard)
        } else {
            Err(RuleSetError::UnknownId(s.to_string()))
        }
    }
}

impl fmt::Display for RuleSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable transliteration table.
#[derive(Debug, Clone)]
pub struct RuleSet {
    id: String,
    label: String,
    /// Multi-character patterns in priority order.
    patterns: Vec<Rule>,
    /// Single code point → replacement.
    mappings: BTreeMap<char, String>,
}

impl RuleSet {
    /// Get or initialize one of the embedded tables.
    pub fn builtin(id: RuleSetId) -> &'static RuleSet {
        static PRO: OnceLock<RuleSet> = OnceLock::new();
        static STANDARD: OnceLock<RuleSet> = OnceLock::new();
        let cell = match id {
            RuleSetId::Pro => &PRO,
            RuleSetId::Standard => &STANDARD,
        };
        cell.get_or_init(|| {
            parse_rule_set_toml(builtin_toml(id)).expect("embedded rule table must be valid")
        })
    }

    /// Build a custom table from TOML text.
    pub fn from_toml(toml_str: &str) -> Result<RuleSet, RuleSetError> {
        parse_rule_set_toml(toml_str)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn patterns(&self) -> &[Rule] {
        &self.patterns
    }

    /// Single-character rules in code point order.
    pub fn mappings(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.mappings.iter().map(|(c, s)| (*c, s.as_str()))
    }

    /// Number of single-character rules.
    pub fn mapping_count(&self) -> usize {
        self.mappings.len()
    }

    pub fn map_char(&self, c: char) -> Option<&str> {
        self.mappings.get(&c).map(|s| s.as_str())
    }

    /// Replacement for a pattern: a single character is looked up in the
    /// character table, anything longer in the pattern list.
    pub fn lookup(&self, pattern: &str) -> Option<&str> {
        let mut chars = pattern.chars();
        match (chars.next(), chars.next()) {
            (None, _) => None,
            (Some(c), None) => self.map_char(c),
            _ => self
                .patterns
                .iter()
                .find(|r| r.from == pattern)
                .map(|r| r.to.as_str()),
        }
    }
}

/// Embedded TOML source of a built-in table.
pub fn builtin_toml(id: RuleSetId) -> &'static str {
    match id {
        RuleSetId::Pro => table::PRO_TOML,
        RuleSetId::Standard => table::STANDARD_TOML,
    }
}
