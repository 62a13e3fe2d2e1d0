//! Global settings loaded from TOML, following the same OnceLock pattern as the rule tables.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::history::MAX_CAPACITY;
use crate::rules::RuleSetId;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<Settings> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
///
/// Fails with `AlreadyInitialized` once `settings()` has been read.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    if INSTANCE.get().is_some() {
        return Err(SettingsError::AlreadyInitialized);
    }
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub history: HistorySettings,
    pub export: ExportSettings,
    pub rules: RuleSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistorySettings {
    pub capacity: usize,
    pub min_record_chars: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportSettings {
    pub base_name: String,
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RuleSettings {
    default: String,
    /// Parsed form of `default`.
    #[serde(skip)]
    default_id: RuleSetId,
}

impl RuleSettings {
    /// Rule set used when a selector names no known table.
    pub fn default_id(&self) -> RuleSetId {
        self.default_id
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let mut s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    s.rules.default_id = s
        .rules
        .default
        .parse()
        .map_err(|e: crate::rules::RuleSetError| SettingsError::InvalidValue {
            field: "rules.default".to_string(),
            reason: e.to_string(),
        })?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_non_empty {
        ($section:ident . $field:ident) => {
            if s.$section.$field.trim().is_empty() {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        };
    }

    if s.history.capacity == 0 || s.history.capacity > MAX_CAPACITY {
        return Err(SettingsError::InvalidValue {
            field: "history.capacity".to_string(),
            reason: format!("must be in 1..={MAX_CAPACITY}"),
        });
    }

    check_non_empty!(export.base_name);
    check_non_empty!(export.title);

    if s
        .export
        .base_name
        .chars()
        .any(|c| matches!(c, '/' | '\\' | ':'))
    {
        return Err(SettingsError::InvalidValue {
            field: "export.base_name".to_string(),
            reason: "must not contain path separators".to_string(),
        });
    }

    Ok(())
}
