//! UniFFI export layer: type-safe Swift/Kotlin bindings for the converter.
//!
//! Each public type here maps to a generated class, struct, or enum. Text
//! arguments are `Option<String>` where the host may pass nil; nil is
//! treated as the empty string.

mod history;
mod types;

pub use history::KurdHistory;
pub use types::{
    KurdConversion, KurdError, KurdExport, KurdExportFormat, KurdHistoryEntry, KurdMapping,
    KurdStats,
};

use std::path::Path;

use kurd_core::converter::transliterate;
use kurd_core::export::export;
use kurd_core::rules::RuleSetId;
use kurd_core::stats::TextStatistics;

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
pub fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Ids of the built-in rule sets, default first.
#[uniffi::export]
pub fn rule_set_ids() -> Vec<String> {
    RuleSetId::ALL.iter().map(|id| id.as_str().to_string()).collect()
}

/// Convert with the rule set named by `rule_set`; unknown names use the
/// default table.
#[uniffi::export]
pub fn convert_text(text: Option<String>, rule_set: String) -> KurdConversion {
    let id = RuleSetId::select(&rule_set);
    transliterate(text.as_deref().unwrap_or_default(), id.rule_set()).into()
}

#[uniffi::export]
pub fn text_stats(text: Option<String>) -> KurdStats {
    TextStatistics::of(text.as_deref().unwrap_or_default()).into()
}

/// Mapping reference: patterns in priority order, then single characters.
#[uniffi::export]
pub fn rule_set_mappings(rule_set: String) -> Vec<KurdMapping> {
    let table = RuleSetId::select(&rule_set).rule_set();
    let patterns = table.patterns().iter().map(|r| KurdMapping {
        from: r.from.clone(),
        to: r.to.clone(),
        pattern: true,
    });
    let chars = table.mappings().map(|(c, to)| KurdMapping {
        from: c.to_string(),
        to: to.to_string(),
        pattern: false,
    });
    patterns.chain(chars).collect()
}

/// Serialize a conversion for saving. Refusing to export an empty result is
/// left to the host.
#[uniffi::export]
pub fn export_conversion(
    original: Option<String>,
    converted: Option<String>,
    format: KurdExportFormat,
    rule_set: String,
) -> Result<KurdExport, KurdError> {
    let payload = export(
        original.as_deref().unwrap_or_default(),
        converted.as_deref().unwrap_or_default(),
        format.into(),
        RuleSetId::select(&rule_set),
    )
    .map_err(|e| KurdError::Internal { msg: e.to_string() })?;
    Ok(payload.into())
}

#[uniffi::export]
pub fn settings_load_config(path: String) -> Result<(), KurdError> {
    let content = std::fs::read_to_string(&path).map_err(|e| KurdError::Io {
        msg: format!("{path}: {e}"),
    })?;
    kurd_core::settings::init_custom(content)
        .map_err(|e| KurdError::InvalidData { msg: e.to_string() })?;
    Ok(())
}

#[uniffi::export]
pub fn settings_default_config() -> String {
    kurd_core::settings::default_toml().to_string()
}

#[uniffi::export]
pub fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_text_nil_is_empty() {
        let c = convert_text(None, "pro".into());
        assert_eq!(c.converted, "");
        assert_eq!(
            c.original_stats,
            KurdStats {
                chars: 0,
                words: 0,
                lines: 1,
                script_chars: 0,
            }
        );
    }

    #[test]
    fn test_convert_text_unknown_rule_set_falls_back() {
        let c = convert_text(Some("\u{621}".into()), "klingon".into());
        assert_eq!(c.rule_set, "pro");
        assert_eq!(c.converted, "\u{648}");
        let c = convert_text(Some("\u{621}".into()), "standard".into());
        assert_eq!(c.converted, "\u{626}");
    }

    #[test]
    fn test_rule_set_ids() {
        assert_eq!(rule_set_ids(), vec!["pro", "standard"]);
    }

    #[test]
    fn test_rule_set_mappings_patterns_first() {
        let m = rule_set_mappings("pro".into());
        assert_eq!(m.iter().filter(|m| m.pattern).count(), 4);
        assert_eq!(m.len(), 4 + 32);
        assert!(m[..4].iter().all(|m| m.pattern));
        assert_eq!(m[0].to, "\u{6B5}\u{627}");
    }

    #[test]
    fn test_export_conversion() {
        let e = export_conversion(
            Some("a b".into()),
            None,
            KurdExportFormat::Csv,
            "standard".into(),
        )
        .unwrap();
        assert_eq!(e.filename, "kurdish-conversion-standard.csv");
        assert_eq!(e.mime_type, "text/csv");
        let csv = String::from_utf8(e.bytes).unwrap();
        assert_eq!(csv.lines().count(), 3);
    }

    #[test]
    fn test_history_object() {
        let h = KurdHistory::new();
        assert!(h.is_empty().unwrap());
        let short = convert_text(Some("abc".into()), "pro".into());
        assert!(h.record(short).unwrap().is_none());

        for i in 0..12 {
            let c = convert_text(Some(format!("\u{643}\u{62A}\u{627}\u{628} {i}")), "pro".into());
            assert!(h.record(c).unwrap().is_some());
        }
        let entries = h.entries().unwrap();
        assert_eq!(entries.len(), 10);
        assert_eq!(h.len().unwrap(), 10);
        assert_eq!(entries[0].original, "\u{643}\u{62A}\u{627}\u{628} 11");
        assert!(entries.windows(2).all(|w| w[0].id > w[1].id));

        h.clear().unwrap();
        assert!(h.is_empty().unwrap());
    }

    #[test]
    fn test_stats_roundtrip_through_record() {
        let c = convert_text(Some("\u{644}\u{64E} \u{644}\u{64E}".into()), "pro".into());
        let back: kurd_core::converter::ConversionResult = c.clone().into();
        assert_eq!(back.converted, c.converted);
        assert_eq!(back.converted_stats.chars, 3);
    }

    #[test]
    fn test_settings_load_config_after_use_is_rejected() {
        // History reads the global settings.
        let _ = KurdHistory::new();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, settings_default_config()).unwrap();
        let err = settings_load_config(path.to_string_lossy().into_owned()).unwrap_err();
        assert!(matches!(err, KurdError::InvalidData { .. }));
    }

    #[test]
    fn test_settings_load_config_missing_file() {
        let err = settings_load_config("/nonexistent/kurd/settings.toml".into()).unwrap_err();
        assert!(matches!(err, KurdError::Io { .. }));
    }
}
