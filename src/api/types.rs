use kurd_core::converter::ConversionResult;
use kurd_core::export::{ExportFormat, ExportPayload};
use kurd_core::history::HistoryEntry;
use kurd_core::stats::TextStatistics;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum KurdError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
    #[error("internal error: {msg}")]
    Internal { msg: String },
}

// ---------------------------------------------------------------------------
// Records (value types, copied across FFI boundary)
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct KurdStats {
    pub chars: u64,
    pub words: u64,
    pub lines: u64,
    pub script_chars: u64,
}

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct KurdConversion {
    pub original: String,
    pub converted: String,
    pub rule_set: String,
    pub original_stats: KurdStats,
    pub converted_stats: KurdStats,
}

/// One row of the mapping reference shown next to the converter.
#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct KurdMapping {
    pub from: String,
    pub to: String,
    /// Multi-character pattern (applied before single characters).
    pub pattern: bool,
}

#[derive(Clone, Debug, uniffi::Record)]
pub struct KurdExport {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub mime_type: String,
}

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct KurdHistoryEntry {
    pub id: u64,
    pub original: String,
    pub converted: String,
    pub created_at: u64,
    pub rule_set: String,
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, uniffi::Enum)]
pub enum KurdExportFormat {
    Text,
    Json,
    Csv,
    SpreadsheetXml,
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

impl From<TextStatistics> for KurdStats {
    fn from(s: TextStatistics) -> Self {
        Self {
            chars: s.chars as u64,
            words: s.words as u64,
            lines: s.lines as u64,
            script_chars: s.script_chars as u64,
        }
    }
}

impl From<KurdStats> for TextStatistics {
    fn from(s: KurdStats) -> Self {
        Self {
            chars: s.chars as usize,
            words: s.words as usize,
            lines: s.lines as usize,
            script_chars: s.script_chars as usize,
        }
    }
}

impl From<ConversionResult> for KurdConversion {
    fn from(r: ConversionResult) -> Self {
        Self {
            original: r.original,
            converted: r.converted,
            rule_set: r.rule_set,
            original_stats: r.original_stats.into(),
            converted_stats: r.converted_stats.into(),
        }
    }
}

impl From<KurdConversion> for ConversionResult {
    fn from(c: KurdConversion) -> Self {
        Self {
            original: c.original,
            converted: c.converted,
            rule_set: c.rule_set,
            original_stats: c.original_stats.into(),
            converted_stats: c.converted_stats.into(),
        }
    }
}

impl From<&HistoryEntry> for KurdHistoryEntry {
    fn from(e: &HistoryEntry) -> Self {
        Self {
            id: e.id,
            original: e.original.clone(),
            converted: e.converted.clone(),
            created_at: e.created_at,
            rule_set: e.rule_set.clone(),
        }
    }
}

impl From<KurdExportFormat> for ExportFormat {
    fn from(f: KurdExportFormat) -> Self {
        match f {
            KurdExportFormat::Text => ExportFormat::Text,
            KurdExportFormat::Json => ExportFormat::Json,
            KurdExportFormat::Csv => ExportFormat::Csv,
            KurdExportFormat::SpreadsheetXml => ExportFormat::SpreadsheetXml,
        }
    }
}

impl From<ExportPayload> for KurdExport {
    fn from(p: ExportPayload) -> Self {
        Self {
            bytes: p.bytes,
            filename: p.filename,
            mime_type: p.mime_type.to_string(),
        }
    }
}
