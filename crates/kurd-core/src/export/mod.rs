//! Export of an original/converted pair as a downloadable file payload.
//!
//! Formats: plain text, JSON, CSV and XML Spreadsheet 2003 (`.xls`). The
//! tabular formats align the two texts word by word; see [`aligned_rows`].

mod csv;
mod json;
mod rows;
mod text;
mod xml;

use std::fmt;
use std::str::FromStr;

use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};
use tracing::{debug, debug_span};

use crate::rules::RuleSetId;
use crate::settings::settings;

pub use rows::{aligned_rows, WordRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Text,
    Json,
    Csv,
    SpreadsheetXml,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Text,
        ExportFormat::Json,
        ExportFormat::Csv,
        ExportFormat::SpreadsheetXml,
    ];

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::SpreadsheetXml => "xls",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Text => "text/plain",
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
            ExportFormat::SpreadsheetXml => "application/vnd.ms-excel",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "txt" | "text" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "xls" | "xml" | "excel" => Ok(ExportFormat::SpreadsheetXml),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("unknown export format: {0}")]
    UnknownFormat(String),
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("timestamp formatting failed: {0}")]
    Timestamp(#[from] time::error::Format),
}

/// Everything a serializer needs; borrowed from the caller.
#[derive(Debug, Clone)]
pub struct ExportRequest<'a> {
    pub original: &'a str,
    pub converted: &'a str,
    /// Rule set id, used as `mappingType` and in the filename.
    pub rule_set: &'a str,
    /// Number of single-character rules in the active table.
    pub mapping_count: usize,
    pub generated_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub mime_type: &'static str,
}

/// `{base}-{rule_set}.{ext}`, base from `[export] base_name`.
pub fn filename(rule_set: &str, format: ExportFormat) -> String {
    format!(
        "{}-{}.{}",
        settings().export.base_name,
        rule_set,
        format.extension()
    )
}

/// ISO-8601 UTC with millisecond precision, e.g. `2025-01-02T03:04:05.678Z`.
pub fn format_timestamp(at: OffsetDateTime) -> Result<String, time::error::Format> {
    at.to_offset(UtcOffset::UTC).format(format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
    ))
}

/// Render `req` in `format`.
///
/// Mismatched word counts and empty texts are not errors: the tabular
/// formats pad with empty cells or emit a header only.
pub fn serialize(format: ExportFormat, req: &ExportRequest<'_>) -> Result<ExportPayload, ExportError> {
    let _span = debug_span!("export", format = format.extension()).entered();
    let bytes = match format {
        ExportFormat::Text => text::render(req)?,
        ExportFormat::Json => json::render(req)?,
        ExportFormat::Csv => csv::render(req),
        ExportFormat::SpreadsheetXml => xml::render(req),
    };
    debug!(bytes = bytes.len());
    Ok(ExportPayload {
        bytes,
        filename: filename(req.rule_set, format),
        mime_type: format.mime_type(),
    })
}

/// [`serialize`] against a built-in table, stamped with the current time.
pub fn export(
    original: &str,
    converted: &str,
    format: ExportFormat,
    rule_set: RuleSetId,
) -> Result<ExportPayload, ExportError> {
    let req = ExportRequest {
        original,
        converted,
        rule_set: rule_set.as_str(),
        mapping_count: rule_set.rule_set().mapping_count(),
        generated_at: OffsetDateTime::now_utc(),
    };
    serialize(format, &req)
}

#[cfg(test)]
pub(crate) mod testutil {
    use time::macros::datetime;

    use super::ExportRequest;

    pub fn request<'a>(original: &'a str, converted: &'a str) -> ExportRequest<'a> {
        ExportRequest {
            original,
            converted,
            rule_set: "pro",
            mapping_count: 32,
            generated_at: datetime!(2025-01-02 03:04:05.678 UTC),
        }
    }
}
