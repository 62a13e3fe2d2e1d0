use serde::Serialize;

use super::{format_timestamp, ExportError, ExportRequest};
use crate::stats::TextStatistics;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonExport<'a> {
    original: &'a str,
    converted: &'a str,
    mapping_type: &'a str,
    timestamp: String,
    stats: JsonStats,
    character_mappings: usize,
}

#[derive(Serialize)]
struct JsonStats {
    original: TextStatistics,
    converted: TextStatistics,
}

pub(super) fn render(req: &ExportRequest<'_>) -> Result<Vec<u8>, ExportError> {
    let doc = JsonExport {
        original: req.original,
        converted: req.converted,
        mapping_type: req.rule_set,
        timestamp: format_timestamp(req.generated_at)?,
        stats: JsonStats {
            original: TextStatistics::of(req.original),
            converted: TextStatistics::of(req.converted),
        },
        character_mappings: req.mapping_count,
    };
    Ok(serde_json::to_vec_pretty(&doc)?)
}
