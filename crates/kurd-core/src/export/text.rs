use super::{format_timestamp, ExportError, ExportRequest};
use crate::settings::settings;

pub(super) fn render(req: &ExportRequest<'_>) -> Result<Vec<u8>, ExportError> {
    let title = &settings().export.title;
    let rule = "=".repeat(title.chars().count());
    let timestamp = format_timestamp(req.generated_at)?;

    let out = format!(
        "{title}\n{rule}\n\n\
         Original Text (Arabic):\n{}\n\n\
         Converted Text (Kurdish):\n{}\n\n\
         Mapping Type: {}\n\
         Generated: {timestamp}\n",
        req.original, req.converted, req.rule_set,
    );
    Ok(out.into_bytes())
}
