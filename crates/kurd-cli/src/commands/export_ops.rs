use std::fs;
use std::path::{Path, PathBuf};

use kurd_core::converter::convert;
use kurd_core::export::{export, ExportFormat};
use kurd_core::rules::RuleSetId;

use super::{read_input, CliError};

/// Convert `input` and write it in `format` to `out_dir`, named per the
/// export file contract. Blank input is refused.
pub fn write_export(
    input: &str,
    format: ExportFormat,
    rules: RuleSetId,
    out_dir: &Path,
) -> Result<PathBuf, CliError> {
    if input.trim().is_empty() {
        return Err(CliError::NothingToExport);
    }
    let converted = convert(input, rules.rule_set());
    let payload = export(input, &converted, format, rules)?;

    let io_err = |source| CliError::Io {
        path: out_dir.display().to_string(),
        source,
    };
    fs::create_dir_all(out_dir).map_err(io_err)?;
    let path = out_dir.join(&payload.filename);
    fs::write(&path, &payload.bytes).map_err(io_err)?;
    Ok(path)
}

pub fn export_cmd(
    text: Option<&str>,
    file: Option<&str>,
    format: &str,
    rules: &str,
    out_dir: &str,
) {
    let format: ExportFormat = die!(format.parse(), "Error: {}");
    let input = die!(read_input(text, file), "Error reading input: {}");
    let path = die!(
        write_export(&input, format, RuleSetId::select(rules), Path::new(out_dir)),
        "Error: {}"
    );
    println!("{} ({})", path.display(), format.mime_type());
}
