//! `kurdtool` subcommand implementations.

use std::fs;
use std::io::{self, Read};

use kurd_core::export::ExportError;

/// Unwrap or print the error to stderr and exit with status 1.
macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod convert_ops;
pub mod export_ops;
pub mod history_ops;
pub mod rules_ops;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("nothing to export: input is blank")]
    NothingToExport,
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Input text from `--file` (`-` for stdin), the positional argument, or
/// stdin when neither is given.
pub fn read_input(text: Option<&str>, file: Option<&str>) -> Result<String, CliError> {
    match (file, text) {
        (Some("-"), _) | (None, None) => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| CliError::Io {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            Ok(buf)
        }
        (Some(path), _) => fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_string(),
            source,
        }),
        (None, Some(text)) => Ok(text.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_input_prefers_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.txt");
        fs::write(&path, "\u{621}").unwrap();
        let got = read_input(Some("ignored"), path.to_str()).unwrap();
        assert_eq!(got, "\u{621}");
    }

    #[test]
    fn test_read_input_text() {
        assert_eq!(read_input(Some("abc"), None).unwrap(), "abc");
    }

    #[test]
    fn test_read_input_missing_file() {
        let err = read_input(None, Some("/nonexistent/kurdtool/input.txt")).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
        assert!(err.to_string().starts_with("/nonexistent/kurdtool/input.txt: "));
    }
}
