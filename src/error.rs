use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(
        "line {line_number}: time and track name must be separated by a TAB character: '{line}'"
    )]
    MalformedLine { line_number: usize, line: String },
    #[error("line {line_number}: invalid time '{token}', expected mm:ss: '{line}'")]
    BadTimeFormat {
        line_number: usize,
        line: String,
        token: String,
    },
    #[error("Failed to access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

