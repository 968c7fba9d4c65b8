use crate::error::ConvertError;
use std::{fs, path::Path};

/// Read a playlist file into its raw lines (line endings removed).
pub fn read_lines(path: &Path) -> Result<Vec<String>, ConvertError> {
    let contents = fs::read_to_string(path).map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(contents.lines().map(str::to_string).collect())
}

pub fn write_text(path: &Path, content: &str) -> Result<(), ConvertError> {
    fs::write(path, content).map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Format whole seconds as `h:mm:ss`.
pub fn format_clock(seconds: u64) -> String {
    format!(
        "{}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}
