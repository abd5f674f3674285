// src/input/reader.rs
use crate::input::file_type::FileType;
use crate::utils::error::ReadError;
use std::fs;
use std::io;
use std::path::Path;

/// Reads a text file into lines with trailing whitespace stripped.
///
/// Document formats are rejected before the file is opened, and files that are not
/// valid UTF-8 are rejected as unsupported too.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ReadError> {
    let path = path.as_ref();

    if let FileType::Document(ext) = FileType::from_path(path) {
        tracing::debug!("Rejecting {} (.{} document)", path.display(), ext);
        return Err(ReadError::UnsupportedFileType(format!(
            "{} (.{} documents are not supported, only plain text)",
            path.display(),
            ext
        )));
    }

    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::InvalidData => {
            ReadError::UnsupportedFileType(format!("{} is not a UTF-8 text file", path.display()))
        }
        _ => ReadError::Io {
            path: path.display().to_string(),
            source: e,
        },
    })?;

    let lines = split_lines(&content);
    tracing::debug!("Read {} lines ({} bytes) from {}", lines.len(), content.len(), path.display());
    Ok(lines)
}

/// Splits on `\n` or `\r\n` and strips trailing whitespace from every line.
pub fn split_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim_end().to_string())
        .collect()
}
