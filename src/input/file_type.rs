// src/input/file_type.rs
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::path::Path;

// Paginated/binary document formats that need a dedicated text extractor (not implemented).
static DOCUMENT_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["pdf", "doc", "docx", "odt", "epub"].into_iter().collect()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileType {
    /// Plain text, read line by line.
    Text,
    /// Document format identified by its lowercase extension.
    Document(String),
}

impl FileType {
    /// Classifies a file by its extension. Unknown or missing extensions are treated as text.
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension {
            Some(ext) if DOCUMENT_EXTENSIONS.contains(ext.as_str()) => FileType::Document(ext),
            _ => FileType::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_extensions() {
        assert_eq!(FileType::from_path(Path::new("notes.txt")), FileType::Text);
        assert_eq!(FileType::from_path(Path::new("README.md")), FileType::Text);
        assert_eq!(FileType::from_path(Path::new("Makefile")), FileType::Text);
        assert_eq!(FileType::from_path(Path::new("dir.d/log")), FileType::Text);
    }

    #[test]
    fn test_document_extensions_case_insensitive() {
        assert_eq!(
            FileType::from_path(Path::new("report.PDF")),
            FileType::Document("pdf".to_string())
        );
        assert_eq!(
            FileType::from_path(Path::new("/tmp/letter.docx")),
            FileType::Document("docx".to_string())
        );
        assert_eq!(
            FileType::from_path(Path::new("book.Epub")),
            FileType::Document("epub".to_string())
        );
    }
}
