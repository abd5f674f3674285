// src/storage/mod.rs
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use crate::extractors::section::ExtractedSection;
use crate::utils::error::StorageError;

pub struct StorageManager {
    output_path: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager writing to `output_path`, creating missing parent directories
    pub fn new<P: AsRef<Path>>(output_path: P) -> Result<Self, StorageError> {
        let output_path = output_path.as_ref().to_path_buf();

        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(StorageError::IoError)?;
            }
        }

        Ok(Self { output_path })
    }

    /// Path of the JSON sidecar: the output path with `.meta.json` appended
    pub fn metadata_path(&self) -> PathBuf {
        let mut name = OsString::from(self.output_path.as_os_str());
        name.push(".meta.json");
        PathBuf::from(name)
    }

    /// Saves the extracted block to the output file
    pub fn save_section(&self, section: &ExtractedSection) -> Result<PathBuf, StorageError> {
        fs::write(&self.output_path, section.content.as_bytes())
            .map_err(StorageError::IoError)?;

        tracing::info!("Saved section to {}", self.output_path.display());

        Ok(self.output_path.clone())
    }

    /// Saves metadata about the section in JSON format
    pub fn save_section_metadata(
        &self,
        section: &ExtractedSection,
        source_file: &Path,
    ) -> Result<PathBuf, StorageError> {
        let file_path = self.metadata_path();

        let end_strategy = serde_json::to_value(&section.end)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        // Line numbers are 1-based; end_line is the last line included
        let metadata = serde_json::json!({
            "source_file": source_file.display().to_string(),
            "start_marker": section.start_marker,
            "end_strategy": end_strategy,
            "start_line": section.start_line + 1,
            "end_line": section.end_line,
            "line_count": section.line_count(),
            "content_length": section.content.len(),
            "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(&file_path, metadata_str)
            .map_err(StorageError::IoError)?;

        tracing::info!("Saved metadata to {}", file_path.display());

        Ok(file_path)
    }
}
