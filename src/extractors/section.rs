// src/extractors/section.rs

// --- Imports ---
use crate::utils::error::ExtractError;
use serde::Serialize;
use std::fmt;

// --- Data Structures ---

/// How the end of the extracted block is located once the start line is known.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "kind", content = "marker", rename_all = "snake_case")]
pub enum EndStrategy {
    /// Block stops right before the first line containing the marker.
    ToMarker(String),
    /// Block is exactly the start line.
    ToLineEnd,
    /// Block runs through the last line of the file.
    #[default]
    ToFileEnd,
}

impl fmt::Display for EndStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndStrategy::ToMarker(marker) => write!(f, "to marker '{}'", marker),
            EndStrategy::ToLineEnd => write!(f, "to end of line"),
            EndStrategy::ToFileEnd => write!(f, "to end of file"),
        }
    }
}

/// Where the end-marker scan begins. Only meaningful for `EndStrategy::ToMarker`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndScan {
    /// Scan the whole file from the first line, independently of the start line.
    #[default]
    FromFileStart,
    /// Scan from the start line onwards.
    FromStartLine,
}

#[derive(Debug, Clone)]
pub struct ExtractionRequest {
    pub start_marker: String,
    pub end: EndStrategy,
    pub end_scan: EndScan,
}

impl ExtractionRequest {
    pub fn new(start_marker: impl Into<String>, end: EndStrategy) -> Self {
        Self {
            start_marker: start_marker.into(),
            end,
            end_scan: EndScan::default(),
        }
    }

    pub fn with_end_scan(mut self, end_scan: EndScan) -> Self {
        self.end_scan = end_scan;
        self
    }
}

#[derive(Debug, Clone)]
pub struct ExtractedSection {
    pub start_marker: String,  // Marker as given by the user
    pub end: EndStrategy,      // Strategy used to close the block
    pub start_line: usize,     // 0-based, inclusive
    pub end_line: usize,       // 0-based, exclusive (may be <= start_line)
    pub content: String,       // Newline-joined block
}

impl ExtractedSection {
    /// Number of lines in the block; zero for empty or inverted ranges.
    pub fn line_count(&self) -> usize {
        self.end_line.saturating_sub(self.start_line)
    }
}

// --- Main Extractor Structure ---
#[derive(Debug, Default)]
pub struct SectionExtractor;

impl SectionExtractor {
    pub fn new() -> Self { Self {} }

    /// Locates the block boundaries for `request` and materializes the block.
    ///
    /// Markers match case-insensitively as substrings of a line. The start line is the
    /// first match from the top of the file. When the end index resolves at or before the
    /// start index the block is empty.
    pub fn extract_section<S: AsRef<str>>(
        &self,
        lines: &[S],
        request: &ExtractionRequest,
    ) -> Result<ExtractedSection, ExtractError> {
        tracing::debug!(
            "Extracting section from {} lines: start '{}', {}",
            lines.len(),
            request.start_marker,
            request.end
        );

        // 1. Find the start line
        let start_line = find_marker(lines, &request.start_marker, 0)
            .ok_or_else(|| ExtractError::StartMarkerNotFound(request.start_marker.clone()))?;
        tracing::debug!("Found start marker on line {}", start_line + 1);

        // 2. Resolve the end line for the active strategy
        let end_line = match &request.end {
            EndStrategy::ToFileEnd => lines.len(),
            EndStrategy::ToLineEnd => start_line + 1,
            EndStrategy::ToMarker(marker) => {
                let scan_from = match request.end_scan {
                    EndScan::FromFileStart => 0,
                    EndScan::FromStartLine => start_line,
                };
                let end_line = find_marker(lines, marker, scan_from)
                    .ok_or_else(|| ExtractError::EndMarkerNotFound(marker.clone()))?;
                tracing::debug!("Found end marker on line {}", end_line + 1);
                end_line
            }
        };

        if end_line < start_line {
            tracing::warn!(
                "End marker (line {}) precedes start marker (line {}); extracted block is empty",
                end_line + 1,
                start_line + 1
            );
        }

        // 3. Join the block; an empty or inverted range yields ""
        let content = lines[start_line..end_line.max(start_line)]
            .iter()
            .map(|line| line.as_ref())
            .collect::<Vec<&str>>()
            .join("\n");

        tracing::info!(
            "Extracted lines {}..{} ({} bytes)",
            start_line + 1,
            end_line,
            content.len()
        );

        Ok(ExtractedSection {
            start_marker: request.start_marker.clone(),
            end: request.end.clone(),
            start_line,
            end_line,
            content,
        })
    }
}

/// Extracts the block starting at the first line containing `start_marker` and ending
/// according to `end`, scanning for an end marker from the top of the file.
pub fn extract<S: AsRef<str>>(
    lines: &[S],
    start_marker: &str,
    end: EndStrategy,
) -> Result<String, ExtractError> {
    let request = ExtractionRequest::new(start_marker, end);
    SectionExtractor::new()
        .extract_section(lines, &request)
        .map(|section| section.content)
}

/// Index of the first line at or after `from` whose lowercase form contains `marker`.
fn find_marker<S: AsRef<str>>(lines: &[S], marker: &str, from: usize) -> Option<usize> {
    let needle = marker.to_lowercase();
    lines
        .iter()
        .enumerate()
        .skip(from)
        .find(|(_, line)| line.as_ref().to_lowercase().contains(&needle))
        .map(|(index, _)| index)
}
