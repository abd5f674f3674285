// src/main.rs
mod extractors;
mod input;
mod storage;
mod utils;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgGroup, Parser};
use extractors::section::{EndScan, EndStrategy, ExtractionRequest, SectionExtractor};
use storage::StorageManager;
use utils::AppError;

const LONG_ABOUT: &str = "\
Textex extracts text sections from a given text file (PDF not yet supported).

  * <SECTION_START>: the line of text from where to start the text extraction
  * the end of the extraction block is chosen with one of:
      -t <MARKER>  a line of text marking the end of the extraction block
      -l           from <SECTION_START> to the end of the line
      -e           from <SECTION_START> to the end of the file (default)

Markers are matched case-insensitively anywhere within a line.";

/// Command Line Interface for Textex
#[derive(Parser, Debug)]
#[command(name = "textex", version, about = "Extracts text sections from a given text file", long_about = LONG_ABOUT)]
#[command(group(ArgGroup::new("section_end").args(["text_line", "end_of_file", "end_of_line"])))]
struct Args {
    /// The path for the text file containing the text to be extracted
    file_path: PathBuf,

    /// The line of text from where to start the text extraction
    section_start: String,

    /// The line of text marking the end of the extraction block
    #[arg(short, long, value_name = "MARKER")]
    text_line: Option<String>,

    /// Extraction block begins at <SECTION_START> and ends at the end of the file
    #[arg(short, long)]
    end_of_file: bool,

    /// Extraction block begins at <SECTION_START> and ends at the end of the line
    #[arg(short = 'l', long)]
    end_of_line: bool,

    /// Search for the end marker from the start line instead of the top of the file
    #[arg(long, requires = "text_line")]
    end_after_start: bool,

    /// Write the extracted block to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write a JSON metadata file next to --output
    #[arg(short, long, requires = "output")]
    metadata: bool,

    /// Debug mode - verbose logging on stderr
    #[arg(short, long)]
    debug: bool,
}

impl Args {
    /// Maps the mutually exclusive end flags to one strategy, defaulting to end of file.
    fn end_strategy(&self) -> EndStrategy {
        match (&self.text_line, self.end_of_line) {
            (Some(marker), _) => EndStrategy::ToMarker(marker.clone()),
            (None, true) => EndStrategy::ToLineEnd,
            (None, false) => EndStrategy::ToFileEnd,
        }
    }

    fn end_scan(&self) -> EndScan {
        if self.end_after_start {
            EndScan::FromStartLine
        } else {
            EndScan::FromFileStart
        }
    }

    fn extraction_request(&self) -> ExtractionRequest {
        ExtractionRequest::new(self.section_start.as_str(), self.end_strategy())
            .with_end_scan(self.end_scan())
    }
}

fn main() -> ExitCode {
    // 1. Parse CLI Arguments
    let args = Args::parse();

    // 2. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging(args.debug);
    tracing::debug!("Starting extraction for args: {:?}", args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Extraction aborted: {:?}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    // 3. Read the text file
    let lines = input::read_lines(&args.file_path)?;
    tracing::info!("Read {} lines from {}", lines.len(), args.file_path.display());

    // 4. Extract the section
    let request = args.extraction_request();
    let section = SectionExtractor::new().extract_section(&lines, &request)?;

    // 5. Print or store the result
    match &args.output {
        Some(output) => {
            let storage = StorageManager::new(output)?;
            let path = storage.save_section(&section)?;
            tracing::info!("Saved section content to: {}", path.display());

            if args.metadata {
                let path = storage.save_section_metadata(&section, &args.file_path)?;
                tracing::info!("Saved section metadata to: {}", path.display());
            }
        }
        None => println!("{}", section.content),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("textex").chain(argv.iter().copied()))
    }

    #[test]
    fn test_defaults_to_end_of_file() {
        let args = parse(&["notes.txt", "intro"]).unwrap();
        assert_eq!(args.end_strategy(), EndStrategy::ToFileEnd);
        assert_eq!(args.end_scan(), EndScan::FromFileStart);
        assert_eq!(args.section_start, "intro");
        assert_eq!(args.file_path, PathBuf::from("notes.txt"));
    }

    #[test]
    fn test_end_flags_map_to_strategies() {
        let args = parse(&["notes.txt", "intro", "-t", "The End"]).unwrap();
        assert_eq!(args.end_strategy(), EndStrategy::ToMarker("The End".to_string()));

        let args = parse(&["notes.txt", "intro", "--end-of-line"]).unwrap();
        assert_eq!(args.end_strategy(), EndStrategy::ToLineEnd);

        let args = parse(&["notes.txt", "intro", "-e"]).unwrap();
        assert_eq!(args.end_strategy(), EndStrategy::ToFileEnd);
    }

    #[test]
    fn test_end_flags_are_mutually_exclusive() {
        let err = parse(&["notes.txt", "intro", "-e", "-l"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);

        let err = parse(&["notes.txt", "intro", "-t", "end", "-e"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_end_after_start_requires_text_line() {
        let err = parse(&["notes.txt", "intro", "--end-after-start"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let args = parse(&["notes.txt", "intro", "-t", "end", "--end-after-start"]).unwrap();
        let request = args.extraction_request();
        assert_eq!(request.end_scan, EndScan::FromStartLine);
        assert_eq!(request.start_marker, "intro");
    }

    #[test]
    fn test_metadata_requires_output() {
        let err = parse(&["notes.txt", "intro", "-m"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let args = parse(&["notes.txt", "intro", "-o", "out.txt", "-m"]).unwrap();
        assert!(args.metadata);
        assert_eq!(args.output, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn test_start_marker_is_required() {
        let err = parse(&["notes.txt"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
