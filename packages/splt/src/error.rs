//! Error types for the splitter.
//!
//! Routing misses are not errors: blocks that cannot be routed end up in the
//! unscoped bucket or are dropped. Everything in here aborts the run.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the splitter library.
#[derive(Debug, Error)]
pub enum SplitError {
    /// The input could not be parsed into a block tree.
    #[error("Failed to parse {origin}: {message}")]
    Parse { origin: String, message: String },

    /// Unknown splitting strategy name.
    #[error("Unknown splitting strategy '{0}'. Expected one of: schema, block, resource")]
    UnknownStrategy(String),

    /// No input file given and nothing piped on stdin.
    #[error("No input file provided")]
    NoInput,

    /// Stdin was piped but empty.
    #[error("No input provided, provide input via stdin or -i flag")]
    EmptyInput,

    /// Output location is missing.
    #[error("Output directory does not exist: {}", .0.display())]
    MissingOutputDir(PathBuf),

    /// Output location exists but is not a directory.
    #[error("Output path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Invalid output file extension.
    #[error("Invalid file extension: '{0}'. Expected letters, digits, '_' or '-' (e.g., hcl)")]
    InvalidExtension(String),

    /// Failed to read the input file.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create an output directory.
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write an output file.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for splitter operations.
pub type Result<T> = std::result::Result<T, SplitError>;
