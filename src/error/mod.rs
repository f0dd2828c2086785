use std::path::PathBuf;

use thiserror::Error;

/// Broad classification of a [`PresetError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The preset file could not be read or is not JSON at all.
    Io,
    /// The document is JSON but its envelope or a record has the wrong shape.
    Format,
}

/// Errors raised while loading user preset files
#[derive(Debug, Error)]
pub enum PresetError {
    #[error("Failed to read preset file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse preset file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported preset file version: {found}. Expected version 1.")]
    UnsupportedVersion { found: String },

    #[error("Invalid preset file: \"presets\" must be an array.")]
    InvalidPresetsArray,

    #[error("Invalid preset at index {index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl PresetError {
    /// Classify the error as an I/O failure or a format failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PresetError::ReadFile { .. } | PresetError::Parse { .. } => ErrorKind::Io,
            PresetError::UnsupportedVersion { .. }
            | PresetError::InvalidPresetsArray
            | PresetError::InvalidRecord { .. } => ErrorKind::Format,
        }
    }

    /// True for envelope and record shape failures.
    pub fn is_format_error(&self) -> bool {
        self.kind() == ErrorKind::Format
    }

    /// True when the file could not be read or decoded as JSON.
    pub fn is_io_error(&self) -> bool {
        self.kind() == ErrorKind::Io
    }
}

/// Result type alias for preset operations
pub type PresetResult<T> = Result<T, PresetError>;
