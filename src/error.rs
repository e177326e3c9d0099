//! Error types for the oracle crate.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the crate.
///
/// The oracle and the generator are total over well-formed boards, so these
/// errors only surface at the boundaries: raw cell slices, dataset files and
/// configuration.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid board length: expected {expected} cells, got {got}")]
    InvalidBoardLength { expected: usize, got: usize },

    #[error("invalid cell value {value} at position {position} ({encoding} encoding)")]
    InvalidCellValue {
        value: i32,
        position: usize,
        encoding: Encoding,
    },

    #[error("label in row {row} is not one-hot")]
    InvalidLabel { row: usize },

    #[error("dataset has {inputs} inputs but {labels} labels")]
    MismatchedRows { inputs: usize, labels: usize },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation} {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to parse TOML: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Which board encoding a value was being interpreted in.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Encoding {
    /// `0` = empty, `1` = X, `-1` = O.
    Oracle,
    /// `3` = empty, `1` = X, `0` = O.
    External,
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Encoding::Oracle => write!(f, "oracle"),
            Encoding::External => write!(f, "external"),
        }
    }
}

/// Convenience alias for results using the crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_length_error_display() {
        let err = Error::InvalidBoardLength {
            expected: 9,
            got: 8,
        };
        assert_eq!(
            err.to_string(),
            "invalid board length: expected 9 cells, got 8"
        );
    }

    #[test]
    fn cell_value_error_display() {
        let err = Error::InvalidCellValue {
            value: 2,
            position: 4,
            encoding: Encoding::External,
        };
        assert_eq!(
            err.to_string(),
            "invalid cell value 2 at position 4 (external encoding)"
        );
    }
}
