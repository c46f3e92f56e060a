//! Error types for the geodem library.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while parsing the text header.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeaderError {
    /// A required field is absent from the header.
    #[error("missing required header field `{name}`")]
    MissingField { name: &'static str },

    /// One or more required numeric fields are absent or unparseable.
    #[error("malformed required header fields: {}", .fields.join(", "))]
    MalformedRequired { fields: Vec<String> },

    /// A non-empty line does not split into a single `key = value` pair.
    #[error("header line {line} is not a `key = value` pair")]
    MalformedLine { line: usize },
}

/// Errors produced while reading the binary elevation grid.
#[derive(Error, Debug)]
pub enum GridError {
    /// The companion `.bin` file could not be found.
    #[error("elevation data file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// The file holds fewer samples than the header declares.
    #[error("elevation data truncated: expected {expected} samples, found {actual}")]
    Truncated { expected: usize, actual: usize },

    /// IO error while opening or mapping the file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error produced when the declared elevation range cannot be normalized.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RangeError {
    /// `elev_m_maximum` does not exceed `elev_m_minimum`.
    #[error("degenerate elevation range: minimum {min} is not below maximum {max}")]
    Degenerate { min: f32, max: f32 },
}

/// Any failure of the load pipeline.
///
/// A load either returns a fully populated result or one of these; no
/// partial output is ever handed to the caller.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The header could not be parsed.
    #[error(transparent)]
    Header(#[from] HeaderError),

    /// The binary elevation grid could not be read.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// The declared elevation range is degenerate.
    #[error(transparent)]
    Range(#[from] RangeError),

    /// IO error while reading the header file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The requested heightmap resolution is zero.
    #[error("target resolution must be at least 1")]
    InvalidResolution,
}

/// Result type alias using [`LoadError`].
pub type Result<T> = std::result::Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HeaderError::MissingField { name: "file_title" };
        assert!(err.to_string().contains("file_title"));

        let err = HeaderError::MalformedRequired {
            fields: vec!["left_map_x".into(), "number_of_rows".into()],
        };
        assert!(err.to_string().contains("left_map_x"));
        assert!(err.to_string().contains("number_of_rows"));

        let err = GridError::Truncated {
            expected: 9,
            actual: 4,
        };
        assert!(err.to_string().contains('9'));
        assert!(err.to_string().contains('4'));

        let err = GridError::FileNotFound {
            path: PathBuf::from("crater_lake.bin"),
        };
        assert!(err.to_string().contains("crater_lake.bin"));
    }

    #[test]
    fn test_load_error_wraps_stage_errors() {
        let err: LoadError = HeaderError::MissingField { name: "file_title" }.into();
        assert!(matches!(err, LoadError::Header(_)));

        let err: LoadError = RangeError::Degenerate { min: 5.0, max: 5.0 }.into();
        assert!(matches!(err, LoadError::Range(_)));
    }
}
