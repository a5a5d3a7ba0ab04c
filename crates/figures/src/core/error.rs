//! Core error types for figure construction and parsing
//!
//! Every failure in the creation pipeline is one of these variants. Clean end
//! of input and an empty input-method selection are not errors; those are
//! reported as `None` by the functions that can produce them.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, FigureError>;

/// Core error types for figure processing
#[derive(Error, Debug)]
pub enum FigureError {
    #[error("Invalid parameter: {field} must be a finite positive number, got {value}")]
    InvalidParameter { field: &'static str, value: f64 },

    #[error("Geometric constraint violated: no triangle with sides {a}, {b}, {c} exists")]
    GeometricConstraintViolation { a: f64, b: f64, c: f64 },

    #[error("Arithmetic overflow: perimeter of {figure} is not finite")]
    ArithmeticOverflow { figure: &'static str },

    #[error("Parse error: {kind}: {expected} expected, got {found}")]
    ParseArityMismatch {
        kind: &'static str,
        expected: &'static str,
        found: usize,
    },

    #[error("Parse error: token '{token}' is not numeric")]
    ParseTokenNotNumeric { token: String },

    #[error("Unknown figure kind: '{kind}'")]
    UnknownFigureKind { kind: String },

    #[error("Unknown input method: '{method}'")]
    UnknownInputMethod { method: String },

    #[error("Bad argument count for '{method}': expected {expected}, got {found}")]
    BadArgumentCount {
        method: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Cannot open file '{}': {source}", .path.display())]
    FileOpenFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read parameter {index} of {kind} from stream")]
    StreamExhaustedMidRecord { kind: &'static str, index: usize },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl FigureError {
    /// Create a new invalid parameter error
    pub fn invalid_parameter(field: &'static str, value: f64) -> Self {
        Self::InvalidParameter { field, value }
    }

    /// Create a new arithmetic overflow error
    pub fn overflow(figure: &'static str) -> Self {
        Self::ArithmeticOverflow { figure }
    }

    /// Create a new non-numeric token error
    pub fn not_numeric(token: impl Into<String>) -> Self {
        Self::ParseTokenNotNumeric {
            token: token.into(),
        }
    }

    /// Create a new unknown figure kind error
    pub fn unknown_kind(kind: impl Into<String>) -> Self {
        Self::UnknownFigureKind { kind: kind.into() }
    }

    /// Create a new unknown input method error
    pub fn unknown_method(method: impl Into<String>) -> Self {
        Self::UnknownInputMethod {
            method: method.into(),
        }
    }

    /// Create a new file open error
    pub fn file_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileOpenFailure {
            path: path.into(),
            source,
        }
    }
}
