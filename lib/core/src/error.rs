use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Fatal pipeline errors. Row-level problems never surface here, they
/// travel on the row as a [`ParseError`].
#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot open input file {path:?}: {source}")]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input read error: {0}")]
    Input(#[from] csv::Error),
}

/// Why a single column failed to coerce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// Text is not a valid value of the column's type.
    IncorrectField,
    /// The mode column was empty.
    EmptyEdgeMode,
    /// Row ended before this column (strict column mode only).
    MissingColumn,
}

impl fmt::Display for FieldErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldErrorKind::IncorrectField => write!(f, "incorrect field"),
            FieldErrorKind::EmptyEdgeMode => write!(f, "empty edge mode value"),
            FieldErrorKind::MissingColumn => write!(f, "missing column"),
        }
    }
}

/// Parse-error marker attached to a rejected row.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} in column {column}")]
pub struct ParseError {
    /// 0-based column index of the first failing column.
    pub column: usize,
    pub kind: FieldErrorKind,
}

impl ParseError {
    pub fn new(column: usize, kind: FieldErrorKind) -> Self {
        Self { column, kind }
    }
}
