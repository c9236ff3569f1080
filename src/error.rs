use thiserror::Error;

use crate::types::DataType;

/// Error type shared by every sparkrs operation
#[derive(Error, Debug)]
pub enum Error {
    #[error("column not found: {0}")]
    ColumnNotFound(String),

    #[error("ambiguous column reference: {0}")]
    AmbiguousColumn(String),

    #[error("duplicate column name: {0}")]
    DuplicateColumnName(String),

    #[error("length mismatch: expected {expected}, actual {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("type mismatch in column {name}: expected {expected}, found {found}")]
    TypeMismatch {
        name: String,
        expected: DataType,
        found: DataType,
    },

    #[error("cast error: {0}")]
    Cast(String),

    #[error("invalid regular expression: {0}")]
    InvalidRegex(String),

    #[error("schema error: {0}")]
    Schema(String),

    #[error("unsupported join type '{0}', supported: inner, outer, full, fullouter, full_outer, left, leftouter, left_outer, right, rightouter, right_outer, semi, leftsemi, left_semi, anti, leftanti, left_anti, cross")]
    InvalidJoinType(String),

    #[error("invalid window: {0}")]
    InvalidWindow(String),

    #[error("invalid master url: {0}")]
    InvalidMaster(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("io error")]
    Io(#[source] std::io::Error),

    #[error("json error")]
    Json(#[source] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::InvalidRegex(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}
