use thiserror::Error;

/// Why a single text line could not be turned into a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("field `{field}` is not an integer: {value:?}")]
    NotAnInteger { field: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum SchoolError {
    #[error("Malformed record in {source_name} at line {line}: {error}")]
    MalformedRecord {
        source_name: String,
        line: usize,
        #[source]
        error: RecordError,
    },

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("{0}")]
    Parse(String),

    #[error("{0}")]
    Usage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, SchoolError>;
