use thiserror::Error;

/// Failures raised while mapping a Discovery payload into records.
///
/// Absent optional fields are never errors; they read as `None`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("malformed timestamp in `{field}`: {value:?} (expected YYYY-MM-DDTHH:MM:SSZ)")]
    MalformedTimestamp { field: String, value: String },
    #[error("{record} is missing mandatory field `{field}`")]
    MissingField {
        record: &'static str,
        field: &'static str,
    },
    #[error("{record}.{field}: expected {expected}")]
    UnexpectedType {
        record: &'static str,
        field: String,
        expected: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
