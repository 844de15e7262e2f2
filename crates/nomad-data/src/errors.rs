use thiserror::Error as ThisError;

/// Query errors
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum QueryError {
    #[error("Not found")]
    NotFound,
    #[error("Unknown field `{field}` for table {table}")]
    UnknownField { table: String, field: String },
    #[error("Empty patch")]
    EmptyPatch,
    #[error("Field `{0}` can not be updated")]
    ImmutableField(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serde(String),
}

impl QueryError {
    pub fn unknown_field(table: &str, field: &str) -> Self {
        QueryError::UnknownField {
            table: table.to_string(),
            field: field.to_string(),
        }
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(err: serde_json::Error) -> Self {
        QueryError::Serde(err.to_string())
    }
}
