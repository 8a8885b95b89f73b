use thiserror::Error;
use validator::ValidationErrors;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown {kind} `{value}`")]
    UnknownLabel { kind: &'static str, value: String },
    #[error("unknown filter field `{0}`")]
    UnknownField(String),
    #[error("failed to read problem data")]
    ReadError(#[from] std::io::Error),
    #[error("failed to deserialize problem data")]
    DeserializeError(#[from] serde_json::Error),
    #[error("problem {id} is invalid: {source}")]
    InvalidRecord {
        id: i64,
        #[source]
        source: ValidationErrors,
    },
    #[error("problem id {0} appears more than once")]
    DuplicateId(i64),
}
