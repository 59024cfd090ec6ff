use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Invalid {attribute} distribution: {reason}")]
    InvalidDistribution {
        attribute: &'static str,
        reason: String,
    },

    #[error("Aggregation requested over an empty record set")]
    EmptyInput,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type DataResult<T> = Result<T, DataError>;
