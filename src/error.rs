use thiserror::Error;

#[derive(Debug, Error)]
pub enum FundError {
    #[error("Failed to read '{key}' from store: {reason}")]
    StoreRead { key: String, reason: String },

    #[error("Failed to write '{key}' to store: {reason}")]
    StoreWrite { key: String, reason: String },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0} must not be blank")]
    BlankField(&'static str),
}

pub type FundResult<T> = Result<T, FundError>;
