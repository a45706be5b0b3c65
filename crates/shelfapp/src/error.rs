use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),

    #[error("Failed to save products: {0}")]
    WriteFailure(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl ShelfError {
    /// True for errors where the caller must assume the mutation did not happen.
    pub fn is_write_failure(&self) -> bool {
        matches!(self, ShelfError::WriteFailure(_))
    }
}

pub type Result<T> = std::result::Result<T, ShelfError>;
