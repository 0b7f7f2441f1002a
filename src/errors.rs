// src/errors.rs

use thiserror::Error;

pub type ParleyResult<T> = Result<T, ParleyError>;

#[derive(Debug, Error)]
pub enum ParleyError {
    #[error("conversation not found: {id}")]
    ConversationNotFound { id: String },

    #[error("storage error: {0}")]
    Storage(String),

    #[error("logging error: {0}")]
    Logging(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParleyError {
    pub fn storage_error(msg: impl Into<String>) -> Self {
        ParleyError::Storage(msg.into())
    }

    pub fn logging_error(msg: impl Into<String>) -> Self {
        ParleyError::Logging(msg.into())
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        ParleyError::ConversationNotFound { id: id.into() }
    }
}
