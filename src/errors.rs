use thiserror::Error;
use uuid::Uuid;

/// Error type that captures snapshot and record validation failures.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid amount on transaction {id}: {reason}")]
    InvalidAmount { id: Uuid, reason: String },
    #[error("Required field is empty: {0}")]
    EmptyField(&'static str),
}
