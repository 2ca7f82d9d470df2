//! Decode boundary between remote transaction rows and the engines.
//!
//! The data service returns an owner-scoped JSON array of rows. Rows are
//! validated on the way in: an aggregation run over a snapshot containing a
//! negative or non-finite amount would silently misreport balances, so such
//! rows are rejected here instead.

use crate::domain::Transaction;
use crate::errors::CoreError;

/// Parses and validates a JSON snapshot payload.
pub fn decode(payload: &str) -> Result<Vec<Transaction>, CoreError> {
    let rows: Vec<Transaction> = serde_json::from_str(payload)?;
    validate(&rows)?;
    tracing::debug!(rows = rows.len(), "decoded transaction snapshot");
    Ok(rows)
}

/// Revalidates an in-memory snapshot; the first offending row wins.
pub fn validate(transactions: &[Transaction]) -> Result<(), CoreError> {
    for txn in transactions {
        txn.validate()?;
    }
    Ok(())
}
