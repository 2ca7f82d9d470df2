use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::CoreError;

/// A single income or expense record, as stored by the remote data service.
///
/// Direction is carried by [`TransactionKind`]; `amount` is always
/// non-negative. Records are immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_ref: Option<String>,
}

impl Transaction {
    /// Creates a validated transaction with a fresh identifier.
    pub fn new(
        owner_id: Uuid,
        kind: TransactionKind,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Result<Self, CoreError> {
        let category = category.into();
        let description = description.into();
        if category.trim().is_empty() {
            return Err(CoreError::EmptyField("category"));
        }
        if description.trim().is_empty() {
            return Err(CoreError::EmptyField("description"));
        }
        let txn = Self {
            id: Uuid::new_v4(),
            owner_id,
            kind,
            amount,
            category,
            description,
            date,
            receipt_ref: None,
        };
        txn.validate()?;
        Ok(txn)
    }

    pub fn with_receipt(mut self, receipt_ref: impl Into<String>) -> Self {
        self.receipt_ref = Some(receipt_ref.into());
        self
    }

    /// Checks the amount invariant.
    ///
    /// A snapshot row with a non-finite or negative amount must be rejected
    /// here rather than flow into the aggregation engine, where it would
    /// silently corrupt balances.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.amount.is_finite() {
            return Err(CoreError::InvalidAmount {
                id: self.id,
                reason: format!("not a finite number ({})", self.amount),
            });
        }
        if self.amount < 0.0 {
            return Err(CoreError::InvalidAmount {
                id: self.id,
                reason: format!("negative ({})", self.amount),
            });
        }
        Ok(())
    }
}

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_accepts_well_formed_record() {
        let txn = Transaction::new(
            Uuid::new_v4(),
            TransactionKind::Expense,
            42.5,
            "Food",
            "Groceries",
            date(2024, 1, 5),
        )
        .expect("valid transaction");
        assert_eq!(txn.amount, 42.5);
        assert!(txn.receipt_ref.is_none());
    }

    #[test]
    fn new_rejects_negative_amount() {
        let err = Transaction::new(
            Uuid::new_v4(),
            TransactionKind::Expense,
            -1.0,
            "Food",
            "Groceries",
            date(2024, 1, 5),
        )
        .expect_err("negative amount must fail");
        assert!(matches!(err, CoreError::InvalidAmount { .. }));
    }

    #[test]
    fn new_rejects_nan_amount() {
        let err = Transaction::new(
            Uuid::new_v4(),
            TransactionKind::Income,
            f64::NAN,
            "Salary",
            "Monthly pay",
            date(2024, 1, 10),
        )
        .expect_err("NaN amount must fail");
        assert!(matches!(err, CoreError::InvalidAmount { .. }));
    }

    #[test]
    fn new_rejects_blank_description() {
        let err = Transaction::new(
            Uuid::new_v4(),
            TransactionKind::Income,
            10.0,
            "Salary",
            "   ",
            date(2024, 1, 10),
        )
        .expect_err("blank description must fail");
        assert!(matches!(err, CoreError::EmptyField("description")));
    }

    #[test]
    fn kind_round_trips_through_remote_row_format() {
        let json = serde_json::to_string(&TransactionKind::Income).unwrap();
        assert_eq!(json, "\"income\"");
        let kind: TransactionKind = serde_json::from_str("\"expense\"").unwrap();
        assert_eq!(kind, TransactionKind::Expense);
    }
}
