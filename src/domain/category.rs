use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::CoreError;

use super::transaction::TransactionKind;

/// A user-defined label for grouping transactions.
///
/// Categories are maintained by the external CRUD collaborator; the engines
/// only ever see the `category` string carried on a [`super::Transaction`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub kind: TransactionKind,
}

impl Category {
    pub fn new(
        owner_id: Uuid,
        name: impl Into<String>,
        kind: TransactionKind,
    ) -> Result<Self, CoreError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CoreError::EmptyField("name"));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            owner_id,
            name,
            kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_blank_name() {
        let err = Category::new(Uuid::new_v4(), "  ", TransactionKind::Expense)
            .expect_err("blank name must fail");
        assert!(matches!(err, CoreError::EmptyField("name")));
    }

    #[test]
    fn new_keeps_name_and_kind() {
        let category = Category::new(Uuid::new_v4(), "Transport", TransactionKind::Expense)
            .expect("valid category");
        assert_eq!(category.name, "Transport");
        assert_eq!(category.kind, TransactionKind::Expense);
    }
}
