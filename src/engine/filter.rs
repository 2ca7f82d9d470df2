//! Predicate filtering for the transaction list view.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::{Transaction, TransactionKind};

/// Kind predicate of a [`FilterCriteria`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum KindFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl KindFilter {
    pub fn matches(self, kind: TransactionKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Income => kind == TransactionKind::Income,
            KindFilter::Expense => kind == TransactionKind::Expense,
        }
    }
}

/// User-chosen constraints for the transaction list.
///
/// All predicates are AND-combined. Substring predicates are
/// case-insensitive and inactive when empty; the date range is always
/// applied, so "no date constraint" is expressed with
/// [`FilterCriteria::unbounded`] rather than an absent range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterCriteria {
    pub kind: KindFilter,
    pub category_contains: String,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub search_text: String,
}

impl FilterCriteria {
    /// Criteria that match every transaction.
    pub fn unbounded() -> Self {
        Self {
            kind: KindFilter::All,
            category_contains: String::new(),
            date_from: NaiveDate::MIN,
            date_to: NaiveDate::MAX,
            search_text: String::new(),
        }
    }

    /// The list screen's initial state: first of the current month through
    /// `today`.
    pub fn current_month(today: NaiveDate) -> Self {
        Self {
            date_from: today.with_day(1).unwrap_or(today),
            date_to: today,
            ..Self::unbounded()
        }
    }

    pub fn with_kind(mut self, kind: KindFilter) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_category_contains(mut self, needle: impl Into<String>) -> Self {
        self.category_contains = needle.into();
        self
    }

    pub fn with_date_range(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.date_from = from;
        self.date_to = to;
        self
    }

    pub fn with_search_text(mut self, needle: impl Into<String>) -> Self {
        self.search_text = needle.into();
        self
    }

    /// Evaluates the combined predicate against a single record.
    pub fn matches(&self, txn: &Transaction) -> bool {
        if !self.kind.matches(txn.kind) {
            return false;
        }
        if !self.category_contains.is_empty() {
            let needle = self.category_contains.to_lowercase();
            if !txn.category.to_lowercase().contains(&needle) {
                return false;
            }
        }
        // Inclusive on both ends; an inverted range simply matches nothing.
        if txn.date < self.date_from || txn.date > self.date_to {
            return false;
        }
        if !self.search_text.is_empty() {
            let needle = self.search_text.to_lowercase();
            if !txn.description.to_lowercase().contains(&needle)
                && !txn.category.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        true
    }
}

/// Retains the transactions matching `criteria`, preserving input order.
///
/// Duplicates in the input appear in the output; the result borrows the
/// input records. Never fails: criteria nothing matches yield an empty
/// collection.
pub fn filter<'a, I>(transactions: I, criteria: &FilterCriteria) -> Vec<&'a Transaction>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let matched: Vec<&Transaction> = transactions
        .into_iter()
        .filter(|txn| criteria.matches(txn))
        .collect();
    tracing::debug!(matched = matched.len(), "applied filter criteria");
    matched
}
