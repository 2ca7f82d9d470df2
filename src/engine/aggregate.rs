//! Dashboard aggregation: balance, monthly series, and highlights.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::{Transaction, TransactionKind};

/// Sentinel reported when no category has been seen.
pub const NO_CATEGORY: &str = "none";

/// A calendar month, keyed by year and month number.
///
/// Displays zero-padded (`2024-03`) and orders chronologically, so callers
/// may sort buckets for presentation. The engine itself never sorts.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Income and expense totals for one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthBucket {
    pub month: MonthKey,
    pub income_total: f64,
    pub expense_total: f64,
}

impl MonthBucket {
    fn new(month: MonthKey) -> Self {
        Self {
            month,
            income_total: 0.0,
            expense_total: 0.0,
        }
    }
}

/// Headline figures for the dashboard summary card.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Highlights<'a> {
    /// Expense with the maximal amount; ties go to the record seen first.
    pub largest_expense: Option<&'a Transaction>,
    /// Category with the most occurrences across both kinds, or
    /// [`NO_CATEGORY`] for an empty snapshot.
    pub most_frequent_category: String,
}

/// Everything the dashboard renders from one snapshot.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardSummary<'a> {
    pub balance: f64,
    pub monthly_series: Vec<MonthBucket>,
    pub highlights: Highlights<'a>,
}

/// Derives the full dashboard summary in a handful of linear passes.
pub fn aggregate(transactions: &[Transaction]) -> DashboardSummary<'_> {
    let summary = DashboardSummary {
        balance: balance(transactions),
        monthly_series: monthly_series(transactions),
        highlights: highlights(transactions),
    };
    tracing::debug!(
        transactions = transactions.len(),
        months = summary.monthly_series.len(),
        "aggregated snapshot"
    );
    summary
}

/// Net balance: total income minus total expenses. May be negative.
pub fn balance(transactions: &[Transaction]) -> f64 {
    let income: f64 = transactions
        .iter()
        .filter(|txn| txn.kind == TransactionKind::Income)
        .map(|txn| txn.amount)
        .sum();
    let expenses: f64 = transactions
        .iter()
        .filter(|txn| txn.kind == TransactionKind::Expense)
        .map(|txn| txn.amount)
        .sum();
    income - expenses
}

/// Groups amounts into one bucket per distinct calendar month.
///
/// Buckets appear in first-occurrence order of their month within the
/// input, which keeps the output deterministic for a fixed input order.
pub fn monthly_series(transactions: &[Transaction]) -> Vec<MonthBucket> {
    let mut series: Vec<MonthBucket> = Vec::new();
    for txn in transactions {
        let key = MonthKey::from_date(txn.date);
        let pos = match series.iter().position(|bucket| bucket.month == key) {
            Some(pos) => pos,
            None => {
                series.push(MonthBucket::new(key));
                series.len() - 1
            }
        };
        match txn.kind {
            TransactionKind::Income => series[pos].income_total += txn.amount,
            TransactionKind::Expense => series[pos].expense_total += txn.amount,
        }
    }
    series
}

/// Derives the largest expense and the most frequent category.
///
/// Both reductions replace the running maximum only on a strictly greater
/// comparison, so ties resolve to the earliest candidate.
pub fn highlights(transactions: &[Transaction]) -> Highlights<'_> {
    let mut largest_expense: Option<&Transaction> = None;
    for txn in transactions {
        if txn.kind != TransactionKind::Expense {
            continue;
        }
        let replace = match largest_expense {
            Some(current) => txn.amount > current.amount,
            None => true,
        };
        if replace {
            largest_expense = Some(txn);
        }
    }

    // Occurrence counts in first-insertion order; both kinds count.
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for txn in transactions {
        match counts.iter_mut().find(|(name, _)| *name == txn.category) {
            Some((_, count)) => *count += 1,
            None => counts.push((txn.category.as_str(), 1)),
        }
    }
    let mut most_frequent = NO_CATEGORY;
    let mut best_count = 0usize;
    for (name, count) in counts {
        if count > best_count {
            most_frequent = name;
            best_count = count;
        }
    }

    Highlights {
        largest_expense,
        most_frequent_category: most_frequent.to_owned(),
    }
}
