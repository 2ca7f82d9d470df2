#![doc(test(attr(deny(warnings))))]

//! Fintrack Core provides the computational heart of a personal finance
//! tracker: pure filtering and aggregation engines over an owner-scoped
//! transaction snapshot, plus the snapshot decoding boundary that guards
//! against malformed remote rows.

pub mod domain;
pub mod engine;
pub mod errors;
pub mod snapshot;
pub mod utils;

pub use domain::{Category, Transaction, TransactionKind};
pub use engine::{
    aggregate, filter, DashboardSummary, FilterCriteria, Highlights, KindFilter, MonthBucket,
    MonthKey,
};
pub use errors::CoreError;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Fintrack Core tracing initialized.");
    });
}
