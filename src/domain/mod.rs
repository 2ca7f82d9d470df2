//! Domain models shared by the filtering and aggregation engines.

pub mod category;
pub mod transaction;

pub use category::Category;
pub use transaction::{Transaction, TransactionKind};
