//! Pure engines over a transaction snapshot.
//!
//! Both engines are stateless: each call reads its arguments, allocates a
//! fresh result, and retains nothing. Outputs may borrow records from the
//! input collection and must be treated as read-only views.

pub mod aggregate;
pub mod filter;

pub use aggregate::{aggregate, DashboardSummary, Highlights, MonthBucket, MonthKey};
pub use filter::{filter, FilterCriteria, KindFilter};
