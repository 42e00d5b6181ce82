//! The four stat reporters. Each one is computed from a read-only
//! [`TripTable`](crate::models::TripTable) and rendered separately, so the same
//! result can be printed any number of times.

pub mod duration;
pub mod station;
pub mod tally;
pub mod time;
pub mod users;

pub use duration::DurationStats;
pub use station::StationStats;
pub use time::TimeStats;
pub use users::UserStats;

/// Printed by a reporter when the filtered table has no rows.
pub const NO_DATA: &str = "No data available for this selection.";
