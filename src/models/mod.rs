pub mod city;
pub mod month;
pub mod selection;
pub mod trip;
pub mod weekday;

pub use city::City;
pub use month::MonthFilter;
pub use selection::Selection;
pub use trip::{Trip, TripTable};
pub use weekday::WeekdayFilter;
