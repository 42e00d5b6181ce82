pub mod formatting;
pub mod path;
pub mod table;

pub use formatting::{secs2readable, title_case};
