//! City dataset access: file resolution and the CSV loader.

pub mod loader;
pub mod registry;

pub use loader::{apply_filters, load, read_trips};
