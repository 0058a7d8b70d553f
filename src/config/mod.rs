//! Configuration module for the dashboard.

mod api;
mod persistence;

pub mod constants;

// Re-export commonly used items
pub use api::{GECKO, GeckoConfig};
pub use constants::{LIST_REFRESH_INTERVAL, REPAINT_POLL};
pub use persistence::PERSISTENCE;
