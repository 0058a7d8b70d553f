use std::time::Duration;

// Top Level Constants

/// How often the two list pages re-enter their fetch cycle.
pub const LIST_REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// Frame poll cadence while a fetch is in flight or a refresh timer is armed.
pub const REPAINT_POLL: Duration = Duration::from_millis(500);
