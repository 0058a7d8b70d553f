mod format;
mod time_utils;

pub use format::format_usd;
pub use time_utils::{clock_label, day_month_label};
