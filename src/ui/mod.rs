mod cards;
mod chart;
mod detail_panel;
mod ui_config;
mod ui_text;

pub use cards::{
    CardEvent, CardMode, CardView, ListView, WatchAction, build_list_view, render_cards,
};
pub use chart::render_price_chart;
pub use detail_panel::{DetailRow, build_detail_rows, render_detail_info};
pub use ui_config::{UI_CONFIG, UiConfig};
pub use ui_text::{UI_TEXT, UiText};
