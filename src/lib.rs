// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use app::{App, PageRoute, StartPage};
pub use data::{GeckoClient, JsonFileWatchlist, MarketDataClient, WatchlistStore};
pub use models::{AssetDetail, AssetSummary, PriceSeries};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Page to open at startup
    #[arg(long, value_enum, default_value_t = StartPage::Overview)]
    pub page: StartPage,

    /// Coin id for the detail page, e.g. "bitcoin" (implies --page detail)
    #[arg(long)]
    pub coin: Option<String>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
