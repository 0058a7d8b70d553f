mod client;
mod payloads;
mod watchlist;

pub use {
    client::{GeckoClient, MarketDataClient},
    payloads::{CoinInfo, CoinLinks, CoinMarketData, MarketChart, MarketCoin, VsUsd},
    watchlist::{AddOutcome, JsonFileWatchlist, WatchlistStore},
};

#[cfg(test)]
pub use watchlist::InMemoryWatchlist;
