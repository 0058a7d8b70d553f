//! Raw CoinGecko response shapes. Deserialized as-is, then converted into
//! the crate's own records via the From impls in `models/`.

use serde::Deserialize;

/// One entry of the `/coins/markets` list response.
#[derive(Debug, Deserialize)]
pub struct MarketCoin {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub image: String,
    // Required on purpose: a null price fails the whole batch, and the list
    // degrades to the empty state.
    pub current_price: f64,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
}

/// The `/coins/{id}` detail response, reduced to the fields we consume.
#[derive(Debug, Deserialize)]
pub struct CoinInfo {
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    pub market_data: CoinMarketData,
    pub links: CoinLinks,
}

#[derive(Debug, Deserialize)]
pub struct CoinMarketData {
    pub current_price: VsUsd,
    pub market_cap: VsUsd,
    pub high_24h: VsUsd,
    pub low_24h: VsUsd,
    pub total_volume: VsUsd,
}

/// Multi-currency quote map, narrowed to the reference fiat unit.
#[derive(Debug, Deserialize)]
pub struct VsUsd {
    pub usd: f64,
}

#[derive(Debug, Deserialize)]
pub struct CoinLinks {
    #[serde(default)]
    pub homepage: Vec<String>,
}

/// The `/coins/{id}/market_chart` response: `[timestamp_ms, price]` pairs.
#[derive(Debug, Deserialize)]
pub struct MarketChart {
    pub prices: Vec<(i64, f64)>,
}
