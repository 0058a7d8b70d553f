use {
    anyhow::{Context, Result},
    async_trait::async_trait,
    serde::de::DeserializeOwned,
    std::time::Duration,
};

use crate::{
    config::GECKO,
    data::{CoinInfo, MarketChart, MarketCoin},
    models::{AssetSummary, DetailBundle},
};

/// Abstract interface for fetching market data.
#[async_trait]
pub trait MarketDataClient: Send + Sync {
    /// Top `count` assets by descending market cap. Transport or parse
    /// failure degrades to an empty list; callers cannot tell the two
    /// apart, by design.
    async fn fetch_top(&self, count: u32) -> Vec<AssetSummary>;

    /// The given assets, in request order, in one batched call. Empty input
    /// short-circuits to empty output without touching the network. Same
    /// failure-swallowing as `fetch_top`.
    async fn fetch_by_ids(&self, ids: &[String]) -> Vec<AssetSummary>;

    /// Metadata and 7-day price history, fetched concurrently. Unlike the
    /// list calls this propagates failure: the detail page has no partial
    /// success to render.
    async fn fetch_detail(&self, id: &str) -> Result<DetailBundle>;
}

pub struct GeckoClient {
    http: reqwest::Client,
    base_url: String,
}

impl GeckoClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(GECKO.base_url)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(GECKO.client.timeout_ms))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path_and_query);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .with_context(|| format!("request failed: {url}"))?;
        response
            .json::<T>()
            .await
            .with_context(|| format!("malformed response: {url}"))
    }
}

#[async_trait]
impl MarketDataClient for GeckoClient {
    async fn fetch_top(&self, count: u32) -> Vec<AssetSummary> {
        let query = format!(
            "/coins/markets?vs_currency={}&order=market_cap_desc&per_page={}&page=1&sparkline=false",
            GECKO.query.vs_currency, count
        );
        match self.get_json::<Vec<MarketCoin>>(&query).await {
            Ok(coins) => coins.into_iter().map(AssetSummary::from).collect(),
            Err(e) => {
                log::error!("Error fetching top coins: {e:#}");
                Vec::new()
            }
        }
    }

    async fn fetch_by_ids(&self, ids: &[String]) -> Vec<AssetSummary> {
        if ids.is_empty() {
            return Vec::new();
        }
        let query = format!(
            "/coins/markets?vs_currency={}&ids={}&sparkline=false",
            GECKO.query.vs_currency,
            ids.join(",")
        );
        match self.get_json::<Vec<MarketCoin>>(&query).await {
            Ok(coins) => coins.into_iter().map(AssetSummary::from).collect(),
            Err(e) => {
                log::error!("Error fetching watchlist coins: {e:#}");
                Vec::new()
            }
        }
    }

    async fn fetch_detail(&self, id: &str) -> Result<DetailBundle> {
        let info_path = format!("/coins/{id}");
        let chart_path = format!(
            "/coins/{}/market_chart?vs_currency={}&days={}&interval={}",
            id, GECKO.query.vs_currency, GECKO.query.chart_days, GECKO.query.chart_interval
        );
        let info = self.get_json::<CoinInfo>(&info_path);
        let chart = self.get_json::<MarketChart>(&chart_path);

        // Both in flight at once; the first rejection wins.
        let (info, chart) = tokio::try_join!(info, chart)
            .with_context(|| format!("detail fetch failed for {id}"))?;

        Ok(DetailBundle {
            detail: info.into(),
            series: chart.into(),
        })
    }
}
