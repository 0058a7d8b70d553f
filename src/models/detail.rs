use crate::{
    data::{CoinInfo, MarketChart},
    utils::day_month_label,
};

/// Normalized single-asset detail. Transient, recomputed per page load.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetDetail {
    pub name: String,
    pub symbol: String,
    pub current_price_usd: f64,
    pub market_cap_usd: f64,
    pub high_24h_usd: f64,
    pub low_24h_usd: f64,
    pub total_volume_usd: f64,
    pub market_cap_rank: Option<u32>,
    pub homepage_url: Option<String>,
}

impl From<CoinInfo> for AssetDetail {
    fn from(info: CoinInfo) -> Self {
        AssetDetail {
            name: info.name,
            symbol: info.symbol.to_uppercase(),
            current_price_usd: info.market_data.current_price.usd,
            market_cap_usd: info.market_data.market_cap.usd,
            high_24h_usd: info.market_data.high_24h.usd,
            low_24h_usd: info.market_data.low_24h.usd,
            total_volume_usd: info.market_data.total_volume.usd,
            market_cap_rank: info.market_cap_rank,
            homepage_url: info.links.homepage.into_iter().find(|url| !url.is_empty()),
        }
    }
}

/// One chart sample: "D/M" label plus the raw price.
#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub date_label: String,
    pub price_usd: f64,
}

/// Ordered trailing-window price history, chart-ready.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PriceSeries {
    pub points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<MarketChart> for PriceSeries {
    fn from(chart: MarketChart) -> Self {
        PriceSeries {
            points: chart
                .prices
                .into_iter()
                .map(|(timestamp_ms, price_usd)| PricePoint {
                    date_label: day_month_label(timestamp_ms),
                    price_usd,
                })
                .collect(),
        }
    }
}

/// What the detail page loads: metadata and history together, or neither.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailBundle {
    pub detail: AssetDetail,
    pub series: PriceSeries,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{CoinLinks, CoinMarketData, VsUsd};
    use pretty_assertions::assert_eq;

    fn coin_info(homepage: Vec<&str>) -> CoinInfo {
        CoinInfo {
            name: "Ethereum".to_string(),
            symbol: "eth".to_string(),
            market_cap_rank: Some(2),
            market_data: CoinMarketData {
                current_price: VsUsd { usd: 3500.12 },
                market_cap: VsUsd { usd: 420_000_000_000.0 },
                high_24h: VsUsd { usd: 3600.0 },
                low_24h: VsUsd { usd: 3400.0 },
                total_volume: VsUsd { usd: 18_000_000_000.0 },
            },
            links: CoinLinks {
                homepage: homepage.into_iter().map(str::to_string).collect(),
            },
        }
    }

    #[test]
    fn detail_uppercases_symbol_and_takes_first_homepage() {
        let detail = AssetDetail::from(coin_info(vec!["https://ethereum.org", ""]));
        assert_eq!(detail.symbol, "ETH");
        assert_eq!(detail.homepage_url.as_deref(), Some("https://ethereum.org"));
    }

    #[test]
    fn empty_homepage_entries_are_skipped() {
        let detail = AssetDetail::from(coin_info(vec!["", "https://example.org"]));
        assert_eq!(detail.homepage_url.as_deref(), Some("https://example.org"));

        let detail = AssetDetail::from(coin_info(vec![]));
        assert_eq!(detail.homepage_url, None);
    }

    #[test]
    fn chart_pairs_become_labeled_points_in_order() {
        let chart = MarketChart {
            // 2024-04-01 and 2024-04-02, 00:00 UTC
            prices: vec![(1_711_929_600_000, 69702.3), (1_712_016_000_000, 70123.0)],
        };
        let series = PriceSeries::from(chart);
        assert_eq!(
            series.points,
            vec![
                PricePoint {
                    date_label: "1/4".to_string(),
                    price_usd: 69702.3
                },
                PricePoint {
                    date_label: "2/4".to_string(),
                    price_usd: 70123.0
                },
            ]
        );
    }
}
