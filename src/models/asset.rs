use crate::{data::MarketCoin, utils::format_usd};

/// One normalized list entry. Rebuilt on every fetch, never persisted; its
/// `id` is the same identifier the client re-queries and the watchlist keys.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetSummary {
    pub id: String,
    pub name: String,
    /// Uppercased display form
    pub symbol: String,
    /// Grouped currency string, e.g. "$69,702.3"
    pub price: String,
    /// Two-decimal numeric string; "0" when the source field is absent
    pub change_pct_24h: String,
    pub image_url: String,
}

impl AssetSummary {
    /// Numeric sign check on the formatted change string. Zero (including
    /// "-0.00") counts as a gain; unparseable input falls back to the gain
    /// class, mirroring a `>= 0` coercion.
    pub fn is_gain(&self) -> bool {
        self.change_pct_24h
            .parse::<f64>()
            .map(|v| v >= 0.0)
            .unwrap_or(true)
    }
}

impl From<MarketCoin> for AssetSummary {
    fn from(coin: MarketCoin) -> Self {
        AssetSummary {
            id: coin.id,
            name: coin.name,
            symbol: coin.symbol.to_uppercase(),
            price: format_usd(coin.current_price),
            change_pct_24h: coin
                .price_change_percentage_24h
                .map(|change| format!("{change:.2}"))
                .unwrap_or_else(|| "0".to_string()),
            image_url: coin.image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn market_coin(change: Option<f64>) -> MarketCoin {
        MarketCoin {
            id: "bitcoin".to_string(),
            name: "Bitcoin".to_string(),
            symbol: "btc".to_string(),
            image: "https://img.example/btc.png".to_string(),
            current_price: 69702.3,
            price_change_percentage_24h: change,
        }
    }

    #[test]
    fn normalizes_symbol_price_and_change() {
        let summary = AssetSummary::from(market_coin(Some(1.2345)));
        assert_eq!(summary.symbol, "BTC");
        assert_eq!(summary.price, "$69,702.3");
        assert_eq!(summary.change_pct_24h, "1.23");
    }

    #[test]
    fn missing_change_becomes_zero_sentinel() {
        let summary = AssetSummary::from(market_coin(None));
        assert_eq!(summary.change_pct_24h, "0");
        assert!(summary.is_gain());
    }

    #[test]
    fn zero_change_is_a_gain() {
        let summary = AssetSummary::from(market_coin(Some(0.0)));
        assert_eq!(summary.change_pct_24h, "0.00");
        assert!(summary.is_gain());

        // Negative zero rounds to "-0.00" and must still land on the gain side.
        let summary = AssetSummary::from(market_coin(Some(-0.0001)));
        assert_eq!(summary.change_pct_24h, "-0.00");
        assert!(summary.is_gain());
    }

    #[test]
    fn negative_change_is_a_loss() {
        let summary = AssetSummary::from(market_coin(Some(-1.5)));
        assert_eq!(summary.change_pct_24h, "-1.50");
        assert!(!summary.is_gain());
    }
}
