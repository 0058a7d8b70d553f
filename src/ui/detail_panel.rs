use eframe::egui::{RichText, Ui};

use crate::{
    models::AssetDetail,
    ui::{UI_CONFIG, UI_TEXT},
    utils::format_usd,
};

/// One labeled line of the info block.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

/// Fixed ordered field list; currency fields go through the grouped
/// formatter. The homepage link is rendered separately as a hyperlink.
pub fn build_detail_rows(detail: &AssetDetail) -> Vec<DetailRow> {
    vec![
        DetailRow {
            label: UI_TEXT.label_current_price,
            value: format_usd(detail.current_price_usd),
        },
        DetailRow {
            label: UI_TEXT.label_market_cap,
            value: format_usd(detail.market_cap_usd),
        },
        DetailRow {
            label: UI_TEXT.label_high_24h,
            value: format_usd(detail.high_24h_usd),
        },
        DetailRow {
            label: UI_TEXT.label_low_24h,
            value: format_usd(detail.low_24h_usd),
        },
        DetailRow {
            label: UI_TEXT.label_total_volume,
            value: format_usd(detail.total_volume_usd),
        },
        DetailRow {
            label: UI_TEXT.label_rank,
            value: detail
                .market_cap_rank
                .map(|rank| rank.to_string())
                .unwrap_or_else(|| "-".to_string()),
        },
    ]
}

pub fn render_detail_info(ui: &mut Ui, detail: &AssetDetail) {
    for row in build_detail_rows(detail) {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(row.label)
                    .strong()
                    .color(UI_CONFIG.colors.heading),
            );
            ui.label(RichText::new(row.value).color(UI_CONFIG.colors.label));
        });
    }
    if let Some(url) = &detail.homepage_url {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(UI_TEXT.label_homepage)
                    .strong()
                    .color(UI_CONFIG.colors.heading),
            );
            // Opens in the system browser.
            ui.hyperlink(url);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn detail(rank: Option<u32>) -> AssetDetail {
        AssetDetail {
            name: "Bitcoin".to_string(),
            symbol: "BTC".to_string(),
            current_price_usd: 69702.3,
            market_cap_usd: 1_370_000_000_000.0,
            high_24h_usd: 70500.0,
            low_24h_usd: 68100.5,
            total_volume_usd: 31_000_000_000.0,
            market_cap_rank: rank,
            homepage_url: Some("https://bitcoin.org".to_string()),
        }
    }

    #[test]
    fn rows_are_ordered_and_currency_formatted() {
        let rows = build_detail_rows(&detail(Some(1)));
        let labels: Vec<&str> = rows.iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            vec![
                "Current Price:",
                "Market Cap:",
                "24h High:",
                "24h Low:",
                "Total Volume:",
                "Coin Rank:"
            ]
        );
        assert_eq!(rows[0].value, "$69,702.3");
        assert_eq!(rows[1].value, "$1,370,000,000,000");
        assert_eq!(rows[3].value, "$68,100.5");
        assert_eq!(rows[5].value, "1");
    }

    #[test]
    fn missing_rank_shows_a_dash() {
        let rows = build_detail_rows(&detail(None));
        assert_eq!(rows[5].value, "-");
    }
}
