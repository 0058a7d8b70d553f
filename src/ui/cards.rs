use eframe::egui::{Image, RichText, ScrollArea, Ui, vec2};

use crate::{
    models::AssetSummary,
    ui::{UI_CONFIG, UI_TEXT},
};

/// Which watchlist affordance the cards carry. Mutually exclusive by
/// construction: an overview card can only add, a watchlist card only remove.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardMode {
    #[default]
    Overview,
    Watchlist,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchAction {
    Add,
    Remove,
}

/// Everything one card displays, precomputed so rendering stays dumb.
#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub price: String,
    pub change_label: String,
    pub gain: bool,
    pub image_url: String,
    pub watch_action: WatchAction,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ListView {
    Empty,
    Cards(Vec<CardView>),
}

/// Pure mapping from normalized records to the list view-model; the egui
/// adapter below just draws what this returns.
pub fn build_list_view(assets: &[AssetSummary], mode: CardMode) -> ListView {
    if assets.is_empty() {
        return ListView::Empty;
    }
    let watch_action = match mode {
        CardMode::Overview => WatchAction::Add,
        CardMode::Watchlist => WatchAction::Remove,
    };
    ListView::Cards(
        assets
            .iter()
            .map(|asset| CardView {
                id: asset.id.clone(),
                name: asset.name.clone(),
                symbol: asset.symbol.clone(),
                price: asset.price.clone(),
                change_label: format!("{}{}", asset.change_pct_24h, UI_TEXT.change_suffix),
                gain: asset.is_gain(),
                image_url: asset.image_url.clone(),
                watch_action,
            })
            .collect(),
    )
}

/// What the user did to a card this frame.
#[derive(Clone, Debug, PartialEq)]
pub enum CardEvent {
    ShowDetail(String),
    Watch(WatchAction, String),
}

pub fn render_cards(ui: &mut Ui, view: &ListView) -> Option<CardEvent> {
    match view {
        ListView::Empty => {
            ui.label(RichText::new(UI_TEXT.no_data).color(UI_CONFIG.colors.muted));
            None
        }
        ListView::Cards(cards) => {
            let mut event = None;
            ScrollArea::vertical().show(ui, |ui| {
                for card in cards {
                    if let Some(e) = render_card(ui, card) {
                        event = Some(e);
                    }
                    ui.add_space(10.0);
                }
            });
            event
        }
    }
}

fn render_card(ui: &mut Ui, card: &CardView) -> Option<CardEvent> {
    let mut event = None;
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.add(Image::from_uri(&card.image_url).fit_to_exact_size(vec2(40.0, 40.0)));
            ui.vertical(|ui| {
                ui.label(
                    RichText::new(&card.name)
                        .strong()
                        .color(UI_CONFIG.colors.heading),
                );
                ui.label(
                    RichText::new(&card.symbol)
                        .small()
                        .color(UI_CONFIG.colors.muted),
                );
            });
        });

        ui.add_space(6.0);
        ui.label(
            RichText::new(&card.price)
                .strong()
                .size(18.0)
                .color(UI_CONFIG.colors.heading),
        );
        let change_color = if card.gain {
            UI_CONFIG.colors.gain
        } else {
            UI_CONFIG.colors.loss
        };
        ui.label(RichText::new(&card.change_label).color(change_color));

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if ui
                .link(RichText::new(UI_TEXT.view_details).color(UI_CONFIG.colors.accent))
                .clicked()
            {
                event = Some(CardEvent::ShowDetail(card.id.clone()));
            }
            let (text, color) = match card.watch_action {
                WatchAction::Add => (UI_TEXT.add_to_watchlist, UI_CONFIG.colors.accent),
                WatchAction::Remove => (UI_TEXT.remove_from_watchlist, UI_CONFIG.colors.loss),
            };
            if ui.link(RichText::new(text).color(color)).clicked() {
                event = Some(CardEvent::Watch(card.watch_action, card.id.clone()));
            }
        });
    });
    event
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{InMemoryWatchlist, MarketCoin, WatchlistStore};
    use pretty_assertions::assert_eq;

    fn summary(id: &str, change: &str) -> AssetSummary {
        AssetSummary {
            id: id.to_string(),
            name: id.to_string(),
            symbol: id[..3].to_uppercase(),
            price: "$1".to_string(),
            change_pct_24h: change.to_string(),
            image_url: String::new(),
        }
    }

    #[test]
    fn no_assets_render_the_empty_placeholder() {
        assert_eq!(build_list_view(&[], CardMode::Overview), ListView::Empty);
        assert_eq!(build_list_view(&[], CardMode::Watchlist), ListView::Empty);
    }

    #[test]
    fn overview_cards_carry_only_the_add_affordance() {
        let assets = vec![summary("bitcoin", "1.00"), summary("ethereum", "-2.00")];
        let ListView::Cards(cards) = build_list_view(&assets, CardMode::Overview) else {
            panic!("expected cards");
        };
        assert!(cards.iter().all(|c| c.watch_action == WatchAction::Add));
    }

    #[test]
    fn watchlist_scenario_two_cards_each_removable_in_request_order() {
        let store = InMemoryWatchlist::with_ids(&["bitcoin", "ethereum"]);
        // What fetch_by_ids would hand back for those ids, in request order.
        let assets: Vec<AssetSummary> = store
            .ids()
            .into_iter()
            .map(|id| {
                AssetSummary::from(MarketCoin {
                    id: id.clone(),
                    name: id.clone(),
                    symbol: id[..3].to_string(),
                    image: String::new(),
                    current_price: 1.0,
                    price_change_percentage_24h: Some(0.5),
                })
            })
            .collect();

        let ListView::Cards(cards) = build_list_view(&assets, CardMode::Watchlist) else {
            panic!("expected cards");
        };
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].id, "bitcoin");
        assert_eq!(cards[1].id, "ethereum");
        assert!(cards.iter().all(|c| c.watch_action == WatchAction::Remove));
    }

    #[test]
    fn zero_change_gets_the_gain_color() {
        let assets = vec![summary("bitcoin", "0")];
        let ListView::Cards(cards) = build_list_view(&assets, CardMode::Overview) else {
            panic!("expected cards");
        };
        assert!(cards[0].gain);
        assert_eq!(cards[0].change_label, "0% (24h)");
    }

    #[test]
    fn negative_change_gets_the_loss_color() {
        let assets = vec![summary("bitcoin", "-0.01")];
        let ListView::Cards(cards) = build_list_view(&assets, CardMode::Overview) else {
            panic!("expected cards");
        };
        assert!(!cards[0].gain);
    }
}
