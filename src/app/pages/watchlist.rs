// app/pages/watchlist.rs

use eframe::egui::Context;

use crate::app::{App, pages::PageView, state::{AppState, WatchlistState}};

impl PageView for WatchlistState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState {
        app.tick_watchlist_page(ctx, self)
    }
}
