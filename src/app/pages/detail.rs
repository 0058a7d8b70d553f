// app/pages/detail.rs

use eframe::egui::Context;

use crate::app::{App, pages::PageView, state::{AppState, DetailState}};

impl PageView for DetailState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState {
        app.tick_detail_page(ctx, self)
    }
}
