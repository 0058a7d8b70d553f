// app/pages/overview.rs

use eframe::egui::Context;

use crate::app::{App, pages::PageView, state::{AppState, OverviewState}};

impl PageView for OverviewState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState {
        app.tick_overview_page(ctx, self)
    }
}
