use eframe::egui::Context;

use crate::app::App;
use crate::app::state::AppState;

pub(crate) trait PageView {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState;
}
