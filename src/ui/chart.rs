use {
    eframe::egui::Ui,
    egui_plot::{Axis, AxisHints, GridMark, Line, Plot, PlotPoints, Points},
};

use crate::{models::PriceSeries, ui::UI_CONFIG, utils::format_usd};

/// Line chart of the trailing price window: filled area under the curve, no
/// legend, hover tooltip showing the grouped currency value. Points are
/// plotted against their index; the X axis substitutes the "D/M" labels.
pub fn render_price_chart(ui: &mut Ui, series: &PriceSeries) {
    if series.is_empty() {
        return;
    }

    let chart_points: Vec<[f64; 2]> = series
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| [i as f64, p.price_usd])
        .collect();

    let labels: Vec<String> = series
        .points
        .iter()
        .map(|p| p.date_label.clone())
        .collect();

    let x_axis = AxisHints::new(Axis::X)
        .label("Date")
        .formatter(move |mark, _range| {
            if mark.value < -0.5 {
                return String::new();
            }
            labels
                .get(mark.value.round() as usize)
                .cloned()
                .unwrap_or_default()
        });
    let y_axis = AxisHints::new(Axis::Y).label("Price (USD)");

    Plot::new("price_chart")
        .custom_x_axes(vec![x_axis])
        .custom_y_axes(vec![y_axis])
        .label_formatter(|_name, point| format_usd(point.y))
        .x_grid_spacer(|input| {
            // One mark per sample; fractional marks would repeat labels.
            let (min, max) = input.bounds;
            let mut marks = Vec::new();
            for i in (min.ceil().max(0.0) as i64)..=(max.floor() as i64) {
                marks.push(GridMark {
                    value: i as f64,
                    step_size: 1.0,
                });
            }
            marks
        })
        .allow_double_click_reset(false)
        .allow_scroll(false)
        .allow_drag(false)
        .allow_zoom(false)
        .height(260.0)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new("", PlotPoints::new(chart_points.clone()))
                    .color(UI_CONFIG.colors.accent)
                    .width(2.0)
                    .fill(0.0),
            );
            plot_ui.points(
                Points::new("", PlotPoints::new(chart_points))
                    .color(UI_CONFIG.colors.accent)
                    .radius(3.0),
            );
        });
}
