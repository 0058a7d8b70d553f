use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub muted: Color32,
    pub gain: Color32,
    pub loss: Color32,
    pub accent: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub card: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_rgb(209, 213, 219),
        heading: Color32::WHITE,
        muted: Color32::from_rgb(107, 114, 128),
        gain: Color32::from_rgb(34, 197, 94),
        loss: Color32::from_rgb(239, 68, 68),
        accent: Color32::from_rgb(59, 130, 246),
        central_panel: Color32::from_rgb(17, 24, 39),
        side_panel: Color32::from_rgb(31, 41, 55),
        card: Color32::from_rgb(31, 41, 55),
    },
};

impl UiConfig {
    /// Frame for the top nav bar
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Frame for the bottom status bar (tighter vertical padding)
    pub fn bottom_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(8, 4),
            ..Default::default()
        }
    }

    /// Frame for the page body
    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(12),
            ..Default::default()
        }
    }

    /// Frame for one asset card
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(12),
            corner_radius: CornerRadius::same(8),
            ..Default::default()
        }
    }
}
