use eframe::egui;
use serde::{Deserialize, Serialize};
use staffing::EmployeeStatus;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum ThemePreset {
    #[default]
    Light,
    Dark,
}

impl ThemePreset {
    pub const ALL: [ThemePreset; 2] = [ThemePreset::Light, ThemePreset::Dark];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "light" => Some(ThemePreset::Light),
            "dark" => Some(ThemePreset::Dark),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemePreset::Light => "Light",
            ThemePreset::Dark => "Dark",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub app_background: egui::Color32,
    pub pool_fill: egui::Color32,
    pub pool_body_fill: egui::Color32,
    pub production_border: egui::Color32,
    pub unassigned_border: egui::Color32,
    pub card_fill: egui::Color32,
    pub card_stroke: egui::Color32,
    pub card_stroke_hover: egui::Color32,
    pub card_shadow: egui::Color32,
    pub placeholder_stroke: egui::Color32,
    pub text_primary: egui::Color32,
    pub text_secondary: egui::Color32,
    pub text_hint: egui::Color32,
    pub over_capacity: egui::Color32,
    pub sidebar_background: egui::Color32,
    pub sidebar_text: egui::Color32,
    pub sidebar_item_active: egui::Color32,
    pub header_background: egui::Color32,
}

pub fn palette(preset: ThemePreset) -> Palette {
    match preset {
        ThemePreset::Light => Palette {
            app_background: egui::Color32::from_rgb(243, 244, 246),
            pool_fill: egui::Color32::WHITE,
            pool_body_fill: egui::Color32::from_rgb(249, 250, 251),
            production_border: egui::Color32::from_rgb(147, 197, 253),
            unassigned_border: egui::Color32::from_rgb(209, 213, 219),
            card_fill: egui::Color32::WHITE,
            card_stroke: egui::Color32::from_rgb(229, 231, 235),
            card_stroke_hover: egui::Color32::from_rgb(55, 65, 81),
            card_shadow: egui::Color32::from_rgb(229, 231, 235),
            placeholder_stroke: egui::Color32::from_rgb(209, 213, 219),
            text_primary: egui::Color32::from_rgb(31, 41, 55),
            text_secondary: egui::Color32::from_rgb(75, 85, 99),
            text_hint: egui::Color32::from_rgb(156, 163, 175),
            over_capacity: egui::Color32::from_rgb(220, 38, 38),
            sidebar_background: egui::Color32::from_rgb(17, 24, 39),
            sidebar_text: egui::Color32::WHITE,
            sidebar_item_active: egui::Color32::from_rgb(31, 41, 55),
            header_background: egui::Color32::WHITE,
        },
        ThemePreset::Dark => Palette {
            app_background: egui::Color32::from_rgb(24, 24, 28),
            pool_fill: egui::Color32::from_rgb(34, 34, 40),
            pool_body_fill: egui::Color32::from_rgb(28, 28, 33),
            production_border: egui::Color32::from_rgb(59, 130, 246),
            unassigned_border: egui::Color32::from_rgb(75, 85, 99),
            card_fill: egui::Color32::from_rgb(44, 44, 52),
            card_stroke: egui::Color32::from_rgb(60, 60, 70),
            card_stroke_hover: egui::Color32::from_rgb(229, 231, 235),
            card_shadow: egui::Color32::from_rgb(18, 18, 22),
            placeholder_stroke: egui::Color32::from_rgb(75, 85, 99),
            text_primary: egui::Color32::from_rgb(243, 244, 246),
            text_secondary: egui::Color32::from_rgb(156, 163, 175),
            text_hint: egui::Color32::from_rgb(107, 114, 128),
            over_capacity: egui::Color32::from_rgb(248, 113, 113),
            sidebar_background: egui::Color32::from_rgb(12, 12, 16),
            sidebar_text: egui::Color32::from_rgb(243, 244, 246),
            sidebar_item_active: egui::Color32::from_rgb(38, 38, 46),
            header_background: egui::Color32::from_rgb(30, 30, 36),
        },
    }
}

pub fn status_color(status: EmployeeStatus) -> egui::Color32 {
    match status {
        EmployeeStatus::Active => egui::Color32::from_rgb(34, 197, 94),
        EmployeeStatus::Absent => egui::Color32::from_rgb(156, 163, 175),
        EmployeeStatus::Busy => egui::Color32::from_rgb(239, 68, 68),
    }
}

pub fn visuals_for_theme(preset: ThemePreset) -> egui::Visuals {
    let palette = palette(preset);
    let mut visuals = match preset {
        ThemePreset::Light => egui::Visuals::light(),
        ThemePreset::Dark => egui::Visuals::dark(),
    };
    visuals.panel_fill = palette.app_background;
    visuals.window_fill = palette.pool_fill;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.window_corner_radius = egui::CornerRadius::same(10);
    visuals.menu_corner_radius = egui::CornerRadius::same(8);
    visuals
}
