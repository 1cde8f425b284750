//! UI layer for the dashboard: app shell, panels, widgets, theme, and labels.

pub mod app;
pub mod labels;
pub mod panels;
pub mod theme;
pub mod widgets;

pub use app::{DashboardApp, PersistedDashboardSettings, SETTINGS_STORAGE_KEY};
