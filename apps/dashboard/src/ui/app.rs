use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use serde::{Deserialize, Serialize};

use crate::config::StartupConfig;
use crate::controller::events::{frame_drag_events, FrameDragInput, UiEvent};
use crate::controller::orchestration::{dispatch_ui_event, open_roster_dialog};
use crate::controller::reducer::{DashboardState, Reduction, RosterSource};
use crate::ui::{
    labels::{Labels, Locale},
    panels::{legend, pool_panel, sidebar, CardPayload, PoolView},
    theme::{palette, visuals_for_theme, Palette, ThemePreset},
};

pub const SETTINGS_STORAGE_KEY: &str = "dashboard.settings";

/// UI preferences kept across sessions. Roster data is never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedDashboardSettings {
    pub theme: ThemePreset,
    pub locale: Locale,
}

pub struct DashboardApp {
    ui_tx: Sender<UiEvent>,
    ui_rx: Receiver<UiEvent>,

    state: DashboardState,

    theme: ThemePreset,
    applied_theme: Option<ThemePreset>,
    locale: Locale,
    settings_open: bool,
}

impl DashboardApp {
    pub fn new(
        ui_tx: Sender<UiEvent>,
        ui_rx: Receiver<UiEvent>,
        state: DashboardState,
        startup: &StartupConfig,
        persisted: Option<PersistedDashboardSettings>,
    ) -> Self {
        let persisted = persisted.unwrap_or_default();
        Self {
            ui_tx,
            ui_rx,
            state,
            theme: startup.theme.unwrap_or(persisted.theme),
            applied_theme: None,
            locale: startup.locale.unwrap_or(persisted.locale),
            settings_open: false,
        }
    }

    fn process_ui_events(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.ui_rx.try_recv() {
            let event_name = event.name();
            let reduction = self.state.reduce(event);
            if reduction == Reduction::RosterReplaced {
                let summary = self.state.summary();
                tracing::debug!(
                    event = event_name,
                    total = summary.total,
                    active = summary.active,
                    "roster updated"
                );
            }
            changed |= reduction != Reduction::Unchanged;
        }
        changed
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.applied_theme == Some(self.theme) {
            return;
        }
        ctx.set_visuals(visuals_for_theme(self.theme));
        self.applied_theme = Some(self.theme);
    }

    fn labels(&self) -> &'static Labels {
        self.locale.labels()
    }

    fn show_sidebar(&self, ctx: &egui::Context, palette: &Palette) {
        egui::SidePanel::left("sidebar")
            .exact_width(220.0)
            .resizable(false)
            .frame(
                egui::Frame::NONE
                    .fill(palette.sidebar_background)
                    .inner_margin(egui::Margin::same(20)),
            )
            .show(ctx, |ui| sidebar(ui, palette, self.labels()));
    }

    fn show_header(&mut self, ctx: &egui::Context, palette: &Palette) {
        let labels = self.labels();
        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::NONE
                    .fill(palette.header_background)
                    .inner_margin(egui::Margin::symmetric(24, 14)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(labels.app_title)
                            .size(20.0)
                            .strong()
                            .color(palette.text_primary),
                    );
                    if let RosterSource::File(path) = self.state.source() {
                        let name = path
                            .file_name()
                            .map(|name| name.to_string_lossy().into_owned())
                            .unwrap_or_else(|| path.display().to_string());
                        ui.label(egui::RichText::new(name).size(12.0).color(palette.text_hint));
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button(labels.settings).clicked() {
                            self.settings_open = !self.settings_open;
                        }
                        if ui.button(labels.open_roster).clicked() {
                            open_roster_dialog(&self.ui_tx);
                        }
                        if ui.button(labels.reset).clicked() {
                            dispatch_ui_event(&self.ui_tx, UiEvent::ResetRoster);
                        }
                    });
                });
            });
    }

    fn show_footer(&self, ctx: &egui::Context, palette: &Palette) {
        egui::TopBottomPanel::bottom("legend")
            .frame(
                egui::Frame::NONE
                    .fill(palette.pool_fill)
                    .inner_margin(egui::Margin::symmetric(24, 12)),
            )
            .show(ctx, |ui| legend(ui, self.state.summary(), palette, self.labels()));
    }

    fn show_status_banner(&self, ui: &mut egui::Ui) {
        let Some(banner) = self.state.banner() else {
            return;
        };
        egui::Frame::NONE
            .fill(egui::Color32::from_rgb(254, 226, 226))
            .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(248, 113, 113)))
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(12, 8))
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.label(
                        egui::RichText::new(banner.banner_text())
                            .color(egui::Color32::from_rgb(127, 29, 29)),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button(self.labels().dismiss).clicked() {
                            dispatch_ui_event(&self.ui_tx, UiEvent::DismissBanner);
                        }
                    });
                });
            });
        ui.add_space(12.0);
    }

    fn show_pools(&self, ctx: &egui::Context, palette: &Palette) -> FrameDragInput {
        let mut input = FrameDragInput::default();
        let labels = self.labels();
        let view = PoolView {
            drag: self.state.drag(),
            palette,
            labels,
        };

        egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .fill(palette.app_background)
                    .inner_margin(egui::Margin::same(28)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.show_status_banner(ui);

                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new(labels.app_title)
                                .size(28.0)
                                .strong()
                                .color(palette.text_primary),
                        );
                        ui.label(
                            egui::RichText::new(labels.subtitle)
                                .size(13.0)
                                .color(palette.text_secondary),
                        );
                    });
                    ui.add_space(24.0);

                    let pools = self.state.pools();
                    let (lines, holding): (Vec<_>, Vec<_>) =
                        pools.iter().partition(|pool| pool.is_production());

                    for pair in lines.chunks(2) {
                        ui.columns(2, |columns| {
                            for (column, pool) in columns.iter_mut().zip(pair) {
                                pool_panel(column, pool, &view, &mut input);
                            }
                        });
                        ui.add_space(20.0);
                    }
                    for pool in holding {
                        pool_panel(ui, pool, &view, &mut input);
                        ui.add_space(20.0);
                    }
                });
            });

        input
    }

    fn show_settings_window(&mut self, ctx: &egui::Context) {
        if !self.settings_open {
            return;
        }
        let labels = self.labels();
        let mut open = self.settings_open;
        egui::Window::new(labels.settings)
            .open(&mut open)
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                egui::ComboBox::from_label(labels.theme)
                    .selected_text(self.theme.label())
                    .show_ui(ui, |ui| {
                        for preset in ThemePreset::ALL {
                            ui.selectable_value(&mut self.theme, preset, preset.label());
                        }
                    });
                egui::ComboBox::from_label(labels.language)
                    .selected_text(self.locale.display_name())
                    .show_ui(ui, |ui| {
                        for locale in Locale::ALL {
                            ui.selectable_value(&mut self.locale, locale, locale.display_name());
                        }
                    });
            });
        self.settings_open = open;
    }

    fn emit_frame_drag_events(&self, ctx: &egui::Context, mut input: FrameDragInput) {
        input.carried = egui::DragAndDrop::payload::<CardPayload>(ctx)
            .map(|payload| payload.0.clone());
        input.released = ctx.input(|i| i.pointer.any_released());

        for event in frame_drag_events(self.state.drag(), &input) {
            dispatch_ui_event(&self.ui_tx, UiEvent::Drag(event));
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.apply_theme_if_needed(ctx);

        let palette = palette(self.theme);
        self.show_sidebar(ctx, &palette);
        self.show_header(ctx, &palette);
        self.show_footer(ctx, &palette);
        let input = self.show_pools(ctx, &palette);
        self.show_settings_window(ctx);

        self.emit_frame_drag_events(ctx, input);
        if self.process_ui_events() {
            ctx.request_repaint();
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedDashboardSettings {
            theme: self.theme,
            locale: self.locale,
        };
        if let Ok(serialized) = serde_json::to_string(&settings) {
            storage.set_string(SETTINGS_STORAGE_KEY, serialized);
        }
    }
}
