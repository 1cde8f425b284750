//! Pool panels and the fixed dashboard chrome (sidebar, legend).

use eframe::egui;
use staffing::{DragSession, DragSource, DropTarget, EmployeeStatus, Pool, RosterSummary};

use crate::{
    controller::events::FrameDragInput,
    ui::{
        labels::Labels,
        theme::{status_color, Palette},
        widgets::{dragged_card_ghost, employee_card, placeholder_slot, status_legend_item, CardLook},
    },
};

const CARD_GAP: f32 = 14.0;
const POOL_BODY_MIN_HEIGHT: f32 = 200.0;

/// Drag-and-drop payload carried by egui while a card is held.
#[derive(Debug, Clone)]
pub struct CardPayload(pub DragSource);

pub struct PoolView<'a> {
    pub drag: &'a DragSession,
    pub palette: &'a Palette,
    pub labels: &'a Labels,
}

fn columns_for(pool: &Pool) -> usize {
    if pool.is_production() {
        3
    } else {
        4
    }
}

fn capacity_text(pool: &Pool, labels: &Labels) -> String {
    match pool.max_capacity {
        Some(max) => format!("{} / {max}", pool.len()),
        None => labels.headcount(pool.len()),
    }
}

pub fn pool_panel(ui: &mut egui::Ui, pool: &Pool, view: &PoolView<'_>, input: &mut FrameDragInput) {
    let palette = view.palette;
    let border = if view.drag.hovered_pool() == Some(&pool.id) {
        palette.card_stroke_hover
    } else if pool.is_production() {
        palette.production_border
    } else {
        palette.unassigned_border
    };

    let frame = egui::Frame::NONE
        .fill(palette.pool_fill)
        .stroke(egui::Stroke::new(2.0, border))
        .corner_radius(12.0)
        .inner_margin(egui::Margin::same(20));

    let shown = frame.show(ui, |ui| {
        ui.set_width(ui.available_width());
        pool_header(ui, pool, view);
        ui.add_space(12.0);
        pool_body(ui, pool, view, input);
    });

    // Cards inside the body are checked first and take the payload, so a
    // release here only counts as a body drop when it missed every card.
    let response = shown.response;
    if response.dnd_release_payload::<CardPayload>().is_some() {
        input.dropped = Some(DropTarget::PoolBody {
            pool_id: pool.id.clone(),
        });
    } else if input.hovered.is_none() && response.dnd_hover_payload::<CardPayload>().is_some() {
        input.hovered = Some(DropTarget::PoolBody {
            pool_id: pool.id.clone(),
        });
    }
}

fn pool_header(ui: &mut egui::Ui, pool: &Pool, view: &PoolView<'_>) {
    let palette = view.palette;
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(&pool.name)
                .strong()
                .size(18.0)
                .color(palette.text_primary),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let capacity_color = if pool.is_over_capacity() {
                palette.over_capacity
            } else {
                palette.text_secondary
            };
            ui.label(
                egui::RichText::new(capacity_text(pool, view.labels))
                    .size(14.0)
                    .strong()
                    .color(capacity_color),
            );
            ui.add_space(10.0);

            // Right-to-left: the last status ends up leftmost.
            for status in EmployeeStatus::ALL.iter().rev() {
                let count = pool.status_count(*status);
                if count == 0 {
                    continue;
                }
                ui.label(
                    egui::RichText::new(count.to_string())
                        .size(12.0)
                        .color(palette.text_secondary),
                );
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(8.0, 8.0), egui::Sense::hover());
                ui.painter()
                    .circle_filled(rect.center(), 4.0, status_color(*status));
            }
        });
    });
}

fn pool_body(ui: &mut egui::Ui, pool: &Pool, view: &PoolView<'_>, input: &mut FrameDragInput) {
    let palette = view.palette;
    let mut body = egui::Frame::NONE
        .fill(palette.pool_body_fill)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(16));
    if pool.is_empty() {
        body = body.stroke(egui::Stroke::new(2.0, palette.card_stroke));
    }

    body.show(ui, |ui| {
        ui.set_min_height(POOL_BODY_MIN_HEIGHT);
        ui.set_width(ui.available_width());

        let columns = columns_for(pool);
        let slots = pool.len() + pool.open_slots();
        if slots == 0 {
            ui.centered_and_justified(|ui| {
                ui.label(egui::RichText::new(view.labels.empty_pool_hint).color(palette.text_hint));
            });
            return;
        }

        let width = ((ui.available_width() - CARD_GAP * (columns - 1) as f32) / columns as f32)
            .max(90.0);
        let size = egui::vec2(width, (width * 2.0 / 3.0).clamp(96.0, 150.0));
        let hovered_slot = view.drag.hovered_slot(&pool.id);

        ui.spacing_mut().item_spacing.y = CARD_GAP;
        for row_start in (0..slots).step_by(columns) {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = CARD_GAP;
                for slot in row_start..(row_start + columns).min(slots) {
                    match pool.employees.get(slot) {
                        Some(employee) => {
                            card_slot(ui, pool, slot, employee, size, hovered_slot, view, input)
                        }
                        None => placeholder_slot(ui, size, palette),
                    }
                }
            });
        }
    });
}

#[allow(clippy::too_many_arguments)]
fn card_slot(
    ui: &mut egui::Ui,
    pool: &Pool,
    index: usize,
    employee: &staffing::Employee,
    size: egui::Vec2,
    hovered_slot: Option<usize>,
    view: &PoolView<'_>,
    input: &mut FrameDragInput,
) {
    let source = DragSource {
        pool_id: pool.id.clone(),
        index,
    };
    let id = egui::Id::new(("employee-card", employee.id));
    let dragged = view.drag.is_dragging(&pool.id, index);

    let shown = ui.dnd_drag_source(id, CardPayload(source), |ui| {
        employee_card(
            ui,
            employee,
            CardLook {
                size,
                drop_highlight: hovered_slot == Some(index) && !dragged,
            },
            view.palette,
            view.labels,
        )
    });

    let response = shown.response;
    if dragged {
        dragged_card_ghost(ui, response.rect, view.palette);
    }

    let slot = DropTarget::Slot {
        pool_id: pool.id.clone(),
        index,
    };
    if response.dnd_release_payload::<CardPayload>().is_some() {
        input.dropped = Some(slot);
    } else if response.dnd_hover_payload::<CardPayload>().is_some() {
        input.hovered = Some(slot);
    }
}

pub fn sidebar(ui: &mut egui::Ui, palette: &Palette, labels: &Labels) {
    ui.add_space(8.0);
    ui.label(
        egui::RichText::new(labels.brand)
            .size(24.0)
            .strong()
            .color(palette.sidebar_text),
    );
    ui.add_space(28.0);

    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 38.0),
        egui::Sense::hover(),
    );
    ui.painter()
        .rect_filled(rect, egui::CornerRadius::same(8), palette.sidebar_item_active);
    ui.painter().text(
        egui::pos2(rect.left() + 16.0, rect.center().y),
        egui::Align2::LEFT_CENTER,
        labels.nav_dashboard,
        egui::FontId::proportional(15.0),
        palette.sidebar_text,
    );
}

pub fn legend(ui: &mut egui::Ui, summary: RosterSummary, palette: &Palette, labels: &Labels) {
    ui.horizontal_centered(|ui| {
        ui.spacing_mut().item_spacing.x = 20.0;
        for status in EmployeeStatus::ALL {
            status_legend_item(ui, status, labels.status(status), palette.text_secondary);
        }
        ui.separator();
        ui.label(
            egui::RichText::new(format!("{}: {}", labels.total, summary.total))
                .size(13.0)
                .color(palette.text_secondary),
        );
        ui.label(
            egui::RichText::new(format!("{}: {}", labels.on_duty, summary.active))
                .size(13.0)
                .color(palette.text_secondary),
        );
    });
}
