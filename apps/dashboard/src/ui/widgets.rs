use eframe::egui;
use staffing::{Employee, EmployeeStatus};

use crate::ui::{
    labels::Labels,
    theme::{status_color, Palette},
};

const CARD_RADIUS: u8 = 12;

pub fn status_dot(ui: &mut egui::Ui, status: EmployeeStatus, radius: f32) {
    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(radius * 2.0, radius * 2.0), egui::Sense::hover());
    ui.painter()
        .circle_filled(rect.center(), radius, status_color(status));
}

/// Legend entry: colored dot followed by its label.
pub fn status_legend_item(
    ui: &mut egui::Ui,
    status: EmployeeStatus,
    label: &str,
    color: egui::Color32,
) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 6.0;
        status_dot(ui, status, 5.0);
        ui.label(egui::RichText::new(label).size(13.0).color(color));
    });
}

pub struct CardLook {
    pub size: egui::Vec2,
    pub drop_highlight: bool,
}

pub fn employee_card(
    ui: &mut egui::Ui,
    employee: &Employee,
    look: CardLook,
    palette: &Palette,
    labels: &Labels,
) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(look.size, egui::Sense::hover());
    let radius = egui::CornerRadius::same(CARD_RADIUS);
    let painter = ui.painter();

    painter.rect_filled(rect.translate(egui::vec2(4.0, 4.0)), radius, palette.card_shadow);
    painter.rect_filled(rect, radius, palette.card_fill);
    let stroke = if look.drop_highlight {
        egui::Stroke::new(3.0, palette.card_stroke_hover)
    } else {
        egui::Stroke::new(2.0, palette.card_stroke)
    };
    painter.rect_stroke(rect, radius, stroke, egui::StrokeKind::Inside);

    let dot_center = egui::pos2(rect.right() - 16.0, rect.top() + 16.0);
    let dot_color = status_color(employee.status);
    painter.circle_filled(dot_center, 5.0, dot_color);
    if employee.status == EmployeeStatus::Busy {
        painter.circle_stroke(dot_center, 8.5, egui::Stroke::new(1.5, dot_color));
    }

    let center_x = rect.center().x;
    let scale = (rect.height() / 120.0).clamp(0.7, 1.2);
    painter.text(
        egui::pos2(center_x, rect.top() + rect.height() * 0.36),
        egui::Align2::CENTER_CENTER,
        &employee.emoji,
        egui::FontId::proportional(36.0 * scale),
        palette.text_primary,
    );
    painter.text(
        egui::pos2(center_x, rect.top() + rect.height() * 0.68),
        egui::Align2::CENTER_CENTER,
        &employee.name,
        egui::FontId::proportional(15.0 * scale),
        palette.text_primary,
    );
    painter.text(
        egui::pos2(center_x, rect.top() + rect.height() * 0.84),
        egui::Align2::CENTER_CENTER,
        &employee.position,
        egui::FontId::proportional(11.5 * scale),
        palette.text_secondary,
    );

    response.on_hover_text(labels.status(employee.status))
}

/// Faded stand-in painted over the slot of the card currently being dragged.
pub fn dragged_card_ghost(ui: &egui::Ui, rect: egui::Rect, palette: &Palette) {
    let radius = egui::CornerRadius::same(CARD_RADIUS);
    let ghost = rect.shrink(rect.width() * 0.05);
    ui.painter()
        .rect_filled(ghost, radius, palette.card_fill.gamma_multiply(0.3));
    ui.painter().rect_stroke(
        ghost,
        radius,
        egui::Stroke::new(1.0, palette.card_stroke.gamma_multiply(0.5)),
        egui::StrokeKind::Inside,
    );
}

pub fn placeholder_slot(ui: &mut egui::Ui, size: egui::Vec2, palette: &Palette) {
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let stroke = egui::Stroke::new(2.0, palette.placeholder_stroke);
    let outline = [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
        rect.left_top(),
    ];
    ui.painter()
        .extend(egui::Shape::dashed_line(&outline, stroke, 6.0, 4.0));
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "+",
        egui::FontId::proportional(28.0),
        palette.placeholder_stroke,
    );
}
