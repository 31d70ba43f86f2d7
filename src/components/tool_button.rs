use eframe::egui;

use crate::renderer::{ACCENT, ACCENT_DARK};
use crate::state::Tool;

/// A toolbar button showing a tool's icon and label, highlighted when active.
pub struct ToolButton {
    pub tool: Tool,
    pub selected: bool,
}

impl ToolButton {
    pub fn new(tool: Tool, selected: bool) -> Self {
        Self { tool, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(ui.available_width().max(96.0), 40.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                ACCENT
            } else if response.hovered() {
                egui::Color32::from_gray(235)
            } else {
                egui::Color32::WHITE
            };
            ui.painter().rect_filled(rect, 8.0, bg_color);

            let text_color = if self.selected {
                egui::Color32::WHITE
            } else {
                egui::Color32::from_gray(40)
            };
            let icon_pos = egui::pos2(rect.left() + 20.0, rect.center().y);
            ui.painter().text(
                icon_pos,
                egui::Align2::CENTER_CENTER,
                self.tool.icon(),
                egui::FontId::proportional(20.0),
                text_color,
            );
            ui.painter().text(
                egui::pos2(rect.left() + 40.0, rect.center().y),
                egui::Align2::LEFT_CENTER,
                self.tool.label(),
                egui::FontId::proportional(15.0),
                text_color,
            );

            let border = if self.selected {
                egui::Stroke::new(2.0, ACCENT_DARK)
            } else {
                egui::Stroke::new(1.0, egui::Color32::from_gray(210))
            };
            ui.painter().rect_stroke(rect, 8.0, border);
        }

        response.on_hover_text(format!("{} tool", self.tool.label()))
    }
}
