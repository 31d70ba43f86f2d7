use eframe::egui;

use crate::FloorPlanApp;
use crate::app::status_hint;
use crate::components::ToolButton;
use crate::state::{EditorAction, Tool, ViewMode};

pub fn tools_panel(app: &mut FloorPlanApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let active_tool = app.editor.state().active_tool();
            for tool in Tool::ALL {
                let selected = active_tool == Some(tool);
                if ToolButton::new(tool, selected).show(ui).clicked() {
                    log::info!("Tool selected from UI: {}", tool.label());
                    app.select_tool(tool);
                }
                ui.add_space(4.0);
            }

            ui.separator();

            let state = app.editor.state();
            let has_selection = state.selected_id().is_some();
            let is_empty = state.is_empty();
            ui.horizontal(|ui| {
                if ui.add_enabled(has_selection, egui::Button::new("Delete Selected")).clicked() {
                    app.dispatch(EditorAction::DeleteSelected);
                }
                if ui.add_enabled(!is_empty, egui::Button::new("Clear All")).clicked() {
                    app.request_clear_all();
                }
            });

            ui.separator();

            let view_mode = app.editor.state().view_mode();
            ui.horizontal(|ui| {
                for (mode, label) in [(ViewMode::Plan2D, "2D Plan"), (ViewMode::Preview3D, "3D Preview")] {
                    if ui.selectable_label(view_mode == mode, label).clicked() && view_mode != mode {
                        app.dispatch(EditorAction::SetViewMode(mode));
                    }
                }
            });

            ui.separator();

            let state = app.editor.state();
            ui.label(status_hint(state.active_tool(), state.is_drawing_wall()));
            ui.label(format!("Elements: {}", state.elements().len()));
            if let Some(element) = state.selected_element() {
                ui.label(format!(
                    "Selected: {} at ({:.1}, {:.1})",
                    element.kind().name(),
                    element.position().x,
                    element.position().y
                ));
            }

            ui.separator();

            egui::CollapsingHeader::new("Recent events")
                .default_open(false)
                .show(ui, |ui| {
                    let events = app.recent_events.snapshot();
                    if events.is_empty() {
                        ui.weak("Nothing yet");
                    }
                    for event in events.iter().rev() {
                        ui.label(event.to_string());
                    }
                });
        });
}
