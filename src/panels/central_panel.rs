use eframe::egui;

use crate::FloorPlanApp;
use crate::renderer::plan_draw_commands;
use crate::scene::project_scene;
use crate::state::{EditorAction, ViewMode};
use crate::util::time::current_time_secs;

pub fn central_panel(app: &mut FloorPlanApp, ctx: &egui::Context) {
    let view_mode = app.editor.state().view_mode();
    egui::CentralPanel::default().show(ctx, |ui| match view_mode {
        ViewMode::Plan2D => plan_canvas(app, ui),
        ViewMode::Preview3D => plan_preview(app, ui),
    });
}

fn plan_canvas(app: &mut FloorPlanApp, ui: &mut egui::Ui) {
    let [width, height] = app.editor.config().canvas_size;

    egui::ScrollArea::both().show(ui, |ui| {
        let (response, painter) = ui.allocate_painter(egui::vec2(width, height), egui::Sense::click());
        let origin = response.rect.min;

        if let Some(hover) = response.hover_pos() {
            let local = (hover - origin).to_pos2();
            if app.editor.state().pointer() != Some(local) {
                app.dispatch(EditorAction::PointerMove(local));
            }
        }
        if response.clicked() {
            if let Some(click) = response.interact_pointer_pos() {
                app.dispatch(EditorAction::PointerClick((click - origin).to_pos2()));
            }
        }

        let commands = plan_draw_commands(app.editor.state(), app.editor.config());
        app.plan_renderer.paint(&painter, origin, &commands);

        if app.editor.state().active_tool().is_some() {
            response.on_hover_cursor(egui::CursorIcon::Crosshair);
        }
    });
}

fn plan_preview(app: &mut FloorPlanApp, ui: &mut egui::Ui) {
    let primitives = project_scene(app.editor.state().elements(), app.editor.config());
    if primitives.is_empty() {
        ui.weak("Nothing to show yet: place some walls, doors or windows in the 2D plan.");
    }

    let height = ui.available_height();
    let now = current_time_secs();
    let preview = &mut app.preview;
    preview.boundary.show(ui, |ui| {
        let angle = preview.spin.tick(now);
        preview.viewport.show(ui, height, &primitives, angle)?;
        Ok(())
    });
}
