use eframe::egui;

use crate::FloorPlanApp;
use crate::renderer::ACCENT;
use crate::showcase::WALL_PRESETS;
use crate::util::time::current_time_secs;

const SWATCH_SIZE: f32 = 36.0;

pub fn showcase_panel(app: &mut FloorPlanApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Wall Color");
        wall_color_picker(app, ui);
        ui.add_space(12.0);

        let viewer = &mut app.showcase;
        let loaded = viewer.primitives();
        let height = (ui.available_width() * 9.0 / 16.0).min(ui.available_height());
        let now = current_time_secs();

        let retry = viewer.boundary.show(ui, |ui| {
            match loaded? {
                Some(primitives) => {
                    let angle = viewer.spin.tick(now);
                    viewer.viewport.show(ui, height, &primitives, angle)?;
                }
                None => {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Loading 3D model...");
                    });
                }
            }
            Ok(())
        });

        if retry {
            viewer.retry();
        }
    });
}

fn wall_color_picker(app: &mut FloorPlanApp, ui: &mut egui::Ui) {
    let current = app.showcase.wall_color();
    ui.horizontal_wrapped(|ui| {
        for (name, color) in WALL_PRESETS {
            let (rect, response) = ui.allocate_exact_size(egui::vec2(SWATCH_SIZE, SWATCH_SIZE), egui::Sense::click());
            let selected = current == color;
            let stroke = if selected {
                egui::Stroke::new(3.0, ACCENT)
            } else {
                egui::Stroke::new(1.0, egui::Color32::from_black_alpha(25))
            };
            ui.painter().rect_filled(rect, 8.0, color);
            ui.painter().rect_stroke(rect, 8.0, stroke);
            if response.on_hover_text(name).clicked() {
                app.showcase.set_wall_color(color);
            }
        }

        ui.add_space(8.0);
        let mut custom = current;
        if ui.color_edit_button_srgba(&mut custom).changed() {
            app.showcase.set_wall_color(custom);
        }
        ui.label("Custom");
    });
}
