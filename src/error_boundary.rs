use eframe::egui;

use crate::error::RenderError;

/// Contains failures of one part of the UI.
///
/// While an error is held the wrapped content is replaced by a fallback with a
/// Retry button; everything outside the boundary keeps working.
#[derive(Debug)]
pub struct ErrorBoundary {
    label: &'static str,
    error: Option<RenderError>,
}

impl ErrorBoundary {
    /// `label` names the guarded content in the fallback ("Error loading {label}").
    pub fn new(label: &'static str) -> Self {
        Self { label, error: None }
    }

    pub fn error(&self) -> Option<&RenderError> {
        self.error.as_ref()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Take the value out of `result`, or log and hold on to its error.
    pub fn capture<T, E>(&mut self, result: Result<T, E>) -> Option<T>
    where
        E: Into<RenderError>,
    {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                let err = err.into();
                log::error!("Error rendering {}: {}", self.label, err);
                self.error = Some(err);
                None
            }
        }
    }

    pub fn reset(&mut self) {
        self.error = None;
    }

    /// Run `content` unless an error is held, otherwise draw the fallback.
    ///
    /// Returns `true` when the user pressed Retry this frame; the error is
    /// already cleared by then.
    pub fn show<T>(
        &mut self,
        ui: &mut egui::Ui,
        content: impl FnOnce(&mut egui::Ui) -> Result<T, RenderError>,
    ) -> bool {
        if self.error.is_none() {
            let result = content(ui);
            self.capture(result);
            return false;
        }

        let mut retry = false;
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.heading(format!("Error loading {}", self.label));
            if let Some(err) = &self.error {
                ui.label(egui::RichText::new(err.to_string()).color(ui.visuals().error_fg_color));
            }
            ui.add_space(8.0);
            if ui.button("Retry").clicked() {
                log::info!("Retrying {}", self.label);
                retry = true;
            }
        });

        if retry {
            self.reset();
        }
        retry
    }
}
