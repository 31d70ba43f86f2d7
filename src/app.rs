use eframe::egui;

use crate::config::EditorConfig;
use crate::error_boundary::ErrorBoundary;
use crate::event::{LoggingEventHandler, RecentEvents};
use crate::panels::{central_panel, showcase_panel, tools_panel};
use crate::renderer::PlanRenderer;
use crate::scene::{SceneViewport, SpinAnimation};
use crate::showcase::{ShowcaseViewer, default_loader};
use crate::state::{EditorAction, EditorContext, Tool, ViewMode};

const RECENT_EVENT_COUNT: usize = 12;

/// Top-level pages of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Builder,
    Showcase,
}

impl Page {
    pub fn label(&self) -> &'static str {
        match self {
            Page::Builder => "Floor Plan Builder",
            Page::Showcase => "3D Showcase",
        }
    }
}

/// The spinning 3D view of the plan being edited.
pub struct PlanPreview {
    pub(crate) viewport: SceneViewport,
    pub(crate) spin: SpinAnimation,
    pub(crate) boundary: ErrorBoundary,
}

impl PlanPreview {
    fn new(config: &EditorConfig) -> Self {
        Self {
            viewport: SceneViewport::new(),
            spin: SpinAnimation::new(config.spin_per_frame),
            boundary: ErrorBoundary::new("3D view"),
        }
    }
}

pub struct FloorPlanApp {
    pub(crate) editor: EditorContext,
    pub(crate) page: Page,
    pub(crate) plan_renderer: PlanRenderer,
    pub(crate) preview: PlanPreview,
    pub(crate) showcase: ShowcaseViewer,
    pub(crate) recent_events: RecentEvents,
    pub(crate) show_clear_confirm: bool,
}

impl FloorPlanApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: EditorConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self::with_config(config)
    }

    pub fn with_config(config: EditorConfig) -> Self {
        let showcase = ShowcaseViewer::new(default_loader(&config.showcase_model), &config);
        let preview = PlanPreview::new(&config);

        let editor = EditorContext::new(config);
        let recent_events = RecentEvents::new(RECENT_EVENT_COUNT);
        editor.event_bus().subscribe(Box::new(LoggingEventHandler));
        editor.event_bus().subscribe(Box::new(recent_events.clone()));

        Self {
            editor,
            page: Page::Builder,
            plan_renderer: PlanRenderer::new(),
            preview,
            showcase,
            recent_events,
            show_clear_confirm: false,
        }
    }

    pub fn editor(&self) -> &EditorContext {
        &self.editor
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn recent_events(&self) -> &RecentEvents {
        &self.recent_events
    }

    pub fn is_clear_confirm_open(&self) -> bool {
        self.show_clear_confirm
    }

    pub fn dispatch(&mut self, action: EditorAction) {
        self.editor.dispatch(action);
    }

    /// Pick a tool from the toolbar. Picking the active tool again keeps it,
    /// including a half-drawn wall; Escape returns to selection mode.
    pub fn select_tool(&mut self, tool: Tool) {
        self.dispatch(EditorAction::SelectTool(Some(tool)));
    }

    /// Switch pages. Leaving a page discards what it owns: the plan for the
    /// builder, the loaded model for the showcase.
    pub fn set_page(&mut self, page: Page) {
        if page == self.page {
            return;
        }
        log::info!("Switching to {}", page.label());
        match self.page {
            Page::Builder => {
                self.editor.reset();
                self.recent_events.clear();
                self.show_clear_confirm = false;
                self.preview.spin.reset();
                self.preview.boundary.reset();
            }
            Page::Showcase => self.showcase.teardown(),
        }
        self.page = page;
    }

    /// Ask before wiping the plan; nothing to ask about on an empty plan.
    pub fn request_clear_all(&mut self) {
        if !self.editor.state().is_empty() {
            self.show_clear_confirm = true;
        }
    }

    pub fn confirm_clear_all(&mut self) {
        self.show_clear_confirm = false;
        self.dispatch(EditorAction::ClearAll);
    }

    pub fn cancel_clear_all(&mut self) {
        self.show_clear_confirm = false;
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if self.page != Page::Builder || ctx.wants_keyboard_input() {
            return;
        }
        let (delete, escape) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace),
                i.key_pressed(egui::Key::Escape),
            )
        });
        if delete && self.editor.state().selected_id().is_some() {
            self.dispatch(EditorAction::DeleteSelected);
        }
        if escape && self.editor.state().active_tool().is_some() {
            self.dispatch(EditorAction::SelectTool(None));
        }
    }

    fn clear_confirm_window(&mut self, ctx: &egui::Context) {
        if !self.show_clear_confirm {
            return;
        }
        let count = self.editor.state().elements().len();
        egui::Window::new("Clear all elements?")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(format!("This removes all {count} element(s) and cannot be undone."));
                ui.horizontal(|ui| {
                    if ui.button("Clear").clicked() {
                        self.confirm_clear_all();
                    }
                    if ui.button("Cancel").clicked() {
                        self.cancel_clear_all();
                    }
                });
            });
    }

    fn is_animating(&self) -> bool {
        match self.page {
            Page::Builder => self.editor.state().view_mode() == ViewMode::Preview3D,
            Page::Showcase => true,
        }
    }
}

impl eframe::App for FloorPlanApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("pages").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for page in [Page::Builder, Page::Showcase] {
                    if ui.selectable_label(self.page == page, page.label()).clicked() {
                        self.set_page(page);
                    }
                }
            });
        });

        self.handle_shortcuts(ctx);

        match self.page {
            Page::Builder => {
                tools_panel(self, ctx);
                central_panel(self, ctx);
                self.clear_confirm_window(ctx);
            }
            Page::Showcase => showcase_panel(self, ctx),
        }

        if self.is_animating() {
            ctx.request_repaint();
        }
    }
}

/// Hint shown under the toolbar for the current tool and draft.
pub fn status_hint(active_tool: Option<Tool>, drawing_wall: bool) -> &'static str {
    match (active_tool, drawing_wall) {
        (Some(Tool::Wall), true) => "Click to place the end of the wall",
        (Some(Tool::Wall), false) => "Click to place the start of a wall",
        (Some(Tool::Door), _) => "Click on the plan to place a door",
        (Some(Tool::Window), _) => "Click on the plan to place a window",
        (None, _) => "Pick a tool, or click an element to select it",
    }
}
