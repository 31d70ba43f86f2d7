//! The transient model of the floor-plan editor.
//!
//! `EditorState` is a plain value: every user action produces a new state through
//! [`reduce`](super::reduce), so the click protocol can be exercised without a UI.
//!
//! # Click protocol
//!
//! ```text
//!   click ──► hits an element? ──yes──► select it
//!                  │
//!                  no
//!                  ▼
//!            active tool ──Wall──► draft unset? ─yes─► remember first endpoint
//!                  │                    │
//!                  │                    no ──────────► append wall, drop draft
//!                  ├──Door/Window──► clear selection, append element
//!                  │
//!                  └──none────────► clear selection
//! ```
//!
//! The state lives as long as the builder page and is never persisted.

use egui::Pos2;

use crate::element::{Element, ElementKind};
use crate::id_generator::ElementId;

/// Placement tools offered by the toolbar. No tool means selection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Wall,
    Door,
    Window,
}

impl Tool {
    pub const ALL: [Tool; 3] = [Tool::Wall, Tool::Door, Tool::Window];

    pub fn element_kind(&self) -> ElementKind {
        match self {
            Tool::Wall => ElementKind::Wall,
            Tool::Door => ElementKind::Door,
            Tool::Window => ElementKind::Window,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tool::Wall => "Wall",
            Tool::Door => "Door",
            Tool::Window => "Window",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tool::Wall => "▬",
            Tool::Door => "◩",
            Tool::Window => "⊞",
        }
    }
}

/// Which view of the plan is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Plan2D,
    Preview3D,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorState {
    pub(super) elements: Vec<Element>,
    pub(super) active_tool: Option<Tool>,
    pub(super) selected_id: Option<ElementId>,
    pub(super) wall_draft_start: Option<Pos2>,
    pub(super) view_mode: ViewMode,
    pub(super) pointer: Option<Pos2>,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Placed elements in insertion (and drawing) order
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn active_tool(&self) -> Option<Tool> {
        self.active_tool
    }

    pub fn selected_id(&self) -> Option<ElementId> {
        self.selected_id
    }

    /// The selected element, if the selection still refers to one
    pub fn selected_element(&self) -> Option<&Element> {
        let id = self.selected_id?;
        self.find_element(id)
    }

    pub fn find_element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|element| element.id() == id)
    }

    /// First endpoint of a wall being drawn, in grid units
    pub fn wall_draft_start(&self) -> Option<Pos2> {
        self.wall_draft_start
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Last pointer position over the canvas, in grid units
    pub fn pointer(&self) -> Option<Pos2> {
        self.pointer
    }

    pub fn is_drawing_wall(&self) -> bool {
        self.active_tool == Some(Tool::Wall) && self.wall_draft_start.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
