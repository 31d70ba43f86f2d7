use egui::Pos2;

use crate::element::ElementKind;
use crate::id_generator::ElementId;
use crate::state::{Tool, ViewMode};

/// What changed in the editor as the result of one dispatched action.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    ToolChanged {
        old: Option<Tool>,
        new: Option<Tool>,
    },
    SelectionChanged {
        old: Option<ElementId>,
        new: Option<ElementId>,
    },
    ElementAdded {
        id: ElementId,
        kind: ElementKind,
    },
    ElementRemoved {
        id: ElementId,
        kind: ElementKind,
    },
    PlanCleared {
        removed: usize,
    },
    WallDraftStarted {
        at: Pos2,
    },
    /// A half-drawn wall was abandoned without creating an element
    WallDraftDiscarded,
    ViewModeChanged {
        old: ViewMode,
        new: ViewMode,
    },
}

impl std::fmt::Display for EditorEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tool_name = |tool: &Option<Tool>| tool.map_or("none", |tool| tool.label());
        match self {
            EditorEvent::ToolChanged { new, .. } => write!(f, "tool: {}", tool_name(new)),
            EditorEvent::SelectionChanged { new: Some(id), .. } => write!(f, "selected {id}"),
            EditorEvent::SelectionChanged { new: None, .. } => write!(f, "selection cleared"),
            EditorEvent::ElementAdded { kind, .. } => write!(f, "added {}", kind.name()),
            EditorEvent::ElementRemoved { kind, .. } => write!(f, "removed {}", kind.name()),
            EditorEvent::PlanCleared { removed } => write!(f, "cleared {removed} element(s)"),
            EditorEvent::WallDraftStarted { at } => write!(f, "wall started at ({:.1}, {:.1})", at.x, at.y),
            EditorEvent::WallDraftDiscarded => write!(f, "wall discarded"),
            EditorEvent::ViewModeChanged { new, .. } => write!(f, "view: {new:?}"),
        }
    }
}
