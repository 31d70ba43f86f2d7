use egui::Pos2;

use super::{Tool, ViewMode};

/// Everything the user can do to the editor.
///
/// Pointer positions are canvas pixels relative to the canvas' top-left corner;
/// the reducer converts them to grid units.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorAction {
    /// Pick a placement tool, or `None` for selection mode
    SelectTool(Option<Tool>),
    PointerClick(Pos2),
    PointerMove(Pos2),
    DeleteSelected,
    /// Remove every element. The UI confirms with the user before dispatching.
    ClearAll,
    SetViewMode(ViewMode),
}

impl EditorAction {
    pub fn name(&self) -> &'static str {
        match self {
            EditorAction::SelectTool(_) => "SelectTool",
            EditorAction::PointerClick(_) => "PointerClick",
            EditorAction::PointerMove(_) => "PointerMove",
            EditorAction::DeleteSelected => "DeleteSelected",
            EditorAction::ClearAll => "ClearAll",
            EditorAction::SetViewMode(_) => "SetViewMode",
        }
    }
}
