use egui::Pos2;

use super::{EditorAction, EditorState, Tool};
use crate::config::EditorConfig;
use crate::element::factory;
use crate::geometry::hit_test;

/// Apply one action to the editor state.
///
/// Every action is total over the state: invalid-but-harmless input (deleting
/// with nothing selected, a zero-length wall) is either a no-op or accepted as is.
pub fn reduce(state: &EditorState, action: EditorAction, config: &EditorConfig) -> EditorState {
    let mut next = state.clone();
    let grid = config.grid_mapping();

    match action {
        EditorAction::SelectTool(tool) => {
            next.active_tool = tool;
            next.selected_id = None;
            if tool != Some(Tool::Wall) {
                next.wall_draft_start = None;
            }
        }
        EditorAction::PointerClick(pixel) => click(&mut next, grid.to_grid(pixel), config),
        EditorAction::PointerMove(pixel) => {
            next.pointer = Some(grid.to_grid(pixel));
        }
        EditorAction::DeleteSelected => {
            if let Some(id) = next.selected_id.take() {
                next.elements.retain(|element| element.id() != id);
            }
        }
        EditorAction::ClearAll => {
            next.elements.clear();
            next.selected_id = None;
        }
        EditorAction::SetViewMode(mode) => {
            next.view_mode = mode;
        }
    }

    next
}

fn click(state: &mut EditorState, point: Pos2, config: &EditorConfig) {
    if let Some(hit) = hit_test(&state.elements, point, config.hit_radius) {
        state.selected_id = Some(hit.id());
        return;
    }

    match state.active_tool {
        Some(Tool::Wall) => match state.wall_draft_start.take() {
            None => state.wall_draft_start = Some(point),
            Some(start) => {
                let wall = factory::create_wall(start, point, config.wall_thickness);
                state.elements.push(wall);
            }
        },
        Some(tool) => {
            state.selected_id = None;
            state.elements.push(factory::create_point(tool.element_kind(), point));
        }
        None => state.selected_id = None,
    }
}
