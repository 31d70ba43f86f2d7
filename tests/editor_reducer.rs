use std::collections::HashSet;

use egui::{Pos2, pos2};
use floorplan_builder::element::ElementKind;
use floorplan_builder::{EditorAction, EditorConfig, EditorState, Tool, ViewMode, reduce};

// Helper: run a sequence of actions from an empty editor
fn run(actions: impl IntoIterator<Item = EditorAction>) -> EditorState {
    let config = EditorConfig::default();
    actions
        .into_iter()
        .fold(EditorState::new(), |state, action| reduce(&state, action, &config))
}

// Grid coordinates to canvas pixels at the default 20 px per unit
fn px(x: f32, y: f32) -> Pos2 {
    pos2(x * 20.0, y * 20.0)
}

fn click(x: f32, y: f32) -> EditorAction {
    EditorAction::PointerClick(px(x, y))
}

fn tool(tool: Tool) -> EditorAction {
    EditorAction::SelectTool(Some(tool))
}

#[test]
fn test_wall_two_click_scenario() {
    let after_first = run([tool(Tool::Wall), click(2.0, 2.0)]);
    assert_eq!(after_first.wall_draft_start(), Some(pos2(2.0, 2.0)));
    assert!(after_first.elements().is_empty());

    let state = reduce(&after_first, click(5.0, 2.0), &EditorConfig::default());
    assert_eq!(state.elements().len(), 1);
    let wall = &state.elements()[0];
    assert_eq!(wall.kind(), ElementKind::Wall);
    assert_eq!(wall.position(), pos2(3.5, 2.0));
    assert_eq!(wall.width(), Some(3.0));
    assert_eq!(wall.rotation_degrees(), 0.0);
    assert_eq!(state.wall_draft_start(), None);
}

#[test]
fn test_door_placement_scenario() {
    let state = run([tool(Tool::Door), click(4.0, 4.0)]);
    assert_eq!(state.elements().len(), 1);
    let door = &state.elements()[0];
    assert_eq!(door.kind(), ElementKind::Door);
    assert_eq!(door.position(), pos2(4.0, 4.0));
    assert_eq!(door.rotation_degrees(), 0.0);
    assert!(state.elements().iter().all(|element| element.kind() != ElementKind::Wall));
}

#[test]
fn test_click_on_element_selects_instead_of_placing() {
    let state = run([tool(Tool::Window), click(3.0, 3.0), click(3.0, 3.0)]);
    assert_eq!(state.elements().len(), 1);
    assert_eq!(state.selected_id(), Some(state.elements()[0].id()));
    assert_eq!(state.active_tool(), Some(Tool::Window));
}

#[test]
fn test_hit_test_prefers_the_earliest_element() {
    let state = run([
        tool(Tool::Door),
        click(1.0, 1.0),
        tool(Tool::Window),
        click(2.5, 1.0),
        EditorAction::SelectTool(None),
        click(1.75, 1.0),
    ]);
    assert_eq!(state.elements().len(), 2);
    assert_eq!(state.selected_id(), Some(state.elements()[0].id()));
}

#[test]
fn test_ids_are_unique() {
    let mut actions = vec![tool(Tool::Door)];
    for i in 0..20 {
        actions.push(click(i as f32 * 2.0, 1.0));
    }
    actions.push(tool(Tool::Wall));
    for i in 0..10 {
        actions.push(click(i as f32 * 2.0, 10.0));
        actions.push(click(i as f32 * 2.0 + 1.0, 12.0));
    }
    let state = run(actions);

    assert_eq!(state.elements().len(), 30);
    let ids: HashSet<_> = state.elements().iter().map(|element| element.id()).collect();
    assert_eq!(ids.len(), 30);
}

#[test]
fn test_delete_selected_shrinks_by_one() {
    let placed = run([tool(Tool::Door), click(1.0, 1.0), click(5.0, 5.0), click(1.0, 1.0)]);
    let selected = placed.selected_id().unwrap();

    let state = reduce(&placed, EditorAction::DeleteSelected, &EditorConfig::default());
    assert_eq!(state.elements().len(), placed.elements().len() - 1);
    assert_eq!(state.selected_id(), None);
    assert!(state.find_element(selected).is_none());
}

#[test]
fn test_delete_without_selection_is_a_noop() {
    let placed = run([tool(Tool::Door), click(1.0, 1.0), click(5.0, 5.0)]);
    assert_eq!(placed.selected_id(), None);

    let state = reduce(&placed, EditorAction::DeleteSelected, &EditorConfig::default());
    assert_eq!(state, placed);
}

#[test]
fn test_clear_all_empties_the_plan() {
    let state = run([
        tool(Tool::Door),
        click(1.0, 1.0),
        click(1.0, 1.0),
        tool(Tool::Wall),
        click(8.0, 8.0),
        EditorAction::ClearAll,
    ]);
    assert!(state.elements().is_empty());
    assert_eq!(state.selected_id(), None);
    // The half-drawn wall survives a clear.
    assert_eq!(state.wall_draft_start(), Some(pos2(8.0, 8.0)));

    let empty = reduce(&EditorState::new(), EditorAction::ClearAll, &EditorConfig::default());
    assert!(empty.elements().is_empty());
}

#[test]
fn test_switching_away_from_wall_discards_the_draft() {
    for next in [Some(Tool::Door), Some(Tool::Window), None] {
        let state = run([tool(Tool::Wall), click(2.0, 2.0), EditorAction::SelectTool(next)]);
        assert_eq!(state.wall_draft_start(), None);
        assert!(state.elements().is_empty());
    }

    let state = run([tool(Tool::Wall), click(2.0, 2.0), tool(Tool::Wall)]);
    assert_eq!(state.wall_draft_start(), Some(pos2(2.0, 2.0)));
}

#[test]
fn test_wall_direction_only_changes_rotation() {
    let forward = run([tool(Tool::Wall), click(1.0, 2.0), click(4.0, 6.0)]);
    let backward = run([tool(Tool::Wall), click(4.0, 6.0), click(1.0, 2.0)]);
    let (a, b) = (&forward.elements()[0], &backward.elements()[0]);

    assert_eq!(a.position(), b.position());
    assert_eq!(a.width(), b.width());
    assert_eq!(a.width(), Some(5.0));
    let difference = (a.rotation_degrees() - b.rotation_degrees()).rem_euclid(360.0);
    assert!((difference - 180.0).abs() < 1e-3);
}

#[test]
fn test_zero_length_wall_is_appended() {
    let state = run([tool(Tool::Wall), click(2.0, 2.0), click(2.0, 2.0)]);
    assert_eq!(state.elements().len(), 1);
    assert_eq!(state.elements()[0].width(), Some(0.0));
    assert_eq!(state.wall_draft_start(), None);
}

#[test]
fn test_selecting_a_tool_clears_the_selection() {
    let state = run([tool(Tool::Door), click(1.0, 1.0), click(1.0, 1.0), tool(Tool::Window)]);
    assert_eq!(state.selected_id(), None);
}

#[test]
fn test_view_mode_changes_nothing_else() {
    let before = run([tool(Tool::Door), click(1.0, 1.0)]);
    let after = reduce(&before, EditorAction::SetViewMode(ViewMode::Preview3D), &EditorConfig::default());
    assert_eq!(after.view_mode(), ViewMode::Preview3D);
    assert_eq!(after.elements(), before.elements());
    assert_eq!(after.active_tool(), before.active_tool());
}

#[test]
fn test_reduce_leaves_the_input_untouched() {
    let before = run([tool(Tool::Door)]);
    let snapshot = before.clone();
    let _ = reduce(&before, click(3.0, 3.0), &EditorConfig::default());
    assert_eq!(before, snapshot);
}
