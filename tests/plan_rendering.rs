use egui::pos2;
use floorplan_builder::{DrawCommand, EditorAction, EditorConfig, EditorState, Tool, plan_draw_commands, reduce};

fn apply(state: EditorState, actions: &[EditorAction]) -> EditorState {
    let config = EditorConfig::default();
    actions
        .iter()
        .fold(state, |state, action| reduce(&state, action.clone(), &config))
}

// Drop background and grid lines, keep what elements and previews draw
fn element_commands(commands: &[DrawCommand]) -> Vec<&DrawCommand> {
    commands
        .iter()
        .filter(|command| !matches!(command, DrawCommand::Background { .. } | DrawCommand::GridLine { .. }))
        .collect()
}

#[test]
fn test_elements_are_drawn_in_insertion_order() {
    let state = apply(
        EditorState::new(),
        &[
            EditorAction::SelectTool(Some(Tool::Window)),
            EditorAction::PointerClick(pos2(100.0, 100.0)),
            EditorAction::SelectTool(Some(Tool::Door)),
            EditorAction::PointerClick(pos2(300.0, 100.0)),
        ],
    );
    let commands = plan_draw_commands(&state, &EditorConfig::default());
    let drawn = element_commands(&commands);

    assert_eq!(drawn.len(), 5);
    assert!(matches!(drawn[0], DrawCommand::Rect { transform, .. } if transform.origin == pos2(100.0, 100.0)));
    assert!(matches!(drawn[1], DrawCommand::Line { .. }));
    assert!(matches!(drawn[2], DrawCommand::Line { .. }));
    assert!(matches!(drawn[3], DrawCommand::Rect { transform, .. } if transform.origin == pos2(300.0, 100.0)));
    assert!(matches!(drawn[4], DrawCommand::Arc { .. }));
}

#[test]
fn test_background_comes_first() {
    let commands = plan_draw_commands(&EditorState::new(), &EditorConfig::default());
    assert!(matches!(commands[0], DrawCommand::Background { .. }));
    assert!(commands[1..].iter().all(|command| matches!(command, DrawCommand::GridLine { .. })));
}

#[test]
fn test_wall_preview_follows_the_pointer() {
    let state = apply(
        EditorState::new(),
        &[
            EditorAction::SelectTool(Some(Tool::Wall)),
            EditorAction::PointerClick(pos2(40.0, 40.0)),
            EditorAction::PointerMove(pos2(140.0, 60.0)),
        ],
    );
    let commands = plan_draw_commands(&state, &EditorConfig::default());
    match commands.last() {
        Some(DrawCommand::DashedLine { from, to, .. }) => {
            assert_eq!(*from, pos2(40.0, 40.0));
            assert_eq!(*to, pos2(140.0, 60.0));
        }
        other => panic!("expected a dashed preview, got {other:?}"),
    }

    // No preview once another tool is picked
    let state = apply(state, &[EditorAction::SelectTool(Some(Tool::Door))]);
    let commands = plan_draw_commands(&state, &EditorConfig::default());
    assert!(!commands.iter().any(|command| matches!(command, DrawCommand::DashedLine { .. })));
}
