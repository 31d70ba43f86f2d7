//! 2D plan rendering.
//!
//! [`plan_draw_commands`] turns the editor state into a flat list of draw
//! commands in canvas pixel space; [`PlanRenderer`] paints such a list with an
//! egui painter. The list is rebuilt from scratch on every frame.
use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke, Vec2, pos2, vec2};

use crate::config::EditorConfig;
use crate::element::{Element, ElementKind};
use crate::state::{EditorState, Tool};

pub const CANVAS_BACKGROUND: Color32 = Color32::from_rgb(250, 250, 250);
pub const GRID_COLOR: Color32 = Color32::from_rgb(224, 224, 224);
pub const ACCENT: Color32 = Color32::from_rgb(102, 126, 234);
pub const ACCENT_DARK: Color32 = Color32::from_rgb(118, 75, 162);

const WALL_FILL: Color32 = Color32::from_rgb(51, 51, 51);
const DOOR_FILL: Color32 = Color32::from_rgb(101, 67, 33);
const DOOR_FILL_SELECTED: Color32 = Color32::from_rgb(139, 69, 19);
const WINDOW_FILL: Color32 = Color32::from_rgb(224, 242, 255);
const WINDOW_FILL_SELECTED: Color32 = Color32::from_rgb(135, 206, 235);
const PANE_COLOR: Color32 = Color32::from_rgb(102, 102, 102);

const OUTLINE_WIDTH: f32 = 2.0;
const PREVIEW_WIDTH: f32 = 3.0;
const PREVIEW_DASH: f32 = 5.0;

// Fixed pixel templates for point elements
const DOOR_SIZE: Vec2 = vec2(30.0, 16.0);
const DOOR_SWING_RADIUS: f32 = 15.0;
const WINDOW_SIZE: Vec2 = vec2(40.0, 12.0);

const ARC_SEGMENTS: usize = 16;

/// Places local template geometry on the canvas: rotate, then translate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanTransform {
    pub origin: Pos2,
    /// Clockwise on screen, in radians.
    pub rotation: f32,
}

impl PlanTransform {
    pub fn apply(&self, local: Pos2) -> Pos2 {
        let (sin, cos) = self.rotation.sin_cos();
        self.origin + vec2(local.x * cos - local.y * sin, local.x * sin + local.y * cos)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Background {
        size: Vec2,
        color: Color32,
    },
    GridLine {
        from: Pos2,
        to: Pos2,
        stroke: Stroke,
    },
    Rect {
        transform: PlanTransform,
        rect: Rect,
        fill: Color32,
        stroke: Stroke,
    },
    /// Circular arc from `start_angle` to `end_angle` (radians, clockwise on screen)
    Arc {
        transform: PlanTransform,
        center: Pos2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        stroke: Stroke,
    },
    Line {
        transform: PlanTransform,
        from: Pos2,
        to: Pos2,
        stroke: Stroke,
    },
    DashedLine {
        from: Pos2,
        to: Pos2,
        stroke: Stroke,
        dash_length: f32,
        gap_length: f32,
    },
}

/// Build the complete plan picture for the current state.
///
/// Order: background, grid, elements in insertion order (later ones on top),
/// then the dashed preview of a wall being drawn.
pub fn plan_draw_commands(state: &EditorState, config: &EditorConfig) -> Vec<DrawCommand> {
    let size = vec2(config.canvas_size[0], config.canvas_size[1]);
    let mut commands = vec![DrawCommand::Background {
        size,
        color: CANVAS_BACKGROUND,
    }];

    grid_commands(size, config.grid_scale, &mut commands);

    let grid = config.grid_mapping();
    for element in state.elements() {
        let transform = PlanTransform {
            origin: grid.to_pixel(element.position()),
            rotation: element.rotation_degrees().to_radians(),
        };
        let selected = state.selected_id() == Some(element.id());
        element_commands(element, transform, selected, config.grid_scale, &mut commands);
    }

    if state.active_tool() == Some(Tool::Wall) {
        if let (Some(start), Some(pointer)) = (state.wall_draft_start(), state.pointer()) {
            commands.push(DrawCommand::DashedLine {
                from: grid.to_pixel(start),
                to: grid.to_pixel(pointer),
                stroke: Stroke::new(PREVIEW_WIDTH, ACCENT),
                dash_length: PREVIEW_DASH,
                gap_length: PREVIEW_DASH,
            });
        }
    }

    commands
}

fn grid_commands(size: Vec2, spacing: f32, commands: &mut Vec<DrawCommand>) {
    let stroke = Stroke::new(1.0, GRID_COLOR);

    for i in 0..grid_line_count(size.x, spacing) {
        let x = i as f32 * spacing;
        commands.push(DrawCommand::GridLine {
            from: pos2(x, 0.0),
            to: pos2(x, size.y),
            stroke,
        });
    }

    for i in 0..grid_line_count(size.y, spacing) {
        let y = i as f32 * spacing;
        commands.push(DrawCommand::GridLine {
            from: pos2(0.0, y),
            to: pos2(size.x, y),
            stroke,
        });
    }
}

/// Lines at `0, spacing, 2 * spacing, ...` strictly below `extent`.
fn grid_line_count(extent: f32, spacing: f32) -> usize {
    if !spacing.is_finite() || spacing <= 0.0 || !extent.is_finite() || extent <= 0.0 {
        return 0;
    }
    (extent / spacing).ceil() as usize
}

fn element_commands(
    element: &Element,
    transform: PlanTransform,
    selected: bool,
    grid_scale: f32,
    commands: &mut Vec<DrawCommand>,
) {
    let outline = Stroke::new(OUTLINE_WIDTH, Color32::BLACK);

    match element.kind() {
        ElementKind::Wall => {
            let size = vec2(element.wall_width(), element.wall_thickness()) * grid_scale;
            commands.push(DrawCommand::Rect {
                transform,
                rect: Rect::from_center_size(Pos2::ZERO, size),
                fill: if selected { ACCENT } else { WALL_FILL },
                stroke: Stroke::new(OUTLINE_WIDTH, if selected { ACCENT_DARK } else { Color32::BLACK }),
            });
        }
        ElementKind::Door => {
            commands.push(DrawCommand::Rect {
                transform,
                rect: Rect::from_center_size(Pos2::ZERO, DOOR_SIZE),
                fill: if selected { DOOR_FILL_SELECTED } else { DOOR_FILL },
                stroke: outline,
            });
            commands.push(DrawCommand::Arc {
                transform,
                center: pos2(DOOR_SIZE.x / 2.0, 0.0),
                radius: DOOR_SWING_RADIUS,
                start_angle: -std::f32::consts::FRAC_PI_2,
                end_angle: 0.0,
                stroke: outline,
            });
        }
        ElementKind::Window => {
            let half = WINDOW_SIZE / 2.0;
            commands.push(DrawCommand::Rect {
                transform,
                rect: Rect::from_center_size(Pos2::ZERO, WINDOW_SIZE),
                fill: if selected { WINDOW_FILL_SELECTED } else { WINDOW_FILL },
                stroke: outline,
            });
            let pane = Stroke::new(OUTLINE_WIDTH, PANE_COLOR);
            commands.push(DrawCommand::Line {
                transform,
                from: pos2(0.0, -half.y),
                to: pos2(0.0, half.y),
                stroke: pane,
            });
            commands.push(DrawCommand::Line {
                transform,
                from: pos2(-half.x, 0.0),
                to: pos2(half.x, 0.0),
                stroke: pane,
            });
        }
    }
}

/// Paints plan draw commands onto an egui painter.
#[derive(Debug, Default)]
pub struct PlanRenderer {
    shapes_last_frame: usize,
}

impl PlanRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of shapes emitted by the last call to [`PlanRenderer::paint`]
    pub fn shapes_last_frame(&self) -> usize {
        self.shapes_last_frame
    }

    /// Paint `commands` with the canvas' top-left corner at `canvas_origin`.
    pub fn paint(&mut self, painter: &Painter, canvas_origin: Pos2, commands: &[DrawCommand]) {
        let shapes: Vec<Shape> = commands
            .iter()
            .flat_map(|command| command_shapes(command, canvas_origin.to_vec2()))
            .collect();
        self.shapes_last_frame = shapes.len();
        painter.extend(shapes);
    }
}

fn command_shapes(command: &DrawCommand, offset: Vec2) -> Vec<Shape> {
    match command {
        DrawCommand::Background { size, color } => {
            vec![Shape::rect_filled(
                Rect::from_min_size(Pos2::ZERO + offset, *size),
                0.0,
                *color,
            )]
        }
        DrawCommand::GridLine { from, to, stroke } => {
            vec![Shape::line_segment([*from + offset, *to + offset], *stroke)]
        }
        DrawCommand::Rect {
            transform,
            rect,
            fill,
            stroke,
        } => {
            let corners = [
                rect.left_top(),
                rect.right_top(),
                rect.right_bottom(),
                rect.left_bottom(),
            ]
            .map(|corner| transform.apply(corner) + offset);
            vec![Shape::convex_polygon(corners.to_vec(), *fill, *stroke)]
        }
        DrawCommand::Arc {
            transform,
            center,
            radius,
            start_angle,
            end_angle,
            stroke,
        } => {
            let points = (0..=ARC_SEGMENTS)
                .map(|i| {
                    let t = i as f32 / ARC_SEGMENTS as f32;
                    let angle = start_angle + (end_angle - start_angle) * t;
                    let local = *center + vec2(angle.cos(), angle.sin()) * *radius;
                    transform.apply(local) + offset
                })
                .collect();
            vec![Shape::line(points, *stroke)]
        }
        DrawCommand::Line {
            transform,
            from,
            to,
            stroke,
        } => {
            vec![Shape::line_segment(
                [transform.apply(*from) + offset, transform.apply(*to) + offset],
                *stroke,
            )]
        }
        DrawCommand::DashedLine {
            from,
            to,
            stroke,
            dash_length,
            gap_length,
        } => Shape::dashed_line(&[*from + offset, *to + offset], *stroke, *dash_length, *gap_length),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{EditorAction, reduce};

    fn element_commands_of(commands: &[DrawCommand]) -> Vec<&DrawCommand> {
        commands
            .iter()
            .filter(|command| !matches!(command, DrawCommand::Background { .. } | DrawCommand::GridLine { .. }))
            .collect()
    }

    #[test]
    fn transform_rotates_clockwise_on_screen() {
        let transform = PlanTransform {
            origin: pos2(10.0, 10.0),
            rotation: std::f32::consts::FRAC_PI_2,
        };
        let moved = transform.apply(pos2(1.0, 0.0));
        assert!((moved.x - 10.0).abs() < 1e-5);
        assert!((moved.y - 11.0).abs() < 1e-5);
    }

    #[test]
    fn empty_plan_is_background_and_grid() {
        let config = EditorConfig::default();
        let commands = plan_draw_commands(&EditorState::new(), &config);

        assert!(matches!(commands[0], DrawCommand::Background { .. }));
        // 1200 / 20 vertical lines plus 600 / 20 horizontal lines
        let grid_lines = commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::GridLine { .. }))
            .count();
        assert_eq!(grid_lines, 60 + 30);
        assert!(element_commands_of(&commands).is_empty());
    }

    #[test]
    fn grid_lines_stop_short_of_the_canvas_edge() {
        assert_eq!(grid_line_count(1200.0, 20.0), 60);
        // 0, 7, ..., 1197
        assert_eq!(grid_line_count(1200.0, 7.0), 172);
        assert_eq!(grid_line_count(600.0, 0.0), 0);

        let mut commands = Vec::new();
        grid_commands(vec2(1200.0, 600.0), 7.0, &mut commands);
        assert_eq!(commands.len(), 172 + 86);
        let Some(DrawCommand::GridLine { from, .. }) = commands.get(171) else {
            panic!("expected a grid line");
        };
        assert_eq!(from.x, 1197.0);
    }

    #[test]
    fn wall_rect_is_scaled_to_pixels() {
        let config = EditorConfig::default();
        let mut state = reduce(&EditorState::new(), EditorAction::SelectTool(Some(Tool::Wall)), &config);
        state = reduce(&state, EditorAction::PointerClick(pos2(40.0, 40.0)), &config);
        state = reduce(&state, EditorAction::PointerClick(pos2(100.0, 40.0)), &config);

        let commands = plan_draw_commands(&state, &config);
        let drawn = element_commands_of(&commands);
        assert_eq!(drawn.len(), 1);
        match drawn[0] {
            DrawCommand::Rect { transform, rect, fill, .. } => {
                assert_eq!(transform.origin, pos2(70.0, 40.0));
                assert!((rect.width() - 60.0).abs() < 1e-4);
                assert!((rect.height() - 4.0).abs() < 1e-4);
                assert_eq!(*fill, WALL_FILL);
            }
            other => panic!("expected a rect, got {other:?}"),
        }
    }

    #[test]
    fn selected_door_uses_the_highlight_fill() {
        let config = EditorConfig::default();
        let mut state = reduce(&EditorState::new(), EditorAction::SelectTool(Some(Tool::Door)), &config);
        state = reduce(&state, EditorAction::PointerClick(pos2(80.0, 80.0)), &config);
        state = reduce(&state, EditorAction::PointerClick(pos2(80.0, 80.0)), &config);
        assert!(state.selected_id().is_some());

        let commands = plan_draw_commands(&state, &config);
        let drawn = element_commands_of(&commands);
        assert_eq!(drawn.len(), 2);
        assert!(matches!(drawn[0], DrawCommand::Rect { fill, .. } if *fill == DOOR_FILL_SELECTED));
        assert!(matches!(drawn[1], DrawCommand::Arc { radius, .. } if *radius == DOOR_SWING_RADIUS));
    }

    #[test]
    fn window_has_two_pane_lines() {
        let config = EditorConfig::default();
        let mut state = reduce(&EditorState::new(), EditorAction::SelectTool(Some(Tool::Window)), &config);
        state = reduce(&state, EditorAction::PointerClick(pos2(200.0, 100.0)), &config);

        let commands = plan_draw_commands(&state, &config);
        let lines = element_commands_of(&commands)
            .into_iter()
            .filter(|command| matches!(command, DrawCommand::Line { .. }))
            .count();
        assert_eq!(lines, 2);
    }

    #[test]
    fn wall_preview_is_drawn_last() {
        let config = EditorConfig::default();
        let mut state = reduce(&EditorState::new(), EditorAction::SelectTool(Some(Tool::Door)), &config);
        state = reduce(&state, EditorAction::PointerClick(pos2(300.0, 300.0)), &config);
        state = reduce(&state, EditorAction::SelectTool(Some(Tool::Wall)), &config);
        state = reduce(&state, EditorAction::PointerClick(pos2(40.0, 40.0)), &config);
        state = reduce(&state, EditorAction::PointerMove(pos2(120.0, 40.0)), &config);

        let commands = plan_draw_commands(&state, &config);
        match commands.last() {
            Some(DrawCommand::DashedLine { from, to, .. }) => {
                assert_eq!(*from, pos2(40.0, 40.0));
                assert_eq!(*to, pos2(120.0, 40.0));
            }
            other => panic!("expected the wall preview last, got {other:?}"),
        }
    }

    #[test]
    fn renderer_emits_shapes_for_every_command() {
        let ctx = egui::Context::default();
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(1200.0, 600.0));
        let painter = Painter::new(ctx, egui::LayerId::background(), rect);
        let config = EditorConfig::default();
        let commands = plan_draw_commands(&EditorState::new(), &config);

        let mut renderer = PlanRenderer::new();
        renderer.paint(&painter, rect.min, &commands);
        assert_eq!(renderer.shapes_last_frame(), commands.len());
    }
}
