use egui::Pos2;

use crate::id_generator::{ElementId, generate_id};

/// Length used when drawing a wall that carries no width.
pub const DEFAULT_WALL_WIDTH: f32 = 1.0;
/// Thickness used when drawing a wall that carries no thickness.
pub const DEFAULT_WALL_THICKNESS: f32 = 0.2;

/// The kinds of architectural unit a plan is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Wall,
    Door,
    Window,
}

impl ElementKind {
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Wall => "wall",
            ElementKind::Door => "door",
            ElementKind::Window => "window",
        }
    }
}

/// A placed element of the floor plan, in grid units.
///
/// Elements are immutable once placed. For a wall `position` is the midpoint of
/// the segment and `width` its length; for doors and windows `position` is the
/// point that was clicked.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    id: ElementId,
    kind: ElementKind,
    position: Pos2,
    rotation_degrees: f32,
    width: Option<f32>,
    thickness: Option<f32>,
}

impl Element {
    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn rotation_degrees(&self) -> f32 {
        self.rotation_degrees
    }

    pub fn width(&self) -> Option<f32> {
        self.width
    }

    pub fn thickness(&self) -> Option<f32> {
        self.thickness
    }

    /// Wall length used for drawing; a stored zero stays zero.
    pub fn wall_width(&self) -> f32 {
        self.width.unwrap_or(DEFAULT_WALL_WIDTH)
    }

    pub fn wall_thickness(&self) -> f32 {
        self.thickness.unwrap_or(DEFAULT_WALL_THICKNESS)
    }
}

/// Factory functions for creating elements
pub mod factory {
    use super::*;
    use crate::geometry::segment_placement;

    /// Create a wall spanning `start` to `end`.
    pub fn create_wall(start: Pos2, end: Pos2, thickness: f32) -> Element {
        let placement = segment_placement(start, end);
        Element {
            id: generate_id(),
            kind: ElementKind::Wall,
            position: placement.midpoint,
            rotation_degrees: placement.rotation_degrees,
            width: Some(placement.length),
            thickness: Some(thickness),
        }
    }

    /// Create an unrotated element placed at a single point.
    pub fn create_point(kind: ElementKind, position: Pos2) -> Element {
        Element {
            id: generate_id(),
            kind,
            position,
            rotation_degrees: 0.0,
            width: None,
            thickness: None,
        }
    }
}
