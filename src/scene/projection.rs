use egui::Color32;
use glam::{Mat4, Vec2, Vec3};

use crate::config::EditorConfig;
use crate::element::{Element, ElementKind};
use crate::id_generator::ElementId;

pub const WALL_COLOR: Color32 = Color32::from_rgb(224, 224, 224);
pub const DOOR_COLOR: Color32 = Color32::from_rgb(139, 69, 19);
/// Sky blue at 80% opacity
pub const WINDOW_COLOR: Color32 = Color32::from_rgba_premultiplied(108, 165, 188, 204);

pub const DOOR_SIZE: Vec3 = Vec3::new(0.3, 1.0, 0.05);
pub const WINDOW_SIZE: Vec3 = Vec3::new(0.4, 0.4, 0.05);
/// Height of the centre of door and window placeholders
pub const OPENING_CENTER_Y: f32 = 0.5;

/// One box to place in the 3D scene
#[derive(Debug, Clone, PartialEq)]
pub struct BoxPrimitive {
    /// The plan element this box stands for, if any
    pub source: Option<ElementId>,
    /// Centre of the box in world space
    pub position: Vec3,
    /// Full extent along each local axis
    pub size: Vec3,
    /// Rotation about the vertical axis, clockwise seen from above like the plan
    pub rotation_degrees: f32,
    pub color: Color32,
}

impl BoxPrimitive {
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.size.is_finite() && self.rotation_degrees.is_finite()
    }

    /// Yaw about +Y in radians. Plan rotations are clockwise seen from above,
    /// which is negative about +Y.
    pub fn yaw(&self) -> f32 {
        -self.rotation_degrees.to_radians()
    }

    /// Maps the unit cube centred on the origin onto this box, with the whole
    /// scene turned by `spin` radians.
    pub fn model_matrix(&self, spin: f32) -> Mat4 {
        Mat4::from_rotation_y(spin)
            * Mat4::from_translation(self.position)
            * Mat4::from_rotation_y(self.yaw())
            * Mat4::from_scale(self.size)
    }
}

/// Mean position of the elements in grid units; zero for an empty plan.
pub fn centroid(elements: &[Element]) -> Vec2 {
    if elements.is_empty() {
        return Vec2::ZERO;
    }
    let sum = elements
        .iter()
        .fold(Vec2::ZERO, |sum, element| sum + Vec2::new(element.position().x, element.position().y));
    sum / elements.len() as f32
}

/// Project the plan into world-space boxes, centred on the plan's centroid.
///
/// Pure: the result depends only on `elements` and the config, and is rebuilt
/// from scratch for every frame.
pub fn project_scene(elements: &[Element], config: &EditorConfig) -> Vec<BoxPrimitive> {
    let center = centroid(elements);
    let scale = config.world_scale;

    elements
        .iter()
        .map(|element| {
            let world_x = (element.position().x - center.x) * scale;
            let world_z = (element.position().y - center.y) * scale;

            let (position, size, color) = match element.kind() {
                ElementKind::Wall => (
                    Vec3::new(world_x, config.wall_height / 2.0, world_z),
                    Vec3::new(
                        element.wall_width() * scale,
                        config.wall_height,
                        element.wall_thickness() * scale,
                    ),
                    WALL_COLOR,
                ),
                ElementKind::Door => (Vec3::new(world_x, OPENING_CENTER_Y, world_z), DOOR_SIZE, DOOR_COLOR),
                ElementKind::Window => (Vec3::new(world_x, OPENING_CENTER_Y, world_z), WINDOW_SIZE, WINDOW_COLOR),
            };

            BoxPrimitive {
                source: Some(element.id()),
                position,
                size,
                rotation_degrees: element.rotation_degrees(),
                color,
            }
        })
        .collect()
}
