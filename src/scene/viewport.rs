use egui::{Color32, Pos2, Rect, Response, Sense, Shape, Stroke, Ui, vec2};
use glam::{Quat, Vec3};

use super::camera::{OrbitCamera, ScreenProjector};
use super::projection::BoxPrimitive;
use crate::error::RenderError;

const MIN_VIEWPORT_SIZE: f32 = 16.0;
const BACKGROUND: Color32 = Color32::from_rgb(240, 240, 240);
const FLOOR_COLOR: Color32 = Color32::WHITE;
const FLOOR_SIZE: f32 = 50.0;
const FLOOR_TILES: usize = 10;
const EDGE_COLOR: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 40);
const AMBIENT: f32 = 0.45;

// Unit cube corners: bit 0 = +x, bit 1 = +y, bit 2 = +z
const CUBE_FACES: [([usize; 4], Vec3); 6] = [
    ([1, 3, 7, 5], Vec3::X),
    ([0, 4, 6, 2], Vec3::NEG_X),
    ([2, 6, 7, 3], Vec3::Y),
    ([0, 1, 5, 4], Vec3::NEG_Y),
    ([4, 5, 7, 6], Vec3::Z),
    ([0, 2, 3, 1], Vec3::NEG_Z),
];

/// One quad ready to paint, in screen space
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedFace {
    pub points: [Pos2; 4],
    /// Distance from the camera to the face centre
    pub depth: f32,
    pub color: Color32,
}

/// Paints box primitives with a perspective orbit camera.
///
/// Faces are back-face culled and painted far to near, which is enough for
/// the non-intersecting boxes a floor plan produces.
#[derive(Debug, Clone)]
pub struct SceneViewport {
    camera: OrbitCamera,
    light_direction: Vec3,
    show_floor: bool,
}

impl Default for SceneViewport {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneViewport {
    pub fn new() -> Self {
        Self::with_camera(OrbitCamera::default())
    }

    pub fn with_camera(camera: OrbitCamera) -> Self {
        Self {
            camera,
            // Key light at (5, 8, 5) shining on the origin
            light_direction: -Vec3::new(5.0, 8.0, 5.0).normalize(),
            show_floor: true,
        }
    }

    pub fn without_floor(mut self) -> Self {
        self.show_floor = false;
        self
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    /// Allocate a `height`-tall viewport, apply camera input and paint the boxes
    /// with the whole scene turned by `spin` radians.
    pub fn show(
        &mut self,
        ui: &mut Ui,
        height: f32,
        primitives: &[BoxPrimitive],
        spin: f32,
    ) -> Result<Response, RenderError> {
        let (response, painter) = ui.allocate_painter(vec2(ui.available_width(), height), Sense::drag());

        if response.dragged() {
            self.camera.orbit(response.drag_delta());
        }
        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll != 0.0 {
                self.camera.zoom(scroll);
            }
        }

        let faces = self.build_faces(response.rect, primitives, spin)?;

        painter.rect_filled(response.rect, 8.0, BACKGROUND);
        painter.extend(
            faces
                .into_iter()
                .map(|face| Shape::convex_polygon(face.points.to_vec(), face.color, Stroke::new(1.0, EDGE_COLOR))),
        );

        Ok(response)
    }

    /// Project and order every visible face for a viewport covering `rect`.
    pub fn build_faces(
        &self,
        rect: Rect,
        primitives: &[BoxPrimitive],
        spin: f32,
    ) -> Result<Vec<ProjectedFace>, RenderError> {
        if rect.width() < MIN_VIEWPORT_SIZE || rect.height() < MIN_VIEWPORT_SIZE {
            return Err(RenderError::ViewportTooSmall {
                width: rect.width(),
                height: rect.height(),
            });
        }
        if primitives.iter().any(|primitive| !primitive.is_finite()) {
            return Err(RenderError::NonFinitePrimitive);
        }

        let projector = ScreenProjector::new(&self.camera, rect);
        let eye = self.camera.eye();

        let mut faces = Vec::new();
        if self.show_floor {
            self.floor_faces(&projector, eye, &mut faces);
        }
        let floor_count = faces.len();

        for primitive in primitives {
            self.box_faces(&projector, eye, primitive, spin, &mut faces);
        }

        // Floor stays underneath; boxes are ordered far to near.
        faces[floor_count..].sort_by(|a, b| b.depth.total_cmp(&a.depth));
        Ok(faces)
    }

    fn floor_faces(&self, projector: &ScreenProjector, eye: Vec3, faces: &mut Vec<ProjectedFace>) {
        let tile = FLOOR_SIZE / FLOOR_TILES as f32;
        let start = -FLOOR_SIZE / 2.0;
        let color = self.shade(FLOOR_COLOR, Vec3::Y);

        for row in 0..FLOOR_TILES {
            for column in 0..FLOOR_TILES {
                let x0 = start + column as f32 * tile;
                let z0 = start + row as f32 * tile;
                let corners = [
                    Vec3::new(x0, 0.0, z0),
                    Vec3::new(x0 + tile, 0.0, z0),
                    Vec3::new(x0 + tile, 0.0, z0 + tile),
                    Vec3::new(x0, 0.0, z0 + tile),
                ];
                if let Some(face) = project_quad(projector, eye, corners, color) {
                    faces.push(face);
                }
            }
        }
    }

    fn box_faces(
        &self,
        projector: &ScreenProjector,
        eye: Vec3,
        primitive: &BoxPrimitive,
        spin: f32,
        faces: &mut Vec<ProjectedFace>,
    ) {
        let model = primitive.model_matrix(spin);
        let orientation = Quat::from_rotation_y(spin + primitive.yaw());

        let corners: [Vec3; 8] = std::array::from_fn(|i| {
            let local = Vec3::new(
                if i & 1 != 0 { 0.5 } else { -0.5 },
                if i & 2 != 0 { 0.5 } else { -0.5 },
                if i & 4 != 0 { 0.5 } else { -0.5 },
            );
            model.transform_point3(local)
        });

        for (indices, local_normal) in CUBE_FACES {
            let normal = orientation * local_normal;
            let quad = indices.map(|i| corners[i]);
            let center = quad.iter().copied().sum::<Vec3>() / 4.0;
            if normal.dot(eye - center) <= 0.0 {
                continue;
            }
            let color = self.shade(primitive.color, normal);
            if let Some(face) = project_quad(projector, eye, quad, color) {
                faces.push(face);
            }
        }
    }

    fn shade(&self, color: Color32, normal: Vec3) -> Color32 {
        let diffuse = normal.dot(-self.light_direction).max(0.0);
        let intensity = AMBIENT + (1.0 - AMBIENT) * diffuse;
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        let scale = |channel: u8| (channel as f32 * intensity).round().clamp(0.0, 255.0) as u8;
        Color32::from_rgba_unmultiplied(scale(r), scale(g), scale(b), a)
    }
}

fn project_quad(projector: &ScreenProjector, eye: Vec3, quad: [Vec3; 4], color: Color32) -> Option<ProjectedFace> {
    let mut points = [Pos2::ZERO; 4];
    for (point, corner) in points.iter_mut().zip(quad) {
        *point = projector.project(corner)?;
    }

    // Keep a consistent clockwise screen winding for the tessellator.
    if signed_area(&points) < 0.0 {
        points.reverse();
    }

    let center = quad.iter().copied().sum::<Vec3>() / 4.0;
    Some(ProjectedFace {
        points,
        depth: (center - eye).length(),
        color,
    })
}

fn signed_area(points: &[Pos2; 4]) -> f32 {
    let mut area = 0.0;
    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        area += a.x * b.y - b.x * a.y;
    }
    area / 2.0
}
