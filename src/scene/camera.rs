use egui::{Pos2, Rect};
use glam::{Mat4, Vec3};

const MIN_DISTANCE: f32 = 2.0;
const MAX_DISTANCE: f32 = 15.0;
const MAX_PITCH: f32 = 1.45;
const MIN_PITCH: f32 = 0.05;
const ORBIT_SPEED: f32 = 0.01;
const ZOOM_SPEED: f32 = 0.01;
const NEAR: f32 = 0.1;
const FAR: f32 = 200.0;

/// A perspective camera orbiting a target point.
///
/// Yaw and pitch are in radians; pitch stays above the floor so the camera never
/// looks from underneath the plan.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    yaw: f32,
    pitch: f32,
    distance: f32,
    fov_degrees: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::looking_from(Vec3::new(5.0, 5.0, 5.0), Vec3::ZERO, 50.0)
    }
}

impl OrbitCamera {
    pub fn looking_from(eye: Vec3, target: Vec3, fov_degrees: f32) -> Self {
        let offset = eye - target;
        let distance = offset.length().clamp(MIN_DISTANCE, MAX_DISTANCE);
        let horizontal = (offset.x * offset.x + offset.z * offset.z).sqrt();
        Self {
            target,
            yaw: offset.x.atan2(offset.z),
            pitch: offset.y.atan2(horizontal).clamp(MIN_PITCH, MAX_PITCH),
            distance,
            fov_degrees,
        }
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        self.target + Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw) * self.distance
    }

    /// Rotate around the target by a pointer drag in points.
    pub fn orbit(&mut self, drag: egui::Vec2) {
        self.yaw -= drag.x * ORBIT_SPEED;
        self.pitch = (self.pitch + drag.y * ORBIT_SPEED).clamp(MIN_PITCH, MAX_PITCH);
    }

    /// Move towards (positive scroll) or away from the target.
    pub fn zoom(&mut self, scroll: f32) {
        self.distance = (self.distance * (1.0 - scroll * ZOOM_SPEED)).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        let projection = Mat4::perspective_rh(self.fov_degrees.to_radians(), aspect, NEAR, FAR);
        let view = Mat4::look_at_rh(self.eye(), self.target, Vec3::Y);
        projection * view
    }
}

/// Maps world points onto a screen rectangle for one frame.
#[derive(Debug, Clone, Copy)]
pub struct ScreenProjector {
    view_projection: Mat4,
    rect: Rect,
}

impl ScreenProjector {
    pub fn new(camera: &OrbitCamera, rect: Rect) -> Self {
        let aspect = rect.width() / rect.height();
        Self {
            view_projection: camera.view_projection(aspect),
            rect,
        }
    }

    /// Screen position of `point`, or `None` when it lies behind the near plane.
    pub fn project(&self, point: Vec3) -> Option<Pos2> {
        let clip = self.view_projection * point.extend(1.0);
        if clip.w <= NEAR {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        let center = self.rect.center();
        Some(Pos2::new(
            center.x + ndc.x * self.rect.width() / 2.0,
            center.y - ndc.y * self.rect.height() / 2.0,
        ))
    }
}
