//! 3D preview of the plan: projection into world-space boxes, an orbit camera
//! and a small painter-based viewport.

mod camera;
mod projection;
mod spin;
mod viewport;

pub use camera::{OrbitCamera, ScreenProjector};
pub use projection::{
    BoxPrimitive, DOOR_COLOR, DOOR_SIZE, OPENING_CENTER_Y, WALL_COLOR, WINDOW_COLOR, WINDOW_SIZE, centroid,
    project_scene,
};
pub use spin::SpinAnimation;
pub use viewport::{ProjectedFace, SceneViewport};
