//! The static model viewer shown next to the editor.
//!
//! A single GLB model is loaded through the [`AssetCache`], fitted into a
//! small cube around the origin and painted as one box per mesh. Wall-like
//! meshes take a colour picked by the user.

use egui::Color32;
use glam::Vec3;

use crate::asset::{AssetCache, AssetLoader};
use crate::config::EditorConfig;
use crate::error::AssetError;
use crate::error_boundary::ErrorBoundary;
use crate::scene::{BoxPrimitive, OrbitCamera, SceneViewport, SpinAnimation};

#[cfg(not(target_arch = "wasm32"))]
pub type DefaultLoader = crate::asset::FileAssetLoader;
#[cfg(target_arch = "wasm32")]
pub type DefaultLoader = crate::asset::MemoryAssetLoader;

pub const DEFAULT_WALL_COLOR: Color32 = Color32::from_rgb(0xf5, 0xf5, 0xf5);
/// Colour of meshes too small to be walls
pub const FURNISHING_COLOR: Color32 = Color32::from_rgb(176, 152, 128);

pub const WALL_PRESETS: [(&str, Color32); 7] = [
    ("White", Color32::from_rgb(0xff, 0xff, 0xff)),
    ("Cream", Color32::from_rgb(0xf5, 0xf5, 0xf5)),
    ("Beige", Color32::from_rgb(0xf0, 0xe6, 0xd2)),
    ("Light Blue", Color32::from_rgb(0xe3, 0xf2, 0xfd)),
    ("Light Green", Color32::from_rgb(0xe8, 0xf5, 0xe9)),
    ("Light Pink", Color32::from_rgb(0xfc, 0xe4, 0xec)),
    ("Light Gray", Color32::from_rgb(0xe0, 0xe0, 0xe0)),
];

/// Loader used by the app: files relative to the working directory on native,
/// the bundled sample house on the web.
#[cfg(not(target_arch = "wasm32"))]
pub fn default_loader(_model_path: &str) -> DefaultLoader {
    crate::asset::FileAssetLoader::new(".")
}

#[cfg(target_arch = "wasm32")]
pub fn default_loader(model_path: &str) -> DefaultLoader {
    crate::asset::MemoryAssetLoader::new().with_asset(model_path, crate::asset::sample_house_glb())
}

pub struct ShowcaseViewer<L: AssetLoader = DefaultLoader> {
    pub(crate) cache: AssetCache<L>,
    pub(crate) viewport: SceneViewport,
    pub(crate) spin: SpinAnimation,
    pub(crate) boundary: ErrorBoundary,
    model_path: String,
    fit_size: f32,
    wall_color: Color32,
}

impl<L: AssetLoader> ShowcaseViewer<L> {
    pub fn new(loader: L, config: &EditorConfig) -> Self {
        Self {
            cache: AssetCache::new(loader),
            viewport: SceneViewport::with_camera(OrbitCamera::looking_from(Vec3::new(4.0, 4.0, 6.0), Vec3::ZERO, 45.0)),
            spin: SpinAnimation::new(config.spin_per_frame),
            boundary: ErrorBoundary::new("3D model"),
            model_path: config.showcase_model.clone(),
            fit_size: config.fit_size,
            wall_color: DEFAULT_WALL_COLOR,
        }
    }

    pub fn model_path(&self) -> &str {
        &self.model_path
    }

    pub fn cache(&self) -> &AssetCache<L> {
        &self.cache
    }

    pub fn wall_color(&self) -> Color32 {
        self.wall_color
    }

    pub fn set_wall_color(&mut self, color: Color32) {
        if self.wall_color != color {
            log::debug!("Wall colour set to {:?}", color);
            self.wall_color = color;
        }
    }

    /// Boxes for the current model: `Ok(None)` while it is still loading.
    pub fn primitives(&self) -> Result<Option<Vec<BoxPrimitive>>, AssetError> {
        match self.cache.poll(&self.model_path) {
            None => Ok(None),
            Some(Err(err)) => Err(err),
            Some(Ok(scene)) => {
                let fit = scene.fit_transform(self.fit_size)?;
                Ok(Some(scene.to_box_primitives(fit, self.wall_color, FURNISHING_COLOR)))
            }
        }
    }

    /// Drop a failed load so the next frame reads the model again.
    pub fn retry(&mut self) {
        self.cache.invalidate(&self.model_path);
        self.boundary.reset();
    }

    /// Release the model and rewind the animation when the page is left.
    pub fn teardown(&mut self) {
        self.cache.clear();
        self.spin.reset();
        self.boundary.reset();
    }
}
