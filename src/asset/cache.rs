use std::collections::HashMap;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use parking_lot::Mutex;

use super::glb;
use super::loader::AssetLoader;
use super::ModelScene;
use crate::error::AssetError;

pub type ModelResult = Result<Arc<ModelScene>, AssetError>;

/// A model load that any number of callers can await or poll.
pub type SharedModel = Shared<BoxFuture<'static, ModelResult>>;

/// Memoizes model loads by path.
///
/// The first `load` of a path starts the read and decode; later calls get a
/// clone of the same shared future, finished or not. Failed loads stay cached
/// until the path is invalidated.
pub struct AssetCache<L: AssetLoader> {
    loader: Arc<L>,
    entries: Mutex<HashMap<String, SharedModel>>,
}

impl<L: AssetLoader> AssetCache<L> {
    pub fn new(loader: L) -> Self {
        Self {
            loader: Arc::new(loader),
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    pub fn load(&self, path: &str) -> SharedModel {
        let mut entries = self.entries.lock();
        if let Some(existing) = entries.get(path) {
            return existing.clone();
        }

        log::info!("Loading model {}", path);
        let bytes = self.loader.load(path);
        let name = path.to_owned();
        let model = async move {
            let bytes = bytes.await?;
            match glb::parse_glb(&bytes) {
                Ok(scene) => {
                    log::info!("Loaded model {} ({} meshes)", name, scene.meshes().len());
                    Ok(Arc::new(scene))
                }
                Err(err) => {
                    log::warn!("Failed to decode model {}: {}", name, err);
                    Err(err)
                }
            }
        }
        .boxed()
        .shared();

        entries.insert(path.to_owned(), model.clone());
        model
    }

    /// Start the load if needed and return its result if it has finished.
    pub fn poll(&self, path: &str) -> Option<ModelResult> {
        self.load(path).now_or_never()
    }

    /// Forget a path so the next `load` reads it again. Returns whether it was cached.
    pub fn invalidate(&self, path: &str) -> bool {
        let removed = self.entries.lock().remove(path).is_some();
        if removed {
            log::debug!("Invalidated model {}", path);
        }
        removed
    }

    /// Drop every entry, finished or pending.
    pub fn clear(&self) {
        let mut entries = self.entries.lock();
        log::debug!("Clearing {} cached model(s)", entries.len());
        entries.clear();
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.lock().contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
