use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::FutureExt;
use futures::future::{self, BoxFuture};
use parking_lot::Mutex;

use crate::error::AssetError;

/// Source of raw asset bytes.
pub trait AssetLoader: Send + Sync + 'static {
    fn load(&self, path: &str) -> BoxFuture<'static, Result<Vec<u8>, AssetError>>;
}

/// Serves assets registered up front. Used on the web, where the showcase
/// model is embedded, and in tests.
#[derive(Debug, Default)]
pub struct MemoryAssetLoader {
    assets: Mutex<HashMap<String, Arc<[u8]>>>,
    loads: AtomicUsize,
}

impl MemoryAssetLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asset(self, path: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        self.insert(path, bytes);
        self
    }

    pub fn insert(&self, path: impl Into<String>, bytes: impl Into<Arc<[u8]>>) {
        self.assets.lock().insert(path.into(), bytes.into());
    }

    pub fn remove(&self, path: &str) {
        self.assets.lock().remove(path);
    }

    /// Number of `load` calls served so far
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::Relaxed)
    }
}

impl AssetLoader for MemoryAssetLoader {
    fn load(&self, path: &str) -> BoxFuture<'static, Result<Vec<u8>, AssetError>> {
        self.loads.fetch_add(1, Ordering::Relaxed);
        let result = self
            .assets
            .lock()
            .get(path)
            .map(|bytes| bytes.to_vec())
            .ok_or_else(|| AssetError::NotFound(path.to_owned()));
        future::ready(result).boxed()
    }
}

/// Reads assets from disk on a background thread.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileAssetLoader {
    root: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileAssetLoader {
    pub fn new(root: impl Into<std::path::PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl AssetLoader for FileAssetLoader {
    fn load(&self, path: &str) -> BoxFuture<'static, Result<Vec<u8>, AssetError>> {
        use futures::channel::oneshot;

        let full_path = self.root.join(path);
        let name = path.to_owned();
        let (sender, receiver) = oneshot::channel();

        let worker_name = name.clone();
        let spawned = std::thread::Builder::new()
            .name("asset-loader".into())
            .spawn(move || {
                log::debug!("Reading asset {}", full_path.display());
                let result = std::fs::read(&full_path).map_err(|err| match err.kind() {
                    std::io::ErrorKind::NotFound => AssetError::NotFound(worker_name.clone()),
                    _ => AssetError::Io {
                        path: worker_name.clone(),
                        message: err.to_string(),
                    },
                });
                // The receiver may be gone if the cache was cleared meanwhile.
                let _ = sender.send(result);
            });

        if let Err(err) = spawned {
            log::error!("Failed to start asset loader thread: {}", err);
            return future::ready(Err(AssetError::Io {
                path: name,
                message: err.to_string(),
            }))
            .boxed();
        }

        async move { receiver.await.unwrap_or(Err(AssetError::Cancelled)) }.boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn memory_loader_serves_registered_assets() {
        let loader = MemoryAssetLoader::new().with_asset("a.glb", vec![1u8, 2, 3]);
        assert_eq!(block_on(loader.load("a.glb")), Ok(vec![1, 2, 3]));
        assert_eq!(
            block_on(loader.load("b.glb")),
            Err(AssetError::NotFound("b.glb".into()))
        );
        assert_eq!(loader.load_count(), 2);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_loader_reports_missing_files() {
        let loader = FileAssetLoader::new(std::env::temp_dir());
        let result = block_on(loader.load("floorplan-builder-missing/17.glb"));
        assert_eq!(result, Err(AssetError::NotFound("floorplan-builder-missing/17.glb".into())));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_loader_reads_from_its_root() {
        let dir = std::env::temp_dir().join(format!("floorplan-builder-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("model.glb"), b"bytes").unwrap();

        let loader = FileAssetLoader::new(&dir);
        assert_eq!(block_on(loader.load("model.glb")), Ok(b"bytes".to_vec()));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
