use thiserror::Error;

/// Errors from loading or decoding a 3D model asset.
///
/// `Clone` because a load result is shared between every caller that asked for
/// the same path.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssetError {
    #[error("asset not found: {0}")]
    NotFound(String),

    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("invalid GLB container: {0}")]
    InvalidGlb(String),

    #[error("invalid glTF json: {0}")]
    InvalidJson(String),

    #[error("model has an empty or degenerate bounding box")]
    DegenerateBounds,

    #[error("asset load was cancelled")]
    Cancelled,
}

/// Errors raised while painting a 3D view. These never escape an
/// [`ErrorBoundary`](crate::error_boundary::ErrorBoundary).
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error("viewport too small to render ({width}x{height})")]
    ViewportTooSmall { width: f32, height: f32 },

    #[error("primitive has a non-finite transform")]
    NonFinitePrimitive,
}
