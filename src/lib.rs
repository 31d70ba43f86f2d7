#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod asset;
pub mod components;
pub mod config;
pub mod element;
pub mod error;
pub mod error_boundary;
pub mod event;
pub mod geometry;
pub mod id_generator;
pub mod panels;
pub mod renderer;
pub mod scene;
pub mod showcase;
pub mod state;
pub mod util;

pub use app::{FloorPlanApp, Page};
pub use config::EditorConfig;
pub use element::{Element, ElementKind};
pub use error::{AssetError, RenderError};
pub use error_boundary::ErrorBoundary;
pub use renderer::{DrawCommand, PlanRenderer, plan_draw_commands};
pub use scene::{BoxPrimitive, project_scene};
pub use state::{EditorAction, EditorContext, EditorState, Tool, ViewMode, reduce};
