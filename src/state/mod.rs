mod action;
pub mod context;
mod editor_state;
mod reducer;

pub use action::EditorAction;
pub use context::EditorContext;
pub use editor_state::{EditorState, Tool, ViewMode};
pub use reducer::reduce;
