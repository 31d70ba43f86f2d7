//! Notifications about editor state changes.
//!
//! The editor context diffs the state before and after each action and emits
//! one [`EditorEvent`] per observable change. Handlers log them or keep them
//! for display.

mod bus;
mod events;
mod handlers;

pub use bus::EventBus;
pub use events::EditorEvent;
pub use handlers::{LoggingEventHandler, RecentEvents};

/// Receives every event emitted on an [`EventBus`] it is subscribed to.
pub trait EventHandler {
    fn handle_event(&mut self, event: &EditorEvent);
}
