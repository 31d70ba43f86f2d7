use std::cell::RefCell;

use crate::event::{EditorEvent, EventHandler};

/// Fans editor events out to every subscribed handler, in subscription order.
///
/// Single-threaded: the bus lives next to the editor state on the UI thread.
/// Handlers must not emit on the bus they are subscribed to; such nested
/// events are dropped with a warning.
#[derive(Default)]
pub struct EventBus {
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.handlers.try_borrow().map(|handlers| handlers.len());
        f.debug_struct("EventBus").field("handlers", &count.ok()).finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.handlers.borrow_mut().push(handler);
    }

    pub fn emit(&self, event: EditorEvent) {
        self.emit_all([event]);
    }

    /// Deliver a batch of events; each handler sees them in order.
    pub fn emit_all(&self, events: impl IntoIterator<Item = EditorEvent>) {
        let Ok(mut handlers) = self.handlers.try_borrow_mut() else {
            log::warn!("Dropping editor events emitted from inside a handler");
            return;
        };
        for event in events {
            for handler in handlers.iter_mut() {
                handler.handle_event(&event);
            }
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}
