use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::event::{EditorEvent, EventHandler};

/// Writes every editor event to the log at debug level
#[derive(Debug, Default)]
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn handle_event(&mut self, event: &EditorEvent) {
        log::debug!("editor event: {:?}", event);
    }
}

/// Keeps the most recent events, newest last.
///
/// Clones share the same buffer, so one clone can be subscribed to the bus while
/// another is read by the UI.
#[derive(Debug, Clone)]
pub struct RecentEvents {
    events: Rc<RefCell<VecDeque<EditorEvent>>>,
    capacity: usize,
}

impl RecentEvents {
    pub fn new(capacity: usize) -> Self {
        Self {
            events: Rc::new(RefCell::new(VecDeque::with_capacity(capacity))),
            capacity: capacity.max(1),
        }
    }

    pub fn snapshot(&self) -> Vec<EditorEvent> {
        self.events.borrow().iter().cloned().collect()
    }

    pub fn last(&self) -> Option<EditorEvent> {
        self.events.borrow().back().cloned()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl EventHandler for RecentEvents {
    fn handle_event(&mut self, event: &EditorEvent) {
        let mut events = self.events.borrow_mut();
        if events.len() == self.capacity {
            events.pop_front();
        }
        events.push_back(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recent_events_drop_the_oldest() {
        let mut recent = RecentEvents::new(2);
        recent.handle_event(&EditorEvent::WallDraftDiscarded);
        recent.handle_event(&EditorEvent::PlanCleared { removed: 1 });
        recent.handle_event(&EditorEvent::PlanCleared { removed: 2 });

        assert_eq!(
            recent.snapshot(),
            vec![
                EditorEvent::PlanCleared { removed: 1 },
                EditorEvent::PlanCleared { removed: 2 },
            ]
        );
    }
}
