//! The owner of the editor state on the UI thread.
//!
//! `EditorContext` runs every [`EditorAction`] through [`reduce`], swaps in the
//! resulting state and reports what changed on its [`EventBus`]. Panels never
//! touch `EditorState` directly; they dispatch actions and read the state back.
use super::{EditorAction, EditorState, reduce};
use crate::config::EditorConfig;
use crate::event::{EditorEvent, EventBus};

#[derive(Debug)]
pub struct EditorContext {
    state: EditorState,
    config: EditorConfig,
    event_bus: EventBus,
}

impl EditorContext {
    /// Creates a context with an empty plan and no subscribers.
    pub fn new(config: EditorConfig) -> Self {
        Self {
            state: EditorState::new(),
            config,
            event_bus: EventBus::new(),
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Applies an action and emits one event per observable change.
    pub fn dispatch(&mut self, action: EditorAction) {
        let is_clear_all = matches!(action, EditorAction::ClearAll);
        if !matches!(action, EditorAction::PointerMove(_)) {
            log::trace!("dispatch {}", action.name());
        }

        let next = reduce(&self.state, action, &self.config);
        let events = diff_events(&self.state, &next, is_clear_all);
        self.state = next;

        self.event_bus.emit_all(events);
    }

    /// Throws the plan away, e.g. when the builder page is left.
    pub fn reset(&mut self) {
        log::info!("resetting editor ({} elements)", self.state.elements().len());
        self.state = EditorState::new();
    }
}

fn diff_events(old: &EditorState, new: &EditorState, is_clear_all: bool) -> Vec<EditorEvent> {
    let mut events = Vec::new();

    if old.active_tool != new.active_tool {
        events.push(EditorEvent::ToolChanged {
            old: old.active_tool,
            new: new.active_tool,
        });
    }

    if is_clear_all {
        if !old.elements.is_empty() {
            events.push(EditorEvent::PlanCleared {
                removed: old.elements.len(),
            });
        }
    } else {
        for element in &old.elements {
            if new.find_element(element.id()).is_none() {
                events.push(EditorEvent::ElementRemoved {
                    id: element.id(),
                    kind: element.kind(),
                });
            }
        }
    }

    let mut added = false;
    for element in &new.elements {
        if old.find_element(element.id()).is_none() {
            added = true;
            events.push(EditorEvent::ElementAdded {
                id: element.id(),
                kind: element.kind(),
            });
        }
    }

    match (old.wall_draft_start, new.wall_draft_start) {
        (None, Some(at)) => events.push(EditorEvent::WallDraftStarted { at }),
        (Some(_), None) if !added => events.push(EditorEvent::WallDraftDiscarded),
        _ => {}
    }

    if old.selected_id != new.selected_id {
        events.push(EditorEvent::SelectionChanged {
            old: old.selected_id,
            new: new.selected_id,
        });
    }

    if old.view_mode != new.view_mode {
        events.push(EditorEvent::ViewModeChanged {
            old: old.view_mode,
            new: new.view_mode,
        });
    }

    events
}
