//! Per-level column view.
//!
//! # Responsibility
//! - Keep a filtered copy of the store for exactly one experience level.
//! - Translate drop gestures into `PersonState::move_person` calls.
//!
//! # Invariants
//! - The cached list preserves store insertion order.
//! - The cached list is replaced only from store snapshots.
//! - Drops never validate ids locally; unknown or malformed ids fall through
//!   to the store's no-op path.

use crate::model::person::{Experience, Person, PersonId};
use crate::state::person_state::{ListenerId, MoveOutcome, PersonState, Snapshot};
use crate::view::drag_drop::{DragPayload, TEXT_PLAIN};
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

/// Rendering collaborator for one column.
pub trait ColumnRenderer {
    fn render(&mut self, level: Experience, persons: &[Person]);
}

/// Default renderer: emits one metadata-only debug event per render.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogRenderer;

impl ColumnRenderer for LogRenderer {
    fn render(&mut self, level: Experience, persons: &[Person]) {
        debug!(
            "event=column_render module=view level={} count={}",
            level,
            persons.len()
        );
    }
}

struct ColumnState {
    assigned: Snapshot,
    droppable: bool,
    renderer: Box<dyn ColumnRenderer>,
}

impl ColumnState {
    fn refresh(&mut self, level: Experience, persons: &[Person]) {
        self.assigned = persons
            .iter()
            .filter(|person| person.experience == level)
            .cloned()
            .collect::<Vec<_>>()
            .into();
        self.renderer.render(level, &self.assigned);
    }
}

/// Column showing every person at one experience level.
pub struct PersonList {
    level: Experience,
    state: Rc<RefCell<ColumnState>>,
    listener: ListenerId,
}

impl PersonList {
    /// Creates a column that renders to the log.
    pub fn new(level: Experience, store: &mut PersonState) -> Self {
        Self::with_renderer(level, store, Box::new(LogRenderer))
    }

    /// Builds the column, renders the current store contents once, and
    /// subscribes to future mutations.
    pub fn with_renderer(
        level: Experience,
        store: &mut PersonState,
        renderer: Box<dyn ColumnRenderer>,
    ) -> Self {
        let state = Rc::new(RefCell::new(ColumnState {
            assigned: Snapshot::from(Vec::<Person>::new()),
            droppable: false,
            renderer,
        }));
        state.borrow_mut().refresh(level, &store.snapshot());

        let listener_state = Rc::clone(&state);
        let listener = store.add_listener(move |persons: &Snapshot| {
            listener_state.borrow_mut().refresh(level, persons);
        });

        Self {
            level,
            state,
            listener,
        }
    }

    /// Experience level this column displays.
    pub fn level(&self) -> Experience {
        self.level
    }

    /// Element id of the column's list, e.g. `junior-person-list`.
    pub fn list_id(&self) -> String {
        format!("{}-person-list", self.level)
    }

    /// Heading shown above the list, e.g. `JUNIOR LIST`.
    pub fn title(&self) -> String {
        format!("{} LIST", self.level.as_str().to_ascii_uppercase())
    }

    /// Persons currently shown, in store insertion order.
    ///
    /// The returned list is detached from the column: holding it across
    /// later store mutations is allowed and it keeps its contents.
    pub fn assigned_persons(&self) -> Snapshot {
        Snapshot::clone(&self.state.borrow().assigned)
    }

    /// Whether the column is highlighted as a drop target.
    pub fn is_droppable(&self) -> bool {
        self.state.borrow().droppable
    }

    /// Accepts the drag only when its first format is `text/plain`.
    pub fn handle_drag_over(&self, payload: &DragPayload) -> bool {
        let accepted = payload.carries_text_first();
        if accepted {
            self.state.borrow_mut().droppable = true;
        }
        accepted
    }

    /// Clears the drop highlight.
    pub fn handle_drag_leave(&self) {
        self.state.borrow_mut().droppable = false;
    }

    /// Moves the dragged person into this column.
    pub fn handle_drop(&self, store: &mut PersonState, payload: &DragPayload) -> MoveOutcome {
        let raw_id = payload.get_data(TEXT_PLAIN).unwrap_or_default();
        let outcome = match raw_id.parse::<PersonId>() {
            Ok(id) => store.move_person(id, self.level),
            Err(_) => {
                debug!(
                    "event=column_drop module=view status=skipped reason=invalid_id level={}",
                    self.level
                );
                MoveOutcome::NotFound
            }
        };
        self.handle_drag_leave();
        outcome
    }

    /// Unsubscribes the column from the store.
    pub fn detach(self, store: &mut PersonState) -> bool {
        store.remove_listener(self.listener)
    }
}
