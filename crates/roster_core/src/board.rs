//! Roster board composition root.
//!
//! # Responsibility
//! - Own the one `PersonState` of a running board.
//! - Wire the input form and the four level columns to it.
//!
//! # Invariants
//! - Columns are created in `Experience::ALL` order, one per level.
//! - All mutations go through the owned store, so every column sees them.

use crate::model::person::{Experience, PersonId};
use crate::state::person_state::{MoveOutcome, PersonState};
use crate::view::drag_drop::DragPayload;
use crate::view::person_input::{InputError, PersonInput};
use crate::view::person_item::PersonItem;
use crate::view::person_list::{ColumnRenderer, LogRenderer, PersonList};
use log::info;

pub struct RosterBoard {
    store: PersonState,
    input: PersonInput,
    columns: [PersonList; 4],
}

impl RosterBoard {
    /// Creates a board whose columns render to the log.
    pub fn new() -> Self {
        Self::with_renderers(|_| -> Box<dyn ColumnRenderer> { Box::new(LogRenderer) })
    }

    /// Creates a board with one renderer per column from `factory`.
    pub fn with_renderers(
        mut factory: impl FnMut(Experience) -> Box<dyn ColumnRenderer>,
    ) -> Self {
        let mut store = PersonState::new();
        let columns = Experience::ALL
            .map(|level| PersonList::with_renderer(level, &mut store, factory(level)));
        info!(
            "event=board_init module=board status=ok columns={} listeners={} levels={}",
            columns.len(),
            store.listener_count(),
            columns
                .iter()
                .map(|column| column.level().as_str())
                .collect::<Vec<_>>()
                .join(",")
        );

        Self {
            store,
            input: PersonInput::new(),
            columns,
        }
    }

    /// Shared record store.
    pub fn store(&self) -> &PersonState {
        &self.store
    }

    pub fn input(&self) -> &PersonInput {
        &self.input
    }

    /// Form fields, writable until the next `submit`.
    pub fn input_mut(&mut self) -> &mut PersonInput {
        &mut self.input
    }

    /// Submits the form into the store.
    pub fn submit(&mut self) -> Result<PersonId, InputError> {
        self.input.submit(&mut self.store)
    }

    /// Column for `level`.
    pub fn column(&self, level: Experience) -> &PersonList {
        &self.columns[level.index()]
    }

    /// All columns in `Experience::ALL` order.
    pub fn columns(&self) -> &[PersonList] {
        &self.columns
    }

    /// Card for one stored person, if present.
    pub fn item(&self, id: PersonId) -> Option<PersonItem> {
        self.store.get(id).cloned().map(PersonItem::new)
    }

    /// Forwards a drag-over to the column for `level`.
    pub fn drag_over(&self, level: Experience, payload: &DragPayload) -> bool {
        self.column(level).handle_drag_over(payload)
    }

    pub fn drag_leave(&self, level: Experience) {
        self.column(level).handle_drag_leave();
    }

    /// Drops `payload` onto the column for `level`.
    pub fn drop_on(&mut self, level: Experience, payload: &DragPayload) -> MoveOutcome {
        self.columns[level.index()].handle_drop(&mut self.store, payload)
    }
}

impl Default for RosterBoard {
    fn default() -> Self {
        Self::new()
    }
}
