//! Core domain logic for the roster board.
//! This crate owns the person records and every rule that touches them.

pub mod board;
pub mod logging;
pub mod model;
pub mod state;
pub mod validation;
pub mod view;

pub use board::RosterBoard;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::person::{
    Experience, ParseExperienceError, ParsePersonIdError, ParseSpecialtyError, Person, PersonId,
    Specialty,
};
pub use state::person_state::{Listener, ListenerId, MoveOutcome, PersonState, Snapshot};
pub use validation::{Validatable, Value, Violation};
pub use view::drag_drop::{DragPayload, DropEffect, TEXT_PLAIN};
pub use view::person_input::{InputError, InputField, PersonDraft, PersonInput};
pub use view::person_item::PersonItem;
pub use view::person_list::{ColumnRenderer, LogRenderer, PersonList};

/// Minimal health-check API for wiring probes.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
