//! Draggable person card.

use crate::model::person::Person;
use crate::view::drag_drop::{DragPayload, DropEffect, TEXT_PLAIN};

/// Card for one person inside a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonItem {
    person: Person,
}

impl PersonItem {
    /// Wraps a snapshot record; the card never writes back to the store.
    pub fn new(person: Person) -> Self {
        Self { person }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    /// Starts a drag: the payload carries only the person id as text.
    pub fn drag_start(&self) -> DragPayload {
        let mut payload = DragPayload::new();
        payload.set_data(TEXT_PLAIN, self.person.id.to_string());
        payload.effect_allowed = DropEffect::Move;
        payload
    }

    /// DOM-style element id, e.g. `person-3`.
    pub fn element_id(&self) -> String {
        format!("person-{}", self.person.id)
    }

    pub fn heading(&self) -> &str {
        &self.person.name
    }

    /// Specialty label.
    pub fn subheading(&self) -> &'static str {
        self.person.position.label()
    }

    pub fn body(&self) -> &str {
        &self.person.info
    }
}
