//! Observable person record store.
//!
//! # Responsibility
//! - Own the authoritative, insertion-ordered list of persons.
//! - Allocate person ids from a monotonic counter.
//! - Fan every successful mutation out to registered listeners.
//!
//! # Invariants
//! - Ids are unique and never reused.
//! - Listeners run synchronously, in registration order, exactly once per
//!   mutating call, and only see an immutable `Snapshot`.
//! - No-op calls (unknown id, unchanged experience) notify nobody.

use crate::model::person::{Experience, Person, PersonId, Specialty};
use log::debug;
use std::sync::Arc;

/// Immutable copy of the full record sequence handed to listeners.
pub type Snapshot = Arc<[Person]>;

/// Callback invoked with a fresh snapshot after each mutation.
pub type Listener = Box<dyn FnMut(&Snapshot)>;

/// Handle returned by `add_listener`, usable for later removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

/// Which branch a `move_person` call took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Experience changed and listeners were notified.
    Moved { from: Experience, to: Experience },
    /// Person already had the requested experience.
    Unchanged,
    /// No person with that id exists.
    NotFound,
}

impl MoveOutcome {
    /// True only for the branch that notified listeners.
    pub fn is_moved(self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// In-memory person store with listener fan-out.
///
/// Construct exactly one per running board and pass it by reference.
#[derive(Default)]
pub struct PersonState {
    persons: Vec<Person>,
    next_person_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
}

impl PersonState {
    /// Empty store with no listeners; ids start at `0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener called after every successful mutation.
    pub fn add_listener(&mut self, listener: impl FnMut(&Snapshot) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Revokes a listener. Returns `false` when the handle is unknown.
    ///
    /// Remaining listeners keep their registration order.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Appends a new junior person and notifies listeners.
    ///
    /// # Contract
    /// - Inputs are trusted; validation belongs to the caller.
    /// - Returns the freshly allocated id.
    pub fn add_person(
        &mut self,
        name: impl Into<String>,
        info: impl Into<String>,
        position: Specialty,
    ) -> PersonId {
        let id = PersonId::new(self.next_person_id);
        self.next_person_id += 1;

        self.persons.push(Person::new(id, name, info, position));
        debug!(
            "event=person_add module=state status=ok id={} position={} total={}",
            id,
            position,
            self.persons.len()
        );

        self.update_listeners();
        id
    }

    /// Moves a person to another experience tier.
    ///
    /// Unknown ids and same-tier moves are silent no-ops; the returned
    /// outcome only reports which case applied.
    pub fn move_person(&mut self, id: PersonId, experience: Experience) -> MoveOutcome {
        let Some(person) = self.persons.iter_mut().find(|person| person.id == id) else {
            debug!("event=person_move module=state status=skipped reason=not_found id={id}");
            return MoveOutcome::NotFound;
        };

        if person.experience == experience {
            return MoveOutcome::Unchanged;
        }

        let from = person.experience;
        person.experience = experience;
        debug!(
            "event=person_move module=state status=ok id={} from={} to={}",
            id, from, experience
        );

        self.update_listeners();
        MoveOutcome::Moved {
            from,
            to: experience,
        }
    }

    /// Returns a copy of all persons in insertion order.
    pub fn snapshot(&self) -> Snapshot {
        Arc::from(self.persons.as_slice())
    }

    /// Looks a person up by id.
    pub fn get(&self, id: PersonId) -> Option<&Person> {
        self.persons.iter().find(|person| person.id == id)
    }

    /// Number of stored persons.
    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    fn update_listeners(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for (_, listener) in self.listeners.iter_mut() {
            listener(&snapshot);
        }
    }
}
