use roster_core::{Experience, MoveOutcome, PersonId, PersonState, Snapshot, Specialty};
use std::cell::RefCell;
use std::rc::Rc;

fn recording_store() -> (PersonState, Rc<RefCell<Vec<Snapshot>>>) {
    let mut store = PersonState::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.add_listener(move |snapshot: &Snapshot| sink.borrow_mut().push(Snapshot::clone(snapshot)));
    (store, seen)
}

#[test]
fn add_assigns_sequential_decimal_ids() {
    let mut store = PersonState::new();

    let ids: Vec<String> = (0..5)
        .map(|n| {
            store
                .add_person(format!("person {n}"), "info text", Specialty::FrontEnd)
                .to_string()
        })
        .collect();

    assert_eq!(ids, vec!["0", "1", "2", "3", "4"]);
    assert_eq!(store.len(), 5);
}

#[test]
fn add_always_creates_junior() {
    let mut store = PersonState::new();
    for specialty in Specialty::ALL {
        let id = store.add_person("Name", "info text", specialty);
        assert_eq!(store.get(id).expect("added person should exist").experience, Experience::Junior);
    }
}

#[test]
fn add_notifies_with_full_snapshot() {
    let (mut store, seen) = recording_store();

    store.add_person("Ann", "first one", Specialty::Manager);
    store.add_person("Ben", "second one", Specialty::Qa);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].len(), 1);
    assert_eq!(seen[1].len(), 2);
    assert_eq!(seen[1][0].name, "Ann");
    assert_eq!(seen[1][1].name, "Ben");
}

#[test]
fn snapshot_is_detached_from_later_mutations() {
    let (mut store, seen) = recording_store();
    let id = store.add_person("Ann", "first one", Specialty::Manager);

    store.move_person(id, Experience::Senior);

    let seen = seen.borrow();
    assert_eq!(seen[0][0].experience, Experience::Junior);
    assert_eq!(seen[1][0].experience, Experience::Senior);
}

#[test]
fn repeated_move_notifies_once() {
    let (mut store, seen) = recording_store();
    let id = store.add_person("Ann", "first one", Specialty::Manager);
    seen.borrow_mut().clear();

    assert!(store.move_person(id, Experience::Middle).is_moved());
    assert_eq!(store.move_person(id, Experience::Middle), MoveOutcome::Unchanged);

    assert_eq!(seen.borrow().len(), 1);
    assert_eq!(store.get(id).expect("moved person should exist").experience, Experience::Middle);
}

#[test]
fn move_to_current_level_notifies_nobody() {
    let (mut store, seen) = recording_store();
    let id = store.add_person("Ann", "first one", Specialty::Manager);
    seen.borrow_mut().clear();

    assert_eq!(store.move_person(id, Experience::Junior), MoveOutcome::Unchanged);
    assert!(seen.borrow().is_empty());
}

#[test]
fn move_unknown_id_changes_nothing() {
    let (mut store, seen) = recording_store();
    store.add_person("Ann", "first one", Specialty::Manager);
    let before = store.snapshot();
    seen.borrow_mut().clear();

    let outcome = store.move_person(PersonId::new(42), Experience::Architect);

    assert_eq!(outcome, MoveOutcome::NotFound);
    assert!(seen.borrow().is_empty());
    assert_eq!(store.snapshot(), before);
}

#[test]
fn every_listener_sees_each_mutation_once() {
    let mut store = PersonState::new();
    let counts = Rc::new(RefCell::new([0usize; 3]));
    for slot in 0..3 {
        let counts = Rc::clone(&counts);
        store.add_listener(move |_| counts.borrow_mut()[slot] += 1);
    }

    let id = store.add_person("Ann", "first one", Specialty::Manager);
    store.move_person(id, Experience::Senior);
    store.move_person(id, Experience::Senior);

    assert_eq!(*counts.borrow(), [2, 2, 2]);
    assert_eq!(store.listener_count(), 3);
}

#[test]
fn alice_scenario() {
    let (mut store, seen) = recording_store();

    let position = Specialty::from_index(2).expect("index 2 is QA");
    store.add_person("Alice", "does QA work", position);
    assert_eq!(store.len(), 1);
    let alice = store.snapshot()[0].clone();
    assert_eq!(alice.id.to_string(), "0");
    assert_eq!(alice.experience, Experience::Junior);
    seen.borrow_mut().clear();

    let id: PersonId = "0".parse().expect("zero is a valid id");
    store.move_person(id, Experience::Senior);
    {
        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].len(), 1);
        assert_eq!(seen[0][0].experience, Experience::Senior);
    }

    store.move_person(id, Experience::Senior);
    assert_eq!(seen.borrow().len(), 1);
}
