use roster_core::{
    Experience, InputError, InputField, PersonInput, PersonState, Specialty, Violation,
};

fn filled(name: &str, about: &str, position: &str) -> PersonInput {
    PersonInput {
        name: name.to_string(),
        about: about.to_string(),
        position: position.to_string(),
    }
}

#[test]
fn submit_adds_junior_and_clears_form() {
    let mut store = PersonState::new();
    let mut input = filled("Alice", "does QA work", "2");

    let id = input.submit(&mut store).expect("valid form should submit");

    let person = store.get(id).expect("submitted person should be stored");
    assert_eq!(person.name, "Alice");
    assert_eq!(person.info, "does QA work");
    assert_eq!(person.position, Specialty::Qa);
    assert_eq!(person.experience, Experience::Junior);
    assert_eq!(input, PersonInput::default());
}

#[test]
fn name_bounds_are_exclusive() {
    let err = filled("Al", "does QA work", "2").gather().expect_err("input should be rejected");
    assert_eq!(
        err,
        InputError {
            field: InputField::Name,
            violation: Violation::TooShort { min_length: 2 },
        }
    );

    assert!(filled("Ali", "does QA work", "2").gather().is_ok());
    assert!(filled(&"a".repeat(24), "does QA work", "2").gather().is_ok());

    let err = filled(&"a".repeat(25), "does QA work", "2")
        .gather()
        .expect_err("input should be rejected");
    assert_eq!(err.violation, Violation::TooLong { max_length: 25 });
}

#[test]
fn blank_fields_are_required() {
    let err = filled("   ", "does QA work", "2").gather().expect_err("input should be rejected");
    assert_eq!(err.field, InputField::Name);
    assert_eq!(err.violation, Violation::Required);

    let err = filled("Alice", "", "2").gather().expect_err("input should be rejected");
    assert_eq!(err.field, InputField::About);
    assert_eq!(err.violation, Violation::Required);

    let err = filled("Alice", "does QA work", " ").gather().expect_err("input should be rejected");
    assert_eq!(err.field, InputField::Position);
    assert_eq!(err.violation, Violation::Required);
}

#[test]
fn about_must_exceed_five_chars() {
    let err = filled("Alice", "tests", "2").gather().expect_err("input should be rejected");
    assert_eq!(err.field, InputField::About);
    assert_eq!(err.violation, Violation::TooShort { min_length: 5 });
    assert!(filled("Alice", "tester", "2").gather().is_ok());
}

#[test]
fn position_must_be_known_specialty() {
    let err = filled("Alice", "does QA work", "4")
        .gather()
        .expect_err("index past the last specialty must be rejected");
    assert_eq!(err.field, InputField::Position);
    assert_eq!(err.violation, Violation::TooLarge { max: 4 });

    let err = filled("Alice", "does QA work", "-1")
        .gather()
        .expect_err("negative index must be rejected");
    assert_eq!(err.violation, Violation::TooSmall { min: -1 });

    let err = filled("Alice", "does QA work", "designer")
        .gather()
        .expect_err("unknown label must be rejected");
    assert_eq!(err.violation, Violation::Unrecognized);

    let draft = filled("Alice", "does QA work", "3")
        .gather()
        .expect("last index should be accepted");
    assert_eq!(draft.position, Specialty::Manager);

    let draft = filled("Alice", "does QA work", "manager").gather().expect("label position should be accepted");
    assert_eq!(draft.position, Specialty::Manager);
}

#[test]
fn rejected_submit_keeps_form_and_store() {
    let mut store = PersonState::new();
    let mut input = filled("Al", "does QA work", "2");

    let err = input.submit(&mut store).expect_err("short name must be rejected");

    assert_eq!(err.to_string(), "invalid name: must be longer than 2 characters");
    assert!(store.is_empty());
    assert_eq!(input, filled("Al", "does QA work", "2"));
}
