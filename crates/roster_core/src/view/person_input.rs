//! Person entry form.
//!
//! # Responsibility
//! - Hold raw form field values until submit.
//! - Validate them before anything reaches the store.
//!
//! # Invariants
//! - A rejected submit leaves both the form and the store untouched.
//! - A successful submit adds exactly one person and clears the form.

use crate::model::person::{PersonId, Specialty};
use crate::state::person_state::PersonState;
use crate::validation::{Validatable, Violation};
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Exclusive name length bounds.
pub const REQUIRED_NAME_LENGTH: (usize, usize) = (2, 25);
/// Exclusive lower bound for the about text length.
pub const REQUIRED_INFO_LENGTH: usize = 5;
/// Exclusive bounds for a numeric position select value.
pub const POSITION_INDEX_BOUNDS: (i64, i64) = (-1, 4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Name,
    About,
    Position,
}

impl InputField {
    /// Field name used in messages and log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::About => "about",
            Self::Position => "position",
        }
    }
}

/// Rejected form input: the first field that failed and why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputError {
    pub field: InputField,
    pub violation: Violation,
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {}: {}", self.field.as_str(), self.violation)
    }
}

impl Error for InputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.violation)
    }
}

/// Validated form values ready for `PersonState::add_person`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonDraft {
    pub name: String,
    pub info: String,
    pub position: Specialty,
}

/// Form model with the three raw input fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonInput {
    pub name: String,
    pub about: String,
    /// Select value: specialty index (`"0"`..`"3"`) or label.
    pub position: String,
}

impl PersonInput {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates fields in form order and returns the first failure.
    pub fn gather(&self) -> Result<PersonDraft, InputError> {
        let (min_name, max_name) = REQUIRED_NAME_LENGTH;
        Validatable::text(&self.name)
            .required()
            .min_length(min_name)
            .max_length(max_name)
            .validate()
            .map_err(|violation| field_error(InputField::Name, violation))?;

        Validatable::text(&self.about)
            .required()
            .min_length(REQUIRED_INFO_LENGTH)
            .validate()
            .map_err(|violation| field_error(InputField::About, violation))?;

        Validatable::text(&self.position)
            .required()
            .validate()
            .map_err(|violation| field_error(InputField::Position, violation))?;
        let position = self.parse_position()?;

        Ok(PersonDraft {
            name: self.name.clone(),
            info: self.about.clone(),
            position,
        })
    }

    /// Numeric select values are range-checked; anything else must be a
    /// specialty label.
    fn parse_position(&self) -> Result<Specialty, InputError> {
        let raw = self.position.trim();
        let position = match raw.parse::<i64>() {
            Ok(index) => {
                let (min, max) = POSITION_INDEX_BOUNDS;
                Validatable::number(index)
                    .min(min)
                    .max(max)
                    .validate()
                    .map_err(|violation| field_error(InputField::Position, violation))?;
                usize::try_from(index).ok().and_then(Specialty::from_index)
            }
            Err(_) => raw.parse::<Specialty>().ok(),
        };
        position.ok_or_else(|| field_error(InputField::Position, Violation::Unrecognized))
    }

    /// Adds the person on valid input and resets the form.
    pub fn submit(&mut self, store: &mut PersonState) -> Result<PersonId, InputError> {
        let draft = self.gather().inspect_err(|err| {
            warn!(
                "event=input_rejected module=view status=error field={} rule={}",
                err.field.as_str(),
                err.violation.code()
            );
        })?;

        let id = store.add_person(draft.name, draft.info, draft.position);
        self.clear();
        Ok(id)
    }

    /// Resets every field to empty.
    pub fn clear(&mut self) {
        self.name.clear();
        self.about.clear();
        self.position.clear();
    }
}

fn field_error(field: InputField, violation: Violation) -> InputError {
    InputError { field, violation }
}
