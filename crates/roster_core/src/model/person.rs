//! Person domain model.
//!
//! # Responsibility
//! - Define the canonical record shown on the roster board.
//! - Provide the experience and specialty enumerations with stable labels.
//!
//! # Invariants
//! - `PersonId` is assigned by the store and never reused.
//! - `experience` starts as `Experience::Junior` and changes only through
//!   `PersonState::move_person`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Stable identifier of one person record.
///
/// Rendered as a decimal string (`"0"`, `"1"`, ...), which is also the
/// drag payload format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct PersonId(u64);

impl PersonId {
    /// Wraps a raw counter value. Only the store allocates fresh ids.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Raw counter value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for PersonId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when text is not a decimal person id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePersonIdError(pub String);

impl Display for ParsePersonIdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid person id: `{}`", self.0)
    }
}

impl Error for ParsePersonIdError {}

impl FromStr for PersonId {
    type Err = ParsePersonIdError;

    /// Accepts only the canonical decimal form produced by `Display`.
    ///
    /// Whitespace, signs and leading zeros are rejected so that one id has
    /// exactly one payload text.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let canonical = !value.is_empty()
            && value.bytes().all(|b| b.is_ascii_digit())
            && (value == "0" || !value.starts_with('0'));
        if !canonical {
            return Err(ParsePersonIdError(value.to_string()));
        }
        value
            .parse::<u64>()
            .map(Self)
            .map_err(|_| ParsePersonIdError(value.to_string()))
    }
}

impl From<PersonId> for String {
    fn from(value: PersonId) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for PersonId {
    type Error = ParsePersonIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Experience tier a person is tagged with. Determines the board column.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Experience {
    #[default]
    Junior,
    Middle,
    Senior,
    Architect,
}

impl Experience {
    /// All tiers in column order.
    pub const ALL: [Experience; 4] = [
        Experience::Junior,
        Experience::Middle,
        Experience::Senior,
        Experience::Architect,
    ];

    /// Position of this tier in `Experience::ALL`.
    pub fn index(self) -> usize {
        match self {
            Self::Junior => 0,
            Self::Middle => 1,
            Self::Senior => 2,
            Self::Architect => 3,
        }
    }

    /// Wire and log label, e.g. `"junior"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Junior => "junior",
            Self::Middle => "middle",
            Self::Senior => "senior",
            Self::Architect => "architect",
        }
    }
}

impl Display for Experience {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseExperienceError(pub String);

impl Display for ParseExperienceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported experience `{}`; expected junior|middle|senior|architect",
            self.0
        )
    }
}

impl Error for ParseExperienceError {}

impl FromStr for Experience {
    type Err = ParseExperienceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "junior" => Ok(Self::Junior),
            "middle" => Ok(Self::Middle),
            "senior" => Ok(Self::Senior),
            "architect" => Ok(Self::Architect),
            _ => Err(ParseExperienceError(value.to_string())),
        }
    }
}

/// Role category attached to a person. Display-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Specialty {
    #[serde(rename = "front-end")]
    FrontEnd,
    #[serde(rename = "back-end")]
    BackEnd,
    #[serde(rename = "QA")]
    Qa,
    #[serde(rename = "manager")]
    Manager,
}

impl Specialty {
    /// Specialties in form select order; the index is the select value.
    pub const ALL: [Specialty; 4] = [
        Specialty::FrontEnd,
        Specialty::BackEnd,
        Specialty::Qa,
        Specialty::Manager,
    ];

    /// Specialty at select index `index`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            Self::FrontEnd => 0,
            Self::BackEnd => 1,
            Self::Qa => 2,
            Self::Manager => 3,
        }
    }

    /// Display label shown on cards.
    pub fn label(self) -> &'static str {
        match self {
            Self::FrontEnd => "front-end",
            Self::BackEnd => "back-end",
            Self::Qa => "QA",
            Self::Manager => "manager",
        }
    }
}

impl Display for Specialty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSpecialtyError(pub String);

impl Display for ParseSpecialtyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported specialty `{}`; expected 0-3 or front-end|back-end|QA|manager",
            self.0
        )
    }
}

impl Error for ParseSpecialtyError {}

impl FromStr for Specialty {
    type Err = ParseSpecialtyError;

    /// Accepts either the select index (`"2"`) or a label (`"qa"`).
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if let Ok(index) = trimmed.parse::<usize>() {
            return Self::from_index(index).ok_or_else(|| ParseSpecialtyError(value.to_string()));
        }
        Self::ALL
            .into_iter()
            .find(|specialty| specialty.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseSpecialtyError(value.to_string()))
    }
}

/// Canonical person record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub info: String,
    pub position: Specialty,
    /// Current column. Mutated only by the store.
    pub experience: Experience,
}

impl Person {
    /// Creates a person at the initial `Experience::Junior` tier.
    pub fn new(
        id: PersonId,
        name: impl Into<String>,
        info: impl Into<String>,
        position: Specialty,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            info: info.into(),
            position,
            experience: Experience::Junior,
        }
    }
}
