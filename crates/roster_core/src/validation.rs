//! Declarative input validation rules.
//!
//! # Responsibility
//! - Check raw form values against required/length/range rules.
//! - Report the first violated rule so callers can build a field error.
//!
//! # Invariants
//! - Length bounds are exclusive: `min_length(2)` needs at least 3 units,
//!   `max_length(25)` allows at most 24.
//! - Length is measured in UTF-16 code units, the unit browser form fields
//!   report, so characters outside the Basic Multilingual Plane count twice.
//! - Range bounds are exclusive in the same way.
//! - Length rules apply to text values only; range rules to numbers only.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Value under validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Text(&'a str),
    Number(i64),
}

/// Rule that a value failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Required,
    TooShort { min_length: usize },
    TooLong { max_length: usize },
    TooSmall { min: i64 },
    TooLarge { max: i64 },
    Unrecognized,
}

impl Violation {
    /// Stable short code used in log events.
    pub fn code(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::TooShort { .. } => "too_short",
            Self::TooLong { .. } => "too_long",
            Self::TooSmall { .. } => "too_small",
            Self::TooLarge { .. } => "too_large",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required => write!(f, "value is required"),
            Self::TooShort { min_length } => {
                write!(f, "must be longer than {min_length} characters")
            }
            Self::TooLong { max_length } => {
                write!(f, "must be shorter than {max_length} characters")
            }
            Self::TooSmall { min } => write!(f, "must be greater than {min}"),
            Self::TooLarge { max } => write!(f, "must be less than {max}"),
            Self::Unrecognized => write!(f, "value is not a recognized option"),
        }
    }
}

impl Error for Violation {}

/// Value plus the rules it must satisfy.
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable<'a> {
    pub value: Value<'a>,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl<'a> Validatable<'a> {
    /// Rules over a text value; length rules apply.
    pub fn text(value: &'a str) -> Self {
        Self::with_value(Value::Text(value))
    }

    /// Rules over a numeric value; range rules apply.
    pub fn number(value: i64) -> Self {
        Self::with_value(Value::Number(value))
    }

    fn with_value(value: Value<'a>) -> Self {
        Self {
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    /// Rejects blank text. Numbers always satisfy it.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }

    /// Checks rules in declaration order: required, lengths, range.
    pub fn validate(&self) -> Result<(), Violation> {
        if self.required && self.is_blank() {
            return Err(Violation::Required);
        }

        if let Value::Text(text) = self.value {
            let length = text.encode_utf16().count();
            if let Some(min_length) = self.min_length {
                if length <= min_length {
                    return Err(Violation::TooShort { min_length });
                }
            }
            if let Some(max_length) = self.max_length {
                if length >= max_length {
                    return Err(Violation::TooLong { max_length });
                }
            }
        }

        if let Value::Number(number) = self.value {
            if let Some(min) = self.min {
                if number <= min {
                    return Err(Violation::TooSmall { min });
                }
            }
            if let Some(max) = self.max {
                if number >= max {
                    return Err(Violation::TooLarge { max });
                }
            }
        }

        Ok(())
    }

    fn is_blank(&self) -> bool {
        match self.value {
            Value::Text(text) => text.trim().is_empty(),
            Value::Number(_) => false,
        }
    }
}
