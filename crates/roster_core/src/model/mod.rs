//! Domain model for the roster board.
//!
//! # Responsibility
//! - Define the person record and its enumerated attributes.
//!
//! # Invariants
//! - Every record is identified by a store-assigned `PersonId`.
//! - Records are never deleted; only `experience` changes after creation.

pub mod person;
