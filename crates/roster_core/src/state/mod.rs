//! Observable application state.
//!
//! # Responsibility
//! - Hold the single source of truth for person records.
//! - Notify views synchronously after each mutation.

pub mod person_state;
