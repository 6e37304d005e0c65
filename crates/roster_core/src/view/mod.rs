//! View-side components of the roster board.
//!
//! # Responsibility
//! - Model the input form, draggable cards and per-level columns.
//! - Keep actual drawing behind the `ColumnRenderer` seam.

pub mod drag_drop;
pub mod person_input;
pub mod person_item;
pub mod person_list;
