//! Reading list management for Planner.
//!
//! [`BookShelf`] keeps books in display order and validates loosely typed
//! JSON field maps before they reach the store. An explicit `order` in an
//! update is saved on its own, ahead of the other fields.

pub mod changes;
pub mod error;
pub mod shelf;

pub use changes::{order_override, BookChanges, UpdateMode};
pub use error::{Result, ShelfError};
pub use shelf::{BookShelf, OrderAssignment};
