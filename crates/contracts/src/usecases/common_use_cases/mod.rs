//! Common use cases shown on the project settings page.
//!
//! The items are plain, already-loaded data; the frontend never mutates them.

pub mod catalog;
pub mod item;

pub use catalog::default_catalog;
pub use item::{UseCaseId, UseCaseItem};
