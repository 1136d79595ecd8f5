//! Progressive disclosure primitives.
//!
//! - `DisclosureList` — ordered items and the "visible count" cursor behind "show more"
//! - `EntryStates` — independent expand/collapse flags keyed by item id
//! - `OverlayCoordinator` — at most one tooltip open across all anchors
//!
//! Everything here is plain data without signals, so it can be held in a single
//! `RwSignal` by the component that owns it and tested without a browser.

pub mod entry;
pub mod error;
pub mod list;
pub mod overlay;

pub use entry::EntryStates;
pub use error::DisclosureError;
pub use list::DisclosureList;
pub use overlay::{AnchorId, OverlayCoordinator, OverlayState};
