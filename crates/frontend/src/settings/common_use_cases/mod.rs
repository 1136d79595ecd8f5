//! "Common use cases" section of the project settings page.
//!
//! `state` composes the disclosure primitives, `render` turns that state into a
//! plain render description, and `view` is the Leptos component on top.

pub mod render;
pub mod state;
pub mod view;

pub use render::{EntryRender, IconRender, ShowMoreRender, UseCasesRender};
pub use state::CommonUseCasesState;
pub use view::CommonUseCasesView;
