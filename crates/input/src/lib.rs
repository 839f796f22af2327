//! Input abstraction: the window layer produces [`Action`]s, never raw key
//! events, so camera and scene code stay independent of the windowing crate.

mod action;

pub use action::{Action, ScaleFactor};
