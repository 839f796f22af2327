//! Shared value types for the monogram workspace.
//!
//! # Invariants
//! - `Transform` always resolves to a valid affine matrix.
//! - `Color` components are linear floats; no clamping is performed here.

mod types;

pub use types::{Color, Transform};
