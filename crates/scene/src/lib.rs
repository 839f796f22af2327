//! Scene content: block-letter glyphs hand-composed from scaled unit cubes.
//!
//! Glyphs live in a local cell 5 units tall with the baseline on the ground
//! plane. A `Monogram` is a row of glyphs; a `Scene` is a set of rows plus
//! the flattening step that produces per-cube model matrices for the
//! renderer.
//!
//! # Invariants
//! - No glyph part extends below y=0 in glyph-local space.
//! - Flattening never mutates the rows; the scene is static data.

mod glyph;
mod monogram;
mod part;

pub use glyph::{Glyph, GLYPH_HEIGHT};
pub use monogram::{CubeInstance, LayoutError, Monogram, Scene, SceneSummary};
pub use part::Part;
