//! wgpu render backend for the monogram viewer.
//!
//! Draws the ground grid and coordinate axes with a line pipeline and the
//! glyph cubes with one instanced draw. The scene is static: instance data
//! is uploaded once, only the camera and scaling-factor uniforms change per
//! frame.
//!
//! # Invariants
//! - The renderer never mutates the scene.
//! - The model scaling factor reaches the GPU as a uniform; instance
//!   matrices are never rewritten for it.

mod camera;
mod gpu;
mod mesh;
mod shaders;

pub use camera::FlyCamera;
pub use gpu::SceneRenderer;
