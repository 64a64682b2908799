//! wgpu render backend for the polyspin viewer.
//!
//! Draws the scene's rotating solids with a single forward pipeline: one
//! spot light, per-solid instance data, flat-shaded generated meshes.
//!
//! # Invariants
//! - The renderer never mutates scene state.
//! - The surface configuration always matches the last observed viewport.

mod context;
mod gpu;
mod shaders;

pub use context::{GpuContext, GpuError};
pub use gpu::SceneRenderer;
