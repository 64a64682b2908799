//! Mesh generation for the two regular polyhedra the viewer draws.
//!
//! # Invariants
//! - Every vertex position lies on the unit circumsphere.
//! - Normals are per-face (flat shading) and point outward.
//! - Index buffers use counter-clockwise winding for outward faces.

mod mesh;
mod polyhedra;

pub use mesh::{MeshData, Vertex};
pub use polyhedra::{dodecahedron, icosahedron};
