//! Scene model for the polyspin viewer: camera, spot light, the two rotating
//! solids, orbit controls, and the mount/frame/resize operations that tie
//! them together.
//!
//! # Invariants
//! - The camera aspect ratio always matches the last observed viewport size.
//! - Control parameters are fixed at construction and never mutated.
//! - The scene model never touches the GPU; renderers read it, nothing more.

pub mod camera;
pub mod controls;
pub mod light;
pub mod material;
pub mod scene;
pub mod solid;
pub mod view;

pub use camera::PerspectiveCamera;
pub use controls::OrbitControls;
pub use light::SpotLight;
pub use material::{LightingModel, Material};
pub use scene::Scene;
pub use solid::{GeometryKind, RotatingSolid, ROTATION_STEP};
pub use view::ViewContext;
