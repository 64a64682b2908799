//! Shared plain types used across the polyspin workspace.

pub mod types;

pub use types::{Color, Viewport};
