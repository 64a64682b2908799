//! Pointer input mapped to orbit-camera gestures.
//!
//! # Invariants
//! - The mapping is pure: no windowing types leak in, so any host event
//!   source can drive it.

pub mod pointer;

pub use pointer::{CameraGesture, PointerButton, PointerState};
