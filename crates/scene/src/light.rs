use glam::Vec3;
use polyspin_common::Color;

/// Cone-shaped emitter, static after creation.
///
/// `angle` is the half-angle of the cone in radians; `range` is the distance
/// at which the light's contribution cuts off entirely.
#[derive(Debug, Clone, Copy)]
pub struct SpotLight {
    pub position: Vec3,
    /// Point the cone is aimed at.
    pub target: Vec3,
    pub color: Color,
    pub intensity: f32,
    pub range: f32,
    pub angle: f32,
}

impl SpotLight {
    /// Normalized aim direction, from the light toward its target.
    pub fn direction(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }
}
