use crate::material::Material;
use glam::{Mat4, Vec2, Vec3};

/// Radians added to both rotation axes of every solid, once per frame.
pub const ROTATION_STEP: f32 = 0.01;

/// Which generated mesh a solid is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    Icosahedron,
    Dodecahedron,
}

/// A mesh whose orientation is mutated every frame.
#[derive(Debug, Clone, Copy)]
pub struct RotatingSolid {
    pub geometry: GeometryKind,
    pub material: Material,
    pub position: Vec3,
    /// Accumulated rotation angles: `x` about the X axis, `y` about the Y axis.
    pub rotation: Vec2,
}

impl RotatingSolid {
    pub fn new(geometry: GeometryKind, material: Material, position: Vec3) -> Self {
        Self {
            geometry,
            material,
            position,
            rotation: Vec2::ZERO,
        }
    }

    /// Advance both rotation angles by `step` radians.
    pub fn advance(&mut self, step: f32) {
        self.rotation.x += step;
        self.rotation.y += step;
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_rotation_y(self.rotation.y)
            * Mat4::from_rotation_x(self.rotation.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::LightingModel;
    use polyspin_common::Color;

    fn test_solid() -> RotatingSolid {
        RotatingSolid::new(
            GeometryKind::Icosahedron,
            Material {
                color: Color::from_hex(0x468585),
                emissive: Color::from_hex(0x468585),
                lighting: LightingModel::Lambert,
            },
            Vec3::new(-1.0, 0.0, 0.0),
        )
    }

    #[test]
    fn advance_increments_both_axes() {
        let mut solid = test_solid();
        solid.advance(ROTATION_STEP);
        assert_eq!(solid.rotation, Vec2::splat(0.01));
        solid.advance(ROTATION_STEP);
        assert_eq!(solid.rotation, Vec2::splat(0.02));
    }

    #[test]
    fn rotation_accumulates_monotonically() {
        let mut solid = test_solid();
        let mut last = solid.rotation;
        for _ in 0..100 {
            solid.advance(ROTATION_STEP);
            assert!(solid.rotation.x > last.x);
            assert!(solid.rotation.y > last.y);
            last = solid.rotation;
        }
        assert!((solid.rotation.x - 1.0).abs() < 1e-4);
    }

    #[test]
    fn model_matrix_translates_to_position() {
        let solid = test_solid();
        let m = solid.model_matrix();
        let origin = m.transform_point3(Vec3::ZERO);
        assert_eq!(origin, Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn model_matrix_rotates_about_solid_center() {
        let mut solid = test_solid();
        solid.advance(ROTATION_STEP);
        // The mesh origin stays pinned to the solid position under rotation.
        let origin = solid.model_matrix().transform_point3(Vec3::ZERO);
        assert!((origin - solid.position).length() < 1e-6);
    }
}
