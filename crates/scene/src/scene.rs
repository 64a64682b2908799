use crate::light::SpotLight;
use crate::solid::RotatingSolid;
use polyspin_common::Color;

/// The drawable contents of one frame: background, solids, and the light.
/// Owned exclusively by the view, never shared or persisted.
#[derive(Debug, Clone)]
pub struct Scene {
    pub background: Color,
    pub solids: Vec<RotatingSolid>,
    pub light: SpotLight,
}

impl Scene {
    pub fn new(background: Color, light: SpotLight) -> Self {
        Self {
            background,
            solids: Vec::new(),
            light,
        }
    }

    pub fn add_solid(&mut self, solid: RotatingSolid) {
        self.solids.push(solid);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{LightingModel, Material};
    use crate::solid::GeometryKind;
    use glam::Vec3;

    #[test]
    fn solids_keep_insertion_order() {
        let light = SpotLight {
            position: Vec3::ONE,
            target: Vec3::ZERO,
            color: Color::from_hex(0x006769),
            intensity: 100.0,
            range: 5.0,
            angle: 90.0_f32.to_radians(),
        };
        let mut scene = Scene::new(Color::from_hex(0xffe4e4), light);
        let material = Material {
            color: Color::from_hex(0x468585),
            emissive: Color::from_hex(0x468585),
            lighting: LightingModel::Lambert,
        };
        scene.add_solid(RotatingSolid::new(
            GeometryKind::Icosahedron,
            material,
            Vec3::new(-1.0, 0.0, 0.0),
        ));
        scene.add_solid(RotatingSolid::new(
            GeometryKind::Dodecahedron,
            material,
            Vec3::new(1.0, 0.0, 0.0),
        ));
        assert_eq!(scene.solids[0].geometry, GeometryKind::Icosahedron);
        assert_eq!(scene.solids[1].geometry, GeometryKind::Dodecahedron);
    }
}
