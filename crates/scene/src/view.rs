use crate::camera::PerspectiveCamera;
use crate::controls::OrbitControls;
use crate::light::SpotLight;
use crate::material::{LightingModel, Material};
use crate::scene::Scene;
use crate::solid::{GeometryKind, RotatingSolid, ROTATION_STEP};
use glam::Vec3;
use polyspin_common::{Color, Viewport};

const BACKGROUND_HEX: u32 = 0xffe4e4;
const SOLID_HEX: u32 = 0x468585;
const LIGHT_HEX: u32 = 0x006769;

const CAMERA_FOV_DEG: f32 = 75.0;
const CAMERA_NEAR: f32 = 0.1;
const CAMERA_FAR: f32 = 1000.0;
const CAMERA_DISTANCE: f32 = 5.0;

const LIGHT_INTENSITY: f32 = 100.0;
const LIGHT_RANGE: f32 = 5.0;
const LIGHT_CONE_DEG: f32 = 90.0;

/// Everything one mounted view owns: the scene, the camera, the controls,
/// and the last observed viewport. Passed explicitly between the builder,
/// the frame driver, and the resize handler.
#[derive(Debug, Clone)]
pub struct ViewContext {
    pub scene: Scene,
    pub camera: PerspectiveCamera,
    pub controls: OrbitControls,
    pub viewport: Viewport,
}

impl ViewContext {
    /// Build the fixed scene for the given surface.
    ///
    /// A missing surface skips all setup: nothing is constructed and `None`
    /// is returned. There is no other failure mode.
    pub fn mount(surface: Option<Viewport>) -> Option<Self> {
        let viewport = surface?;

        let mut camera = PerspectiveCamera::new(
            CAMERA_FOV_DEG.to_radians(),
            viewport.aspect(),
            CAMERA_NEAR,
            CAMERA_FAR,
        );
        camera.position = Vec3::new(0.0, 0.0, CAMERA_DISTANCE);

        let light = SpotLight {
            position: Vec3::ONE,
            target: Vec3::ZERO,
            color: Color::from_hex(LIGHT_HEX),
            intensity: LIGHT_INTENSITY,
            range: LIGHT_RANGE,
            angle: LIGHT_CONE_DEG.to_radians(),
        };

        let tint = Color::from_hex(SOLID_HEX);
        let mut scene = Scene::new(Color::from_hex(BACKGROUND_HEX), light);
        scene.add_solid(RotatingSolid::new(
            GeometryKind::Icosahedron,
            Material {
                color: tint,
                emissive: tint,
                lighting: LightingModel::Lambert,
            },
            Vec3::new(-1.0, 0.0, 0.0),
        ));
        scene.add_solid(RotatingSolid::new(
            GeometryKind::Dodecahedron,
            Material {
                color: tint,
                emissive: tint,
                lighting: LightingModel::Standard,
            },
            Vec3::new(1.0, 0.0, 0.0),
        ));

        let controls = OrbitControls::new(&camera);

        Some(Self {
            scene,
            camera,
            controls,
            viewport,
        })
    }

    /// Per-frame mutation half of the render loop; the caller issues the draw
    /// immediately after. Order is fixed: advance every solid's rotation,
    /// then apply the control damping update to the camera.
    pub fn advance_frame(&mut self) {
        for solid in &mut self.scene.solids {
            solid.advance(ROTATION_STEP);
        }
        self.controls.update(&mut self.camera);
    }

    /// Apply a size change observed on the host window: refresh the camera
    /// aspect and projection, and return the viewport the renderer's output
    /// must be resized to match.
    pub fn handle_resize(&mut self, new: Viewport) -> Viewport {
        self.viewport = new;
        self.camera.set_aspect(new.aspect());
        self.viewport
    }
}
