use crate::camera::PerspectiveCamera;
use glam::{Vec2, Vec3};

/// Default damping factor applied to residual input each frame.
pub const DAMPING_FACTOR: f32 = 0.05;

/// Radians of orbit per pixel of pointer drag.
const ROTATE_SPEED: f32 = 0.005;
/// Fraction of the orbit radius panned per pixel of pointer drag.
const PAN_SPEED: f32 = 0.002;
const MIN_RADIUS: f32 = 0.1;
const MAX_RADIUS: f32 = 500.0;
/// Keeps the orbit away from the poles where the up vector degenerates.
const MAX_PITCH: f32 = 1.553; // ~89 degrees

/// Interactive orbit/zoom/pan camera rig.
///
/// Pointer gestures accumulate into pending deltas; [`OrbitControls::update`]
/// applies them once per frame and, with damping enabled, bleeds off the
/// residual by `damping_factor` so motion eases out over subsequent frames.
/// The enable flags and damping factor are set at construction and never
/// change afterwards.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    pub damping_enabled: bool,
    pub damping_factor: f32,
    pub zoom_enabled: bool,
    pub pan_enabled: bool,
    radius: f32,
    yaw: f32,
    pitch: f32,
    target: Vec3,
    orbit_delta: Vec2,
    pan_delta: Vec2,
    zoom_scale: f32,
}

impl OrbitControls {
    /// Build controls orbiting the camera's current target, starting from its
    /// current position.
    pub fn new(camera: &PerspectiveCamera) -> Self {
        let offset = camera.position - camera.target;
        let radius = offset.length().max(MIN_RADIUS);
        Self {
            damping_enabled: true,
            damping_factor: DAMPING_FACTOR,
            zoom_enabled: true,
            pan_enabled: true,
            radius,
            yaw: offset.z.atan2(offset.x),
            pitch: (offset.y / radius).asin(),
            target: camera.target,
            orbit_delta: Vec2::ZERO,
            pan_delta: Vec2::ZERO,
            zoom_scale: 1.0,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Queue an orbit gesture from a pointer drag, in pixels.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.orbit_delta += Vec2::new(dx, dy) * ROTATE_SPEED;
    }

    /// Queue a pan gesture from a pointer drag, in pixels. No-op when panning
    /// is disabled.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        if self.pan_enabled {
            self.pan_delta += Vec2::new(dx, dy) * PAN_SPEED;
        }
    }

    /// Queue a zoom by a radius scale factor (< 1 moves closer). No-op when
    /// zooming is disabled.
    pub fn zoom(&mut self, factor: f32) {
        if self.zoom_enabled {
            self.zoom_scale *= factor;
        }
    }

    /// Apply pending gestures to the camera. Call once per frame.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) {
        let step = if self.damping_enabled {
            self.damping_factor
        } else {
            1.0
        };

        self.yaw -= self.orbit_delta.x * step;
        self.pitch = (self.pitch + self.orbit_delta.y * step).clamp(-MAX_PITCH, MAX_PITCH);
        self.radius = (self.radius * self.zoom_scale).clamp(MIN_RADIUS, MAX_RADIUS);
        self.zoom_scale = 1.0;

        let offset = self.offset();
        if self.pan_delta != Vec2::ZERO {
            // Pan in the camera plane, scaled by distance so screen-space
            // motion feels constant at any zoom level.
            let forward = -offset.normalize();
            let right = forward.cross(Vec3::Y).normalize();
            let up = right.cross(forward);
            let pan = (right * -self.pan_delta.x + up * self.pan_delta.y) * self.radius * step;
            self.target += pan;
        }

        if self.damping_enabled {
            self.orbit_delta *= 1.0 - self.damping_factor;
            self.pan_delta *= 1.0 - self.damping_factor;
        } else {
            self.orbit_delta = Vec2::ZERO;
            self.pan_delta = Vec2::ZERO;
        }

        camera.target = self.target;
        camera.position = self.target + self.offset();
    }

    fn offset(&self) -> Vec3 {
        Vec3::new(
            self.radius * self.pitch.cos() * self.yaw.cos(),
            self.radius * self.pitch.sin(),
            self.radius * self.pitch.cos() * self.yaw.sin(),
        )
    }
}
