use glam::{Mat4, Vec3};

/// Perspective camera with an explicitly cached projection matrix.
///
/// The projection is recomputed only through [`PerspectiveCamera::set_aspect`]
/// or [`PerspectiveCamera::update_projection`], so a resize maps to exactly
/// one projection refresh.
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub target: Vec3,
    projection: Mat4,
}

impl PerspectiveCamera {
    pub fn new(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov_y,
            aspect,
            near,
            far,
            position: Vec3::ZERO,
            target: Vec3::ZERO,
            projection: Mat4::perspective_rh(fov_y, aspect, near, far),
        }
    }

    /// Store a new aspect ratio and refresh the cached projection.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.update_projection();
    }

    /// Recompute the cached projection from the current parameters.
    pub fn update_projection(&mut self) {
        self.projection = Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far);
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_tracks_set_aspect() {
        let mut cam = PerspectiveCamera::new(75.0_f32.to_radians(), 1.0, 0.1, 1000.0);
        cam.set_aspect(800.0 / 600.0);
        let expected = Mat4::perspective_rh(cam.fov_y, 800.0 / 600.0, 0.1, 1000.0);
        assert_eq!(cam.projection_matrix(), expected);
    }

    #[test]
    fn stale_projection_until_update() {
        let mut cam = PerspectiveCamera::new(75.0_f32.to_radians(), 1.0, 0.1, 1000.0);
        let before = cam.projection_matrix();
        cam.aspect = 2.0;
        assert_eq!(cam.projection_matrix(), before);
        cam.update_projection();
        assert_ne!(cam.projection_matrix(), before);
    }

    #[test]
    fn view_projection_is_finite() {
        let mut cam = PerspectiveCamera::new(75.0_f32.to_radians(), 1.333, 0.1, 1000.0);
        cam.position = Vec3::new(0.0, 0.0, 5.0);
        let vp = cam.view_projection();
        assert!(!vp.col(0).x.is_nan());
        // A point in front of the camera projects inside the clip volume.
        let clip = vp * Vec3::ZERO.extend(1.0);
        assert!(clip.z > 0.0 && clip.z < clip.w);
    }
}
