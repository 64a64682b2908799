use glam::Vec2;

/// Scroll-wheel step to zoom scale; one detent moves 5% closer or farther.
const ZOOM_STEP: f32 = 0.95;

/// A camera manipulation decoded from raw pointer input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraGesture {
    /// Rotate around the orbit target, in drag pixels.
    Orbit(Vec2),
    /// Slide the orbit target in the camera plane, in drag pixels.
    Pan(Vec2),
    /// Scale the orbit radius by the carried factor.
    Zoom(f32),
}

/// Pointer buttons the viewer distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
}

/// Tracks which pointer buttons are held and turns motion and wheel events
/// into [`CameraGesture`] values: left-drag orbits, right-drag pans, the
/// wheel zooms.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerState {
    left_held: bool,
    right_held: bool,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_button(&mut self, button: PointerButton, pressed: bool) {
        match button {
            PointerButton::Left => self.left_held = pressed,
            PointerButton::Right => self.right_held = pressed,
        }
    }

    /// Decode a relative pointer motion. Motion with no button held is not a
    /// gesture. Left takes precedence when both buttons are held.
    pub fn motion(&self, delta: Vec2) -> Option<CameraGesture> {
        if self.left_held {
            Some(CameraGesture::Orbit(delta))
        } else if self.right_held {
            Some(CameraGesture::Pan(delta))
        } else {
            None
        }
    }

    /// Decode a scroll-wheel movement in detents; positive scrolls in.
    pub fn wheel(&self, detents: f32) -> Option<CameraGesture> {
        if detents == 0.0 {
            None
        } else {
            Some(CameraGesture::Zoom(ZOOM_STEP.powf(detents)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn motion_without_buttons_is_not_a_gesture() {
        let state = PointerState::new();
        assert_eq!(state.motion(Vec2::new(4.0, 2.0)), None);
    }

    #[test]
    fn left_drag_orbits() {
        let mut state = PointerState::new();
        state.set_button(PointerButton::Left, true);
        assert_eq!(
            state.motion(Vec2::new(4.0, 2.0)),
            Some(CameraGesture::Orbit(Vec2::new(4.0, 2.0)))
        );
        state.set_button(PointerButton::Left, false);
        assert_eq!(state.motion(Vec2::new(4.0, 2.0)), None);
    }

    #[test]
    fn right_drag_pans() {
        let mut state = PointerState::new();
        state.set_button(PointerButton::Right, true);
        assert_eq!(
            state.motion(Vec2::new(-1.0, 3.0)),
            Some(CameraGesture::Pan(Vec2::new(-1.0, 3.0)))
        );
    }

    #[test]
    fn left_wins_over_right() {
        let mut state = PointerState::new();
        state.set_button(PointerButton::Left, true);
        state.set_button(PointerButton::Right, true);
        assert!(matches!(
            state.motion(Vec2::X),
            Some(CameraGesture::Orbit(_))
        ));
    }

    #[test]
    fn wheel_zooms_in_and_out() {
        let state = PointerState::new();
        let Some(CameraGesture::Zoom(toward)) = state.wheel(1.0) else {
            panic!("expected zoom gesture");
        };
        assert!(toward < 1.0);
        let Some(CameraGesture::Zoom(away)) = state.wheel(-1.0) else {
            panic!("expected zoom gesture");
        };
        assert!(away > 1.0);
        assert_eq!(state.wheel(0.0), None);
    }
}
