//! Pointer and wheel input for the orbit camera
//!
//! Handlers only touch pending deltas and the dirty flag; matrices are left
//! to the next update.

use crate::camera::OrbitCamera;

use super::viewport::{ViewportSize, ViewportSource};

/// Drag distance across the full viewport maps to this many radians.
pub const ROTATION_SCALE: f32 = 4.0;

/// Pointer movement since the previous move event
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerMove {
    /// Horizontal movement in pixels
    pub movement_x: f32,
    /// Vertical movement in pixels
    pub movement_y: f32,
    /// Primary button held during the move
    pub primary_held: bool,
}

impl PointerMove {
    /// Movement with the primary button held
    #[must_use]
    pub const fn drag(movement_x: f32, movement_y: f32) -> Self {
        Self {
            movement_x,
            movement_y,
            primary_held: true,
        }
    }
}

/// Wheel scroll, browser convention: pixels, positive scrolls down
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelScroll {
    /// Vertical scroll in pixels
    pub delta_y: f32,
}

impl OrbitCamera {
    /// Input scaling size: the configured element box, else `window`.
    #[must_use]
    pub fn input_viewport(&self, window: ViewportSize) -> ViewportSize {
        ViewportSource {
            element: self.element,
            window,
        }
        .size()
    }

    /// Whether pointer and wheel input are wired
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        self.mouse
    }

    /// Whether the wheel zooms the camera
    #[must_use]
    pub fn accepts_scroll(&self) -> bool {
        self.scroll
    }

    /// Turn a drag into azimuth/polar deltas.
    ///
    /// Returns `false` when the event was ignored (input disabled or primary
    /// button up).
    pub fn on_pointer_move(&mut self, event: PointerMove, window: ViewportSize) -> bool {
        if !self.mouse || !event.primary_held {
            return false;
        }

        let viewport = self.input_viewport(window);
        let dx = event.movement_x / viewport.width;
        let dy = event.movement_y / viewport.height;

        let speed = self.state.rotation_speed * ROTATION_SCALE;
        self.state.dtheta += speed * dx;
        self.state.dphi += speed * dy;
        self.state.dirty = true;
        true
    }

    /// Turn a wheel scroll into a log-space zoom delta.
    ///
    /// Ignored when the camera was built with input off or `no_scroll` set.
    pub fn on_wheel(&mut self, event: WheelScroll, window: ViewportSize) -> bool {
        if !self.scroll {
            return false;
        }

        let viewport = self.input_viewport(window);
        self.ddistance += event.delta_y / viewport.height * self.state.zoom_speed;
        self.state.dirty = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{CameraConfig, CameraOverrides};

    const WINDOW: ViewportSize = ViewportSize::new(800.0, 600.0);

    fn settled(config: CameraConfig) -> OrbitCamera {
        let mut camera = OrbitCamera::new(config);
        camera.update(&CameraOverrides::new());
        camera.state.dirty = false;
        camera
    }

    #[test]
    fn test_quarter_width_drag_adds_one_radian() {
        let mut camera = settled(CameraConfig::new());
        let theta_before = camera.state().theta;

        assert!(camera.on_pointer_move(PointerMove::drag(WINDOW.width / 4.0, 0.0), WINDOW));
        assert!((camera.state().dtheta - 1.0).abs() < 1e-6);
        assert!(camera.state().dirty);

        camera.update(&CameraOverrides::new());
        assert!((camera.state().theta - theta_before - 1.0).abs() < 1e-6);
        assert!((camera.state().dtheta - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_vertical_drag_scales_by_height() {
        let mut camera = settled(CameraConfig::new());
        camera.on_pointer_move(PointerMove::drag(0.0, 150.0), WINDOW);
        assert!((camera.state().dphi - 1.0).abs() < 1e-6);
        assert_eq!(camera.state().dtheta, 0.0);
    }

    #[test]
    fn test_rotation_speed_multiplies_drag() {
        let mut camera = settled(CameraConfig {
            rotation_speed: Some(0.5),
            ..Default::default()
        });
        camera.on_pointer_move(PointerMove::drag(200.0, 0.0), WINDOW);
        assert!((camera.state().dtheta - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_move_without_primary_button_is_ignored() {
        let mut camera = settled(CameraConfig::new());
        let event = PointerMove {
            movement_x: 100.0,
            movement_y: 100.0,
            primary_held: false,
        };

        assert!(!camera.on_pointer_move(event, WINDOW));
        assert_eq!(camera.state().dtheta, 0.0);
        assert!(!camera.state().dirty);
    }

    #[test]
    fn test_element_size_scales_input() {
        let mut camera = settled(CameraConfig::new().with_element(ViewportSize::new(100.0, 100.0)));
        camera.on_pointer_move(PointerMove::drag(25.0, 0.0), WINDOW);
        assert!((camera.state().dtheta - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_wheel_adds_zoom_delta() {
        let mut camera = settled(CameraConfig {
            zoom_speed: Some(2.0),
            ..Default::default()
        });

        assert!(camera.on_wheel(WheelScroll { delta_y: 300.0 }, WINDOW));
        assert!((camera.pending_zoom() - 1.0).abs() < 1e-6);
        assert!(camera.state().dirty);

        let before = camera.state().distance;
        camera.update(&CameraOverrides::new());
        assert!((camera.state().distance - before - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_wheel_ignored_with_no_scroll() {
        let mut camera = settled(CameraConfig::new().with_no_scroll(true));
        assert!(!camera.accepts_scroll());
        assert!(!camera.on_wheel(WheelScroll { delta_y: 300.0 }, WINDOW));
        assert_eq!(camera.pending_zoom(), 0.0);
        assert!(!camera.state().dirty);
    }

    #[test]
    fn test_wheel_ignored_with_legacy_prevent_default() {
        let camera = OrbitCamera::new(CameraConfig {
            prevent_default: Some(true),
            ..Default::default()
        });
        assert!(!camera.accepts_scroll());
    }

    #[test]
    fn test_mouse_disabled_ignores_everything() {
        let mut camera = settled(CameraConfig::new().with_mouse(false));
        assert!(!camera.accepts_input());
        assert!(!camera.on_pointer_move(PointerMove::drag(100.0, 0.0), WINDOW));
        assert!(!camera.on_wheel(WheelScroll { delta_y: 100.0 }, WINDOW));
        assert!(!camera.state().dirty);
    }

    #[test]
    fn test_handlers_leave_matrices_alone() {
        let mut camera = settled(CameraConfig::new());
        let view = camera.state().view;
        camera.on_pointer_move(PointerMove::drag(100.0, 50.0), WINDOW);
        camera.on_wheel(WheelScroll { delta_y: 20.0 }, WINDOW);
        assert_eq!(camera.state().view, view);
    }
}
