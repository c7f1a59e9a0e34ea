//! Orbit camera and its per-frame update
//!
//! Input handlers add to pending deltas; [`OrbitCamera::update`] folds those
//! deltas into the angles and distance, damps them, and rebuilds the eye and
//! view matrix.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use super::config::CameraConfig;
use super::overrides::CameraOverrides;
use super::state::CameraState;
use crate::input::ViewportSize;
use crate::math;

/// Damped values below this magnitude snap to zero.
pub const DAMPING_SNAP: f32 = 0.1;

/// Orbit camera controller owning its [`CameraState`].
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    pub(crate) state: CameraState,
    /// Pending log-space zoom delta
    pub(crate) ddistance: f32,
    damping: f32,
    min_distance: f32,
    max_distance: f32,
    /// Pointer/wheel input wired at construction
    pub(crate) mouse: bool,
    /// Wheel handler registered at construction
    pub(crate) scroll: bool,
    /// Input element size, if not the whole window
    pub(crate) element: Option<ViewportSize>,
    /// Dirty request from outside, merged on the next bind
    pub(crate) pending_dirty: bool,
}

impl OrbitCamera {
    /// Create a camera from a config; missing options take their defaults.
    #[must_use]
    pub fn new(config: CameraConfig) -> Self {
        let config = config.normalize();
        let state = config.to_state();
        let (min_distance, max_distance) = config.log_distance_bounds();
        let mouse = config.mouse_enabled();

        log::debug!(
            "Created orbit camera: distance {:.3}, damping {}, input {}",
            state.radius(),
            config.damping(),
            if mouse { "on" } else { "off" }
        );

        Self {
            scroll: mouse && !state.no_scroll,
            state,
            ddistance: 0.0,
            damping: config.damping(),
            min_distance,
            max_distance,
            mouse,
            element: config.element,
            pending_dirty: false,
        }
    }

    /// Current camera state
    #[must_use]
    pub fn state(&self) -> &CameraState {
        &self.state
    }

    /// Whether the next frame bind will render
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.state.dirty || self.pending_dirty || self.is_moving()
    }

    /// Whether any pending delta has not yet decayed to rest
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.state.dtheta != 0.0 || self.state.dphi != 0.0 || self.ddistance != 0.0
    }

    /// Ask the next frame bind to treat the camera as changed
    pub fn request_redraw(&mut self) {
        self.pending_dirty = true;
    }

    /// Pending log-space zoom delta
    #[must_use]
    pub fn pending_zoom(&self) -> f32 {
        self.ddistance
    }

    /// Damping factor applied to pending deltas every update
    #[must_use]
    pub fn damping(&self) -> f32 {
        self.damping
    }

    /// Log-space zoom bounds
    #[must_use]
    pub fn distance_bounds(&self) -> (f32, f32) {
        (self.min_distance, self.max_distance)
    }

    /// Advance the camera by one frame.
    ///
    /// Overrides are assigned first. Deltas are applied before they are
    /// damped, so input lands undamped on the frame it is consumed. Bad values
    /// (non-finite overrides, inverted bounds) are not rejected and show up
    /// in the matrices.
    pub fn update(&mut self, overrides: &CameraOverrides) {
        overrides.apply(&mut self.state);

        let dtheta = self.state.dtheta;
        let dphi = self.state.dphi;
        let ddistance = self.ddistance;

        self.state.theta += dtheta;
        self.state.phi = clamp(self.state.phi + dphi, -FRAC_PI_2, FRAC_PI_2);
        self.state.distance = clamp(
            self.state.distance + ddistance,
            self.min_distance,
            self.max_distance,
        );

        self.state.dtheta = self.damp(dtheta);
        self.state.dphi = self.damp(dphi);
        self.ddistance = self.damp(ddistance);

        let state = &mut self.state;
        let r = state.distance.exp();
        let (sin_theta, cos_theta) = state.theta.sin_cos();
        let (sin_phi, cos_phi) = state.phi.sin_cos();

        let view_front = r * sin_theta * cos_phi;
        let view_right = r * cos_theta * cos_phi;
        let view_up = r * sin_phi;

        state.eye = orbit_eye(
            state.center,
            [view_front, view_right, view_up],
            [state.front, state.right, state.up],
        );

        math::set_look_at(&mut state.view, state.eye, state.center, state.up);
    }

    // Residual motion keeps the camera dirty until it snaps to rest.
    fn damp(&mut self, x: f32) -> f32 {
        let damped = x * self.damping;
        if damped.abs() < DAMPING_SNAP {
            return 0.0;
        }
        self.state.dirty = true;
        damped
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}

/// `min(max(x, lo), hi)` that lets NaN through and never panics.
fn clamp(x: f32, lo: f32, hi: f32) -> f32 {
    let raised = if x < lo { lo } else { x };
    if raised > hi { hi } else { raised }
}

fn orbit_eye(center: Vec3, offsets: [f32; 3], basis: [Vec3; 3]) -> Vec3 {
    center + offsets[0] * basis[0] + offsets[1] * basis[1] + offsets[2] * basis[2]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn settled_camera(config: CameraConfig) -> OrbitCamera {
        let mut camera = OrbitCamera::new(config);
        camera.state.dirty = false;
        camera
    }

    #[test]
    fn test_default_update_places_eye_along_right_axis() {
        let mut camera = OrbitCamera::default();
        camera.update(&CameraOverrides::new());

        // theta = phi = 0 puts the whole offset on the right basis vector.
        let expected_eye = Vec3::new(10.0, 0.0, 0.0);
        assert!(camera.state.eye.abs_diff_eq(expected_eye, 1e-4));

        let expected_view = math::look_at(camera.state.eye, Vec3::ZERO, Vec3::Y);
        assert_eq!(camera.state.view, expected_view);
        assert!(
            camera
                .state
                .view
                .abs_diff_eq(glam::Mat4::look_at_rh(expected_eye, Vec3::ZERO, Vec3::Y), 1e-4)
        );
    }

    #[test]
    fn test_theta_quarter_turn_moves_eye_to_front() {
        let mut camera = OrbitCamera::new(CameraConfig::new().with_angles(PI / 2.0, 0.0));
        camera.update(&CameraOverrides::new());
        assert!(camera.state.eye.abs_diff_eq(Vec3::new(0.0, 0.0, 10.0), 1e-4));
    }

    #[test]
    fn test_phi_is_clamped() {
        let mut camera = OrbitCamera::default();
        camera.state.dphi = 10.0;
        camera.update(&CameraOverrides::new());
        assert_eq!(camera.state.phi, FRAC_PI_2);

        camera.state.dphi = -100.0;
        camera.update(&CameraOverrides::new());
        assert_eq!(camera.state.phi, -FRAC_PI_2);
    }

    #[test]
    fn test_phi_override_is_clamped() {
        let mut camera = OrbitCamera::default();
        camera.update(&CameraOverrides::new().phi(3.0));
        assert_eq!(camera.state.phi, FRAC_PI_2);
    }

    #[test]
    fn test_distance_is_clamped_to_bounds() {
        let mut camera =
            OrbitCamera::new(CameraConfig::new().with_distance_range(1.0, 50.0));
        let (lo, hi) = camera.distance_bounds();

        camera.ddistance = 100.0;
        camera.update(&CameraOverrides::new());
        assert_eq!(camera.state.distance, hi);
        assert!((camera.state.radius() - 50.0).abs() < 1e-3);

        camera.ddistance = -100.0;
        camera.update(&CameraOverrides::new());
        assert_eq!(camera.state.distance, lo);
        assert!((camera.state.radius() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_overshoot_leaves_residual_push() {
        let mut camera =
            OrbitCamera::new(CameraConfig::new().with_distance_range(1.0, 10.0));
        camera.ddistance = 5.0;
        camera.update(&CameraOverrides::new());

        let (_, hi) = camera.distance_bounds();
        assert_eq!(camera.state.distance, hi);
        assert!((camera.pending_zoom() - 4.5).abs() < 1e-6);
    }

    #[test]
    fn test_damping_law() {
        let mut camera = settled_camera(CameraConfig::new());
        camera.state.dtheta = 1.0;

        camera.update(&CameraOverrides::new());
        assert!((camera.state.dtheta - 0.9).abs() < 1e-6);
        assert!((camera.state.theta - 1.0).abs() < 1e-6);
        assert!(camera.state.dirty);

        let mut expected = 0.9_f32;
        let mut steps = 1;
        loop {
            camera.state.dirty = false;
            camera.update(&CameraOverrides::new());
            steps += 1;

            let damped = expected * 0.9;
            if damped.abs() < DAMPING_SNAP {
                assert_eq!(camera.state.dtheta, 0.0);
                assert!(!camera.state.dirty, "settling step must not mark dirty");
                break;
            }
            assert!((camera.state.dtheta - damped).abs() < 1e-5);
            assert!(camera.state.dirty, "residual motion must keep the camera dirty");
            expected = damped;
            assert!(steps < 100);
        }

        // Once settled it stays settled.
        camera.update(&CameraOverrides::new());
        assert_eq!(camera.state.dtheta, 0.0);
        assert!(!camera.state.dirty);
    }

    #[test]
    fn test_update_without_deltas_does_not_mark_dirty() {
        let mut camera = settled_camera(CameraConfig::new());
        camera.update(&CameraOverrides::new());
        assert!(!camera.state.dirty);
    }

    #[test]
    fn test_center_override_persists() {
        let mut camera = OrbitCamera::default();
        let center = Vec3::new(5.0, 1.0, -2.0);

        camera.update(&CameraOverrides::new().center(center));
        camera.update(&CameraOverrides::new());

        assert_eq!(camera.state.center, center);
        assert!(camera.state.eye.abs_diff_eq(center + Vec3::new(10.0, 0.0, 0.0), 1e-4));
    }

    #[test]
    fn test_custom_basis_orients_eye() {
        // Z-up world: right stays X, front becomes -Y.
        let config = CameraConfig {
            up: Some(Vec3::Z),
            front: Some(Vec3::NEG_Y),
            phi: Some(FRAC_PI_2),
            ..Default::default()
        };
        let mut camera = OrbitCamera::new(config);
        camera.update(&CameraOverrides::new());

        assert!(camera.state.eye.abs_diff_eq(Vec3::new(0.0, 0.0, 10.0), 1e-4));
    }

    #[test]
    fn test_nan_override_propagates() {
        let mut camera = OrbitCamera::default();
        camera.update(&CameraOverrides::new().theta(f32::NAN));
        assert!(camera.state.eye.x.is_nan());
        assert!(camera.state.view.to_cols_array().iter().any(|v| v.is_nan()));
    }

    #[test]
    fn test_clamp_helper() {
        assert_eq!(clamp(5.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-5.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
        assert!(clamp(f32::NAN, 0.0, 1.0).is_nan());
        // Inverted bounds resolve to the upper bound.
        assert_eq!(clamp(0.5, 2.0, 1.0), 1.0);
    }
}
