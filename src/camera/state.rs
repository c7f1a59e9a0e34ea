//! Camera state record

use glam::{Mat4, Vec3};
use serde::Serialize;

use crate::math;

/// Mutable orbit camera state.
///
/// Orientation is spherical around `center`: `theta` is the azimuth, `phi`
/// the polar angle and `distance` the natural log of the radial distance.
/// `eye` and `view` are derived from those on every update; `projection` is
/// rebuilt on every frame bind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraState {
    /// View matrix (column-major)
    pub view: Mat4,
    /// Projection matrix (column-major)
    pub projection: Mat4,
    /// Look-at target
    pub center: Vec3,
    /// Azimuthal angle in radians, unbounded
    pub theta: f32,
    /// Polar angle in radians, kept within [-π/2, π/2]
    pub phi: f32,
    /// Log of the radial distance from `center`
    pub distance: f32,
    /// Derived eye position
    pub eye: Vec3,
    /// Up basis vector
    pub up: Vec3,
    /// Right basis vector
    pub right: Vec3,
    /// Front basis vector
    pub front: Vec3,
    /// Vertical field of view in radians
    pub fovy: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Wheel zoom disabled
    pub no_scroll: bool,
    /// Negate the projection's y scale
    pub flip_y: bool,
    /// Pending azimuth delta
    pub dtheta: f32,
    /// Pending polar delta
    pub dphi: f32,
    /// Multiplier for drag input
    pub rotation_speed: f32,
    /// Multiplier for wheel input
    pub zoom_speed: f32,
    /// Skip frames when nothing changed
    pub render_on_dirty: bool,
    /// Something changed since the last bound frame
    pub dirty: bool,
}

impl CameraState {
    /// Radial distance from `center` in world units.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.distance.exp()
    }

    /// Direction from the eye towards `center`.
    ///
    /// Zero when the eye sits on the target.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.center - self.eye).normalize_or_zero()
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            view: math::identity(),
            projection: math::identity(),
            center: Vec3::ZERO,
            theta: 0.0,
            phi: 0.0,
            distance: 10.0_f32.ln(),
            eye: Vec3::ZERO,
            up: Vec3::Y,
            right: Vec3::X,
            front: Vec3::Z,
            fovy: std::f32::consts::FRAC_PI_4,
            near: 0.01,
            far: 1000.0,
            no_scroll: false,
            flip_y: false,
            dtheta: 0.0,
            dphi: 0.0,
            rotation_speed: 1.0,
            zoom_speed: 1.0,
            render_on_dirty: false,
            dirty: true,
        }
    }
}
