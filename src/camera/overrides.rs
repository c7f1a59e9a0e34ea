//! Per-frame state overrides
//!
//! Any camera field can be assigned for a frame, e.g. to jump `center`.
//! Assigned values persist: nothing is restored after the frame.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use super::state::CameraState;

/// Field assignments applied at the start of an update.
///
/// `distance` is the raw log-space value stored on [`CameraState`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CameraOverrides {
    pub view: Option<Mat4>,
    pub projection: Option<Mat4>,
    pub center: Option<Vec3>,
    pub theta: Option<f32>,
    pub phi: Option<f32>,
    pub distance: Option<f32>,
    pub eye: Option<Vec3>,
    pub up: Option<Vec3>,
    pub right: Option<Vec3>,
    pub front: Option<Vec3>,
    pub fovy: Option<f32>,
    pub near: Option<f32>,
    pub far: Option<f32>,
    pub no_scroll: Option<bool>,
    pub flip_y: Option<bool>,
    pub dtheta: Option<f32>,
    pub dphi: Option<f32>,
    pub rotation_speed: Option<f32>,
    pub zoom_speed: Option<f32>,
    pub render_on_dirty: Option<bool>,
    pub dirty: Option<bool>,
}

macro_rules! override_setters {
    ($($field:ident: $ty:ty),* $(,)?) => {
        $(
            #[doc = concat!("Override `", stringify!($field), "`")]
            #[must_use]
            pub fn $field(mut self, value: $ty) -> Self {
                self.$field = Some(value);
                self
            }
        )*
    };
}

impl CameraOverrides {
    /// No overrides
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    override_setters! {
        view: Mat4,
        projection: Mat4,
        center: Vec3,
        theta: f32,
        phi: f32,
        distance: f32,
        eye: Vec3,
        up: Vec3,
        right: Vec3,
        front: Vec3,
        fovy: f32,
        near: f32,
        far: f32,
        no_scroll: bool,
        flip_y: bool,
        dtheta: f32,
        dphi: f32,
        rotation_speed: f32,
        zoom_speed: f32,
        render_on_dirty: bool,
        dirty: bool,
    }

    /// True if no field is assigned
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Assign every set field onto `state`.
    pub fn apply(&self, state: &mut CameraState) {
        macro_rules! assign {
            ($src:ident, $dst:ident; $($field:ident),*) => {
                $(
                    if let Some(value) = $src.$field {
                        $dst.$field = value;
                    }
                )*
            };
        }

        let overrides = self;
        assign!(
            overrides,
            state;
            view,
            projection,
            center,
            theta,
            phi,
            distance,
            eye,
            up,
            right,
            front,
            fovy,
            near,
            far,
            no_scroll,
            flip_y,
            dtheta,
            dphi,
            rotation_speed,
            zoom_speed,
            render_on_dirty,
            dirty
        );
    }
}
