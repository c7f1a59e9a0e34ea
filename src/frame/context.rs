//! Per-frame camera context handed to the render block

use glam::{Mat4, Vec3};
use rustc_hash::FxHashMap;

use super::uniforms::{CAMERA_UNIFORMS, CameraUniform, UniformValue};
use crate::camera::CameraState;
use crate::input::ViewportSize;

/// Snapshot of the camera taken for one frame.
///
/// Built fresh on every bind and only lent to the render block, so nothing
/// read from it outlives the frame.
#[derive(Debug, Clone)]
pub struct FrameContext {
    state: CameraState,
    viewport: ViewportSize,
}

impl FrameContext {
    pub(crate) fn new(state: CameraState, viewport: ViewportSize) -> Self {
        Self { state, viewport }
    }

    /// Viewport the projection was built for
    #[must_use]
    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    /// Full state snapshot
    #[must_use]
    pub fn state(&self) -> &CameraState {
        &self.state
    }

    #[must_use]
    pub fn view(&self) -> Mat4 {
        self.state.view
    }

    #[must_use]
    pub fn projection(&self) -> Mat4 {
        self.state.projection
    }

    /// `projection * view`
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.state.projection * self.state.view
    }

    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.state.center
    }

    #[must_use]
    pub fn theta(&self) -> f32 {
        self.state.theta
    }

    #[must_use]
    pub fn phi(&self) -> f32 {
        self.state.phi
    }

    /// Log-space distance
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.state.distance
    }

    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.state.eye
    }

    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.state.up
    }

    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.state.right
    }

    #[must_use]
    pub fn front(&self) -> Vec3 {
        self.state.front
    }

    #[must_use]
    pub fn fovy(&self) -> f32 {
        self.state.fovy
    }

    #[must_use]
    pub fn near(&self) -> f32 {
        self.state.near
    }

    #[must_use]
    pub fn far(&self) -> f32 {
        self.state.far
    }

    #[must_use]
    pub fn no_scroll(&self) -> bool {
        self.state.no_scroll
    }

    #[must_use]
    pub fn flip_y(&self) -> bool {
        self.state.flip_y
    }

    #[must_use]
    pub fn dtheta(&self) -> f32 {
        self.state.dtheta
    }

    #[must_use]
    pub fn dphi(&self) -> f32 {
        self.state.dphi
    }

    #[must_use]
    pub fn rotation_speed(&self) -> f32 {
        self.state.rotation_speed
    }

    #[must_use]
    pub fn zoom_speed(&self) -> f32 {
        self.state.zoom_speed
    }

    #[must_use]
    pub fn render_on_dirty(&self) -> bool {
        self.state.render_on_dirty
    }

    /// Whether the camera changed since the last bound frame
    #[must_use]
    pub fn dirty(&self) -> bool {
        self.state.dirty
    }

    /// Look up one value by uniform name
    #[must_use]
    pub fn uniform(&self, name: &str) -> Option<UniformValue> {
        CAMERA_UNIFORMS
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, read)| read(self))
    }

    /// All values keyed by uniform name
    #[must_use]
    pub fn uniforms(&self) -> FxHashMap<&'static str, UniformValue> {
        CAMERA_UNIFORMS
            .iter()
            .map(|(name, read)| (*name, read(self)))
            .collect()
    }

    /// Values packed for upload to a uniform buffer
    #[must_use]
    pub fn gpu_uniform(&self) -> CameraUniform {
        CameraUniform::from_context(self)
    }
}
