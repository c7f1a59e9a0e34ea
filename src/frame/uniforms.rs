//! Uniform values exposed to the render block
//!
//! The exposed surface is a fixed table of `(name, accessor)` pairs, one per
//! camera state field, named the way shaders refer to them.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use super::context::FrameContext;

/// A single named camera value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    /// Scalar
    Float(f32),
    /// Flag
    Bool(bool),
    /// 3-vector
    Vec3(Vec3),
    /// 4x4 column-major matrix
    Mat4(Mat4),
}

impl UniformValue {
    /// Scalar value, if this is one
    #[must_use]
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Flag value, if this is one
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Vector value, if this is one
    #[must_use]
    pub fn as_vec3(&self) -> Option<Vec3> {
        match self {
            Self::Vec3(v) => Some(*v),
            _ => None,
        }
    }

    /// Matrix value, if this is one
    #[must_use]
    pub fn as_mat4(&self) -> Option<Mat4> {
        match self {
            Self::Mat4(v) => Some(*v),
            _ => None,
        }
    }
}

/// Reads one value out of a frame context
pub type UniformAccessor = fn(&FrameContext) -> UniformValue;

/// Every exposed camera value, by uniform name
pub const CAMERA_UNIFORMS: [(&str, UniformAccessor); 21] = [
    ("view", |ctx: &FrameContext| UniformValue::Mat4(ctx.view())),
    ("projection", |ctx: &FrameContext| UniformValue::Mat4(ctx.projection())),
    ("center", |ctx: &FrameContext| UniformValue::Vec3(ctx.center())),
    ("theta", |ctx: &FrameContext| UniformValue::Float(ctx.theta())),
    ("phi", |ctx: &FrameContext| UniformValue::Float(ctx.phi())),
    ("distance", |ctx: &FrameContext| UniformValue::Float(ctx.distance())),
    ("eye", |ctx: &FrameContext| UniformValue::Vec3(ctx.eye())),
    ("up", |ctx: &FrameContext| UniformValue::Vec3(ctx.up())),
    ("right", |ctx: &FrameContext| UniformValue::Vec3(ctx.right())),
    ("front", |ctx: &FrameContext| UniformValue::Vec3(ctx.front())),
    ("fovy", |ctx: &FrameContext| UniformValue::Float(ctx.fovy())),
    ("near", |ctx: &FrameContext| UniformValue::Float(ctx.near())),
    ("far", |ctx: &FrameContext| UniformValue::Float(ctx.far())),
    ("noScroll", |ctx: &FrameContext| UniformValue::Bool(ctx.no_scroll())),
    ("flipY", |ctx: &FrameContext| UniformValue::Bool(ctx.flip_y())),
    ("dtheta", |ctx: &FrameContext| UniformValue::Float(ctx.dtheta())),
    ("dphi", |ctx: &FrameContext| UniformValue::Float(ctx.dphi())),
    ("rotationSpeed", |ctx: &FrameContext| UniformValue::Float(ctx.rotation_speed())),
    ("zoomSpeed", |ctx: &FrameContext| UniformValue::Float(ctx.zoom_speed())),
    ("renderOnDirty", |ctx: &FrameContext| UniformValue::Bool(ctx.render_on_dirty())),
    ("dirty", |ctx: &FrameContext| UniformValue::Bool(ctx.dirty())),
];

/// Bit set in [`CameraUniform::flags`] when wheel zoom is off
pub const FLAG_NO_SCROLL: u32 = 1;
/// Bit set in [`CameraUniform::flags`] when the projection is flipped
pub const FLAG_FLIP_Y: u32 = 1 << 1;
/// Bit set in [`CameraUniform::flags`] in render-on-dirty mode
pub const FLAG_RENDER_ON_DIRTY: u32 = 1 << 2;
/// Bit set in [`CameraUniform::flags`] when the frame is dirty
pub const FLAG_DIRTY: u32 = 1 << 3;

/// GPU uniform block holding the whole camera
///
/// Vectors are paired with a scalar to keep 16-byte alignment.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CameraUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub eye: [f32; 3],
    pub theta: f32,
    pub center: [f32; 3],
    pub phi: f32,
    pub up: [f32; 3],
    pub distance: f32,
    pub right: [f32; 3],
    pub fovy: f32,
    pub front: [f32; 3],
    pub near: f32,
    pub far: f32,
    pub dtheta: f32,
    pub dphi: f32,
    pub rotation_speed: f32,
    pub zoom_speed: f32,
    pub flags: u32,
    _padding: [u32; 2],
}

impl CameraUniform {
    /// Pack a frame context into a uniform block
    #[must_use]
    pub fn from_context(ctx: &FrameContext) -> Self {
        let mut flags = 0;
        if ctx.no_scroll() {
            flags |= FLAG_NO_SCROLL;
        }
        if ctx.flip_y() {
            flags |= FLAG_FLIP_Y;
        }
        if ctx.render_on_dirty() {
            flags |= FLAG_RENDER_ON_DIRTY;
        }
        if ctx.dirty() {
            flags |= FLAG_DIRTY;
        }

        Self {
            view: ctx.view().to_cols_array_2d(),
            projection: ctx.projection().to_cols_array_2d(),
            eye: ctx.eye().to_array(),
            theta: ctx.theta(),
            center: ctx.center().to_array(),
            phi: ctx.phi(),
            up: ctx.up().to_array(),
            distance: ctx.distance(),
            right: ctx.right().to_array(),
            fovy: ctx.fovy(),
            front: ctx.front().to_array(),
            near: ctx.near(),
            far: ctx.far(),
            dtheta: ctx.dtheta(),
            dphi: ctx.dphi(),
            rotation_speed: ctx.rotation_speed(),
            zoom_speed: ctx.zoom_speed(),
            flags,
            _padding: [0; 2],
        }
    }
}
