//! Frame binding module
//!
//! Runs the camera update once per frame and exposes the result to the
//! caller's render block as named values and a GPU uniform block.

mod binder;
mod context;
mod uniforms;

pub use context::FrameContext;
pub use uniforms::{
    CAMERA_UNIFORMS, CameraUniform, FLAG_DIRTY, FLAG_FLIP_Y, FLAG_NO_SCROLL, FLAG_RENDER_ON_DIRTY,
    UniformAccessor, UniformValue,
};
