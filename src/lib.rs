//! An orbit camera controller
//!
//! This crate provides:
//! - Column-major matrix builders (identity, perspective, look-at)
//! - An orbit camera with damped rotation and log-space zoom
//! - Pointer/wheel input translation, with a winit bridge
//! - Per-frame binding that hands view/projection to a render block

pub mod camera;
pub mod frame;
pub mod input;
pub mod math;

// Re-exports for convenience
pub use glam;
pub use winit;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::camera::{CameraConfig, CameraOverrides, CameraState, OrbitCamera};
    pub use crate::frame::{CameraUniform, FrameContext, UniformValue};
    pub use crate::input::{PointerMove, ViewportSize, WheelScroll, WinitPointer};
    pub use glam::{Mat4, Vec3};
}
