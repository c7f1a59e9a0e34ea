//! Matrix kernel
//!
//! Column-major 4x4 matrix builders used by the orbit camera.

mod mat4;

pub use mat4::{
    LOOK_AT_EPSILON, Mat4Array, identity, look_at, perspective, set_identity, set_look_at,
    set_perspective,
};
