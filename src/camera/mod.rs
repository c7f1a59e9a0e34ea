//! Orbit camera module
//!
//! Camera state, configuration, per-frame overrides and the update step.

mod config;
mod orbit;
mod overrides;
mod state;

pub use config::{
    CameraConfig, ConfigError, DEFAULT_DAMPING, DEFAULT_DISTANCE, DEFAULT_MAX_DISTANCE,
    DEFAULT_MIN_DISTANCE,
};
pub use orbit::{DAMPING_SNAP, OrbitCamera};
pub use overrides::CameraOverrides;
pub use state::CameraState;
