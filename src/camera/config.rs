//! Camera configuration
//!
//! Every option is optional; [`CameraConfig::normalize`] resolves the legacy
//! `preventDefault` alias and [`CameraConfig::to_state`] fills in defaults.
//! Configs can be loaded from RON or JSON. Unknown keys are ignored.

use std::fs;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::state::CameraState;
use crate::input::ViewportSize;

/// Default radial distance
pub const DEFAULT_DISTANCE: f32 = 10.0;
/// Default damping factor applied to pending deltas each frame
pub const DEFAULT_DAMPING: f32 = 0.9;
/// Default closest zoom
pub const DEFAULT_MIN_DISTANCE: f32 = 0.1;
/// Default farthest zoom
pub const DEFAULT_MAX_DISTANCE: f32 = 1000.0;

/// User-facing camera options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CameraConfig {
    /// Look-at target (default: origin)
    pub center: Option<Vec3>,
    /// Initial azimuth in radians
    pub theta: Option<f32>,
    /// Initial polar angle in radians
    pub phi: Option<f32>,
    /// Initial radial distance in world units (not log-space)
    pub distance: Option<f32>,
    /// Up basis vector
    pub up: Option<Vec3>,
    /// Right basis vector
    pub right: Option<Vec3>,
    /// Front basis vector
    pub front: Option<Vec3>,
    /// Vertical field of view in radians
    pub fovy: Option<f32>,
    /// Near clipping plane
    pub near: Option<f32>,
    /// Far clipping plane
    pub far: Option<f32>,
    /// Disable wheel zoom
    pub no_scroll: Option<bool>,
    /// Deprecated name for `no_scroll`
    pub prevent_default: Option<bool>,
    /// Negate the projection's y scale
    pub flip_y: Option<bool>,
    /// Drag multiplier
    pub rotation_speed: Option<f32>,
    /// Wheel multiplier
    pub zoom_speed: Option<f32>,
    /// Skip frames when nothing changed
    pub render_on_dirty: Option<bool>,
    /// Per-frame damping factor for pending deltas
    pub damping: Option<f32>,
    /// Closest allowed distance
    pub min_distance: Option<f32>,
    /// Farthest allowed distance
    pub max_distance: Option<f32>,
    /// Size of the element receiving input, if not the whole window
    pub element: Option<ViewportSize>,
    /// Wire pointer and wheel input (default: true)
    pub mouse: Option<bool>,
}

impl CameraConfig {
    /// Create an empty config (all defaults)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the look-at target
    #[must_use]
    pub fn with_center(mut self, center: Vec3) -> Self {
        self.center = Some(center);
        self
    }

    /// Set the initial angles
    #[must_use]
    pub fn with_angles(mut self, theta: f32, phi: f32) -> Self {
        self.theta = Some(theta);
        self.phi = Some(phi);
        self
    }

    /// Set the initial distance (world units)
    #[must_use]
    pub fn with_distance(mut self, distance: f32) -> Self {
        self.distance = Some(distance);
        self
    }

    /// Set the zoom range (world units)
    #[must_use]
    pub fn with_distance_range(mut self, min: f32, max: f32) -> Self {
        self.min_distance = Some(min);
        self.max_distance = Some(max);
        self
    }

    /// Set the damping factor
    #[must_use]
    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = Some(damping);
        self
    }

    /// Enable or disable render-on-dirty
    #[must_use]
    pub fn with_render_on_dirty(mut self, enabled: bool) -> Self {
        self.render_on_dirty = Some(enabled);
        self
    }

    /// Enable or disable wheel zoom
    #[must_use]
    pub fn with_no_scroll(mut self, no_scroll: bool) -> Self {
        self.no_scroll = Some(no_scroll);
        self
    }

    /// Enable or disable input wiring
    #[must_use]
    pub fn with_mouse(mut self, mouse: bool) -> Self {
        self.mouse = Some(mouse);
        self
    }

    /// Set the input element size
    #[must_use]
    pub fn with_element(mut self, element: ViewportSize) -> Self {
        self.element = Some(element);
        self
    }

    /// Set the projection parameters
    #[must_use]
    pub fn with_projection(mut self, fovy: f32, near: f32, far: f32) -> Self {
        self.fovy = Some(fovy);
        self.near = Some(near);
        self.far = Some(far);
        self
    }

    /// Migrate deprecated options onto their current names.
    ///
    /// `preventDefault` only applies when `noScroll` was not given.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if let Some(prevent_default) = self.prevent_default.take() {
            log::warn!("camera option `preventDefault` is deprecated, use `noScroll`");
            if self.no_scroll.is_none() {
                self.no_scroll = Some(prevent_default);
            }
        }
        self
    }

    /// Effective damping factor
    #[must_use]
    pub fn damping(&self) -> f32 {
        self.damping.unwrap_or(DEFAULT_DAMPING)
    }

    /// Effective zoom range as log-space bounds
    #[must_use]
    pub fn log_distance_bounds(&self) -> (f32, f32) {
        (
            self.min_distance.unwrap_or(DEFAULT_MIN_DISTANCE).ln(),
            self.max_distance.unwrap_or(DEFAULT_MAX_DISTANCE).ln(),
        )
    }

    /// Whether pointer and wheel input are wired at all
    #[must_use]
    pub fn mouse_enabled(&self) -> bool {
        self.mouse.unwrap_or(true)
    }

    /// Build the initial camera state.
    ///
    /// `theta`, `phi`, `distance` and `fovy` treat zero like an absent value.
    /// Call [`normalize`](Self::normalize) first so the legacy alias is honored.
    #[must_use]
    pub fn to_state(&self) -> CameraState {
        let defaults = CameraState::default();
        CameraState {
            center: self.center.unwrap_or(defaults.center),
            theta: non_zero(self.theta).unwrap_or(defaults.theta),
            phi: non_zero(self.phi).unwrap_or(defaults.phi),
            distance: non_zero(self.distance)
                .unwrap_or(DEFAULT_DISTANCE)
                .ln(),
            up: self.up.unwrap_or(defaults.up),
            right: self.right.unwrap_or(defaults.right),
            front: self.front.unwrap_or(defaults.front),
            fovy: non_zero(self.fovy).unwrap_or(defaults.fovy),
            near: self.near.unwrap_or(defaults.near),
            far: self.far.unwrap_or(defaults.far),
            no_scroll: self.no_scroll.unwrap_or(defaults.no_scroll),
            flip_y: self.flip_y.unwrap_or(defaults.flip_y),
            rotation_speed: self.rotation_speed.unwrap_or(defaults.rotation_speed),
            zoom_speed: self.zoom_speed.unwrap_or(defaults.zoom_speed),
            render_on_dirty: self.render_on_dirty.unwrap_or(defaults.render_on_dirty),
            ..defaults
        }
    }

    /// Parse a config from a RON string
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid camera config
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        ron::from_str(text).map_err(|e| ConfigError::DeserializeError(e.to_string()))
    }

    /// Parse a config from a JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid camera config
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|e| ConfigError::DeserializeError(e.to_string()))
    }

    /// Load a config from a RON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or deserialization fails
    pub fn load_ron(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::from_ron_str(&content)
    }

    /// Load a config from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or deserialization fails
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::from_json_str(&content)
    }

    /// Load a config file, picking the format from its extension
    ///
    /// `.json` is read as JSON, anything else as RON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or deserialization fails
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("Loading camera config from {}", path.display());
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::load_json(path),
            _ => Self::load_ron(path),
        }
    }
}

fn non_zero(value: Option<f32>) -> Option<f32> {
    value.filter(|v| *v != 0.0)
}

/// Errors that can occur while loading a camera config
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// IO error
    IoError(String),
    /// Deserialization error
    DeserializeError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoError(e) => write!(f, "IO error: {e}"),
            Self::DeserializeError(e) => write!(f, "Deserialization error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}
