//! Viewport size queries

use serde::{Deserialize, Serialize};

/// Size of a drawing surface or input element in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl ViewportSize {
    /// Create a new viewport size
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width divided by height. Not guarded against a zero height.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

impl From<winit::dpi::PhysicalSize<u32>> for ViewportSize {
    fn from(size: winit::dpi::PhysicalSize<u32>) -> Self {
        Self::new(size.width as f32, size.height as f32)
    }
}

/// Where input handlers read their scaling size from.
///
/// An explicit element box wins; otherwise the window size is used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSource {
    /// Size of the element receiving input, if any
    pub element: Option<ViewportSize>,
    /// Size of the whole window
    pub window: ViewportSize,
}

impl ViewportSource {
    /// Use the window size only
    #[must_use]
    pub const fn window(window: ViewportSize) -> Self {
        Self {
            element: None,
            window,
        }
    }

    /// Effective size for scaling input deltas
    #[must_use]
    pub fn size(&self) -> ViewportSize {
        self.element.unwrap_or(self.window)
    }
}
