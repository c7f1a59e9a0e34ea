//! Input handling module
//!
//! Translates pointer drags and wheel scrolls into orbit camera deltas, and
//! bridges winit window events onto those handlers.

mod adapter;
mod viewport;
mod winit_source;

pub use adapter::{PointerMove, ROTATION_SCALE, WheelScroll};
pub use viewport::{ViewportSize, ViewportSource};
pub use winit_source::{PIXELS_PER_LINE, WinitPointer, wheel_scroll};
