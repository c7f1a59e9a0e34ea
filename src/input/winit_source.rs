//! Winit event source
//!
//! Tracks the primary button and cursor position from window events and
//! forwards drags and wheel scrolls to an [`OrbitCamera`].

use glam::Vec2;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

use crate::camera::OrbitCamera;

use super::adapter::{PointerMove, WheelScroll};
use super::viewport::ViewportSize;

/// Pixels per wheel line, matching what browsers report for one notch.
pub const PIXELS_PER_LINE: f32 = 100.0;

/// Pointer state fed by winit window events
#[derive(Debug, Clone, Default)]
pub struct WinitPointer {
    /// Left button currently pressed
    primary_held: bool,
    /// Last cursor position, unknown until the first move
    cursor: Option<Vec2>,
}

impl WinitPointer {
    /// Create a tracker with no button held
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the primary button is held
    #[must_use]
    pub fn primary_held(&self) -> bool {
        self.primary_held
    }

    /// Last known cursor position
    #[must_use]
    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor
    }

    /// Process a mouse button event
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            self.primary_held = state == ElementState::Pressed;
        }
    }

    /// Process a cursor move, returning the movement since the last one.
    ///
    /// The first position after creation or [`cursor_left`](Self::cursor_left)
    /// yields no movement.
    pub fn process_cursor(&mut self, position: Vec2) -> Option<PointerMove> {
        let previous = self.cursor.replace(position)?;
        let delta = position - previous;
        Some(PointerMove {
            movement_x: delta.x,
            movement_y: delta.y,
            primary_held: self.primary_held,
        })
    }

    /// Forget the cursor position so re-entry does not jump
    pub fn cursor_left(&mut self) {
        self.cursor = None;
    }

    /// Route a window event to the camera.
    ///
    /// Returns `true` if the camera consumed it.
    pub fn handle_window_event(
        &mut self,
        camera: &mut OrbitCamera,
        event: &WindowEvent,
        window: ViewportSize,
    ) -> bool {
        match event {
            WindowEvent::MouseInput { state, button, .. } => {
                self.process_mouse_button(*button, *state);
                false
            }
            WindowEvent::CursorMoved { position, .. } => {
                let position = Vec2::new(position.x as f32, position.y as f32);
                match self.process_cursor(position) {
                    Some(movement) => camera.on_pointer_move(movement, window),
                    None => false,
                }
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor_left();
                false
            }
            WindowEvent::MouseWheel { delta, .. } => camera.on_wheel(wheel_scroll(*delta), window),
            _ => false,
        }
    }
}

/// Convert a winit scroll delta to browser-style pixels.
///
/// Winit reports scrolling up as positive; browsers report scrolling down as
/// positive, which is what zooms out.
#[must_use]
pub fn wheel_scroll(delta: MouseScrollDelta) -> WheelScroll {
    let delta_y = match delta {
        MouseScrollDelta::LineDelta(_, y) => -y * PIXELS_PER_LINE,
        MouseScrollDelta::PixelDelta(pos) => -(pos.y as f32),
    };
    WheelScroll { delta_y }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    // Winit events carry device ids that cannot be built in tests, so these
    // exercise the tracker pieces directly.

    #[test]
    fn test_new_pointer_is_idle() {
        let pointer = WinitPointer::new();
        assert!(!pointer.primary_held());
        assert_eq!(pointer.cursor(), None);
    }

    #[test]
    fn test_primary_button_tracking() {
        let mut pointer = WinitPointer::new();

        pointer.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        assert!(pointer.primary_held());

        pointer.process_mouse_button(MouseButton::Right, ElementState::Released);
        assert!(pointer.primary_held(), "Other buttons must not release the drag");

        pointer.process_mouse_button(MouseButton::Left, ElementState::Released);
        assert!(!pointer.primary_held());
    }

    #[test]
    fn test_cursor_movement() {
        let mut pointer = WinitPointer::new();
        assert_eq!(pointer.process_cursor(Vec2::new(10.0, 10.0)), None);

        pointer.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        let movement = pointer.process_cursor(Vec2::new(30.0, 5.0)).unwrap();
        assert_eq!(movement, PointerMove::drag(20.0, -5.0));

        pointer.cursor_left();
        assert_eq!(pointer.process_cursor(Vec2::new(500.0, 500.0)), None);
    }

    #[test]
    fn test_wheel_line_delta() {
        let scroll = wheel_scroll(MouseScrollDelta::LineDelta(0.0, -1.0));
        assert!((scroll.delta_y - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_wheel_pixel_delta() {
        let scroll = wheel_scroll(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 42.0)));
        assert!((scroll.delta_y + 42.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_drag_reaches_camera() {
        let mut pointer = WinitPointer::new();
        let mut camera = OrbitCamera::default();
        let window = ViewportSize::new(400.0, 400.0);

        pointer.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        pointer.process_cursor(Vec2::ZERO);
        let movement = pointer.process_cursor(Vec2::new(100.0, 0.0)).unwrap();
        assert!(camera.on_pointer_move(movement, window));
        assert!((camera.state().dtheta - 1.0).abs() < 1e-6);
    }
}
