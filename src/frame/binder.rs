//! Per-frame camera binding
//!
//! The host calls [`OrbitCamera::bind`] (or [`OrbitCamera::bind_with`]) once
//! per frame. The camera is updated, the projection is rebuilt for the
//! current viewport, and the render block runs with a [`FrameContext`].
//! The dirty flag is cleared when the block exits, even by unwinding. Motion
//! still decaying from earlier input marks the following frame dirty again.

use crate::camera::{CameraOverrides, OrbitCamera};
use crate::input::ViewportSize;
use crate::math;

use super::context::FrameContext;

/// Clears the dirty flag on drop
struct ClearDirtyOnExit<'a>(&'a mut bool);

impl Drop for ClearDirtyOnExit<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

impl OrbitCamera {
    /// Bind the camera for one frame with no overrides.
    ///
    /// Returns `None` without running `block` when render-on-dirty is on and
    /// nothing changed.
    pub fn bind<R>(
        &mut self,
        viewport: ViewportSize,
        block: impl FnOnce(&FrameContext) -> R,
    ) -> Option<R> {
        self.bind_frame(None, viewport, block)
    }

    /// Bind the camera for one frame, assigning `overrides` first.
    ///
    /// Passing overrides counts as a change, so `block` always runs.
    pub fn bind_with<R>(
        &mut self,
        overrides: &CameraOverrides,
        viewport: ViewportSize,
        block: impl FnOnce(&FrameContext) -> R,
    ) -> Option<R> {
        self.bind_frame(Some(overrides), viewport, block)
    }

    /// Rebuild the projection for `viewport`, flipping y if configured.
    pub fn update_projection(&mut self, viewport: ViewportSize) {
        let state = &mut self.state;
        math::set_perspective(
            &mut state.projection,
            state.fovy,
            viewport.aspect(),
            state.near,
            state.far,
        );
        if state.flip_y {
            state.projection.y_axis.y = -state.projection.y_axis.y;
        }
    }

    fn bind_frame<R>(
        &mut self,
        overrides: Option<&CameraOverrides>,
        viewport: ViewportSize,
        block: impl FnOnce(&FrameContext) -> R,
    ) -> Option<R> {
        if std::mem::take(&mut self.pending_dirty) {
            self.state.dirty = true;
        }
        if overrides.is_some() || self.is_moving() {
            self.state.dirty = true;
        }

        if self.state.render_on_dirty && !self.state.dirty {
            log::trace!("Camera unchanged, skipping frame");
            return None;
        }

        match overrides {
            Some(overrides) => self.update(overrides),
            None => self.update(&CameraOverrides::new()),
        }
        self.update_projection(viewport);

        let ctx = FrameContext::new(self.state.clone(), viewport);
        log::trace!(
            "Binding camera frame: eye {:?}, {}x{}",
            ctx.eye(),
            viewport.width,
            viewport.height
        );

        let _clear = ClearDirtyOnExit(&mut self.state.dirty);
        Some(block(&ctx))
    }
}
