//! Orbit camera demo
//!
//! Opens a window, drives the camera from mouse input and logs the matrices
//! whenever a frame is bound. Pass a `.ron` or `.json` camera config path as
//! the first argument to override the defaults. Run with `RUST_LOG=debug`.

use std::sync::Arc;

use orbit_camera::prelude::*;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

/// Demo application state
struct OrbitDemo {
    camera: OrbitCamera,
    pointer: WinitPointer,
    window: Option<Arc<Window>>,
    viewport: ViewportSize,
    frames: u64,
}

impl OrbitDemo {
    fn new(config: CameraConfig) -> Self {
        Self {
            camera: OrbitCamera::new(config),
            pointer: WinitPointer::new(),
            window: None,
            viewport: ViewportSize::new(1280.0, 720.0),
            frames: 0,
        }
    }

    fn render(&mut self) {
        let frame = self.frames;
        let bound = self.camera.bind(self.viewport, |ctx| {
            log::debug!(
                "frame {frame}: eye {:?} theta {:.3} phi {:.3}",
                ctx.eye(),
                ctx.theta(),
                ctx.phi()
            );
            log::trace!("view_proj {:?}", ctx.view_projection());
        });

        if bound.is_some() {
            self.frames += 1;
        }
    }
}

impl ApplicationHandler for OrbitDemo {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title("Orbit Camera")
            .with_inner_size(PhysicalSize::new(1280, 720));

        match event_loop.create_window(window_attrs) {
            Ok(window) => {
                self.viewport = window.inner_size().into();
                self.window = Some(Arc::new(window));
                log::info!("Window created");
            }
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self
            .pointer
            .handle_window_event(&mut self.camera, &event, self.viewport)
        {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, shutting down after {} frames", self.frames);
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                if new_size.width > 0 && new_size.height > 0 {
                    self.viewport = new_size.into();
                    self.camera.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => self.render(),

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => CameraConfig::load(&path)?,
        None => CameraConfig::new().with_render_on_dirty(true),
    };
    log::info!("Starting orbit camera demo");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop.run_app(&mut OrbitDemo::new(config))?;

    Ok(())
}
