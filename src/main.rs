use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{DeviceEvent, DeviceId, ElementState, KeyEvent, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use fly_camera::cli::Cli;
use fly_camera::core::ReportInterval;
use fly_camera::{Camera, CameraSettings};

// === Application ===

struct App {
    window: Option<Arc<Window>>,
    camera: Camera,
    initial_size: PhysicalSize<u32>,
    stats_timer: ReportInterval,
    /// Mouse look is active while the right button is held
    looking: bool,
}

impl App {
    fn new(cli: &Cli, settings: &CameraSettings) -> Self {
        Self {
            window: None,
            camera: Camera::from_settings(settings),
            initial_size: PhysicalSize::new(cli.width, cli.height),
            stats_timer: ReportInterval::new(cli.stats_interval),
            looking: false,
        }
    }

    fn set_looking(&mut self, looking: bool) {
        self.looking = looking;
        if let Some(window) = &self.window {
            window.set_cursor_visible(!looking);
        }
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            return;
        }
        self.camera
            .set_screen_size(size.width as f32, size.height as f32);
    }

    fn frame(&mut self) {
        let delta = self.camera.update();

        // Hand-off point for a renderer: upload these bytes as the camera uniform
        let uniform = self.camera.to_uniform();
        log::trace!(
            "Camera uniform ready ({} bytes)",
            bytemuck::bytes_of(&uniform).len()
        );

        if self.stats_timer.try_tick(delta) {
            let stats = self.camera.stats();
            let position = self.camera.position();
            log::info!(
                "FPS: {:.1} (avg frame {:.2} ms, {} frames) position: ({:.2}, {:.2}, {:.2})",
                stats.fps(),
                stats.avg_frame_time * 1000.0,
                stats.frames_rendered,
                position.x,
                position.y,
                position.z
            );

            if let Some(window) = &self.window {
                window.set_title(&format!(
                    "Fly Camera - ({:.1}, {:.1}, {:.1})",
                    position.x, position.y, position.z
                ));
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title("Fly Camera")
                .with_inner_size(self.initial_size),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        self.window = Some(window);
        self.resize(size);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                let pressed = event.state.is_pressed();
                if !self.camera.set_key_state(event.physical_key, pressed) {
                    log::trace!("Unbound key {:?}", event.physical_key);
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Right,
                ..
            } => self.set_looking(state.is_pressed()),
            WindowEvent::Focused(false) => {
                log::debug!("Focus lost, releasing camera input");
                self.camera.reset_key_state();
                self.set_looking(false);
            }
            WindowEvent::Resized(size) => self.resize(size),
            WindowEvent::RedrawRequested => self.frame(),
            _ => {}
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            if self.looking {
                self.camera.process_mouse_movement(dx as f32, dy as f32);
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let settings = cli.settings()?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = App::new(&cli, &settings);

    log::info!(
        "Fly Camera - Controls: WASD move, Space/C up/down, Q/E roll, hold right mouse to look, Escape to quit"
    );
    event_loop.run_app(&mut app)?;

    Ok(())
}
