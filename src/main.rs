use std::sync::Arc;

use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use flycam::cli::Cli;
use flycam::renderer::DemoRenderer;
use flycam::{CameraState, Clock, ControllerConfig, FlyController, ModelTransform, WinitInput};

const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 600;

fn print_controls() {
    println!("\n------------- Control Commands --------------\n");
    println!("Mouse: Look around");
    println!("W/S: Move forward/backward");
    println!("A/D: Strafe left/right");
    println!("Space/Shift: Move up/down");
    println!("\nHold right mouse button for object mode:");
    println!("W/S: Translate object up/down");
    println!("A/D: Translate object left/right");
    println!("Q/E: Rotate object");
    println!("R/F: Scale object up/down");
    println!("T: Reset object transform");
    println!("\nESC: Close the window");
    println!("\n---------------------------------------------\n");
}

struct App {
    window: Option<Arc<Window>>,
    renderer: Option<DemoRenderer>,
    input: WinitInput,
    controller: FlyController,
    camera: CameraState,
    model: ModelTransform,
    clock: Clock,
}

impl App {
    fn new(config: ControllerConfig) -> Self {
        Self {
            window: None,
            renderer: None,
            input: WinitInput::new(),
            controller: FlyController::new(config),
            camera: CameraState::new(),
            model: ModelTransform::new(),
            clock: Clock::new(),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("flycam")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let renderer = match pollster::block_on(DemoRenderer::new(window.clone())) {
                Ok(r) => r,
                Err(e) => {
                    log::error!("failed to initialize renderer: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            self.window = Some(window);
            self.renderer = Some(renderer);
            // Don't count setup time against the first frame
            self.clock.reset();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        self.input.process_event(&event);

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size);
                }
            }
            WindowEvent::RedrawRequested => {
                let delta = self.clock.tick();

                let output =
                    self.controller
                        .update(&self.input, delta, &mut self.camera, &mut self.model);
                if output.close_requested {
                    event_loop.exit();
                    return;
                }
                if !output.recognized_input && self.input.any_pressed() {
                    log::debug!("held input produced no effect this frame");
                }

                if let Some(renderer) = &mut self.renderer {
                    match renderer.render(&self.camera, &self.model) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            if let Some(window) = &self.window {
                                renderer.resize(window.inner_size());
                            }
                        }
                        Err(e) => log::error!("render error: {}", e),
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => ControllerConfig::from_path(path)?,
        None => ControllerConfig::default(),
    };
    if cli.gate_look {
        config.look_gated_by_button = true;
    }
    if cli.free_move_always {
        config.camera_keys_always_active = true;
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);

    print_controls();
    event_loop.run_app(&mut app)?;

    Ok(())
}
