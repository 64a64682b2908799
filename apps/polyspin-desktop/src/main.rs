use anyhow::Result;
use clap::Parser;
use glam::Vec2;
use polyspin_common::Viewport;
use polyspin_input::{CameraGesture, PointerButton, PointerState};
use polyspin_render_wgpu::{GpuContext, SceneRenderer};
use polyspin_scene::ViewContext;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

#[derive(Parser)]
#[command(name = "polyspin-desktop", about = "Two spinning polyhedra under a spot light")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Initial window width in pixels
    #[arg(long, default_value = "800")]
    width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value = "600")]
    height: u32,
}

/// Application state: the window, the GPU, and the mounted view.
///
/// Everything stays `None` until `resumed` succeeds; if the drawing surface
/// never comes up, no setup happens and every handler no-ops.
struct ViewerApp {
    initial_size: PhysicalSize<u32>,
    window: Option<Arc<Window>>,
    gpu: Option<GpuContext>,
    renderer: Option<SceneRenderer>,
    view: Option<ViewContext>,
    pointer: PointerState,
}

impl ViewerApp {
    fn new(width: u32, height: u32) -> Self {
        Self {
            initial_size: PhysicalSize::new(width, height),
            window: None,
            gpu: None,
            renderer: None,
            view: None,
            pointer: PointerState::new(),
        }
    }

    fn apply_gesture(&mut self, gesture: CameraGesture) {
        let Some(view) = &mut self.view else {
            return;
        };
        match gesture {
            CameraGesture::Orbit(d) => view.controls.orbit(d.x, d.y),
            CameraGesture::Pan(d) => view.controls.pan(d.x, d.y),
            CameraGesture::Zoom(factor) => view.controls.zoom(factor),
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("polyspin")
            .with_inner_size(self.initial_size);
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("window creation failed: {e}");
                event_loop.exit();
                return;
            }
        };

        // No drawing surface means no setup: the view stays unmounted and
        // nothing ever renders.
        let gpu = match GpuContext::new(window.clone()) {
            Ok(gpu) => gpu,
            Err(e) => {
                tracing::error!("GPU bring-up failed, running without a view: {e}");
                self.window = Some(window);
                return;
            }
        };

        let viewport = gpu.viewport();
        let renderer = SceneRenderer::new(gpu.device(), gpu.surface_format(), viewport);
        self.view = ViewContext::mount(Some(viewport));

        self.window = Some(window);
        self.gpu = Some(gpu);
        self.renderer = Some(renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                // Explicit teardown: leaving the loop stops the redraw chain
                // and drops the view and GPU context.
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                let (Some(gpu), Some(renderer), Some(view)) =
                    (&mut self.gpu, &mut self.renderer, &mut self.view)
                else {
                    return;
                };
                let viewport =
                    view.handle_resize(Viewport::new(new_size.width, new_size.height));
                gpu.resize(viewport);
                renderer.resize(gpu.device(), viewport);
            }
            WindowEvent::MouseInput { button, state, .. } => {
                let button = match button {
                    MouseButton::Left => PointerButton::Left,
                    MouseButton::Right => PointerButton::Right,
                    _ => return,
                };
                self.pointer
                    .set_button(button, state == ElementState::Pressed);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let detents = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 60.0,
                };
                if let Some(gesture) = self.pointer.wheel(detents) {
                    self.apply_gesture(gesture);
                }
            }
            WindowEvent::RedrawRequested => {
                // Re-arm the loop before any frame work.
                if let Some(window) = &self.window {
                    window.request_redraw();
                }

                let (Some(gpu), Some(renderer), Some(view)) =
                    (&self.gpu, &self.renderer, &mut self.view)
                else {
                    return;
                };

                view.advance_frame();

                let output = match gpu.acquire() {
                    Ok(t) => t,
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        gpu.reconfigure();
                        return;
                    }
                    Err(e) => {
                        tracing::error!("surface error: {e}");
                        return;
                    }
                };

                let target = output
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());
                renderer.render(gpu.device(), gpu.queue(), &target, &view.camera, &view.scene);
                output.present();
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            let motion = Vec2::new(delta.0 as f32, delta.1 as f32);
            if let Some(gesture) = self.pointer.motion(motion) {
                self.apply_gesture(gesture);
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
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("polyspin-desktop starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = ViewerApp::new(cli.width, cli.height);
    event_loop.run_app(&mut app)?;

    Ok(())
}
