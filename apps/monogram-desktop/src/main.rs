use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec3;
use monogram_input::{Action, ScaleFactor};
use monogram_render_wgpu::{FlyCamera, SceneRenderer};
use monogram_scene::{CubeInstance, Scene};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{
    DeviceEvent, ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent,
};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

#[derive(Parser)]
#[command(name = "monogram-desktop", about = "Block-letter monogram viewer")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Monogram rows to draw, front to back
    #[arg(short, long, num_args = 1.., default_values_t = [String::from("C3"), String::from("R9")])]
    text: Vec<String>,

    /// Window width in pixels
    #[arg(long, default_value_t = 1440)]
    width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 900)]
    height: u32,

    /// Ground grid half extent in cells
    #[arg(long, default_value_t = 50)]
    grid_extent: i32,
}

/// Per-frame application state: camera, input, and the scaling factor.
struct AppState {
    camera: FlyCamera,
    scale: ScaleFactor,
    keys_held: HashSet<KeyCode>,
    mouse_captured: bool,
    started: Instant,
    last_frame: Instant,
}

impl AppState {
    fn new() -> Self {
        let now = Instant::now();
        Self {
            camera: FlyCamera::default(),
            scale: ScaleFactor::new(),
            keys_held: HashSet::new(),
            mouse_captured: false,
            started: now,
            last_frame: now,
        }
    }

    /// Apply one action. Returns false when the app should exit.
    fn apply(&mut self, action: Action, dt: f32) -> bool {
        match action {
            Action::Move(dir) => self.camera.translate(dir, dt),
            Action::Look { dx, dy } => self.camera.rotate(dx, dy),
            Action::Zoom(delta) => self.camera.zoom(delta),
            Action::ScaleUp => {
                self.scale.up();
                tracing::debug!(factor = self.scale.get(), "scaled up");
            }
            Action::ScaleDown => {
                self.scale.down();
                tracing::debug!(factor = self.scale.get(), "scaled down");
            }
            Action::ResetCamera => self.camera.reset(),
            Action::Quit => return false,
        }
        true
    }

    /// Camera-local movement direction from the held keys this frame.
    fn movement(&self) -> Option<Action> {
        let mut dir = Vec3::ZERO;
        if self.keys_held.contains(&KeyCode::KeyW) {
            dir.z += 1.0;
        }
        if self.keys_held.contains(&KeyCode::KeyS) {
            dir.z -= 1.0;
        }
        if self.keys_held.contains(&KeyCode::KeyD) {
            dir.x += 1.0;
        }
        if self.keys_held.contains(&KeyCode::KeyA) {
            dir.x -= 1.0;
        }
        if self.keys_held.contains(&KeyCode::Space) {
            dir.y += 1.0;
        }
        if self.keys_held.contains(&KeyCode::ControlLeft) {
            dir.y -= 1.0;
        }
        if dir == Vec3::ZERO {
            None
        } else {
            let boost = if self.keys_held.contains(&KeyCode::ShiftLeft) {
                3.0
            } else {
                1.0
            };
            // Normalize so diagonals move at the same speed as single axes.
            Some(Action::Move(dir.normalize() * boost))
        }
    }
}

/// Scroll distance in lines, whichever shape the device reports.
fn scroll_lines(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, lines) => lines,
        // Trackpads report pixels; a text line is roughly 40 of them.
        MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 40.0,
    }
}

/// One-shot key bindings. Held-key movement is handled per frame instead.
fn action_for_key(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::KeyU => Some(Action::ScaleUp),
        KeyCode::KeyJ => Some(Action::ScaleDown),
        KeyCode::Home => Some(Action::ResetCamera),
        KeyCode::Escape => Some(Action::Quit),
        _ => None,
    }
}

struct GpuApp {
    state: AppState,
    instances: Vec<CubeInstance>,
    grid_extent: i32,
    initial_size: PhysicalSize<u32>,
    window: Option<Arc<Window>>,
    surface: Option<wgpu::Surface<'static>>,
    device: Option<wgpu::Device>,
    queue: Option<wgpu::Queue>,
    config: Option<wgpu::SurfaceConfiguration>,
    renderer: Option<SceneRenderer>,
}

impl GpuApp {
    fn new(instances: Vec<CubeInstance>, grid_extent: i32, size: PhysicalSize<u32>) -> Self {
        Self {
            state: AppState::new(),
            instances,
            grid_extent,
            initial_size: size,
            window: None,
            surface: None,
            device: None,
            queue: None,
            config: None,
            renderer: None,
        }
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Monogram")
            .with_inner_size(self.initial_size);
        let window = Arc::new(event_loop.create_window(attrs).expect("create window"));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .expect("create surface");

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .expect("find adapter");

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("monogram_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .expect("create device");

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        self.state.camera.aspect = size.width as f32 / size.height.max(1) as f32;

        let renderer = SceneRenderer::new(
            &device,
            surface_format,
            size.width,
            size.height,
            &self.instances,
            self.grid_extent,
        );

        self.window = Some(window);
        self.surface = Some(surface);
        self.device = Some(device);
        self.queue = Some(queue);
        self.config = Some(config);
        self.renderer = Some(renderer);

        tracing::info!(
            "GPU initialized with {} backend",
            adapter.get_info().backend.to_str()
        );
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let (Some(surface), Some(device), Some(config)) =
                    (&self.surface, &self.device, &mut self.config)
                {
                    config.width = new_size.width.max(1);
                    config.height = new_size.height.max(1);
                    surface.configure(device, config);
                    self.state.camera.aspect = config.width as f32 / config.height.max(1) as f32;
                    if let Some(renderer) = &mut self.renderer {
                        renderer.resize(device, config.width, config.height);
                    }
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                if key_state == ElementState::Pressed {
                    self.key_pressed(key, event_loop);
                } else {
                    self.state.keys_held.remove(&key);
                }
            }
            WindowEvent::MouseInput {
                button: MouseButton::Right,
                state: btn_state,
                ..
            } => {
                self.state.mouse_captured = btn_state == ElementState::Pressed;
                if let Some(window) = &self.window {
                    window.set_cursor_visible(!self.state.mouse_captured);
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.state.apply(Action::Zoom(scroll_lines(delta)), 0.0);
            }
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let dt = (now - self.state.last_frame).as_secs_f32().min(0.1);
                self.state.last_frame = now;

                if let Some(movement) = self.state.movement() {
                    self.state.apply(movement, dt);
                }

                let (Some(surface), Some(device), Some(queue)) =
                    (&self.surface, &self.device, &self.queue)
                else {
                    return;
                };

                let output = match surface.get_current_texture() {
                    Ok(t) => t,
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        if let Some(config) = &self.config {
                            surface.configure(device, config);
                        }
                        return;
                    }
                    Err(e) => {
                        tracing::error!("surface error: {e}");
                        return;
                    }
                };

                let view = output
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());

                if let Some(renderer) = &self.renderer {
                    renderer.render(
                        device,
                        queue,
                        &view,
                        &self.state.camera,
                        self.state.scale.get(),
                        self.state.started.elapsed().as_secs_f32(),
                    );
                }

                output.present();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
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
            if self.state.mouse_captured {
                self.state.apply(
                    Action::Look {
                        dx: delta.0 as f32,
                        dy: delta.1 as f32,
                    },
                    0.0,
                );
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl GpuApp {
    fn key_pressed(&mut self, key: KeyCode, event_loop: &ActiveEventLoop) {
        self.state.keys_held.insert(key);
        if let Some(action) = action_for_key(key) {
            if !self.state.apply(action, 0.0) {
                event_loop.exit();
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let scene = Scene::from_rows(&cli.text).context("invalid monogram text")?;
    let summary = scene.summary();
    tracing::info!(
        rows = summary.rows.len(),
        glyphs = summary.glyphs,
        cuboids = summary.cuboids,
        "monogram-desktop starting"
    );

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(
        scene.instances(),
        cli.grid_extent,
        PhysicalSize::new(cli.width, cli.height),
    );
    event_loop.run_app(&mut app)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    #[test]
    fn diagonal_movement_is_unit_speed() {
        let mut state = AppState::new();
        state.keys_held.insert(KeyCode::KeyW);
        state.keys_held.insert(KeyCode::KeyD);
        let Some(Action::Move(dir)) = state.movement() else {
            panic!("expected a move action");
        };
        assert!((dir.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn shift_boosts_movement() {
        let mut state = AppState::new();
        state.keys_held.insert(KeyCode::KeyW);
        state.keys_held.insert(KeyCode::ShiftLeft);
        let Some(Action::Move(dir)) = state.movement() else {
            panic!("expected a move action");
        };
        assert!((dir.length() - 3.0).abs() < 1e-6);
    }

    #[test]
    fn scroll_lines_handles_both_delta_shapes() {
        assert_eq!(scroll_lines(MouseScrollDelta::LineDelta(0.0, 2.0)), 2.0);
        let px = scroll_lines(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -80.0)));
        assert!((px + 2.0).abs() < 1e-6);
    }

    #[test]
    fn one_shot_bindings() {
        assert_eq!(action_for_key(KeyCode::KeyU), Some(Action::ScaleUp));
        assert_eq!(action_for_key(KeyCode::KeyJ), Some(Action::ScaleDown));
        assert_eq!(action_for_key(KeyCode::Escape), Some(Action::Quit));
        assert_eq!(action_for_key(KeyCode::KeyQ), None);
    }
}
