//! Application event loop.
//!
//! [`run`] opens the window and drives the demo from winit's event loop. All work
//! happens on the thread that owns the window.
//!
//! # Lifecycle
//!
//! 1. `resumed` creates the window, then the device [`Context`], then the [`Scene`].
//!    Either failing is fatal: the error is logged, the loop exits and [`run`]
//!    returns it.
//! 2. Keyboard events go to the camera controller; Escape closes the window.
//! 3. Each `RedrawRequested` advances the camera by the elapsed time, clears,
//!    draws, presents and requests the next redraw.
//! 4. When the loop ends the scene and context are dropped, releasing every
//!    GPU resource.

use std::{iter, sync::Arc};

use anyhow::Context as _;
use instant::Instant;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::{config::DemoConfig, context::Context, scene::Scene};

/// Device context and scene, created together once the window exists.
#[derive(Debug)]
pub struct AppState {
    // dropped before the context that created it
    pub scene: Scene,
    pub ctx: Context,
}

impl AppState {
    fn new(
        window: Arc<Window>,
        config: &DemoConfig,
        async_runtime: &tokio::runtime::Runtime,
    ) -> anyhow::Result<Self> {
        let ctx = async_runtime
            .block_on(Context::new(window, config))
            .context("device initialisation failed")?;
        log::info!("device ready");
        let scene = Scene::setup(&ctx.device, ctx.config.format, ctx.size(), config)
            .context("scene setup failed")?;
        Ok(Self { scene, ctx })
    }

    fn render(&mut self, dt: instant::Duration) -> Result<(), wgpu::SurfaceError> {
        // invoke main render loop
        self.ctx.window.request_redraw();

        self.scene.update(&self.ctx.queue, dt);

        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });
        self.scene.encode(
            &mut encoder,
            &view,
            &self.ctx.depth_texture.view,
            self.ctx.clear_colour,
        );
        self.ctx.queue.submit(iter::once(encoder.finish()));

        self.ctx.window.pre_present_notify();
        output.present();
        Ok(())
    }
}

pub struct App {
    async_runtime: tokio::runtime::Runtime,
    config: DemoConfig,
    state: Option<AppState>,
    last_time: Instant,
    error: Option<anyhow::Error>,
}

impl App {
    pub fn new(config: DemoConfig) -> anyhow::Result<Self> {
        let async_runtime = tokio::runtime::Runtime::new()
            .context("failed to start the runtime used for device setup")?;
        Ok(Self {
            async_runtime,
            config,
            state: None,
            last_time: Instant::now(),
            error: None,
        })
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        log::error!("{:#}", error);
        self.error = Some(error);
        event_loop.exit();
    }

    fn window_attributes(&self) -> winit::window::WindowAttributes {
        Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height))
            .with_resizable(false)
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let window = match event_loop.create_window(self.window_attributes()) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.fail(event_loop, anyhow::Error::new(e).context("failed to open the window"));
                return;
            }
        };

        match AppState::new(window, &self.config, &self.async_runtime) {
            Ok(state) => {
                state.ctx.window.request_redraw();
                self.state = Some(state);
                self.last_time = Instant::now();
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let state = match &mut self.state {
            Some(state) => state,
            None => return,
        };

        state.scene.handle_window_events(&event);

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                log::info!("escape pressed, closing");
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                let dt = self.last_time.elapsed();
                self.last_time = Instant::now();

                match state.render(dt) {
                    Ok(()) => {}
                    // Reconfigure the surface if it's lost or outdated
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        log::warn!("surface lost, reconfiguring");
                        state.ctx.reconfigure();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        self.fail(event_loop, anyhow::anyhow!("out of memory while rendering"));
                    }
                    Err(e) => {
                        log::warn!("skipping frame: {}", e);
                    }
                }
            }
            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // release scene buffers and the device while the window still exists
        self.state = None;
        log::info!("resources released");
    }
}

/// Open the window and run the demo until it is closed.
pub fn run(config: DemoConfig) -> anyhow::Result<()> {
    if let Err(e) = env_logger::try_init() {
        println!("Warning: Could not initialize logger: {}", e);
    };

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config)?;

    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
