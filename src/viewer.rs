//! Standalone exploration window backed by winit.
//!
//! ```no_run
//! # use cityscape::Viewer;
//! Viewer::builder()
//!     .with_title("Old Town")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use web_time::{Duration, Instant};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::{
    collision::SolidHandle,
    error::CityscapeError,
    gpu::render_context::RenderContext,
    input::{InputEvent, InputProcessor, MouseButton},
    options::Options,
    scene::placeholder_solids,
    session::Session,
    util::frame_timing::FrameClock,
};

/// How often the title bar telemetry is refreshed.
const TITLE_INTERVAL: Duration = Duration::from_millis(100);

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    solids: Option<Vec<SolidHandle>>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "Cityscape", default
    /// options, placeholder city).
    fn new() -> Self {
        Self {
            options: None,
            solids: None,
            title: "Cityscape".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Offer these solids to the collision registry instead of the
    /// placeholder city.
    #[must_use]
    pub fn with_solids(mut self, solids: Vec<SolidHandle>) -> Self {
        self.solids = Some(solids);
        self
    }

    /// Set the window title prefix.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            solids: self.solids.unwrap_or_else(placeholder_solids),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window for exploring a city scene.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    solids: Vec<SolidHandle>,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`CityscapeError::Viewer`] if the event loop cannot be
    /// created or exits abnormally.
    pub fn run(self) -> Result<(), CityscapeError> {
        let event_loop = EventLoop::new()
            .map_err(|e| CityscapeError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut session = Session::new(&self.options);
        let admitted = session.register_solids(self.solids);
        if admitted == 0 {
            log::warn!("no collidable solids; collision is inactive");
        }

        let mut app = ViewerApp {
            window: None,
            context: None,
            session,
            input: InputProcessor::with_key_bindings(
                self.options.keybindings.clone(),
            ),
            clock: FrameClock::new(&self.options.camera),
            title: self.title,
            last_title: Instant::now(),
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| CityscapeError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    context: Option<RenderContext>,
    session: Session,
    input: InputProcessor,
    clock: FrameClock,
    title: String,
    last_title: Instant,
}

impl ViewerApp {
    fn resize(&mut self, width: u32, height: u32) {
        if let Some(context) = &mut self.context {
            context.resize(width, height);
        }
        self.session.resize(width, height);
    }

    fn handle_input(&mut self, event: InputEvent) {
        if let Some(command) = self.input.handle_event(event) {
            self.session.execute(command);
        }
    }

    fn redraw(&mut self) {
        let dt = self.clock.tick();
        let frame_input = self.input.frame_input();
        let _ = self.session.update(&frame_input, dt);
        self.input.end_frame();

        let Some(context) = &self.context else {
            return;
        };
        context.write_uniform(self.session.frame_uniform());
        let fog = self.session.atmosphere().fog.color;
        match context.clear_and_present(fog) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                let inner = self.window.as_ref().map(|w| w.inner_size());
                if let Some(inner) = inner {
                    self.resize(inner.width, inner.height);
                }
            }
            Err(e) => {
                log::error!("render error: {e:?}");
            }
        }

        if let Some(w) = &self.window {
            let now = Instant::now();
            if now.duration_since(self.last_title) >= TITLE_INTERVAL {
                w.set_title(&format!(
                    "{} | {} | {} | {:.0} fps",
                    self.title,
                    self.session.mode(),
                    self.session.telemetry(),
                    self.clock.fps()
                ));
                self.last_title = now;
            }
            w.request_redraw();
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = if let Some(mon) = &monitor {
            let mon_size = mon.size();
            let scale = mon.scale_factor();
            #[allow(clippy::cast_possible_truncation)]
            let logical_w = (f64::from(mon_size.width) / scale * 0.75) as u32;
            #[allow(clippy::cast_possible_truncation)]
            let logical_h = (f64::from(mon_size.height) / scale * 0.75) as u32;
            Window::default_attributes()
                .with_title(&self.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    logical_w, logical_h,
                ))
        } else {
            Window::default_attributes().with_title(&self.title)
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let inner = window.inner_size();
        let context = match pollster::block_on(RenderContext::new(
            window.clone(),
            (inner.width, inner.height),
        )) {
            Ok(c) => c,
            Err(e) => {
                let e = CityscapeError::from(e);
                log::error!("Failed to initialize GPU: {e}");
                event_loop.exit();
                return;
            }
        };

        self.session.resize(inner.width, inner.height);
        window.request_redraw();
        self.window = Some(window);
        self.context = Some(context);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        // Guard: both window and GPU context must be initialised.
        if self.window.is_none() || self.context.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(size) => {
                self.resize(size.width, size.height);
            }

            WindowEvent::RedrawRequested => self.redraw(),

            WindowEvent::Focused(false) => {
                self.handle_input(InputEvent::FocusLost);
            }

            WindowEvent::MouseInput { button, state, .. } => {
                self.handle_input(InputEvent::MouseButton {
                    button: MouseButton::from(button),
                    pressed: state == ElementState::Pressed,
                });
            }

            WindowEvent::CursorMoved { position, .. } => {
                #[allow(clippy::cast_possible_truncation)]
                let (x, y) = (position.x as f32, position.y as f32);
                self.handle_input(InputEvent::CursorMoved { x, y });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                self.handle_input(InputEvent::Key {
                    code: format!("{code:?}"),
                    pressed: event.state == ElementState::Pressed,
                });
            }

            _ => (),
        }
    }
}
