#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod draw;
mod error;
mod font;
mod pacer;
mod wheel;

pub use draw::{draw_grid, draw_splash};
pub use error::{AnimateError, log_error};
pub use pacer::FramePacer;
pub use wheel::WheelNotches;

use life_grid::Grid;
use life_sim::{
    CellLayout, Controller, HELP_LINES, InputEvent, Key, MouseButton, PALETTES, Palette, Phase,
    PixelPosition, PresentationAdapter, Scheduler, Settings, TITLE,
};
use log::info;
use pixels::wgpu::Color;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use std::iter;
use std::mem;
use std::sync::Arc;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, KeyEvent, StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

const BACKGROUND_COLOR: Color = Color::WHITE;

/// Where clicks land until the first `CursorMoved`; off the grid, so they
/// toggle nothing.
const UNKNOWN_CURSOR: PixelPosition = PixelPosition::new(-1, -1);

/// Opens the window and runs the simulation until the user quits.
pub fn animate(settings: Settings) -> Result<(), AnimateError> {
    info!("{TITLE}");
    for line in HELP_LINES.iter().filter(|line| !line.is_empty()) {
        info!("  {line}");
    }

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);
    let mut handler = AppEventHandler::new(settings);
    event_loop.run_app(&mut handler)?;
    handler.error.map_or(Ok(()), Err)
}

struct App {
    scheduler: Scheduler,
    adapter: WindowAdapter,
}

impl App {
    fn new(event_loop: &ActiveEventLoop, settings: &Settings) -> Result<Self, AnimateError> {
        let (width, height) = settings.buffer_size();
        let window = Arc::new(Self::build_window(event_loop, width, height)?);
        let pixels = Self::build_pixels(&window, width, height)?;
        Ok(Self {
            scheduler: Scheduler::new(Controller::new(settings)),
            adapter: WindowAdapter {
                window,
                pixels,
                layout: settings.layout(),
                buffer_size: (width, height),
                pacer: FramePacer::new(settings.frame_duration(), Instant::now()),
                events: vec![],
                cursor: UNKNOWN_CURSOR,
                wheel: WheelNotches::default(),
            },
        })
    }

    fn build_window(
        event_loop: &ActiveEventLoop,
        width: u32,
        height: u32,
    ) -> Result<Window, AnimateError> {
        let size = LogicalSize::new(width as f64, height as f64);
        let mut window_attributes = Window::default_attributes()
            .with_title(TITLE)
            .with_inner_size(size)
            .with_resizable(false)
            .with_visible(false);
        if let Some(position) = Self::centered_position(event_loop, size) {
            window_attributes = window_attributes.with_position(position);
        }
        Ok(event_loop.create_window(window_attributes)?)
    }

    fn centered_position(
        event_loop: &ActiveEventLoop,
        size: LogicalSize<f64>,
    ) -> Option<PhysicalPosition<i32>> {
        let monitor = event_loop.primary_monitor()?;
        let window_size: PhysicalSize<u32> = size.to_physical(monitor.scale_factor());
        let monitor_size = monitor.size();
        let origin = monitor.position();
        let offset = |monitor_extent: u32, window_extent: u32| {
            (monitor_extent.saturating_sub(window_extent) / 2) as i32
        };
        Some(PhysicalPosition::new(
            origin.x + offset(monitor_size.width, window_size.width),
            origin.y + offset(monitor_size.height, window_size.height),
        ))
    }

    fn build_pixels(
        window: &Arc<Window>,
        width: u32,
        height: u32,
    ) -> Result<Pixels<'static>, AnimateError> {
        let window_size = window.inner_size();
        let surface_texture =
            SurfaceTexture::new(window_size.width, window_size.height, window.clone());
        Ok(PixelsBuilder::new(width, height, surface_texture)
            .clear_color(BACKGROUND_COLOR)
            .build()?)
    }

    fn on_create(&mut self) {
        self.adapter.window.request_redraw();
        self.adapter.window.set_visible(true);
    }

    fn on_frame(&mut self) -> Phase {
        let phase = self.scheduler.run_frame(&mut self.adapter);
        if phase != Phase::Terminated {
            self.adapter.wait_for_next_frame();
        }
        phase
    }
}

/// Presents the simulation in a window. Input arrives through winit
/// callbacks and is queued until the next frame drains it; the event loop
/// itself sleeps until the pacer's deadline.
struct WindowAdapter {
    window: Arc<Window>,
    pixels: Pixels<'static>,
    layout: CellLayout,
    buffer_size: (u32, u32),
    pacer: FramePacer,
    events: Vec<InputEvent>,
    cursor: PixelPosition,
    wheel: WheelNotches,
}

impl WindowAdapter {
    fn on_window_event(&mut self, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.events.push(InputEvent::Quit);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key,
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                let key = match physical_key {
                    PhysicalKey::Code(code) => Self::translate_key(code),
                    PhysicalKey::Unidentified(_) => Key::Other,
                };
                self.events.push(InputEvent::KeyDown { key });
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = self.buffer_position(position);
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => {
                self.push_mouse_down(Self::translate_button(button));
            }
            WindowEvent::MouseWheel { delta, .. } => {
                for button in Self::wheel_buttons(self.wheel.add(delta)) {
                    self.push_mouse_down(button);
                }
            }
            _ => (),
        }
    }

    fn push_mouse_down(&mut self, button: MouseButton) {
        self.events.push(InputEvent::MouseDown {
            button,
            position: self.cursor,
        });
    }

    fn buffer_position(&self, position: PhysicalPosition<f64>) -> PixelPosition {
        let (x, y) = match self
            .pixels
            .window_pos_to_pixel((position.x as f32, position.y as f32))
        {
            Ok((x, y)) => (x as i64, y as i64),
            Err((x, y)) => (x as i64, y as i64),
        };
        PixelPosition::new(x, y)
    }

    fn translate_key(code: KeyCode) -> Key {
        match code {
            KeyCode::Escape => Key::Escape,
            KeyCode::Space => Key::Space,
            KeyCode::ArrowUp => Key::Up,
            KeyCode::ArrowDown => Key::Down,
            KeyCode::ArrowLeft => Key::Left,
            KeyCode::ArrowRight => Key::Right,
            KeyCode::KeyC => Key::C,
            KeyCode::Digit0 => Key::Digit(0),
            KeyCode::Digit1 => Key::Digit(1),
            KeyCode::Digit2 => Key::Digit(2),
            KeyCode::Digit3 => Key::Digit(3),
            KeyCode::Digit4 => Key::Digit(4),
            KeyCode::Digit5 => Key::Digit(5),
            KeyCode::Digit6 => Key::Digit(6),
            KeyCode::Digit7 => Key::Digit(7),
            KeyCode::Digit8 => Key::Digit(8),
            KeyCode::Digit9 => Key::Digit(9),
            _ => Key::Other,
        }
    }

    fn translate_button(button: winit::event::MouseButton) -> MouseButton {
        match button {
            winit::event::MouseButton::Left => MouseButton::Left,
            winit::event::MouseButton::Right => MouseButton::Right,
            winit::event::MouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }

    /// One wheel button press per notch.
    fn wheel_buttons(notches: i32) -> impl Iterator<Item = MouseButton> {
        let button = if notches > 0 {
            MouseButton::WheelUp
        } else {
            MouseButton::WheelDown
        };
        iter::repeat_n(button, notches.unsigned_abs() as usize)
    }
}

impl PresentationAdapter for WindowAdapter {
    fn drain_events(&mut self) -> Vec<InputEvent> {
        mem::take(&mut self.events)
    }

    fn render_splash(&mut self) {
        let (width, height) = self.buffer_size;
        draw_splash(self.pixels.frame_mut(), width, height, &PALETTES[0]);
        self.window.request_redraw();
    }

    fn render(&mut self, grid: &Grid, palette: &Palette) {
        draw_grid(self.pixels.frame_mut(), &self.layout, grid, palette);
        self.window.request_redraw();
    }

    fn wait_for_next_frame(&mut self) {
        self.pacer.advance(Instant::now());
    }

    fn set_status_text(&mut self, text: &str) {
        self.window.set_title(text);
    }
}

struct AppEventHandler {
    settings: Settings,
    app: Option<App>,
    error: Option<AnimateError>,
}

impl AppEventHandler {
    fn new(settings: Settings) -> Self {
        Self {
            settings,
            app: None,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: AnimateError) {
        self.error = Some(err);
        event_loop.exit();
    }
}

impl ApplicationHandler for AppEventHandler {
    fn new_events(&mut self, event_loop: &ActiveEventLoop, _cause: StartCause) {
        let Some(app) = self.app.as_mut() else {
            return;
        };
        if app.adapter.pacer.is_due(Instant::now()) && app.on_frame() == Phase::Terminated {
            event_loop.exit();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.app.is_none() {
            match App::new(event_loop, &self.settings) {
                Ok(mut app) => {
                    app.on_create();
                    self.app = Some(app);
                }
                Err(err) => self.fail(event_loop, err),
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(app) = self.app.as_mut() else {
            return;
        };
        match event {
            WindowEvent::RedrawRequested => {
                if let Err(err) = app.adapter.pixels.render() {
                    self.fail(event_loop, err.into());
                }
            }
            WindowEvent::Resized(size) if size.width > 0 && size.height > 0 => {
                if let Err(err) = app.adapter.pixels.resize_surface(size.width, size.height) {
                    self.fail(event_loop, err.into());
                }
            }
            event => app.adapter.on_window_event(event),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(app) = self.app.as_ref() {
            event_loop.set_control_flow(ControlFlow::WaitUntil(app.adapter.pacer.deadline()));
        }
    }
}
