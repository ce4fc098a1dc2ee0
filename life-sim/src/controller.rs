use crate::input::{InputEvent, Key, MouseButton, PixelPosition};
use crate::layout::CellLayout;
use crate::palette::{PALETTES, Palette};
use crate::settings::Settings;
use crate::TITLE;
use life_grid::{Grid, Loc, step};
use log::{debug, trace};

/// Frames elapsed since the last generation step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameCounter {
    elapsed: u32,
}

impl FrameCounter {
    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    fn advance(&mut self) {
        self.elapsed = self.elapsed.saturating_add(1);
    }

    fn reset(&mut self) {
        self.elapsed = 0;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationState {
    grid: Grid,
    frames_per_step: u32,
    paused: bool,
    palette_index: usize,
}

impl SimulationState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            grid: Grid::new(settings.grid_size),
            frames_per_step: settings.frames_per_step.max(1),
            paused: settings.start_paused,
            palette_index: if settings.palette_index < PALETTES.len() {
                settings.palette_index
            } else {
                0
            },
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Simulation speed as frames between generations; always at least 1.
    pub fn frames_per_step(&self) -> u32 {
        self.frames_per_step
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn palette_index(&self) -> usize {
        self.palette_index
    }

    pub fn palette(&self) -> Palette {
        PALETTES[self.palette_index]
    }
}

/// What the frame loop should do after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Continue,
    Quit,
}

/// Sole owner of the [`SimulationState`]. Every change to the grid, speed,
/// pause flag or palette goes through here.
#[derive(Debug)]
pub struct Controller {
    state: SimulationState,
    layout: CellLayout,
}

impl Controller {
    pub fn new(settings: &Settings) -> Self {
        Self {
            state: SimulationState::new(settings),
            layout: settings.layout(),
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.state.grid
    }

    pub fn handle_event(&mut self, event: &InputEvent) -> Command {
        match *event {
            InputEvent::Quit => Command::Quit,
            InputEvent::KeyDown { key } => self.handle_key(key),
            InputEvent::MouseDown { button, position } => {
                self.handle_mouse(button, position);
                Command::Continue
            }
        }
    }

    fn handle_key(&mut self, key: Key) -> Command {
        match key {
            Key::Escape => return Command::Quit,
            Key::Space => self.toggle_pause(),
            Key::C => self.clear(),
            Key::Up | Key::Right => self.adjust_speed(-1),
            Key::Down | Key::Left => self.adjust_speed(1),
            Key::Digit(digit @ 1..=5) => self.select_palette(digit as usize - 1),
            Key::Digit(_) | Key::Other => {}
        }
        Command::Continue
    }

    fn handle_mouse(&mut self, button: MouseButton, position: PixelPosition) {
        match button {
            MouseButton::Left => {
                let (col, row) = self.layout.cell_at(position);
                self.toggle_cell(col, row);
            }
            MouseButton::Right => self.toggle_pause(),
            MouseButton::WheelUp => self.adjust_speed(-1),
            MouseButton::WheelDown => self.adjust_speed(1),
            MouseButton::Middle | MouseButton::Other => {}
        }
    }

    /// Flips the cell at (`col`, `row`). Indices outside the grid are ignored.
    pub fn toggle_cell(&mut self, col: i64, row: i64) -> bool {
        let toggled = match (u32::try_from(row), u32::try_from(col)) {
            (Ok(row), Ok(col)) => self.state.grid.toggle(Loc::new(row, col)),
            _ => false,
        };
        if toggled {
            debug!("Toggled cell at column {col}, row {row}");
        } else {
            debug!("Ignoring click outside grid at column {col}, row {row}");
        }
        toggled
    }

    pub fn toggle_pause(&mut self) {
        self.state.paused = !self.state.paused;
        debug!("Paused: {}", self.state.paused);
    }

    pub fn clear(&mut self) {
        self.state.grid = Grid::new(self.state.grid.size());
        debug!("Cleared grid");
    }

    /// Positive `delta` slows the simulation down. Never drops below one frame
    /// per step.
    pub fn adjust_speed(&mut self, delta: i32) {
        let frames = i64::from(self.state.frames_per_step) + i64::from(delta);
        self.state.frames_per_step = frames.clamp(1, i64::from(u32::MAX)) as u32;
        debug!("Frames per step: {}", self.state.frames_per_step);
    }

    /// Indices past the last palette change nothing.
    pub fn select_palette(&mut self, index: usize) {
        if index < PALETTES.len() {
            self.state.palette_index = index;
            debug!("Palette: {index}");
        } else {
            debug!("Ignoring unknown palette {index}");
        }
    }

    /// Advances one frame. Returns true if a new generation was computed.
    pub fn tick(&mut self, frames: &mut FrameCounter) -> bool {
        if self.state.paused {
            return false;
        }
        frames.advance();
        if frames.elapsed() < self.state.frames_per_step {
            return false;
        }
        self.state.grid = step(&self.state.grid);
        frames.reset();
        trace!("Stepped, {} live cells", self.state.grid.live_count());
        true
    }

    /// Generations per frame, as shown in the window caption.
    pub fn steps_per_frame(&self) -> f64 {
        1.0 / self.state.frames_per_step as f64
    }

    pub fn status_text(&self) -> String {
        let mut result = format!("{TITLE} -- Speed: {:.4}", self.steps_per_frame());
        if self.state.paused {
            result.push_str(" -- PAUSED");
        }
        result
    }
}
