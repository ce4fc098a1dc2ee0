#![deny(clippy::all)]
#![forbid(unsafe_code)]

//! Interactive simulation state and the fixed-rate frame loop that drives it.
//! Nothing here draws; a [`PresentationAdapter`] does that.

mod controller;
mod headless;
mod input;
mod layout;
mod palette;
mod scheduler;
mod settings;

pub use controller::{Command, Controller, FrameCounter, SimulationState};
pub use headless::HeadlessAdapter;
pub use input::{InputEvent, Key, MouseButton, PixelPosition};
pub use layout::{CellLayout, PixelRect};
pub use palette::{PALETTES, Palette, Rgb};
pub use scheduler::{Phase, PresentationAdapter, Scheduler};
pub use settings::Settings;

pub const TITLE: &str = "Conway's Game of Life";

/// Splash screen lines shown under [`TITLE`].
pub const HELP_LINES: [&str; 9] = [
    "Left click: turn cell on/off",
    "Right click/space bar: pause/unpause simulation",
    "Down arrow key/mouse wheel down: slow down simulation",
    "Up arrow key/mouse wheel up: speed up simulation",
    "C: clear board",
    "1-5: change palette",
    "Escape: exit the simulation",
    "",
    "press any key to proceed to simulation",
];
