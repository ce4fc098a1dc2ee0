use crate::layout::CellLayout;
use life_grid::GridSize;
use std::time::Duration;

const GRID_WIDTH: u32 = 60;
const GRID_HEIGHT: u32 = 40;
const CELL_PIXEL_SIZE: u32 = 16;
const FRAME_RATE: u32 = 120;
const FRAMES_PER_STEP: u32 = 4;

/// Fixed at compile time; the binary runs with [`Settings::default`] and
/// there is no config file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    pub grid_size: GridSize,
    /// Side of a cell's square, not counting the grid line.
    pub cell_pixel_size: u32,
    pub frame_rate: u32,
    pub frames_per_step: u32,
    pub start_paused: bool,
    pub palette_index: usize,
}

impl Settings {
    pub fn layout(&self) -> CellLayout {
        CellLayout::new(self.cell_pixel_size)
    }

    /// Pixel dimensions of the frame buffer that holds the whole grid.
    pub fn buffer_size(&self) -> (u32, u32) {
        self.layout().buffer_size(self.grid_size)
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_size: GridSize::new(GRID_WIDTH, GRID_HEIGHT),
            cell_pixel_size: CELL_PIXEL_SIZE,
            frame_rate: FRAME_RATE,
            frames_per_step: FRAMES_PER_STEP,
            start_paused: true,
            palette_index: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_shipped_configuration() {
        let settings = Settings::default();
        assert_eq!(settings.grid_size, GridSize::new(60, 40));
        assert_eq!(settings.cell_pixel_size, 16);
        assert_eq!(settings.frame_rate, 120);
        assert_eq!(settings.frames_per_step, 4);
        assert!(settings.start_paused);
        assert_eq!(settings.palette_index, 0);
    }

    #[test]
    fn default_buffer_fits_grid_and_lines() {
        let settings = Settings::default();
        assert_eq!(settings.buffer_size(), (60 * 17 + 1, 40 * 17 + 1));
    }

    #[test]
    fn frame_duration_follows_rate() {
        let settings = Settings {
            frame_rate: 100,
            ..Settings::default()
        };
        assert_eq!(settings.frame_duration(), Duration::from_millis(10));
    }
}
