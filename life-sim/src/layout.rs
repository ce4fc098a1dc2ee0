use crate::input::PixelPosition;
use life_grid::{GridSize, Loc};

/// Maps between grid cells and frame-buffer pixels. Every cell occupies a
/// square of `cell_pixel_size` plus a one-pixel grid line on its top and left;
/// the buffer carries one extra line on the right and bottom edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellLayout {
    cell_pixel_size: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CellLayout {
    pub fn new(cell_pixel_size: u32) -> Self {
        assert!(cell_pixel_size > 2);
        Self { cell_pixel_size }
    }

    /// Distance between successive grid lines.
    pub fn pitch(&self) -> u32 {
        self.cell_pixel_size + 1
    }

    pub fn buffer_size(&self, grid_size: GridSize) -> (u32, u32) {
        (
            grid_size.width * self.pitch() + 1,
            grid_size.height * self.pitch() + 1,
        )
    }

    /// Signed (column, row) of the cell under `position`, not yet bounds checked.
    pub fn cell_at(&self, position: PixelPosition) -> (i64, i64) {
        let pitch = self.pitch() as i64;
        (position.x.div_euclid(pitch), position.y.div_euclid(pitch))
    }

    /// The filled square drawn for a live cell, inset one pixel from its lines.
    pub fn cell_fill_rect(&self, loc: Loc) -> PixelRect {
        let side = self.cell_pixel_size - 2;
        PixelRect {
            x: loc.col * self.pitch() + 2,
            y: loc.row * self.pitch() + 2,
            width: side,
            height: side,
        }
    }
}
