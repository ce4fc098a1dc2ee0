use crate::font::{GLYPH_HEIGHT, draw_text, text_width};
use life_grid::Grid;
use life_sim::{CellLayout, HELP_LINES, Palette, PixelRect, TITLE};

const TITLE_TOP: u32 = 50;
const TITLE_SCALE: u32 = 3;
const HELP_TOP: u32 = 150;
const HELP_SCALE: u32 = 2;
const HELP_LINE_GAP: u32 = 10;

/// Grid lines and live cells in `palette`. `frame` is RGBA and exactly the size
/// `layout` gives for the grid.
pub fn draw_grid(frame: &mut [u8], layout: &CellLayout, grid: &Grid, palette: &Palette) {
    let (width, height) = layout.buffer_size(grid.size());
    debug_assert_eq!(frame.len(), 4 * width as usize * height as usize);

    fill(frame, palette.light_rgba());
    let dark = palette.dark_rgba();
    let pitch = layout.pitch();
    for col in 0..=grid.width() {
        let line = PixelRect {
            x: col * pitch,
            y: 0,
            width: 1,
            height,
        };
        fill_rect(frame, width, line, dark);
    }
    for row in 0..=grid.height() {
        let line = PixelRect {
            x: 0,
            y: row * pitch,
            width,
            height: 1,
        };
        fill_rect(frame, width, line, dark);
    }
    for loc in grid.locs().filter(|&loc| grid.is_alive(loc)) {
        fill_rect(frame, width, layout.cell_fill_rect(loc), dark);
    }
}

/// Title and control help, centered.
pub fn draw_splash(frame: &mut [u8], width: u32, height: u32, palette: &Palette) {
    fill(frame, palette.light_rgba());
    let dark = palette.dark_rgba();

    draw_centered(frame, width, height, TITLE_TOP, TITLE, dark, TITLE_SCALE);
    let line_height = GLYPH_HEIGHT * HELP_SCALE + HELP_LINE_GAP;
    for (index, line) in HELP_LINES.iter().enumerate() {
        let top = HELP_TOP + index as u32 * line_height;
        draw_centered(frame, width, height, top, line, dark, HELP_SCALE);
    }
}

fn draw_centered(
    frame: &mut [u8],
    width: u32,
    height: u32,
    top: u32,
    text: &str,
    color: [u8; 4],
    scale: u32,
) {
    let left = (width as i64 - text_width(text, scale) as i64) / 2;
    draw_text(frame, width, height, left, top as i64, text, color, scale);
}

fn fill(frame: &mut [u8], color: [u8; 4]) {
    for pixel in frame.chunks_exact_mut(4) {
        pixel.copy_from_slice(&color);
    }
}

fn fill_rect(frame: &mut [u8], buffer_width: u32, rect: PixelRect, color: [u8; 4]) {
    for y in rect.y..rect.y + rect.height {
        let start = (y as usize * buffer_width as usize + rect.x as usize) * 4;
        let end = start + rect.width as usize * 4;
        if let Some(row) = frame.get_mut(start..end) {
            for pixel in row.chunks_exact_mut(4) {
                pixel.copy_from_slice(&color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_grid::{GridSize, Loc};
    use life_sim::PALETTES;

    struct Frame {
        pixels: Vec<u8>,
        width: u32,
    }

    impl Frame {
        fn new(width: u32, height: u32) -> Self {
            Self {
                pixels: vec![0; (width * height * 4) as usize],
                width,
            }
        }

        fn at(&self, x: u32, y: u32) -> [u8; 3] {
            let index = ((y * self.width + x) * 4) as usize;
            [
                self.pixels[index],
                self.pixels[index + 1],
                self.pixels[index + 2],
            ]
        }
    }

    #[test]
    fn grid_lines_and_live_cells() {
        // 4-pixel cells: lines at 0, 5, 10 across and 0, 5 down.
        let layout = CellLayout::new(4);
        let grid = Grid::with_live_cells(GridSize::new(2, 1), [Loc::new(0, 1)]);
        let (width, height) = layout.buffer_size(grid.size());
        assert_eq!((width, height), (11, 6));

        let palette = PALETTES[4];
        let mut frame = Frame::new(width, height);
        draw_grid(&mut frame.pixels, &layout, &grid, &palette);

        for y in 0..height {
            assert_eq!(frame.at(0, y), palette.dark);
            assert_eq!(frame.at(5, y), palette.dark);
            assert_eq!(frame.at(10, y), palette.dark);
        }
        for x in 0..width {
            assert_eq!(frame.at(x, 0), palette.dark);
            assert_eq!(frame.at(x, 5), palette.dark);
        }
        // Dead cell interior.
        for (x, y) in [(1, 1), (2, 2), (4, 4)] {
            assert_eq!(frame.at(x, y), palette.light);
        }
        // Live cell: 2x2 square inset by one pixel.
        for (x, y) in [(7, 2), (8, 2), (7, 3), (8, 3)] {
            assert_eq!(frame.at(x, y), palette.dark);
        }
        for (x, y) in [(6, 1), (9, 4), (6, 3)] {
            assert_eq!(frame.at(x, y), palette.light);
        }
    }

    #[test]
    fn redraw_replaces_previous_frame() {
        let layout = CellLayout::new(4);
        let size = GridSize::new(2, 2);
        let (width, height) = layout.buffer_size(size);
        let mut frame = Frame::new(width, height);

        let full = Grid::with_live_cells(size, Grid::new(size).locs());
        draw_grid(&mut frame.pixels, &layout, &full, &PALETTES[0]);
        draw_grid(&mut frame.pixels, &layout, &Grid::new(size), &PALETTES[1]);

        assert_eq!(frame.at(2, 2), PALETTES[1].light);
        assert_eq!(frame.at(0, 0), PALETTES[1].dark);
    }

    #[test]
    fn splash_draws_dark_text_on_light() {
        let (width, height) = (1021, 681);
        let mut frame = Frame::new(width, height);
        let palette = PALETTES[0];
        draw_splash(&mut frame.pixels, width, height, &palette);

        assert_eq!(frame.at(0, 0), palette.light);
        assert_eq!(frame.at(width - 1, height - 1), palette.light);
        let title_rows = TITLE_TOP..TITLE_TOP + GLYPH_HEIGHT * TITLE_SCALE;
        let title_row_has_ink = (0..width)
            .any(|x| title_rows.clone().any(|y| frame.at(x, y) == palette.dark));
        assert!(title_row_has_ink);
    }

    #[test]
    fn splash_fits_tiny_frames() {
        let mut frame = Frame::new(10, 10);
        draw_splash(&mut frame.pixels, 10, 10, &PALETTES[2]);
        assert_eq!(frame.at(0, 0), PALETTES[2].light);
    }
}
