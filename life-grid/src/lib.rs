#![deny(clippy::all)]
#![forbid(unsafe_code)]

//! A fixed-size toroidal grid of Life cells and the rule that advances it.

mod rule;

pub use rule::{NEXT_STATE, Transition, step};

use std::fmt;
use std::ops::{Index, IndexMut};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    pub fn toggled(self) -> Self {
        match self {
            CellState::Dead => CellState::Alive,
            CellState::Alive => CellState::Dead,
        }
    }
}

/// Grid dimensions, counted in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

impl GridSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn num_cells(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Loc {
    pub row: u32,
    pub col: u32,
}

impl Loc {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    pub fn grid_index(&self, size: GridSize) -> Option<usize> {
        if self.row < size.height && self.col < size.width {
            Some(self.row as usize * size.width as usize + self.col as usize)
        } else {
            None
        }
    }
}

/// The universe. Its size is fixed at creation; a generation step builds a new
/// `Grid` rather than rewriting this one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: GridSize,
    cells: Vec<CellState>,
}

impl Grid {
    pub fn new(size: GridSize) -> Self {
        assert!(size.width > 0 && size.height > 0);
        Self {
            size,
            cells: vec![CellState::Dead; size.num_cells()],
        }
    }

    pub fn with_live_cells<I>(size: GridSize, live: I) -> Self
    where
        I: IntoIterator<Item = Loc>,
    {
        let mut result = Self::new(size);
        for loc in live {
            result.set(loc, CellState::Alive);
        }
        result
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    /// Cells in row-major order.
    pub fn cells_iter(&self) -> impl DoubleEndedIterator<Item = &CellState> + Clone {
        self.cells.iter()
    }

    pub fn locs(&self) -> impl Iterator<Item = Loc> + use<> {
        let GridSize { width, height } = self.size;
        (0..height).flat_map(move |row| (0..width).map(move |col| Loc::new(row, col)))
    }

    pub fn cell(&self, loc: Loc) -> Option<CellState> {
        loc.grid_index(self.size).map(|index| self.cells[index])
    }

    fn cell_mut(&mut self, loc: Loc) -> Option<&mut CellState> {
        loc.grid_index(self.size)
            .map(|index| &mut self.cells[index])
    }

    pub fn is_alive(&self, loc: Loc) -> bool {
        self.cell(loc).is_some_and(CellState::is_alive)
    }

    /// Returns false, leaving the grid untouched, if `loc` is outside it.
    pub fn set(&mut self, loc: Loc, state: CellState) -> bool {
        match self.cell_mut(loc) {
            Some(cell) => {
                *cell = state;
                true
            }
            None => false,
        }
    }

    /// Returns false, leaving the grid untouched, if `loc` is outside it.
    pub fn toggle(&mut self, loc: Loc) -> bool {
        match self.cell_mut(loc) {
            Some(cell) => {
                *cell = cell.toggled();
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(CellState::Dead);
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|cell| cell.is_alive())
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn live_neighbor_count(&self, loc: Loc) -> u8 {
        Neighborhood::new(self, loc).live_count()
    }
}

impl Index<Loc> for Grid {
    type Output = CellState;

    fn index(&self, loc: Loc) -> &Self::Output {
        loc.grid_index(self.size)
            .map(|index| &self.cells[index])
            .unwrap_or_else(|| panic!("Index indices {}, {} out of bounds", loc.row, loc.col))
    }
}

impl IndexMut<Loc> for Grid {
    fn index_mut(&mut self, loc: Loc) -> &mut Self::Output {
        self.cell_mut(loc)
            .unwrap_or_else(|| panic!("Index_mut indices {}, {} out of bounds", loc.row, loc.col))
    }
}

/// One text row per grid row, `O` for alive and `.` for dead.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks_exact(self.size.width as usize) {
            for cell in row {
                f.write_str(if cell.is_alive() { "O" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The 3x3 block around a cell, with rows and columns wrapped around the grid
/// edges. On a grid one cell wide or tall the wrapped neighbors include the
/// center cell itself.
pub struct Neighborhood<'a> {
    grid: &'a Grid,
    rows: [u32; 3],
    cols: [u32; 3],
}

impl<'a> Neighborhood<'a> {
    pub fn new(grid: &'a Grid, center: Loc) -> Self {
        let (row_above, row_below) = Self::adjacent_indexes(center.row, grid.height());
        let (col_left, col_right) = Self::adjacent_indexes(center.col, grid.width());
        Self {
            grid,
            rows: [row_above, center.row, row_below],
            cols: [col_left, center.col, col_right],
        }
    }

    pub fn neighbor_locs(&self) -> [Loc; 8] {
        let [above, center_row, below] = self.rows;
        let [left, center_col, right] = self.cols;
        [
            Loc::new(above, left),
            Loc::new(above, center_col),
            Loc::new(above, right),
            Loc::new(center_row, left),
            Loc::new(center_row, right),
            Loc::new(below, left),
            Loc::new(below, center_col),
            Loc::new(below, right),
        ]
    }

    pub fn for_neighbor_cells<F>(&self, mut f: F)
    where
        F: FnMut(CellState),
    {
        for loc in self.neighbor_locs() {
            f(self.grid[loc]);
        }
    }

    pub fn live_count(&self) -> u8 {
        let mut result = 0;
        self.for_neighbor_cells(|neighbor| {
            if neighbor.is_alive() {
                result += 1;
            }
        });
        result
    }

    fn adjacent_indexes(cell_index: u32, max: u32) -> (u32, u32) {
        (
            Self::modulo(cell_index as i64 - 1, max),
            Self::modulo(cell_index as i64 + 1, max),
        )
    }

    fn modulo(val: i64, max: u32) -> u32 {
        val.rem_euclid(max as i64) as u32
    }
}
