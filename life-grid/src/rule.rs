use crate::{CellState, Grid, Neighborhood};

/// What happens to a cell given its live neighbor count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Die,
    Retain,
    Live,
}

/// Indexed by live neighbor count, 0 through 8.
pub const NEXT_STATE: [Transition; 9] = [
    Transition::Die,
    Transition::Die,
    Transition::Retain,
    Transition::Live,
    Transition::Die,
    Transition::Die,
    Transition::Die,
    Transition::Die,
    Transition::Die,
];

impl Transition {
    pub fn for_live_neighbors(count: u8) -> Self {
        NEXT_STATE[count as usize]
    }

    pub fn apply(self, current: CellState) -> CellState {
        match self {
            Transition::Die => CellState::Dead,
            Transition::Retain => current,
            Transition::Live => CellState::Alive,
        }
    }
}

/// Computes the next generation into a new grid; `grid` is only read.
pub fn step(grid: &Grid) -> Grid {
    let mut next = Grid::new(grid.size());
    for loc in grid.locs() {
        let neighbors = Neighborhood::new(grid, loc).live_count();
        next[loc] = Transition::for_live_neighbors(neighbors).apply(grid[loc]);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GridSize, Loc};
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn random_grid(rng: &mut SmallRng, size: GridSize, density: f64) -> Grid {
        let mut grid = Grid::new(size);
        for loc in grid.locs() {
            if rng.random_bool(density) {
                grid.toggle(loc);
            }
        }
        grid
    }

    fn random_grids() -> impl Iterator<Item = Grid> {
        let mut rng = SmallRng::seed_from_u64(0x11fe);
        let sizes = [
            GridSize::new(1, 1),
            GridSize::new(1, 5),
            GridSize::new(7, 1),
            GridSize::new(2, 2),
            GridSize::new(3, 3),
            GridSize::new(9, 4),
            GridSize::new(60, 40),
        ];
        (0..8).flat_map(move |round| {
            let density = 0.1 + 0.1 * round as f64;
            sizes
                .iter()
                .map(|&size| random_grid(&mut rng, size, density))
                .collect::<Vec<_>>()
        })
    }

    // Independent of Neighborhood: offsets resolved with plain modular arithmetic.
    fn brute_force_neighbors(grid: &Grid, loc: Loc) -> u8 {
        let width = grid.width() as i64;
        let height = grid.height() as i64;
        let mut count = 0;
        for d_row in -1i64..=1 {
            for d_col in -1i64..=1 {
                if d_row == 0 && d_col == 0 {
                    continue;
                }
                let row = (loc.row as i64 + d_row).rem_euclid(height) as u32;
                let col = (loc.col as i64 + d_col).rem_euclid(width) as u32;
                if grid.is_alive(Loc::new(row, col)) {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn table_matches_standard_life() {
        for count in 0..=8u8 {
            for current in [CellState::Dead, CellState::Alive] {
                let expected = if current.is_alive() {
                    count == 2 || count == 3
                } else {
                    count == 3
                };
                let next = Transition::for_live_neighbors(count).apply(current);
                assert_eq!(next.is_alive(), expected, "count {count}, {current:?}");
            }
        }
    }

    #[test]
    fn empty_grid_stays_empty() {
        for size in [GridSize::new(1, 1), GridSize::new(3, 3), GridSize::new(60, 40)] {
            assert!(step(&Grid::new(size)).is_empty());
        }
    }

    #[test]
    fn every_cell_follows_the_table() {
        for grid in random_grids() {
            let next = step(&grid);
            assert_eq!(next.size(), grid.size());
            for loc in grid.locs() {
                let neighbors = brute_force_neighbors(&grid, loc);
                assert_eq!(neighbors, grid.live_neighbor_count(loc));
                let expected = match neighbors {
                    3 => CellState::Alive,
                    2 => grid[loc],
                    _ => CellState::Dead,
                };
                assert_eq!(next[loc], expected, "{loc:?} with {neighbors} neighbors in\n{grid}");
            }
        }
    }

    #[test]
    fn step_is_deterministic_and_leaves_input_alone() {
        for grid in random_grids() {
            let before = grid.clone();
            let first = step(&grid);
            let second = step(&grid);
            assert_eq!(first, second);
            assert_eq!(grid, before);
        }
    }

    #[test]
    fn isolated_cell_dies() {
        let grid = Grid::with_live_cells(GridSize::new(3, 3), [Loc::new(1, 1)]);
        assert!(step(&grid).is_empty());
    }

    #[test]
    fn lone_cell_on_single_cell_grid_dies() {
        // Eight copies of itself as neighbors is overcrowding.
        let grid = Grid::with_live_cells(GridSize::new(1, 1), [Loc::new(0, 0)]);
        assert!(step(&grid).is_empty());
    }

    #[test]
    fn blinker_oscillates() {
        let size = GridSize::new(20, 20);
        let horizontal = Grid::with_live_cells(
            size,
            [Loc::new(10, 9), Loc::new(10, 10), Loc::new(10, 11)],
        );
        let vertical = Grid::with_live_cells(
            size,
            [Loc::new(9, 10), Loc::new(10, 10), Loc::new(11, 10)],
        );
        let once = step(&horizontal);
        assert_eq!(once, vertical);
        assert_eq!(step(&once), horizontal);
    }

    #[test]
    fn blinker_across_the_seam() {
        let size = GridSize::new(8, 8);
        let horizontal =
            Grid::with_live_cells(size, [Loc::new(0, 7), Loc::new(0, 0), Loc::new(0, 1)]);
        let vertical =
            Grid::with_live_cells(size, [Loc::new(7, 0), Loc::new(0, 0), Loc::new(1, 0)]);
        assert_eq!(step(&horizontal), vertical);
        assert_eq!(step(&vertical), horizontal);
    }

    #[test]
    fn block_is_still() {
        let block = Grid::with_live_cells(
            GridSize::new(6, 6),
            [Loc::new(2, 2), Loc::new(2, 3), Loc::new(3, 2), Loc::new(3, 3)],
        );
        assert_eq!(step(&block), block);
    }

    #[test]
    fn glider_returns_shifted_after_four_steps() {
        let size = GridSize::new(10, 10);
        let glider = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
        let start = Grid::with_live_cells(size, glider.map(|(r, c)| Loc::new(r, c)));
        let shifted = Grid::with_live_cells(size, glider.map(|(r, c)| Loc::new(r + 1, c + 1)));

        let mut grid = start;
        for _ in 0..4 {
            grid = step(&grid);
        }
        assert_eq!(grid, shifted);
    }

    #[test]
    fn cleared_grid_steps_to_empty() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut grid = random_grid(&mut rng, GridSize::new(12, 9), 0.5);
        grid.clear();
        assert!(step(&grid).is_empty());
    }
}
