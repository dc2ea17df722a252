// universe.rs - The Game of Life automaton: double-buffered toroidal grid

use std::fmt;

use rand::Rng;
use tracing::{debug, info, trace};

use crate::bitgrid::BitGrid;
use crate::error::Result;
use crate::patterns::{InitialLayout, Pattern};

/// Conway's Game of Life (B3/S23) on a toroidal, bit-packed grid.
///
/// Two buffers of identical dimensions are owned here: `current` holds the
/// visible generation and `scratch` receives the next one during [`step`],
/// after which the two are swapped. Between steps the contents of `scratch`
/// are stale.
///
/// [`step`]: Universe::step
#[derive(Debug, Clone)]
pub struct Universe {
    width: u32,
    height: u32,
    current: BitGrid,
    scratch: BitGrid,
    generation: u64,
}

impl Universe {
    /// Builds an all-dead universe.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let current = BitGrid::new(width, height)?;
        let scratch = BitGrid::new(width, height)?;
        info!(width, height, "created universe");
        Ok(Self {
            width,
            height,
            current,
            scratch,
            generation: 0,
        })
    }

    /// Builds a universe and seeds it with `layout`.
    pub fn with_layout(width: u32, height: u32, layout: InitialLayout) -> Result<Self> {
        let mut universe = Self::new(width, height)?;
        match layout {
            InitialLayout::Interesting => {
                for idx in 0..universe.current.len() {
                    universe.current.set(idx, InitialLayout::interesting_cell(idx));
                }
            }
            InitialLayout::Random => universe.randomize(),
            InitialLayout::Empty => {}
            InitialLayout::Pattern(pattern) => {
                let (rows, cols) = pattern.extent();
                let row = (i64::from(height) - rows) / 2;
                let col = (i64::from(width) - cols) / 2;
                universe.stamp_pattern(pattern, row, col);
            }
        }
        Ok(universe)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of steps taken since the last reset or randomize.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Packed view of the current generation, `ceil(width * height / 8)`
    /// bytes, bit `row * width + col` set for live cells.
    pub fn cells(&self) -> &[u8] {
        self.current.as_bytes()
    }

    /// Linear index of a wrapped `(row, col)`.
    fn index(&self, row: i64, col: i64) -> usize {
        let row = row.rem_euclid(i64::from(self.height)) as usize;
        let col = col.rem_euclid(i64::from(self.width)) as usize;
        row * self.width as usize + col
    }

    pub fn is_alive(&self, row: i64, col: i64) -> bool {
        self.current.get(self.index(row, col))
    }

    /// Flips the cell at `(row mod height, col mod width)`.
    pub fn toggle_cell(&mut self, row: i64, col: i64) {
        let idx = self.index(row, col);
        self.current.toggle(idx);
    }

    pub fn set_cell(&mut self, row: i64, col: i64, alive: bool) {
        let idx = self.index(row, col);
        self.current.set(idx, alive);
    }

    /// Marks every listed cell alive.
    pub fn set_cells(&mut self, cells: &[(i64, i64)]) {
        for &(row, col) in cells {
            self.set_cell(row, col, true);
        }
    }

    /// Marks the cells of `pattern` alive with its top-left corner at
    /// `(row, col)`, wrapping around the edges.
    pub fn stamp_pattern(&mut self, pattern: &Pattern, row: i64, col: i64) {
        debug!(pattern = pattern.name, row, col, "stamping pattern");
        for &(dr, dc) in pattern.cells {
            self.set_cell(row + dr, col + dc, true);
        }
    }

    /// Live cells as `(row, col)`, in row-major order.
    pub fn live_cells(&self) -> Vec<(u32, u32)> {
        (0..self.current.len())
            .filter(|&idx| self.current.get(idx))
            .map(|idx| ((idx / self.width as usize) as u32, (idx % self.width as usize) as u32))
            .collect()
    }

    pub fn population(&self) -> usize {
        self.current.count_alive()
    }

    /// Sets every cell alive with probability one half using the
    /// thread-local, OS-seeded generator.
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::rng());
    }

    /// Sets every cell alive with probability one half using `rng`.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.current.fill_bytes_with(|bytes| rng.fill(bytes));
        self.generation = 0;
        info!(population = self.population(), "randomized universe");
    }

    /// Kills every cell.
    pub fn reset_cells(&mut self) {
        self.current.clear();
        self.generation = 0;
        info!("cleared universe");
    }

    /// Advances one generation.
    ///
    /// A cell is alive next generation iff it has exactly three live
    /// neighbors, or it is alive now and has exactly two. Neighbors wrap
    /// around every edge; on a grid one cell wide or tall a cell counts
    /// itself through the wrap.
    pub fn step(&mut self) {
        debug_assert_eq!(
            (self.current.width(), self.current.height()),
            (self.scratch.width(), self.scratch.height()),
            "double buffers diverged"
        );

        let width = self.width as usize;
        let height = self.height as usize;
        let current = &self.current;
        let next = &mut self.scratch;
        next.clear();

        for row in 0..height {
            // Row base offsets, computed once per row
            let north = ((row + height - 1) % height) * width;
            let here = row * width;
            let south = ((row + 1) % height) * width;

            for col in 0..width {
                let west = (col + width - 1) % width;
                let east = (col + 1) % width;

                #[rustfmt::skip]
                let neighbors = [
                    north + west, north + col, north + east,
                    here + west,               here + east,
                    south + west, south + col, south + east,
                ];
                let count = neighbors.into_iter().filter(|&idx| current.get(idx)).count();

                let alive = current.get(here + col);
                if matches!((alive, count), (true, 2) | (_, 3)) {
                    next.set(here + col, true);
                }
            }
        }

        std::mem::swap(&mut self.current, &mut self.scratch);
        self.generation += 1;
        trace!(generation = self.generation, "stepped universe");
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height as usize {
            for col in 0..self.width as usize {
                let idx = row * self.width as usize + col;
                let symbol = if self.current.get(idx) { '◼' } else { '◻' };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
