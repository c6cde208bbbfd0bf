//! Multi-state life simulation on a square torus.
//!
//! Cells follow Conway's birth/survival thresholds (B3/S23) but decay
//! through an aging sequence instead of dying outright: a cell that
//! stops qualifying as alive fades `Alive → Dying → Dead` over two
//! generations. `Dead` cells only return to `Alive` through the birth
//! rule. `Empty` marks cells that have never been touched; both
//! `Empty` and `Dead` count as not-alive for neighbor purposes.
//!
//! The grid is double-buffered: [`Grid::advance`] evaluates every
//! cell against the current generation only, so the update is
//! simultaneous regardless of iteration order.
//!
//! # Example
//!
//! ```
//! use smolder_grid::{CellState, Grid};
//!
//! let mut grid = Grid::new(8);
//!
//! // Horizontal blinker
//! grid.set(1, 2, CellState::Alive);
//! grid.set(2, 2, CellState::Alive);
//! grid.set(3, 2, CellState::Alive);
//!
//! grid.advance();
//!
//! // Flipped to vertical; the old arms are decaying, not dead
//! assert!(grid.is_alive(2, 1));
//! assert!(grid.is_alive(2, 3));
//! assert_eq!(grid.get(1, 2), CellState::Dying);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod pattern;

pub use pattern::{Pattern, PatternError};

/// State of a single grid cell.
///
/// The aging order is strict: `Alive → Dying → Dead`, with `Dead`
/// absorbing. `Empty` never ages; it marks cells that have never held
/// a live or decaying cell. Collapsing `Empty` into `Dead` would not
/// change neighbor counts, but renderers rely on the distinction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CellState {
    /// Never yet touched.
    #[default]
    Empty,
    /// Counts toward neighbors' alive counts.
    Alive,
    /// Was alive last generation; fading out.
    Dying,
    /// Fully decayed. Only the birth rule revives it.
    Dead,
}

impl CellState {
    /// Returns true for [`CellState::Alive`] only.
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    /// One decay step: `Alive → Dying → Dead → Dead`, `Empty → Empty`.
    pub fn aged(self) -> CellState {
        match self {
            CellState::Empty => CellState::Empty,
            CellState::Alive => CellState::Dying,
            CellState::Dying | CellState::Dead => CellState::Dead,
        }
    }
}

/// Computes a cell's next state from its current state and the number
/// of alive Moore neighbors.
///
/// Birth and survival use the classic Conway thresholds: exactly 3
/// alive neighbors births or sustains any cell, and 2 sustain a cell
/// that is already alive. Every other case ages the cell one step.
pub fn next_state(state: CellState, alive_neighbors: u8) -> CellState {
    if alive_neighbors == 3 || (alive_neighbors == 2 && state.is_alive()) {
        CellState::Alive
    } else {
        state.aged()
    }
}

/// Maps signed coordinates onto a row-major index on a torus of the
/// given side length.
///
/// Uses floor modulo, so coordinates below zero or past the edge wrap
/// to the opposite side: `wrap_index(side, -1, 0)` is the index of
/// `(side - 1, 0)`. `side` must be non-zero.
pub fn wrap_index(side: usize, x: i32, y: i32) -> usize {
    let s = side as i32;
    let col = x.rem_euclid(s) as usize;
    let row = y.rem_euclid(s) as usize;
    row * side + col
}

/// A square toroidal grid of [`CellState`]s with a scratch buffer for
/// simultaneous updates.
///
/// The side length is fixed for the grid's lifetime; resizing means
/// constructing a new grid.
#[derive(Debug, Clone)]
pub struct Grid {
    /// Side length (width = height).
    side: usize,
    /// Current generation, row-major `side * side`.
    cells: Vec<CellState>,
    /// Scratch buffer written by `advance`, never observable.
    next: Vec<CellState>,
}

impl Grid {
    /// Creates a grid with every cell [`CellState::Empty`].
    ///
    /// # Panics
    ///
    /// Panics if `side` is zero.
    pub fn new(side: usize) -> Self {
        assert!(side > 0, "grid side must be non-zero");
        Self {
            side,
            cells: vec![CellState::Empty; side * side],
            next: vec![CellState::Empty; side * side],
        }
    }

    /// Returns the side length.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Returns the current generation as a row-major slice.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Gets the state of a cell. Coordinates wrap toroidally, so this
    /// is total over all signed coordinates.
    pub fn get(&self, x: i32, y: i32) -> CellState {
        self.cells[wrap_index(self.side, x, y)]
    }

    /// Sets the state of a cell. Coordinates wrap toroidally.
    pub fn set(&mut self, x: i32, y: i32, state: CellState) {
        self.cells[wrap_index(self.side, x, y)] = state;
    }

    /// Returns true if the cell at the (wrapped) coordinates is alive.
    pub fn is_alive(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_alive()
    }

    /// Resets every cell to [`CellState::Empty`].
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Empty);
    }

    /// Counts total alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Randomizes the grid: each cell becomes alive with the given
    /// density (0.0 to 1.0), otherwise empty. Deterministic per seed.
    pub fn randomize(&mut self, seed: u64, density: f32) {
        let mut rng = SimpleRng::new(seed);
        for cell in &mut self.cells {
            *cell = if rng.next_f32() < density {
                CellState::Alive
            } else {
                CellState::Empty
            };
        }
    }

    /// Stamps a pattern's alive cells onto the grid with its top-left
    /// corner at `(x, y)`. Cells past the edge wrap around.
    pub fn stamp(&mut self, pattern: &Pattern, x: i32, y: i32) {
        for (px, py) in pattern.iter_alive() {
            self.set(x + px as i32, y + py as i32, CellState::Alive);
        }
    }

    /// Counts alive Moore neighbors (8-connected, toroidal) of the
    /// cell at `(x, y)`, reading the current generation only.
    fn alive_neighbors(&self, x: i32, y: i32) -> u8 {
        let mut count = 0u8;
        for dy in -1i32..=1 {
            for dx in -1i32..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                if self.cells[wrap_index(self.side, x + dx, y + dy)].is_alive() {
                    count += 1;
                }
            }
        }
        count
    }

    /// Advances the grid by one generation.
    ///
    /// Every cell's next state is computed from the current buffer
    /// before any result becomes visible, then the buffers are
    /// swapped in one step. Observers never see a partially updated
    /// grid, and evaluation order cannot leak between neighbors.
    pub fn advance(&mut self) {
        let side = self.side;
        for y in 0..side {
            for x in 0..side {
                let idx = y * side + x;
                let neighbors = self.alive_neighbors(x as i32, y as i32);
                self.next[idx] = next_state(self.cells[idx], neighbors);
            }
        }
        std::mem::swap(&mut self.cells, &mut self.next);
    }

    /// Advances multiple generations.
    pub fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }
}

/// Simple RNG for grid randomization.
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    fn next_f32(&mut self) -> f32 {
        (self.next_u64() as f64 / u64::MAX as f64) as f32
    }
}
