//! Bounded FIFO history of grid generations.
//!
//! [`GenerationRing`] retains up to a fixed number of past grid
//! snapshots in a flat ring buffer, evicting the oldest once full.
//! One ring is bound to one grid size for its whole lifetime.
//!
//! Retrieved snapshots are slices borrowed from the ring's storage,
//! so holding one across a later [`GenerationRing::push`] is a borrow
//! error rather than the stale-view hazard a raw-pointer ring would
//! have.
//!
//! # Example
//!
//! ```
//! use smolder_grid::Grid;
//! use smolder_history::GenerationRing;
//!
//! let mut grid = Grid::new(8);
//! let mut ring = GenerationRing::new(grid.cells().len(), 16);
//!
//! ring.push(grid.cells());
//! grid.advance();
//! ring.push(grid.cells());
//!
//! assert_eq!(ring.len(), 2);
//! assert_eq!(ring.get(1), Some(grid.cells()));
//! assert_eq!(ring.get(2), None);
//! ```

use smolder_grid::CellState;

/// Fixed-capacity ring buffer of grid snapshots.
///
/// `start` and `end` are monotonically increasing counters;
/// `end - start` is the number of retained snapshots and never
/// exceeds the capacity.
#[derive(Debug, Clone)]
pub struct GenerationRing {
    /// Cell count of the bound grid, fixed at construction.
    elem_size: usize,
    /// Maximum number of retained snapshots.
    capacity: usize,
    /// Counter of the oldest retained snapshot.
    start: u64,
    /// Counter one past the newest retained snapshot.
    end: u64,
    /// `capacity` slots of `elem_size` cells each.
    storage: Vec<CellState>,
}

impl GenerationRing {
    /// Creates an empty ring for snapshots of `elem_size` cells.
    ///
    /// # Panics
    ///
    /// Panics if `elem_size` or `capacity` is zero.
    pub fn new(elem_size: usize, capacity: usize) -> Self {
        assert!(elem_size > 0, "ring element size must be non-zero");
        assert!(capacity > 0, "ring capacity must be non-zero");
        Self {
            elem_size,
            capacity,
            start: 0,
            end: 0,
            storage: vec![CellState::Empty; elem_size * capacity],
        }
    }

    /// Returns the snapshot cell count this ring was sized for.
    pub fn elem_size(&self) -> usize {
        self.elem_size
    }

    /// Returns the maximum number of retained snapshots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of retained snapshots.
    pub fn len(&self) -> usize {
        (self.end - self.start) as usize
    }

    /// Returns true if no snapshots are retained.
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    /// Appends a snapshot, evicting the oldest if the ring is full.
    ///
    /// # Panics
    ///
    /// Panics if `cells.len()` differs from the element size the ring
    /// was constructed with. A bound grid's size never changes, so a
    /// mismatch means the ring is wired to the wrong grid; continuing
    /// would corrupt every later lookup.
    pub fn push(&mut self, cells: &[CellState]) {
        assert!(
            cells.len() == self.elem_size,
            "snapshot of {} cells pushed into a ring sized for {}",
            cells.len(),
            self.elem_size
        );

        let slot = (self.end % self.capacity as u64) as usize;
        self.storage[slot * self.elem_size..][..self.elem_size].copy_from_slice(cells);
        self.end += 1;

        // Kept general over multi-entry overflow even though single
        // pushes only ever overflow by one.
        let retained = self.end - self.start;
        if retained > self.capacity as u64 {
            self.start += retained - self.capacity as u64;
        }
    }

    /// Returns the retained snapshot at `relative` distance from the
    /// oldest: `0` is the oldest, `len() - 1` the newest. Out-of-range
    /// indices return `None`.
    pub fn get(&self, relative: usize) -> Option<&[CellState]> {
        if relative >= self.len() {
            return None;
        }
        // Combine cursors first, wrap once.
        let slot = ((self.start + relative as u64) % self.capacity as u64) as usize;
        Some(&self.storage[slot * self.elem_size..][..self.elem_size])
    }

    /// Returns the newest retained snapshot, if any.
    pub fn latest(&self) -> Option<&[CellState]> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Drops all retained snapshots. The cursors keep counting up, so
    /// a cleared ring behaves like a freshly exhausted one.
    pub fn clear(&mut self) {
        self.start = self.end;
    }
}
