//! Simulation session: a grid, its history, and the clock gating
//! between them.
//!
//! A [`Session`] owns one [`Grid`] and one [`GenerationRing`] bound
//! to it, and decides when a simulation step is due. Time is always
//! injected by the caller as plain seconds, so the core performs no
//! clock reads and tests can drive it with synthetic values.
//!
//! Sessions start [`RunState::Paused`]. While paused, the only grid
//! mutation the session allows is direct cell editing, and the only
//! way to step is an explicit single-step request. While running, a
//! step happens whenever the configured interval has elapsed since
//! the last accepted step.
//!
//! # Example
//!
//! ```
//! use smolder_session::{Session, SessionConfig};
//!
//! let mut session = Session::new(SessionConfig {
//!     side: 16,
//!     history_capacity: 32,
//!     tick_interval: 0.1,
//! });
//!
//! session.grid_mut().randomize(7, 0.3);
//! session.toggle_run();
//!
//! let mut now = 0.0;
//! for _ in 0..5 {
//!     now += 0.1;
//!     session.tick(now);
//! }
//!
//! assert_eq!(session.generation(), 5);
//! assert_eq!(session.history().len(), 5);
//! ```

use smolder_grid::{CellState, Grid};
use smolder_history::GenerationRing;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Construction-time parameters for a session.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SessionConfig {
    /// Grid side length.
    pub side: usize,
    /// Maximum number of past generations to retain.
    pub history_capacity: usize,
    /// Seconds between steps while running.
    pub tick_interval: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            side: 64,
            history_capacity: 100,
            tick_interval: 0.5,
        }
    }
}

/// Whether the simulation is advancing on its own clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RunState {
    /// No timed steps; editing and single-steps only.
    #[default]
    Paused,
    /// A step is due every `tick_interval` seconds.
    Running,
}

/// A live simulation session.
pub struct Session {
    grid: Grid,
    history: GenerationRing,
    run_state: RunState,
    tick_interval: f64,
    /// Timestamp of the last accepted step, in caller seconds.
    last_tick: f64,
    /// One-shot step request honored by the next `tick`.
    step_armed: bool,
    /// Steps accepted since construction.
    generation: u64,
    /// UI-highlighted coordinate; no simulation semantics.
    cursor: (i32, i32),
}

impl Session {
    /// Creates a paused session with an empty grid.
    ///
    /// # Panics
    ///
    /// Panics if the configured side or history capacity is zero.
    pub fn new(config: SessionConfig) -> Self {
        let grid = Grid::new(config.side);
        let history = GenerationRing::new(grid.cells().len(), config.history_capacity);
        Self {
            grid,
            history,
            run_state: RunState::Paused,
            tick_interval: config.tick_interval,
            last_tick: 0.0,
            step_armed: false,
            generation: 0,
            cursor: (0, 0),
        }
    }

    /// Returns the owned grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the owned grid for direct mutation (seeding, stamping).
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Returns the retained generation history.
    pub fn history(&self) -> &GenerationRing {
        &self.history
    }

    /// Returns the current run state.
    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    /// Returns true while the session advances on its own clock.
    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// Flips between paused and running.
    pub fn toggle_run(&mut self) {
        self.run_state = match self.run_state {
            RunState::Paused => RunState::Running,
            RunState::Running => RunState::Paused,
        };
    }

    /// Arms a one-shot step, honored by the next [`Session::tick`]
    /// regardless of elapsed time or run state.
    pub fn request_single_step(&mut self) {
        self.step_armed = true;
    }

    /// Seconds between steps while running.
    pub fn tick_interval(&self) -> f64 {
        self.tick_interval
    }

    /// Sets the seconds between steps while running.
    pub fn set_tick_interval(&mut self, seconds: f64) {
        self.tick_interval = seconds;
    }

    /// Number of steps accepted since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Edits a cell. Ignored while running; edit policy lives here,
    /// the grid itself is policy-free.
    pub fn set_cell(&mut self, x: i32, y: i32, state: CellState) {
        if self.is_running() {
            return;
        }
        self.grid.set(x, y, state);
    }

    /// Toggles a cell between alive and empty. Ignored while running.
    pub fn toggle_cell(&mut self, x: i32, y: i32) {
        if self.is_running() {
            return;
        }
        let state = if self.grid.is_alive(x, y) {
            CellState::Empty
        } else {
            CellState::Alive
        };
        self.grid.set(x, y, state);
    }

    /// Sets the UI-highlighted coordinate.
    pub fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor = (x, y);
    }

    /// Returns the UI-highlighted coordinate.
    pub fn cursor(&self) -> (i32, i32) {
        self.cursor
    }

    /// Performs the due-check and, if a step is due, one step:
    /// push the current generation into history, advance the grid,
    /// and record `now_seconds` as the last accepted step time.
    ///
    /// A step is due when a single-step is armed, or the session is
    /// running and at least `tick_interval` seconds have passed since
    /// the last accepted step. Returns whether a step happened.
    pub fn tick(&mut self, now_seconds: f64) -> bool {
        let due = self.step_armed
            || (self.is_running() && now_seconds - self.last_tick >= self.tick_interval);
        if !due {
            return false;
        }

        self.step_armed = false;
        self.history.push(self.grid.cells());
        self.grid.advance();
        self.last_tick = now_seconds;
        self.generation += 1;
        true
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(interval: f64) -> Session {
        Session::new(SessionConfig {
            side: 8,
            history_capacity: 16,
            tick_interval: interval,
        })
    }

    #[test]
    fn test_starts_paused() {
        let s = Session::default();
        assert_eq!(s.run_state(), RunState::Paused);
        assert!(!s.is_running());
        assert_eq!(s.generation(), 0);
    }

    #[test]
    fn test_paused_ticks_do_nothing() {
        let mut s = session(0.1);
        s.set_cell(2, 2, CellState::Alive);

        for i in 0..50 {
            assert!(!s.tick(i as f64));
        }

        assert_eq!(s.generation(), 0);
        assert!(s.history().is_empty());
        assert!(s.grid().is_alive(2, 2));
    }

    #[test]
    fn test_single_step_ignores_clock_and_pause() {
        let mut s = session(1000.0);
        s.set_cell(2, 2, CellState::Alive);

        s.request_single_step();
        assert!(s.tick(0.0));

        // Exactly one push + advance
        assert_eq!(s.generation(), 1);
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.grid().get(2, 2), CellState::Dying);

        // The request was one-shot
        assert!(!s.tick(0.0));
        assert_eq!(s.generation(), 1);
    }

    #[test]
    fn test_running_steps_on_interval() {
        let mut s = session(0.5);
        s.toggle_run();

        assert!(!s.tick(0.2));
        assert!(s.tick(0.5));
        assert!(!s.tick(0.7));
        assert!(s.tick(1.0));

        assert_eq!(s.generation(), 2);
        assert_eq!(s.history().len(), 2);
    }

    #[test]
    fn test_interval_measured_from_last_accepted_step() {
        let mut s = session(0.5);
        s.toggle_run();

        // Late tick at 0.9 accepts; next is due at 1.4, not 1.0
        assert!(s.tick(0.9));
        assert!(!s.tick(1.3));
        assert!(s.tick(1.4));
    }

    #[test]
    fn test_history_records_pre_step_generation() {
        let mut s = session(0.1);
        s.set_cell(3, 3, CellState::Alive);
        let before: Vec<_> = s.grid().cells().to_vec();

        s.request_single_step();
        s.tick(0.0);

        assert_eq!(s.history().get(0), Some(before.as_slice()));
        assert_ne!(s.history().get(0), Some(s.grid().cells()));
    }

    #[test]
    fn test_edits_ignored_while_running() {
        let mut s = session(0.5);
        s.toggle_run();

        s.set_cell(1, 1, CellState::Alive);
        s.toggle_cell(2, 2);
        assert_eq!(s.grid().population(), 0);

        s.toggle_run();
        s.set_cell(1, 1, CellState::Alive);
        s.toggle_cell(2, 2);
        assert_eq!(s.grid().population(), 2);

        // Toggling an alive cell clears it back to empty
        s.toggle_cell(2, 2);
        assert_eq!(s.grid().get(2, 2), CellState::Empty);
    }

    #[test]
    fn test_set_tick_interval() {
        let mut s = session(10.0);
        s.toggle_run();
        assert!(!s.tick(1.0));

        s.set_tick_interval(0.5);
        assert_eq!(s.tick_interval(), 0.5);
        assert!(s.tick(1.5));
    }

    #[test]
    fn test_cursor_is_inert() {
        let mut s = session(0.5);
        s.set_cursor(3, -2);
        assert_eq!(s.cursor(), (3, -2));
        assert_eq!(s.generation(), 0);
        assert!(s.history().is_empty());
    }

    #[test]
    fn test_history_capacity_bounds_session() {
        let mut s = Session::new(SessionConfig {
            side: 4,
            history_capacity: 3,
            tick_interval: 0.1,
        });

        for _ in 0..5 {
            s.request_single_step();
            s.tick(0.0);
        }

        assert_eq!(s.generation(), 5);
        assert_eq!(s.history().len(), 3);
        assert_eq!(s.history().get(3), None);
    }
}
