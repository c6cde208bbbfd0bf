//! Runs a smolder session in the terminal.
//!
//! Run from repo root:
//!   `cargo run -p smolder-term`                - glider on a 24-torus
//!   `cargo run -p smolder-term -- 40`          - 40 generations
//!   `cargo run -p smolder-term -- 40 soup`     - random soup seed
//!
//! Each generation is printed to stdout with one glyph per cell:
//! `█` alive, `▒` dying, `·` dead, space empty.

use std::env;

use smolder_grid::{CellState, Pattern};
use smolder_session::{Session, SessionConfig};

const GLIDER: &str = "!Name: Glider\n\
                      .O.\n\
                      ..O\n\
                      OOO\n";

fn glyph(state: CellState) -> char {
    match state {
        CellState::Empty => ' ',
        CellState::Alive => '█',
        CellState::Dying => '▒',
        CellState::Dead => '·',
    }
}

fn print_grid(session: &Session) {
    let side = session.grid().side();
    let cells = session.grid().cells();
    for row in cells.chunks(side) {
        let line: String = row.iter().map(|&c| glyph(c)).collect();
        println!("{line}");
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let generations: usize = args
        .get(1)
        .and_then(|a| a.parse().ok())
        .unwrap_or(20);
    let soup = args.iter().any(|a| a == "soup");

    let mut session = Session::new(SessionConfig {
        side: 24,
        history_capacity: 64,
        tick_interval: 0.1,
    });

    if soup {
        session.grid_mut().randomize(12345, 0.25);
    } else {
        let glider = Pattern::parse(GLIDER).expect("built-in pattern is valid");
        session.grid_mut().stamp(&glider, 2, 2);
    }

    session.toggle_run();

    // Synthetic clock: one interval per loop iteration
    let mut now = 0.0;
    for _ in 0..generations {
        now += session.tick_interval();
        session.tick(now);

        println!(
            "generation {} | population {} | history {}/{}",
            session.generation(),
            session.grid().population(),
            session.history().len(),
            session.history().capacity(),
        );
        print_grid(&session);
        println!();
    }
}
