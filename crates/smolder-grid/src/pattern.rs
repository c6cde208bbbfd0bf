//! Life plaintext pattern parsing.
//!
//! Parses the plaintext (`.cells`) convention: lines starting with
//! `!` are comments, `.` is a dead cell, `O` is an alive cell. Rows
//! may have ragged widths; the pattern's width is the widest row.
//!
//! # Example
//!
//! ```
//! use smolder_grid::{Grid, Pattern};
//!
//! let glider = Pattern::parse(
//!     "!Name: Glider\n\
//!      .O.\n\
//!      ..O\n\
//!      OOO\n",
//! )
//! .unwrap();
//!
//! let mut grid = Grid::new(16);
//! grid.stamp(&glider, 4, 4);
//! assert_eq!(grid.population(), 5);
//! ```

use thiserror::Error;

/// Errors from [`Pattern::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PatternError {
    /// The input contained no cell rows.
    #[error("pattern contains no cells")]
    Empty,

    /// A cell row contained a character other than `.` or `O`.
    #[error("unexpected character {found:?} at line {line}, column {column}")]
    UnexpectedChar {
        /// 1-based line number in the original input.
        line: usize,
        /// 1-based column of the offending character.
        column: usize,
        /// The character found.
        found: char,
    },
}

/// A parsed plaintext pattern: a rectangular extent plus the set of
/// alive cells within it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    width: usize,
    height: usize,
    alive: Vec<(usize, usize)>,
}

impl Pattern {
    /// Parses Life plaintext. Comment lines (`!` prefix) are skipped;
    /// blank rows are kept and contribute to the height.
    pub fn parse(text: &str) -> Result<Self, PatternError> {
        let mut width = 0;
        let mut height = 0;
        let mut alive = Vec::new();

        for (line_idx, line) in text.lines().enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.starts_with('!') {
                continue;
            }

            let row = height;
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    '.' => {}
                    'O' => alive.push((col, row)),
                    found => {
                        return Err(PatternError::UnexpectedChar {
                            line: line_idx + 1,
                            column: col + 1,
                            found,
                        });
                    }
                }
            }
            width = width.max(line.chars().count());
            height += 1;
        }

        if width == 0 || height == 0 {
            return Err(PatternError::Empty);
        }

        Ok(Self {
            width,
            height,
            alive,
        })
    }

    /// Width of the pattern's bounding extent.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the pattern's bounding extent.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.alive.len()
    }

    /// Iterates the alive cells as `(x, y)` offsets from the
    /// pattern's top-left corner.
    pub fn iter_alive(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.alive.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CellState, Grid};

    #[test]
    fn test_parse_glider() {
        let glider = Pattern::parse(".O.\n..O\nOOO\n").unwrap();
        assert_eq!(glider.width(), 3);
        assert_eq!(glider.height(), 3);

        let alive: Vec<_> = glider.iter_alive().collect();
        assert_eq!(alive, vec![(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
    }

    #[test]
    fn test_parse_skips_comments() {
        let p = Pattern::parse("!Name: Blinker\n!Period 2\nOOO\n").unwrap();
        assert_eq!(p.height(), 1);
        assert_eq!(p.width(), 3);
        assert_eq!(p.population(), 3);
    }

    #[test]
    fn test_parse_ragged_rows() {
        let p = Pattern::parse("O\nOOO\nO\n").unwrap();
        assert_eq!(p.width(), 3);
        assert_eq!(p.height(), 3);
        assert_eq!(p.population(), 5);
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(Pattern::parse(""), Err(PatternError::Empty));
        assert_eq!(Pattern::parse("!only comments\n"), Err(PatternError::Empty));
    }

    #[test]
    fn test_parse_rejects_unknown_chars() {
        let err = Pattern::parse("..O\n.x.\n").unwrap_err();
        assert_eq!(
            err,
            PatternError::UnexpectedChar {
                line: 2,
                column: 2,
                found: 'x',
            }
        );
    }

    #[test]
    fn test_parse_crlf() {
        let p = Pattern::parse(".O.\r\nO.O\r\n").unwrap();
        assert_eq!(p.width(), 3);
        assert_eq!(p.height(), 2);
        assert_eq!(p.population(), 3);
    }

    #[test]
    fn test_stamp_wraps_at_edges() {
        let block = Pattern::parse("OO\nOO\n").unwrap();
        let mut grid = Grid::new(6);
        grid.stamp(&block, 5, 5);

        assert!(grid.is_alive(5, 5));
        assert!(grid.is_alive(0, 5));
        assert!(grid.is_alive(5, 0));
        assert!(grid.is_alive(0, 0));
    }

    #[test]
    fn test_stamp_leaves_dead_cells_alone() {
        let p = Pattern::parse(".O.\n").unwrap();
        let mut grid = Grid::new(5);
        grid.set(2, 2, CellState::Dead);
        grid.stamp(&p, 2, 2);

        // The pattern's '.' at (2, 2) does not overwrite
        assert_eq!(grid.get(2, 2), CellState::Dead);
        assert!(grid.is_alive(3, 2));
    }
}
