//! Piped text to playfield grid
//!
//! The grid is ragged: each input line keeps its own length. Cells only ever
//! go from non-blank to blank.

use std::io::Read;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::BLANK;

/// Startup failures. All of them end the process before a game exists.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("'input' is empty.")]
    Empty,
    #[error("failed to read input: {0}")]
    Read(#[from] std::io::Error),
}

/// The destructible character matrix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    /// Build a grid from text, one row per `'\n'`-separated line.
    ///
    /// A trailing newline produces a final empty row. Every other character,
    /// `'\r'` included, is kept as a destructible cell.
    pub fn from_text(text: &str) -> Self {
        let rows = text
            .split('\n')
            .map(|line| line.chars().collect::<Vec<_>>())
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row, in characters
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Cell at (x, y), `None` past the end of that row or below the last row
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Blank the cell at (x, y). Returns true only if a non-blank cell was destroyed.
    pub fn blank(&mut self, x: usize, y: usize) -> bool {
        match self.rows.get_mut(y).and_then(|row| row.get_mut(x)) {
            Some(cell) if *cell != BLANK => {
                *cell = BLANK;
                true
            }
            _ => false,
        }
    }

    /// Number of cells still standing
    pub fn non_blank_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|&&c| c != BLANK)
            .count()
    }
}

/// Read the whole stream and turn it into a grid.
///
/// Invalid UTF-8 is replaced rather than rejected; whitespace-only input is an error.
pub fn load<R: Read>(mut reader: R) -> Result<Grid, LoadError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let text = String::from_utf8_lossy(&bytes);
    if text.trim().is_empty() {
        return Err(LoadError::Empty);
    }

    let grid = Grid::from_text(&text);
    log::info!(
        "Loaded {} rows, width {}, {} destructible cells",
        grid.row_count(),
        grid.width(),
        grid.non_blank_count()
    );
    Ok(grid)
}
