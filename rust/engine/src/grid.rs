use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::SlotError;
use crate::symbols::Symbol;

/// One column of drawn symbols, top to bottom.
pub type Reel = Vec<Symbol>;

/// Visible window dimensions: `rows` pay-lines by `cols` reels.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GridSize {
    pub rows: usize,
    pub cols: usize,
}

impl GridSize {
    pub const CLASSIC: GridSize = GridSize { rows: 3, cols: 3 };

    pub fn new(rows: usize, cols: usize) -> Result<Self, SlotError> {
        if rows == 0 || cols == 0 {
            return Err(SlotError::InvalidGridSize { rows, cols });
        }
        Ok(Self { rows, cols })
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::CLASSIC
    }
}

/// Row-major symbol window. Row `i` is pay-line `i`.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    rows: Vec<Vec<Symbol>>,
}

impl Grid {
    pub fn from_rows(rows: Vec<Vec<Symbol>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<Symbol>] {
        &self.rows
    }

    pub fn row(&self, i: usize) -> Option<&[Symbol]> {
        self.rows.get(i).map(Vec::as_slice)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Symbol> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn size(&self) -> GridSize {
        GridSize {
            rows: self.rows.len(),
            cols: self.rows.first().map_or(0, Vec::len),
        }
    }

    pub fn into_rows(self) -> Vec<Vec<Symbol>> {
        self.rows
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, symbol) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" | ")?;
                }
                write!(f, "{}", symbol)?;
            }
        }
        Ok(())
    }
}

/// Reshape column-major reels into row-major pay-lines.
///
/// Output row `i` takes element `i` from every reel in reel order, so
/// `transpose(reels).get(i, j) == Some(reels[j][i])`. The row count is the
/// length of the shortest reel.
///
/// # Examples
///
/// ```
/// use slotline_engine::grid::transpose;
/// use slotline_engine::symbols::Symbol::{A, B, C, D};
///
/// let reels = vec![vec![A, B, C], vec![D, D, C], vec![A, B, A]];
/// let grid = transpose(&reels);
/// assert_eq!(grid.row(0), Some(&[A, D, A][..]));
/// assert_eq!(grid.to_string(), "A | D | A\nB | D | B\nC | C | A");
/// ```
pub fn transpose(reels: &[Reel]) -> Grid {
    let rows = reels.iter().map(Vec::len).min().unwrap_or(0);
    let rows = (0..rows)
        .map(|i| reels.iter().map(|reel| reel[i]).collect())
        .collect();
    Grid { rows }
}
