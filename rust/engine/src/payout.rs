use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::symbols::{Symbol, SymbolTable};

/// A pay-line that matched across the whole row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineWin {
    /// Zero-based row index
    pub line: usize,
    pub symbol: Symbol,
    pub payout: f64,
}

/// Symbol shared by every cell of `row`, if any.
pub fn matching_symbol(row: &[Symbol]) -> Option<Symbol> {
    let (&first, rest) = row.split_first()?;
    rest.iter().all(|s| *s == first).then_some(first)
}

/// Every winning pay-line among the first `lines` rows.
///
/// Rows the player did not stake on are never looked at. `lines` larger than
/// the grid is treated as every row.
pub fn winning_lines(grid: &Grid, bet: f64, lines: usize, table: &SymbolTable) -> Vec<LineWin> {
    grid.rows()
        .iter()
        .take(lines)
        .enumerate()
        .filter_map(|(line, row)| {
            matching_symbol(row).map(|symbol| LineWin {
                line,
                symbol,
                payout: bet * table.multiplier(symbol),
            })
        })
        .collect()
}

/// Total payout for a spin: `bet × multiplier` for each fully matching staked line.
///
/// # Examples
///
/// ```
/// use slotline_engine::grid::Grid;
/// use slotline_engine::payout::evaluate_winnings;
/// use slotline_engine::symbols::{Symbol::*, SymbolTable};
///
/// let grid = Grid::from_rows(vec![vec![A, A, A], vec![B, C, D], vec![D, D, D]]);
/// let table = SymbolTable::classic();
/// assert_eq!(evaluate_winnings(&grid, 10.0, 1, &table), 50.0);
/// assert_eq!(evaluate_winnings(&grid, 10.0, 3, &table), 70.0);
/// ```
pub fn evaluate_winnings(grid: &Grid, bet: f64, lines: usize, table: &SymbolTable) -> f64 {
    winning_lines(grid, bet, lines, table)
        .iter()
        .map(|w| w.payout)
        .sum()
}
