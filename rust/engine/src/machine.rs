use serde::Serialize;

use crate::errors::SlotError;
use crate::grid::{transpose, Grid, GridSize, Reel};
use crate::payout::{winning_lines, LineWin};
use crate::spin::{ReelSource, Spinner};
use crate::symbols::SymbolTable;
use crate::wallet::Wallet;

/// Everything produced by a single spin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpinOutcome {
    /// Column-major draw, as it came off the reel source
    pub reels: Vec<Reel>,
    /// Row-major pay-lines
    pub grid: Grid,
    pub line_wins: Vec<LineWin>,
    pub winnings: f64,
}

/// Slot machine: an injected symbol table plus a reel source.
///
/// Runs spin → transpose → evaluate as one call. The table is fixed for the
/// lifetime of the machine.
///
/// # Examples
///
/// ```
/// use slotline_engine::machine::SlotMachine;
///
/// let mut machine = SlotMachine::classic(12345);
/// let outcome = machine.spin(1.0, 3).unwrap();
/// assert_eq!(outcome.grid.rows().len(), 3);
/// assert!(outcome.winnings >= 0.0);
/// ```
pub struct SlotMachine {
    table: SymbolTable,
    size: GridSize,
    source: Box<dyn ReelSource>,
}

impl std::fmt::Debug for SlotMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlotMachine")
            .field("table", &self.table)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

impl SlotMachine {
    /// Machine with a seeded random spinner drawing from `table`'s pool.
    pub fn new(table: SymbolTable, size: GridSize, seed: u64) -> Result<Self, SlotError> {
        let spinner = Spinner::new_with_seed(table.pool(), seed);
        Self::with_source(table, size, Box::new(spinner))
    }

    /// The 3x3 machine with the classic symbol table.
    pub fn classic(seed: u64) -> Self {
        let table = SymbolTable::classic();
        let spinner = Spinner::new_with_seed(table.pool(), seed);
        Self {
            table,
            size: GridSize::CLASSIC,
            source: Box::new(spinner),
        }
    }

    pub fn with_source(
        table: SymbolTable,
        size: GridSize,
        source: Box<dyn ReelSource>,
    ) -> Result<Self, SlotError> {
        let size = GridSize::new(size.rows, size.cols)?;
        let pool = table.pool_size();
        if pool < size.rows {
            return Err(SlotError::PoolTooSmall {
                pool,
                rows: size.rows,
            });
        }
        Ok(Self {
            table,
            size,
            source,
        })
    }

    /// Number of pay-lines a player can stake on.
    pub fn max_lines(&self) -> usize {
        self.size.rows
    }

    fn check_lines(&self, lines: usize) -> Result<(), SlotError> {
        if lines == 0 || lines > self.max_lines() {
            return Err(SlotError::InvalidLines {
                lines,
                max: self.max_lines(),
            });
        }
        Ok(())
    }

    /// Spin once and score the first `lines` pay-lines at `bet` per line.
    pub fn spin(&mut self, bet: f64, lines: usize) -> Result<SpinOutcome, SlotError> {
        self.check_lines(lines)?;
        if !bet.is_finite() || bet <= 0.0 {
            return Err(SlotError::InvalidBet(bet));
        }
        let reels = self.source.spin_reels(self.size);
        let grid = transpose(&reels);
        let line_wins = winning_lines(&grid, bet, lines, &self.table);
        let winnings = line_wins.iter().map(|w| w.payout).sum();
        Ok(SpinOutcome {
            reels,
            grid,
            line_wins,
            winnings,
        })
    }

    /// Debit the stake, spin, and credit the winnings.
    pub fn play_round(
        &mut self,
        wallet: &mut Wallet,
        bet: f64,
        lines: usize,
    ) -> Result<SpinOutcome, SlotError> {
        self.check_lines(lines)?;
        if bet > wallet.max_bet_per_line(lines) {
            return Err(SlotError::InvalidBet(bet));
        }
        let outcome = self.spin(bet, lines)?;
        wallet.debit(bet * lines as f64);
        wallet.credit(outcome.winnings);
        Ok(outcome)
    }
}
