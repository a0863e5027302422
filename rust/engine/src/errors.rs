use thiserror::Error;

use crate::symbols::Symbol;

#[derive(Debug, Error, PartialEq)]
pub enum SlotError {
    #[error("Symbol table must contain at least one symbol")]
    EmptySymbolTable,
    #[error("Symbol {0} appears more than once in the symbol table")]
    DuplicateSymbol(Symbol),
    #[error("Symbol {symbol} has population {population}, must be > 0")]
    InvalidPopulation { symbol: Symbol, population: u32 },
    #[error("Symbol {symbol} has multiplier {multiplier}, must be finite and > 0")]
    InvalidMultiplier { symbol: Symbol, multiplier: f64 },
    #[error("Grid size {rows}x{cols} is invalid, both dimensions must be >= 1")]
    InvalidGridSize { rows: usize, cols: usize },
    #[error("Draw pool holds {pool} symbols but each reel needs {rows}")]
    PoolTooSmall { pool: usize, rows: usize },
    #[error("Invalid deposit amount: {0}")]
    InvalidDeposit(f64),
    #[error("Invalid number of lines: {lines} (expected 1..={max})")]
    InvalidLines { lines: usize, max: usize },
    #[error("Invalid bet amount: {0}")]
    InvalidBet(f64),
}
