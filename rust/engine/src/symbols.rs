use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::SlotError;

/// Reel symbol. `A` is the rarest and best paying, `D` the most common.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Symbol {
    A,
    B,
    C,
    D,
}

impl Symbol {
    pub const ALL: [Symbol; 4] = [Symbol::A, Symbol::B, Symbol::C, Symbol::D];

    pub fn as_str(self) -> &'static str {
        match self {
            Symbol::A => "A",
            Symbol::B => "B",
            Symbol::C => "C",
            Symbol::D => "D",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the symbol table: how many copies go into the draw pool and
/// what a full pay-line of this symbol pays per unit bet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SymbolEntry {
    pub symbol: Symbol,
    pub population: u32,
    pub multiplier: f64,
}

impl SymbolEntry {
    pub const fn new(symbol: Symbol, population: u32, multiplier: f64) -> Self {
        Self {
            symbol,
            population,
            multiplier,
        }
    }
}

const CLASSIC_ENTRIES: [SymbolEntry; 4] = [
    SymbolEntry::new(Symbol::A, 2, 5.0),
    SymbolEntry::new(Symbol::B, 4, 4.0),
    SymbolEntry::new(Symbol::C, 6, 3.0),
    SymbolEntry::new(Symbol::D, 8, 2.0),
];

/// Immutable symbol table shared by the spin engine and the payout evaluator.
///
/// Population and multiplier are stored together per symbol, so a symbol
/// can never have one facet without the other.
///
/// # Examples
///
/// ```
/// use slotline_engine::symbols::{Symbol, SymbolTable};
///
/// let table = SymbolTable::classic();
/// assert_eq!(table.population(Symbol::A), 2);
/// assert_eq!(table.multiplier(Symbol::D), 2.0);
/// assert_eq!(table.pool_size(), 20);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolTable {
    entries: Vec<SymbolEntry>,
}

impl SymbolTable {
    pub fn new(entries: Vec<SymbolEntry>) -> Result<Self, SlotError> {
        if entries.is_empty() {
            return Err(SlotError::EmptySymbolTable);
        }
        for (i, e) in entries.iter().enumerate() {
            if entries[..i].iter().any(|prev| prev.symbol == e.symbol) {
                return Err(SlotError::DuplicateSymbol(e.symbol));
            }
            if e.population == 0 {
                return Err(SlotError::InvalidPopulation {
                    symbol: e.symbol,
                    population: e.population,
                });
            }
            if !e.multiplier.is_finite() || e.multiplier <= 0.0 {
                return Err(SlotError::InvalidMultiplier {
                    symbol: e.symbol,
                    multiplier: e.multiplier,
                });
            }
        }
        Ok(Self { entries })
    }

    /// The fixed table the game ships with: A=2/x5, B=4/x4, C=6/x3, D=8/x2.
    pub fn classic() -> Self {
        Self {
            entries: CLASSIC_ENTRIES.to_vec(),
        }
    }

    pub fn entries(&self) -> &[SymbolEntry] {
        &self.entries
    }

    fn entry(&self, symbol: Symbol) -> Option<&SymbolEntry> {
        self.entries.iter().find(|e| e.symbol == symbol)
    }

    /// Copies of `symbol` in the draw pool, 0 if the table does not list it.
    pub fn population(&self, symbol: Symbol) -> u32 {
        self.entry(symbol).map_or(0, |e| e.population)
    }

    /// Payout factor for a full line of `symbol`, 0.0 if the table does not list it.
    pub fn multiplier(&self, symbol: Symbol) -> f64 {
        self.entry(symbol).map_or(0.0, |e| e.multiplier)
    }

    /// Flat draw pool, each symbol repeated `population` times in table order.
    pub fn pool(&self) -> Vec<Symbol> {
        let mut pool = Vec::with_capacity(self.pool_size());
        for e in &self.entries {
            pool.extend(std::iter::repeat_n(e.symbol, e.population as usize));
        }
        pool
    }

    pub fn pool_size(&self) -> usize {
        self.entries.iter().map(|e| e.population as usize).sum()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_pool_expands_populations_in_order() {
        let pool = SymbolTable::classic().pool();
        assert_eq!(pool.len(), 20);
        assert_eq!(&pool[..2], &[Symbol::A, Symbol::A]);
        assert_eq!(pool[2], Symbol::B);
        assert_eq!(pool[19], Symbol::D);
        assert_eq!(pool.iter().filter(|s| **s == Symbol::C).count(), 6);
    }

    #[test]
    fn new_rejects_duplicates() {
        let r = SymbolTable::new(vec![
            SymbolEntry::new(Symbol::A, 1, 2.0),
            SymbolEntry::new(Symbol::A, 3, 1.0),
        ]);
        assert_eq!(r, Err(SlotError::DuplicateSymbol(Symbol::A)));
    }

    #[test]
    fn new_rejects_zero_population_and_bad_multiplier() {
        assert!(matches!(
            SymbolTable::new(vec![SymbolEntry::new(Symbol::B, 0, 2.0)]),
            Err(SlotError::InvalidPopulation { .. })
        ));
        assert!(matches!(
            SymbolTable::new(vec![SymbolEntry::new(Symbol::B, 1, 0.0)]),
            Err(SlotError::InvalidMultiplier { .. })
        ));
        assert!(matches!(
            SymbolTable::new(vec![SymbolEntry::new(Symbol::B, 1, f64::NAN)]),
            Err(SlotError::InvalidMultiplier { .. })
        ));
        assert_eq!(SymbolTable::new(vec![]), Err(SlotError::EmptySymbolTable));
    }

    #[test]
    fn missing_symbol_has_no_population_or_multiplier() {
        let table = SymbolTable::new(vec![SymbolEntry::new(Symbol::C, 3, 1.5)]).unwrap();
        assert_eq!(table.population(Symbol::A), 0);
        assert_eq!(table.multiplier(Symbol::A), 0.0);
        assert_eq!(table.multiplier(Symbol::C), 1.5);
    }

    #[test]
    fn symbol_display_is_single_letter() {
        let s: Vec<String> = Symbol::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(s, vec!["A", "B", "C", "D"]);
    }
}
