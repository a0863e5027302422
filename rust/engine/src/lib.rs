//! # slotline-engine: Slot Machine Core
//!
//! Game rules for a small reel-and-payline slot machine. Everything here is
//! pure computation over an injected symbol table and a reel source; console
//! interaction lives in the CLI crate.
//!
//! ## Core Modules
//!
//! - [`symbols`] - Symbols and the population/multiplier table
//! - [`spin`] - Per-reel draws without replacement, seeded with ChaCha20
//! - [`grid`] - Grid dimensions, row-major grid, column-to-row transpose
//! - [`payout`] - Pay-line matching and winnings
//! - [`machine`] - Spin → transpose → evaluate facade
//! - [`wallet`] - Session balance
//! - [`record`] - Serializable per-round summary
//! - [`errors`] - Error types for engine operations
//!
//! ## Quick Start
//!
//! ```rust
//! use slotline_engine::machine::SlotMachine;
//! use slotline_engine::wallet::Wallet;
//!
//! let mut machine = SlotMachine::classic(7);
//! let mut wallet = Wallet::new(100.0).unwrap();
//!
//! let outcome = machine.play_round(&mut wallet, 10.0, 1).unwrap();
//! println!("{}", outcome.grid);
//! assert_eq!(wallet.balance(), 90.0 + outcome.winnings);
//! ```
//!
//! ## Deterministic Spins
//!
//! Same seed, same reels:
//!
//! ```rust
//! use slotline_engine::grid::GridSize;
//! use slotline_engine::spin::{ReelSource, Spinner};
//! use slotline_engine::symbols::SymbolTable;
//!
//! let pool = SymbolTable::classic().pool();
//! let mut a = Spinner::new_with_seed(pool.clone(), 42);
//! let mut b = Spinner::new_with_seed(pool, 42);
//! assert_eq!(a.spin_reels(GridSize::CLASSIC), b.spin_reels(GridSize::CLASSIC));
//! ```

pub mod errors;
pub mod grid;
pub mod machine;
pub mod payout;
pub mod record;
pub mod spin;
pub mod symbols;
pub mod wallet;
