use serde::{Deserialize, Serialize};

use crate::errors::SlotError;

/// The player's deposit balance for one session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    balance: f64,
}

impl Wallet {
    /// Open a wallet with an initial deposit, which must be finite and > 0.
    pub fn new(deposit: f64) -> Result<Self, SlotError> {
        if !deposit.is_finite() || deposit <= 0.0 {
            return Err(SlotError::InvalidDeposit(deposit));
        }
        Ok(Self { balance: deposit })
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Largest bet per line the balance covers for `lines` lines.
    pub fn max_bet_per_line(&self, lines: usize) -> f64 {
        if lines == 0 {
            return 0.0;
        }
        self.balance / lines as f64
    }

    /// Take the stake for a round. The validators cap it at the balance, but
    /// float rounding on `bet * lines` may leave a tiny negative remainder,
    /// which `is_depleted` then treats as broke.
    pub fn debit(&mut self, amount: f64) {
        self.balance -= amount;
    }

    pub fn credit(&mut self, amount: f64) {
        self.balance += amount;
    }

    pub fn is_depleted(&self) -> bool {
        self.balance <= 0.0
    }
}
