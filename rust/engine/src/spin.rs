use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::grid::{GridSize, Reel};
use crate::symbols::Symbol;

/// Anything that can fill a column-major window of reels.
///
/// The slot machine only talks to this trait, so tests can hand it fixed
/// reels instead of random ones.
pub trait ReelSource {
    fn spin_reels(&mut self, size: GridSize) -> Vec<Reel>;
}

/// Draw `size.cols` reels of `size.rows` symbols each.
///
/// Every reel starts from its own copy of the full `pool` and draws without
/// replacement: a uniformly random index is picked from what remains and that
/// entry is removed. Reels never share draws, so the same symbol can show up
/// on several reels.
///
/// A reel is cut short if the pool runs out before `size.rows` draws.
pub fn draw_reels<R: Rng + ?Sized>(rng: &mut R, pool: &[Symbol], size: GridSize) -> Vec<Reel> {
    let mut reels = Vec::with_capacity(size.cols);
    for _ in 0..size.cols {
        let mut remaining = pool.to_vec();
        let mut reel = Vec::with_capacity(size.rows);
        for _ in 0..size.rows {
            if remaining.is_empty() {
                break;
            }
            let idx = rng.random_range(0..remaining.len());
            reel.push(remaining.remove(idx));
        }
        reels.push(reel);
    }
    reels
}

/// Random reel source backed by ChaCha20, seeded for reproducible sessions.
#[derive(Debug)]
pub struct Spinner {
    pool: Vec<Symbol>,
    rng: ChaCha20Rng,
}

impl Spinner {
    pub fn new_with_seed(pool: Vec<Symbol>, seed: u64) -> Self {
        Self {
            pool,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl ReelSource for Spinner {
    fn spin_reels(&mut self, size: GridSize) -> Vec<Reel> {
        draw_reels(&mut self.rng, &self.pool, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::SymbolTable;

    #[test]
    fn draw_respects_dimensions() {
        let pool = SymbolTable::classic().pool();
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let reels = draw_reels(&mut rng, &pool, GridSize { rows: 4, cols: 5 });
        assert_eq!(reels.len(), 5);
        assert!(reels.iter().all(|r| r.len() == 4));
    }

    #[test]
    fn whole_pool_is_drawn_when_rows_equal_pool() {
        let pool = vec![Symbol::A, Symbol::B, Symbol::B];
        let mut rng = ChaCha20Rng::seed_from_u64(99);
        let reels = draw_reels(&mut rng, &pool, GridSize { rows: 3, cols: 2 });
        for reel in reels {
            let mut sorted = reel.clone();
            sorted.sort();
            assert_eq!(sorted, pool);
        }
    }

    #[test]
    fn short_pool_cuts_reel() {
        let pool = vec![Symbol::C];
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let reels = draw_reels(&mut rng, &pool, GridSize { rows: 3, cols: 1 });
        assert_eq!(reels, vec![vec![Symbol::C]]);
    }
}
