use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::payout::LineWin;
use crate::symbols::Symbol;

/// Summary of one resolved round, serialized as a single JSON line for the
/// session log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round number within the session, starting at 1
    pub round: u32,
    /// Pay-lines staked
    pub lines: usize,
    pub bet_per_line: f64,
    /// `bet_per_line × lines`, debited before the spin
    pub total_bet: f64,
    /// Row-major grid that was shown to the player
    pub grid: Vec<Vec<Symbol>>,
    #[serde(default)]
    pub line_wins: Vec<LineWin>,
    pub winnings: f64,
    /// Balance after the winnings were credited
    pub balance_after: f64,
    /// RFC3339 timestamp, filled in by `stamp` if absent
    #[serde(default)]
    pub ts: Option<String>,
}

impl RoundRecord {
    pub fn net(&self) -> f64 {
        self.winnings - self.total_bet
    }

    pub fn stamp(&mut self) {
        if self.ts.is_none() {
            self.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
    }

    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::Symbol::{A, B, C};

    fn sample() -> RoundRecord {
        RoundRecord {
            round: 1,
            lines: 1,
            bet_per_line: 10.0,
            total_bet: 10.0,
            grid: vec![vec![A, A, A], vec![B, C, A], vec![C, C, B]],
            line_wins: vec![LineWin {
                line: 0,
                symbol: A,
                payout: 50.0,
            }],
            winnings: 50.0,
            balance_after: 140.0,
            ts: None,
        }
    }

    #[test]
    fn stamp_sets_timestamp_once() {
        let mut rec = sample();
        rec.stamp();
        let ts = rec.ts.clone().expect("timestamp");
        assert!(ts.ends_with('Z'));
        rec.stamp();
        assert_eq!(rec.ts, Some(ts));
    }

    #[test]
    fn json_line_has_symbols_as_letters() {
        let line = sample().to_json_line().unwrap();
        assert!(!line.contains('\n'));
        assert!(line.contains(r#""grid":[["A","A","A"]"#));
        let back: RoundRecord = serde_json::from_str(&line).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn net_is_winnings_minus_stake() {
        assert_eq!(sample().net(), 40.0);
    }
}
