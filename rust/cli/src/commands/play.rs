//! # Play Command
//!
//! One interactive slot machine session.
//!
//! The session is a small state machine:
//!
//! ```text
//! AwaitingDeposit -> RoundStart -> RoundResolved -> RoundStart | Terminated
//! ```
//!
//! - **AwaitingDeposit**: ask for the deposit once and open the wallet
//! - **RoundStart**: show the balance, ask for lines and bet, spin, show the
//!   grid and the winnings
//! - **RoundResolved**: end the session if the wallet is empty, otherwise ask
//!   whether to play again
//! - **Terminated**: print the final balance

use crate::error::CliError;
use crate::formatters::{balance_line, final_balance_line, winnings_line};
use crate::prompt::{prompt_bet, prompt_deposit, prompt_lines, prompt_play_again};
use slotline_engine::machine::SlotMachine;
use slotline_engine::record::RoundRecord;
use slotline_engine::wallet::Wallet;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

pub const OUT_OF_MONEY: &str = "You ran out of money!";

#[derive(Debug, Clone, Copy, PartialEq)]
enum SessionState {
    AwaitingDeposit,
    RoundStart(Wallet),
    RoundResolved(Wallet),
    Terminated(Wallet),
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSummary {
    pub rounds: u32,
    pub final_balance: f64,
    /// `true` when the session ended because the balance hit zero
    pub ran_out: bool,
}

/// Handle the play command: run one session until the player stops or goes broke.
///
/// # Arguments
///
/// * `machine` - Slot machine to spin (symbol table and reel source already injected)
/// * `stdin` - Input stream for the player's answers
/// * `out` - Output stream for prompts, grids and results
///
/// # Returns
///
/// * `Ok(SessionSummary)` once `Final Balance` has been printed
/// * `Err(CliError::Interrupted)` if the input closes while a value is required
/// * `Err(CliError::Io)` on write failure
///
/// # Examples
///
/// ```
/// use slotline_cli::commands::handle_play_command;
/// use slotline_engine::machine::SlotMachine;
/// use std::io::Cursor;
///
/// let mut machine = SlotMachine::classic(42);
/// let mut input = Cursor::new("100\n1\n10\nn\n");
/// let mut out = Vec::new();
///
/// let summary = handle_play_command(&mut machine, &mut input, &mut out).unwrap();
/// assert_eq!(summary.rounds, 1);
/// assert!(String::from_utf8(out).unwrap().contains("Final Balance $"));
/// ```
pub fn handle_play_command(
    machine: &mut SlotMachine,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<SessionSummary, CliError> {
    let mut state = SessionState::AwaitingDeposit;
    let mut rounds = 0u32;
    let mut ran_out = false;

    loop {
        state = match state {
            SessionState::AwaitingDeposit => {
                let deposit = prompt_deposit(stdin, out)?;
                info!(deposit, "session started");
                SessionState::RoundStart(Wallet::new(deposit)?)
            }
            SessionState::RoundStart(mut wallet) => {
                rounds += 1;
                play_round(machine, &mut wallet, rounds, stdin, out)?;
                SessionState::RoundResolved(wallet)
            }
            SessionState::RoundResolved(wallet) => {
                if wallet.is_depleted() {
                    writeln!(out, "{}", OUT_OF_MONEY)?;
                    ran_out = true;
                    SessionState::Terminated(wallet)
                } else if prompt_play_again(stdin, out)? {
                    SessionState::RoundStart(wallet)
                } else {
                    SessionState::Terminated(wallet)
                }
            }
            SessionState::Terminated(wallet) => {
                writeln!(out, "{}", final_balance_line(wallet.balance()))?;
                info!(rounds, final_balance = wallet.balance(), ran_out, "session ended");
                return Ok(SessionSummary {
                    rounds,
                    final_balance: wallet.balance(),
                    ran_out,
                });
            }
        };
    }
}

/// One round: stake, spin, show, pay.
fn play_round(
    machine: &mut SlotMachine,
    wallet: &mut Wallet,
    round: u32,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    writeln!(out, "{}", balance_line(wallet.balance()))?;
    let lines = prompt_lines(stdin, out, machine.max_lines())?;
    let bet = prompt_bet(stdin, out, wallet.balance(), lines)?;

    let outcome = machine.play_round(wallet, bet, lines)?;
    writeln!(out, "{}", outcome.grid)?;
    writeln!(out, "{}", winnings_line(outcome.winnings))?;

    let mut record = RoundRecord {
        round,
        lines,
        bet_per_line: bet,
        total_bet: bet * lines as f64,
        grid: outcome.grid.into_rows(),
        line_wins: outcome.line_wins,
        winnings: outcome.winnings,
        balance_after: wallet.balance(),
        ts: None,
    };
    record.stamp();
    match record.to_json_line() {
        Ok(line) => debug!(round, net = record.net(), record = %line, "round resolved"),
        Err(e) => warn!(round, error = %e, "failed to serialize round record"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::TestLogSubscriber;
    use slotline_engine::grid::{GridSize, Reel};
    use slotline_engine::spin::ReelSource;
    use slotline_engine::symbols::Symbol::{A, B, C, D};
    use slotline_engine::symbols::SymbolTable;
    use std::io::Cursor;
    use tracing::Level;
    use tracing_subscriber::Registry;
    use tracing_subscriber::layer::SubscriberExt;

    struct Fixed(Vec<Reel>);

    impl ReelSource for Fixed {
        fn spin_reels(&mut self, _size: GridSize) -> Vec<Reel> {
            self.0.clone()
        }
    }

    fn machine_with(reels: Vec<Reel>) -> SlotMachine {
        SlotMachine::with_source(
            SymbolTable::classic(),
            GridSize::CLASSIC,
            Box::new(Fixed(reels)),
        )
        .unwrap()
    }

    fn top_line_aaa() -> Vec<Reel> {
        vec![vec![A, B, C], vec![A, C, D], vec![A, D, B]]
    }

    fn no_wins() -> Vec<Reel> {
        vec![vec![A, B, C], vec![B, C, D], vec![C, D, A]]
    }

    fn play(machine: &mut SlotMachine, input: &str) -> (Result<SessionSummary, CliError>, String) {
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        let mut out = Vec::new();
        let r = handle_play_command(machine, &mut stdin, &mut out);
        (r, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_winning_top_line_session() {
        let mut m = machine_with(top_line_aaa());
        let (r, out) = play(&mut m, "100\n1\n10\nn\n");
        let summary = r.unwrap();
        assert_eq!(summary.final_balance, 140.0);
        assert_eq!(summary.rounds, 1);
        assert!(!summary.ran_out);
        assert!(out.contains("Current Balance $100"));
        assert!(out.contains("A | A | A\nB | C | D\nC | D | B\n"));
        assert!(out.contains("You won, $50"));
        assert!(out.ends_with("Final Balance $140\n"));
    }

    #[test]
    fn test_bet_over_split_balance_is_reprompted() {
        let mut m = machine_with(no_wins());
        let (r, out) = play(&mut m, "50\n3\n20\n10\nn\n");
        assert_eq!(r.unwrap().final_balance, 20.0);
        assert_eq!(out.matches("Invalid bet, Try again!").count(), 1);
        assert_eq!(out.matches("Enter your bet amount per line : ").count(), 2);
    }

    #[test]
    fn test_all_in_loss_ends_without_replay_prompt() {
        let mut m = machine_with(no_wins());
        let (r, out) = play(&mut m, "5\n1\n5\n");
        let summary = r.unwrap();
        assert!(summary.ran_out);
        assert_eq!(summary.final_balance, 0.0);
        assert!(out.contains("You won, $0\nYou ran out of money!\nFinal Balance $0\n"));
        assert!(!out.contains("play again"));
    }

    #[test]
    fn test_all_in_win_continues() {
        let mut m = machine_with(top_line_aaa());
        let (r, out) = play(&mut m, "5\n1\n5\nn\n");
        let summary = r.unwrap();
        assert!(!summary.ran_out);
        assert_eq!(summary.final_balance, 25.0);
        assert!(out.contains("Do you want to play again(y/n)? "));
    }

    #[test]
    fn test_multiple_rounds_until_decline() {
        let mut m = machine_with(no_wins());
        let (r, out) = play(&mut m, "30\n1\n10\ny\n2\n5\ny\n1\n1\nq\n");
        let summary = r.unwrap();
        assert_eq!(summary.rounds, 3);
        assert_eq!(summary.final_balance, 9.0);
        assert!(out.contains("Current Balance $20"));
        assert!(out.contains("Current Balance $10"));
    }

    #[test]
    fn test_unstaked_winning_line_does_not_pay() {
        // Row 2 matches but only row 0 is staked
        let mut m = machine_with(vec![vec![A, B, D], vec![B, C, D], vec![C, A, D]]);
        let (r, out) = play(&mut m, "10\n1\n1\nn\n");
        assert_eq!(r.unwrap().final_balance, 9.0);
        assert!(out.contains("You won, $0"));
    }

    #[test]
    fn test_first_balance_line_shows_parsed_deposit() {
        let mut m = machine_with(no_wins());
        let (r, out) = play(&mut m, "100.00\n1\n1\nn\n");
        assert!(r.is_ok());
        assert!(out.contains("Current Balance $100\n"));
        assert!(!out.contains("$100.00"));
    }

    #[test]
    fn test_eof_during_deposit_is_interrupted() {
        let mut m = machine_with(no_wins());
        let (r, out) = play(&mut m, "");
        assert!(matches!(r, Err(CliError::Interrupted(_))));
        assert!(out.starts_with("Enter a deposit amount: "));
    }

    #[test]
    fn test_eof_at_replay_prompt_terminates() {
        let mut m = machine_with(no_wins());
        let (r, out) = play(&mut m, "10\n1\n1\n");
        assert_eq!(r.unwrap().final_balance, 9.0);
        assert!(out.ends_with("Final Balance $9\n"));
    }

    #[test]
    fn test_round_is_logged_as_json() {
        let subscriber = TestLogSubscriber::new();
        let registry = Registry::default().with(subscriber.clone().into_layer::<Registry>());

        tracing::subscriber::with_default(registry, || {
            let mut m = machine_with(top_line_aaa());
            let (r, _) = play(&mut m, "100\n1\n10\nn\n");
            assert!(r.is_ok());
        });

        let entries = subscriber.entries();
        let round = entries
            .iter()
            .find(|e| e.message.contains("round resolved"))
            .expect("round event");
        assert_eq!(round.level, Level::DEBUG);
        assert_eq!(round.target, "slotline_cli::commands::play");
        assert!(round.fields.iter().any(|(k, v)| k == "net" && v == "40.0"));
        let record = &round
            .fields
            .iter()
            .find(|(k, _)| k == "record")
            .expect("record field")
            .1;
        let parsed: RoundRecord = serde_json::from_str(record).unwrap();
        assert_eq!(parsed.winnings, 50.0);
        assert_eq!(parsed.balance_after, 140.0);
        assert!(entries.iter().any(|e| e.message.contains("session ended")));
    }
}
