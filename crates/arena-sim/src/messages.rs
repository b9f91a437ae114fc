//! Text composed for the message display.

use arena_core::constants::{DRAW_MESSAGE, TALLY_SEPARATOR};
use arena_core::types::format_clock;

/// One line of the per-round standings.
#[derive(Debug, Clone, PartialEq)]
pub struct Tally {
    pub colored_name: String,
    pub wins: u32,
}

pub fn round_banner(round: u32) -> String {
    format!("ROUND {}", round)
}

/// End-of-round message.
///
/// `round_winner` and `match_winner` index into `tallies` (slot order).
/// A match winner replaces the whole message with the final result and
/// the total match time.
pub fn end_message(
    tallies: &[Tally],
    round_winner: Option<usize>,
    match_winner: Option<usize>,
    elapsed_secs: f64,
) -> String {
    if let Some(winner) = match_winner.and_then(|slot| tallies.get(slot)) {
        return game_over_message(&winner.colored_name, elapsed_secs);
    }

    let mut message = match round_winner.and_then(|slot| tallies.get(slot)) {
        Some(winner) => format!("{} WINS THE ROUND!", winner.colored_name),
        None => DRAW_MESSAGE.to_string(),
    };

    message.push_str(TALLY_SEPARATOR);

    for tally in tallies {
        message.push_str(&format!("{}: {} WINS\n", tally.colored_name, tally.wins));
    }

    message
}

/// Final message for the match winner.
pub fn game_over_message(colored_name: &str, elapsed_secs: f64) -> String {
    format!(
        "{} WINS THE GAME!\nTime: {}",
        colored_name,
        format_clock(elapsed_secs)
    )
}
