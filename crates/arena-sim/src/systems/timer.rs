//! Countdown display: remaining match time as `MM:SS`.
//!
//! Read-only with respect to the match. Runs before the round machine so the
//! tick that hits the ceiling still shows `00:00` before updates stop.

use arena_core::config::MatchConfig;
use arena_core::enums::GameMode;
use arena_core::types::format_clock;

use crate::match_state::MatchState;
use crate::sinks::Presenter;

/// Seconds left on the match clock, floored at zero.
pub fn remaining_secs(state: &MatchState, config: &MatchConfig, now_secs: f64) -> f64 {
    (config.max_match_secs - state.elapsed_secs(now_secs)).max(0.0)
}

pub fn run(state: &MatchState, config: &MatchConfig, now_secs: f64, presenter: &mut Presenter) {
    if state.phase.mode() != GameMode::Game || state.time_up {
        return;
    }

    presenter.show_timer(format_clock(remaining_secs(state, config, now_secs)));
}
