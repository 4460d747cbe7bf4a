use std::time::Duration;

use log::{debug, info};
use rand::Rng;

use crate::error::{Result, TermrushError};
use crate::evaluator::is_correct;
use crate::figure::GameRound;
use crate::generator::generate_round;
use crate::palette::PALETTE_SIZE;

/// Time penalty charged for each wrong confirm.
pub const PENALTY_PER_MISS: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub duration: Duration,
    /// Upper bound on how long the loop waits for a key before redrawing.
    pub tick: Duration,
    /// How long the summary ignores keys, so a burst of presses at the end of
    /// a session does not skip it.
    pub settle_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_secs(30),
            tick: Duration::from_millis(50),
            settle_delay: Duration::from_secs(2),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<()> {
        if self.duration.is_zero() {
            return Err(TermrushError::InvalidConfig(
                "session duration must be positive".into(),
            ));
        }
        if self.tick.is_zero() {
            return Err(TermrushError::InvalidConfig("tick must be positive".into()));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

/// State of one timed session. `started_at` and every `now` passed in are
/// readings from the same [`crate::runtime::Clock`].
#[derive(Debug, Clone)]
pub struct Session {
    pub selected: usize,
    pub score: u32,
    pub penalty_secs: u32,
    pub round: GameRound,
    pub started_at: Duration,
    pub duration: Duration,
    pub rounds_played: u32,
}

impl Session {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, duration: Duration, now: Duration) -> Self {
        let round = generate_round(rng);
        info!("session started, {}s on the clock", duration.as_secs());
        debug!("first round {round:?}");

        Self {
            selected: 0,
            score: 0,
            penalty_secs: 0,
            round,
            started_at: now,
            duration,
            rounds_played: 0,
        }
    }

    pub fn move_left(&mut self) {
        self.selected = if self.selected == 0 {
            PALETTE_SIZE - 1
        } else {
            self.selected - 1
        };
    }

    pub fn move_right(&mut self) {
        self.selected = (self.selected + 1) % PALETTE_SIZE;
    }

    /// Resolves the current round against the selector and deals a new one.
    /// The selector stays where it is.
    pub fn confirm<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Outcome {
        let outcome = if is_correct(&self.round, self.selected) {
            self.score += 1;
            Outcome::Correct
        } else {
            self.penalty_secs += 1;
            Outcome::Incorrect
        };
        debug!(
            "round {:?}, selected {} -> {:?} (score {}, penalty {}s)",
            self.round, self.selected, outcome, self.score, self.penalty_secs
        );

        self.rounds_played += 1;
        self.round = generate_round(rng);
        outcome
    }

    /// Wall time since the start plus accumulated penalties.
    pub fn elapsed(&self, now: Duration) -> Duration {
        now.saturating_sub(self.started_at) + PENALTY_PER_MISS * self.penalty_secs
    }

    pub fn remaining(&self, now: Duration) -> Duration {
        self.duration.saturating_sub(self.elapsed(now))
    }

    /// Remaining time in whole seconds, rounded up so a fresh session shows
    /// the full duration.
    pub fn remaining_secs(&self, now: Duration) -> u64 {
        let millis = self.remaining(now).as_millis() as u64;
        millis.div_ceil(1000)
    }

    pub fn is_over(&self, now: Duration) -> bool {
        self.elapsed(now) >= self.duration
    }

    pub fn summary(&self, quit_early: bool) -> SessionSummary {
        SessionSummary {
            score: self.score,
            penalty_secs: self.penalty_secs,
            rounds_played: self.rounds_played,
            quit_early,
        }
    }
}

/// What is left of a session once it ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub score: u32,
    pub penalty_secs: u32,
    pub rounds_played: u32,
    pub quit_early: bool,
}

impl SessionSummary {
    pub fn accuracy(&self) -> Option<f64> {
        match self.rounds_played {
            0 => None,
            played => Some((self.score as f64 / played as f64 * 100.0).round()),
        }
    }
}
