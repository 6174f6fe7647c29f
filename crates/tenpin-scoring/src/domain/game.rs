//! The `GameScorer` for a single game.

use tenpin_core::error::DomainError;
use tenpin_core::pins::Pins;

use super::frames::{self, FRAMES_PER_GAME};

/// Game phase, derived from the recorded rolls on every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Fewer than ten frames are resolved.
    InProgress,
    /// All ten frames are resolved; no further rolls are accepted.
    Complete,
}

impl GamePhase {
    /// Returns the snake-case name of this phase.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::Complete => "complete",
        }
    }
}

/// Records the rolls of one game and scores them.
///
/// The roll sequence only ever grows. Completion and score are recomputed
/// from it on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameScorer {
    rolls: Vec<Pins>,
}

impl GameScorer {
    /// Creates a game with no rolls.
    #[must_use]
    pub fn new() -> Self {
        Self { rolls: Vec::new() }
    }

    /// Records a roll of `pins`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRollValue` if `pins` is outside `[0, 10]`,
    /// checked first, then `DomainError::GameAlreadyComplete` if the game has
    /// already finished. The roll sequence is untouched on error.
    pub fn record_roll(&mut self, pins: i32) -> Result<(), DomainError> {
        let pins = Pins::new(pins)?;
        if self.is_complete() {
            return Err(DomainError::GameAlreadyComplete);
        }

        self.rolls.push(pins);
        tracing::debug!(pins = pins.get(), roll = self.rolls.len(), "roll recorded");
        if self.is_complete() {
            tracing::debug!(rolls = self.rolls.len(), "game complete");
        }
        Ok(())
    }

    /// Returns `true` once the tenth frame has all the rolls it needs.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        frames::is_game_complete(&self.rolls)
    }

    /// Computes the total score across all ten frames.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::IncompleteGameScoring` if the game is not yet
    /// complete.
    pub fn total_score(&self) -> Result<u32, DomainError> {
        if !self.is_complete() {
            return Err(DomainError::IncompleteGameScoring);
        }

        let mut total = 0;
        let mut index = 0;
        for frame in 1..=FRAMES_PER_GAME {
            let (points, next) = frames::score_frame(&self.rolls, index)
                .ok_or(DomainError::IncompleteGameScoring)?;
            tracing::trace!(frame, points, "frame scored");
            total += points;
            index = next;
        }
        Ok(total)
    }

    /// Returns the rolls in the order they were recorded.
    #[must_use]
    pub fn rolls(&self) -> &[Pins] {
        &self.rolls
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if self.is_complete() {
            GamePhase::Complete
        } else {
            GamePhase::InProgress
        }
    }

    /// Returns the current phase as a string.
    #[must_use]
    pub fn phase_name(&self) -> &'static str {
        self.phase().name()
    }
}
