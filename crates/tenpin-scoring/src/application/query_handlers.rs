//! Query handlers for the scoring context.
//!
//! This module builds read-only view DTOs from a `GameScorer`.

use serde::Serialize;
use tenpin_core::pins::Pins;

use crate::domain::game::GameScorer;

/// Read-only snapshot of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// Rolls in recorded order.
    pub rolls: Vec<Pins>,
    /// Current phase as a string.
    pub phase: String,
    /// Whether all ten frames are resolved.
    pub complete: bool,
    /// Final score, present only once the game is complete.
    pub total_score: Option<u32>,
}

/// Builds a `GameView` for `game`.
#[must_use]
pub fn get_game_view(game: &GameScorer) -> GameView {
    GameView {
        rolls: game.rolls().to_vec(),
        phase: game.phase_name().to_owned(),
        complete: game.is_complete(),
        total_score: game.total_score().ok(),
    }
}
