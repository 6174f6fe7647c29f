//! Command handlers for the scoring context.
//!
//! These functions drive a `GameScorer` from raw pin counts. Nothing is
//! persisted; a game is rebuilt by replaying its rolls in order.

use tenpin_core::error::DomainError;
use tracing::instrument;

use crate::domain::game::{GamePhase, GameScorer};

/// Reconstitutes a `GameScorer` by recording each roll in order.
///
/// # Errors
///
/// Returns the first `DomainError` raised by `record_roll`; later rolls are
/// not looked at.
#[instrument(skip(rolls), fields(roll_count = rolls.len()))]
pub fn replay(rolls: &[i32]) -> Result<GameScorer, DomainError> {
    let mut game = GameScorer::new();
    for (position, &pins) in rolls.iter().enumerate() {
        game.record_roll(pins).inspect_err(|e| {
            tracing::warn!(position, pins, error = %e, "replay rejected roll");
        })?;
    }
    Ok(game)
}

/// Records one roll and returns the phase the game is in afterward.
///
/// # Errors
///
/// Returns `DomainError::InvalidRollValue` or `DomainError::GameAlreadyComplete`
/// as `GameScorer::record_roll` does.
#[instrument(skip(game), fields(roll = game.rolls().len() + 1))]
pub fn handle_record_roll(game: &mut GameScorer, pins: i32) -> Result<GamePhase, DomainError> {
    game.record_roll(pins)?;
    Ok(game.phase())
}

#[cfg(test)]
mod tests {
    use tenpin_core::error::DomainError;

    use crate::application::command_handlers::{handle_record_roll, replay};
    use crate::domain::game::{GamePhase, GameScorer};

    #[test]
    fn test_replay_rebuilds_game() {
        let mut rolls = vec![10, 3, 4];
        rolls.extend([0; 16]);

        let game = replay(&rolls).unwrap();

        assert!(game.is_complete());
        assert_eq!(game.total_score(), Ok(24));
    }

    #[test]
    fn test_replay_empty_is_new_game() {
        let game = replay(&[]).unwrap();
        assert_eq!(game, GameScorer::new());
    }

    #[test]
    fn test_replay_stops_at_invalid_roll() {
        let result = replay(&[3, 4, 12, 5]);

        match result.unwrap_err() {
            DomainError::InvalidRollValue(value) => assert_eq!(value, 12),
            other => panic!("expected InvalidRollValue, got {other:?}"),
        }
    }

    #[test]
    fn test_replay_rejects_rolls_past_end_of_game() {
        let rolls = [10; 13];
        assert_eq!(replay(&rolls), Err(DomainError::GameAlreadyComplete));
    }

    #[test]
    fn test_handle_record_roll_reports_phase() {
        let mut game = replay(&[0; 19]).unwrap();

        assert_eq!(handle_record_roll(&mut game, 0), Ok(GamePhase::Complete));
        assert_eq!(
            handle_record_roll(&mut game, 0),
            Err(DomainError::GameAlreadyComplete)
        );
    }

    #[test]
    fn test_handle_record_roll_in_progress() {
        let mut game = GameScorer::new();
        assert_eq!(handle_record_roll(&mut game, 7), Ok(GamePhase::InProgress));
        assert_eq!(game.rolls().len(), 1);
    }
}
