//! Roll fixtures. These panic on a rejected roll, which is what a test wants.

use tenpin_scoring::GameScorer;

/// Records `count` rolls of `pins`.
///
/// # Panics
///
/// Panics if any roll is rejected.
pub fn roll_many(game: &mut GameScorer, count: usize, pins: i32) {
    for _ in 0..count {
        game.record_roll(pins).expect("roll_many: roll rejected");
    }
}

/// Records a 5/5 spare.
///
/// # Panics
///
/// Panics if either roll is rejected.
pub fn roll_spare(game: &mut GameScorer) {
    roll_many(game, 2, 5);
}

/// Records a strike.
///
/// # Panics
///
/// Panics if the roll is rejected.
pub fn roll_strike(game: &mut GameScorer) {
    game.record_roll(10).expect("roll_strike: roll rejected");
}

/// Builds a game from a literal roll list.
///
/// # Panics
///
/// Panics if any roll is rejected.
#[must_use]
pub fn game_from(rolls: &[i32]) -> GameScorer {
    let mut game = GameScorer::new();
    for &pins in rolls {
        game.record_roll(pins).expect("game_from: roll rejected");
    }
    game
}
