//! Positional frame walk shared by completion and scoring.
//!
//! Frames are never stored. Every helper takes the index of a frame's first
//! roll and looks ahead with bounds-checked access, so a missing roll shows up
//! as `false` or `None` instead of an out-of-range read.

use tenpin_core::pins::Pins;

/// Number of frames in a game.
pub const FRAMES_PER_GAME: usize = 10;

const ALL_PINS: u32 = 10;

fn pins_at(rolls: &[Pins], index: usize) -> Option<u32> {
    rolls.get(index).copied().map(u32::from)
}

/// Returns `true` if the roll at `index` is a strike.
#[must_use]
pub fn is_strike(rolls: &[Pins], index: usize) -> bool {
    rolls.get(index).is_some_and(|pins| pins.is_all())
}

/// Returns `true` if the two rolls starting at `index` form a spare.
#[must_use]
pub fn is_spare(rolls: &[Pins], index: usize) -> bool {
    frame_sum(rolls, index) == Some(ALL_PINS)
}

/// Sum of the two rolls starting at `index`.
#[must_use]
pub fn frame_sum(rolls: &[Pins], index: usize) -> Option<u32> {
    Some(pins_at(rolls, index)? + pins_at(rolls, index + 1)?)
}

/// Bonus for a strike at `index`: the next two individual rolls, wherever
/// they fall.
#[must_use]
pub fn strike_bonus(rolls: &[Pins], index: usize) -> Option<u32> {
    Some(pins_at(rolls, index + 1)? + pins_at(rolls, index + 2)?)
}

/// Bonus for a spare starting at `index`: the single roll after the frame.
#[must_use]
pub fn spare_bonus(rolls: &[Pins], index: usize) -> Option<u32> {
    pins_at(rolls, index + 2)
}

/// Walks frames 1 through 9 and returns the index of the tenth frame's first
/// roll, or `None` if one of those frames has no rolls at all.
///
/// A non-strike frame always advances two rolls, so when frame 9 is only
/// partly recorded the returned index lies past the end of `rolls`. Frame
/// sums are not validated here.
#[must_use]
pub fn tenth_frame_start(rolls: &[Pins]) -> Option<usize> {
    let mut index = 0;
    for _ in 1..FRAMES_PER_GAME {
        if index >= rolls.len() {
            return None;
        }
        index += if is_strike(rolls, index) { 1 } else { 2 };
    }
    Some(index)
}

/// Returns `true` once the tenth frame has every roll it is entitled to.
#[must_use]
pub fn is_game_complete(rolls: &[Pins]) -> bool {
    let Some(index) = tenth_frame_start(rolls) else {
        return false;
    };
    if index >= rolls.len() {
        return false;
    }
    // A strike or spare in the tenth earns the third ball.
    if is_strike(rolls, index) || is_spare(rolls, index) {
        rolls.len() >= index + 3
    } else {
        rolls.len() >= index + 2
    }
}

/// Scores one frame starting at `index` and returns `(points, next_index)`.
///
/// Returns `None` if any roll the frame needs, bonus included, is missing.
#[must_use]
pub fn score_frame(rolls: &[Pins], index: usize) -> Option<(u32, usize)> {
    if is_strike(rolls, index) {
        Some((ALL_PINS + strike_bonus(rolls, index)?, index + 1))
    } else if is_spare(rolls, index) {
        Some((ALL_PINS + spare_bonus(rolls, index)?, index + 2))
    } else {
        Some((frame_sum(rolls, index)?, index + 2))
    }
}
