//! Shared test fixtures and utilities for the ten-pin bowling scorer.

mod logging;
mod rolls;

pub use logging::init_test_logging;
pub use rolls::{game_from, roll_many, roll_spare, roll_strike};
