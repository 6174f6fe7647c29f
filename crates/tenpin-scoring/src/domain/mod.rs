//! Domain layer for the scoring context.

pub mod frames;
pub mod game;
