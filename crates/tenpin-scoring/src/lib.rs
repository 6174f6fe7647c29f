//! Tenpin Scoring — ten-pin bowling scoring context.
//!
//! Responsible for validating and recording rolls, deciding when a game
//! is over, and computing the score with strike and spare bonuses.

pub mod application;
pub mod domain;

pub use domain::game::{GamePhase, GameScorer};
pub use tenpin_core::error::DomainError;
