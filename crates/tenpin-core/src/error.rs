//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A roll reported a pin count outside `[0, 10]`.
    #[error("invalid roll value: {0} (must be between 0 and 10)")]
    InvalidRollValue(i32),

    /// A roll was recorded after the tenth frame was resolved.
    #[error("game already complete")]
    GameAlreadyComplete,

    /// A score was requested before all ten frames could be resolved.
    #[error("cannot score an incomplete game")]
    IncompleteGameScoring,
}
