//! Tenpin Core — shared domain abstractions.
//!
//! This crate defines the error taxonomy and the validated roll value that
//! the scoring context depends on. It contains no game logic.

pub mod error;
pub mod pins;
