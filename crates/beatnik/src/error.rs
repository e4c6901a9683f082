//! The engine's only fallible external boundary: construction from a
//! caller-supplied sample rate.

use thiserror::Error;

/// Error constructing an [`crate::Engine`] from untrusted input.
#[derive(Debug, Error, PartialEq)]
pub enum BeatnikError {
    #[error("sample rate must be finite and positive, got {0}")]
    InvalidSampleRate(f32),
}
