//! Error types for analysis operations.

use thiserror::Error;

/// Errors produced by the analysis engine.
///
/// Every variant is a deterministic function of the input: retrying the same
/// call with the same buffer fails the same way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// Spectral or resonance operation on a zero-length buffer.
    #[error("buffer is empty")]
    EmptyBuffer,

    /// Decay estimation on a buffer with zero total energy.
    #[error("buffer is silent (zero energy)")]
    SilentBuffer,

    /// The decay curve never fell to the threshold within the buffer.
    #[error("decay curve never reaches {threshold_db} dB")]
    NoDecayThresholdReached {
        /// The threshold that was searched for, in dB relative to peak energy.
        threshold_db: f64,
    },

    /// Compensator target RT60 is zero, negative, or not finite.
    #[error("invalid target RT60: {0} s (must be > 0)")]
    InvalidTargetRt60(f32),

    /// Sample rate of zero.
    #[error("invalid sample rate: {0} Hz")]
    InvalidSampleRate(u32),

    /// Interleaved input declared zero channels.
    #[error("invalid channel count: {0}")]
    InvalidChannelCount(u16),

    /// A NaN or infinite sample was handed to a constructor that requires
    /// sanitized input.
    #[error("non-finite sample at index {index}")]
    NonFiniteSample {
        /// Position of the first offending sample.
        index: usize,
    },
}

/// Convenience result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;
