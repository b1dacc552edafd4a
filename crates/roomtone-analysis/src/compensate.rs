//! Exponential-envelope reverberation shortening.
//!
//! The source buffer is only borrowed; every call returns a freshly owned
//! buffer of the same length and sample rate.

use crate::buffer::AudioBuffer;
use crate::error::{AnalysisError, Result};
use crate::reverb::estimate_rt60;

/// Outcome of a compensation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Compensation {
    /// The processed buffer.
    pub buffer: AudioBuffer,
    /// RT60 of the input, in seconds.
    pub current_rt60: f32,
    /// `target / current`. Values `>= 1.0` leave the signal untouched.
    pub decay_factor: f32,
}

impl Compensation {
    /// True if an envelope was applied.
    pub fn applied(&self) -> bool {
        self.decay_factor < 1.0
    }
}

/// Multiply sample `i` by `exp(-i / (sample_rate * decay_factor))`.
pub fn apply_decay_envelope(buffer: &AudioBuffer, decay_factor: f32) -> Result<AudioBuffer> {
    let time_constant = buffer.sample_rate() as f64 * decay_factor as f64;
    let samples = buffer
        .samples()
        .iter()
        .enumerate()
        .map(|(i, &s)| (s as f64 * (-(i as f64) / time_constant).exp()) as f32)
        .collect();
    AudioBuffer::new(samples, buffer.sample_rate())
}

/// Shorten the reverberation of `buffer` toward `target_rt60` seconds.
///
/// Measures the current RT60, derives `decay_factor = target / current`, and
/// applies [`apply_decay_envelope`] when the factor is below one.
///
/// The envelope is never applied for `decay_factor >= 1.0`: when the buffer
/// already decays at least as fast as the target, the result holds an
/// unmodified copy and [`Compensation::applied`] is false. Callers that want
/// the raw envelope at any factor can call [`apply_decay_envelope`] directly.
///
/// Fails with [`AnalysisError::InvalidTargetRt60`] for a non-positive or
/// non-finite target; estimator failures propagate unchanged.
pub fn compensate(buffer: &AudioBuffer, target_rt60: f32) -> Result<Compensation> {
    if !(target_rt60.is_finite() && target_rt60 > 0.0) {
        return Err(AnalysisError::InvalidTargetRt60(target_rt60));
    }

    let current_rt60 = estimate_rt60(buffer)?.seconds;
    let decay_factor = target_rt60 / current_rt60;

    #[cfg(feature = "tracing")]
    tracing::debug!(current_rt60, target_rt60, decay_factor, "compensating");

    let buffer = if decay_factor < 1.0 {
        apply_decay_envelope(buffer, decay_factor)?
    } else {
        buffer.clone()
    };

    Ok(Compensation {
        buffer,
        current_rt60,
        decay_factor,
    })
}
