//! Mono audio buffer and its summary info.

use serde::Serialize;

use crate::error::{AnalysisError, Result};

/// A finite, mono sample buffer with its sample rate.
///
/// Construction checks the invariants the rest of the engine relies on:
/// a non-zero sample rate and no NaN/Inf samples. Use
/// [`normalize`](crate::normalize::normalize) to get here from raw decoder
/// output.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    samples: Vec<f32>,
    sample_rate: u32,
}

/// Basic facts about a buffer, as shown to the user after loading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AudioInfo {
    /// Duration in seconds (`num_samples / sample_rate`).
    pub duration_secs: f64,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of mono samples.
    pub num_samples: usize,
}

impl AudioBuffer {
    /// Wrap already-sanitized mono samples.
    ///
    /// Fails with [`AnalysisError::InvalidSampleRate`] for a zero rate and
    /// [`AnalysisError::NonFiniteSample`] if any sample is NaN or infinite.
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Result<Self> {
        if sample_rate == 0 {
            return Err(AnalysisError::InvalidSampleRate(sample_rate));
        }
        if let Some(index) = samples.iter().position(|s| !s.is_finite()) {
            return Err(AnalysisError::NonFiniteSample { index });
        }
        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// The samples, in time order.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Consume the buffer and return its samples.
    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Summary of duration, rate and length.
    pub fn info(&self) -> AudioInfo {
        AudioInfo {
            duration_secs: self.duration_secs(),
            sample_rate: self.sample_rate,
            num_samples: self.samples.len(),
        }
    }
}
