//! Raw sample sanitizing: NaN/Inf removal and channel collapse.
//!
//! No resampling and no gain changes happen here.

use crate::buffer::AudioBuffer;
use crate::error::{AnalysisError, Result};

/// Replace every NaN or infinite sample with 0.0, in place.
pub fn sanitize(samples: &mut [f32]) {
    for s in samples.iter_mut() {
        if !s.is_finite() {
            *s = 0.0;
        }
    }
}

/// Average interleaved frames down to one channel.
///
/// A trailing partial frame is dropped. Mono input is returned as-is. Sums
/// run in f64 so large finite samples cannot overflow to infinity.
pub fn downmix(interleaved: &[f32], channels: u16) -> Result<Vec<f32>> {
    let channels = channels as usize;
    match channels {
        0 => Err(AnalysisError::InvalidChannelCount(0)),
        1 => Ok(interleaved.to_vec()),
        _ => Ok(interleaved
            .chunks_exact(channels)
            .map(|frame| {
                let sum: f64 = frame.iter().map(|&s| s as f64).sum();
                (sum / channels as f64) as f32
            })
            .collect()),
    }
}

/// Turn raw decoder output into a mono, finite [`AudioBuffer`].
///
/// Non-finite samples are zeroed before averaging so one bad channel cannot
/// poison the mix.
pub fn normalize(mut interleaved: Vec<f32>, channels: u16, sample_rate: u32) -> Result<AudioBuffer> {
    sanitize(&mut interleaved);
    let mono = if channels == 1 {
        interleaved
    } else {
        downmix(&interleaved, channels)?
    };
    AudioBuffer::new(mono, sample_rate)
}
