//! Reverberation time from the Schroeder backward-integrated decay curve.

use serde::Serialize;

use crate::buffer::AudioBuffer;
use crate::error::{AnalysisError, Result};

/// Decay level that defines RT60, in dB relative to peak energy.
pub const RT60_THRESHOLD_DB: f64 = -60.0;

/// Floor applied to dB values before regression so zero-energy tails stay
/// finite.
const REGRESSION_FLOOR_DB: f64 = -200.0;

/// RT60 crossing time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rt60Estimate {
    /// Time in seconds at which the decay curve first reaches -60 dB.
    pub seconds: f32,
    /// Sample index of that crossing.
    pub crossing_index: usize,
}

/// Regression-based decay times over standard dB ranges.
///
/// Each field is `None` when the curve never spans its range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DecayMetrics {
    /// Early decay time, 0 to -10 dB.
    pub edt_seconds: Option<f32>,
    /// -5 to -25 dB.
    pub t20_seconds: Option<f32>,
    /// -5 to -35 dB.
    pub t30_seconds: Option<f32>,
}

/// Schroeder backward integration: `energy[i] = sum of samples[j]^2, j >= i`.
///
/// The result is non-increasing in `i`. Accumulates in f64.
pub fn energy_decay_curve(samples: &[f32]) -> Vec<f64> {
    let mut edc = vec![0.0f64; samples.len()];
    let mut sum = 0.0f64;
    for (e, &s) in edc.iter_mut().zip(samples).rev() {
        let s = s as f64;
        sum += s * s;
        *e = sum;
    }
    edc
}

/// Decay curve in dB relative to its maximum.
///
/// Samples after the last non-zero sample come out as negative infinity.
pub fn decay_curve_db(samples: &[f32]) -> Result<Vec<f64>> {
    if samples.is_empty() {
        return Err(AnalysisError::EmptyBuffer);
    }

    let edc = energy_decay_curve(samples);
    let max_energy = edc.iter().copied().fold(0.0f64, f64::max);
    if max_energy <= 0.0 {
        return Err(AnalysisError::SilentBuffer);
    }

    Ok(edc
        .iter()
        .map(|&e| 10.0 * (e / max_energy).log10())
        .collect())
}

/// Estimate RT60 as the earliest time the decay curve reaches -60 dB.
///
/// Fails with [`AnalysisError::SilentBuffer`] on a zero-energy buffer and
/// [`AnalysisError::NoDecayThresholdReached`] if the curve never gets there.
pub fn estimate_rt60(buffer: &AudioBuffer) -> Result<Rt60Estimate> {
    let curve = decay_curve_db(buffer.samples())?;

    let crossing_index = curve
        .iter()
        .position(|&db| db <= RT60_THRESHOLD_DB)
        .ok_or(AnalysisError::NoDecayThresholdReached {
            threshold_db: RT60_THRESHOLD_DB,
        })?;

    let seconds = (crossing_index as f64 / buffer.sample_rate() as f64) as f32;

    #[cfg(feature = "tracing")]
    tracing::debug!(crossing_index, seconds, "rt60 estimated");

    Ok(Rt60Estimate {
        seconds,
        crossing_index,
    })
}

/// EDT, T20 and T30 from linear fits over the dB decay curve.
pub fn decay_metrics(buffer: &AudioBuffer) -> Result<DecayMetrics> {
    let curve = decay_curve_db(buffer.samples())?;
    let rate = buffer.sample_rate() as f64;

    Ok(DecayMetrics {
        edt_seconds: find_decay_time(&curve, 0.0, -10.0, rate),
        t20_seconds: find_decay_time(&curve, -5.0, -25.0, rate),
        t30_seconds: find_decay_time(&curve, -5.0, -35.0, rate),
    })
}

/// Time to fall from `start_db` to `end_db`, from the fitted slope.
fn find_decay_time(curve: &[f64], start_db: f64, end_db: f64, sample_rate: f64) -> Option<f32> {
    let s = curve.iter().position(|&e| e <= start_db)?;
    let e = curve.iter().position(|&e| e <= end_db)?;
    if e <= s {
        return None;
    }

    let mut sum_x = 0.0f64;
    let mut sum_y = 0.0f64;
    let mut sum_xy = 0.0f64;
    let mut sum_xx = 0.0f64;

    for (i, &val) in curve[s..=e].iter().enumerate() {
        let x = i as f64;
        let y = val.max(REGRESSION_FLOOR_DB);
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_xx += x * x;
    }

    let n = (e - s + 1) as f64;
    let slope = (n * sum_xy - sum_x * sum_y) / (n * sum_xx - sum_x * sum_x);

    // dB per sample; must be falling
    if slope < 0.0 {
        let samples = (start_db - end_db) / -slope;
        Some((samples / sample_rate) as f32)
    } else {
        None
    }
}
