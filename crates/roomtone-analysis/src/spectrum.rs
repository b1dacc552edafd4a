//! Full-length FFT magnitude spectrum with its bin frequency axis.

use rustfft::{FftPlanner, num_complex::Complex};

use crate::buffer::AudioBuffer;
use crate::error::{AnalysisError, Result};

/// Magnitude spectrum of a whole buffer.
///
/// Holds one entry per input sample. Bins are laid out the standard FFT way:
/// non-negative frequencies first, then the wrapped negative frequencies, so
/// the magnitudes are symmetric about Nyquist for real input.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencySpectrum {
    frequencies: Vec<f32>,
    magnitudes: Vec<f32>,
    sample_rate: u32,
}

impl FrequencySpectrum {
    /// Build a spectrum from precomputed magnitudes in FFT bin order.
    ///
    /// The frequency axis is derived with [`bin_frequencies`].
    pub fn from_magnitudes(magnitudes: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            frequencies: bin_frequencies(magnitudes.len(), sample_rate),
            magnitudes,
            sample_rate,
        }
    }

    /// Bin center frequencies in Hz (negative past the midpoint).
    pub fn frequencies(&self) -> &[f32] {
        &self.frequencies
    }

    /// Linear magnitudes `|X[k]|`.
    pub fn magnitudes(&self) -> &[f32] {
        &self.magnitudes
    }

    /// Sample rate of the source buffer.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of bins (equal to the source sample count).
    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    /// True if there are no bins.
    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }

    /// Spacing between bins in Hz.
    pub fn bin_width(&self) -> f32 {
        if self.is_empty() {
            0.0
        } else {
            self.sample_rate as f32 / self.len() as f32
        }
    }

    /// `(frequency, magnitude)` pairs in bin order.
    pub fn iter(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.frequencies
            .iter()
            .copied()
            .zip(self.magnitudes.iter().copied())
    }
}

/// Frequency of every bin for an `n`-point transform at `sample_rate`.
///
/// Bins `k < ceil(n/2)` map to `k * rate / n`; the rest wrap to
/// `(k - n) * rate / n`.
pub fn bin_frequencies(n: usize, sample_rate: u32) -> Vec<f32> {
    if n == 0 {
        return Vec::new();
    }
    let width = sample_rate as f64 / n as f64;
    let positive = n.div_ceil(2);
    (0..n)
        .map(|k| {
            let signed = if k < positive {
                k as f64
            } else {
                k as f64 - n as f64
            };
            (signed * width) as f32
        })
        .collect()
}

/// FFT front end that caches plans between calls.
///
/// Holding one of these across many buffers of the same length avoids
/// re-planning. It carries no analysis state.
pub struct SpectralTransform {
    planner: FftPlanner<f32>,
}

impl SpectralTransform {
    /// Create a transform with an empty plan cache.
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
        }
    }

    /// Compute the magnitude spectrum of `buffer`.
    ///
    /// O(N log N) for any length; rustfft picks a mixed-radix or Bluestein
    /// plan for lengths that are not powers of two.
    pub fn spectrum(&mut self, buffer: &AudioBuffer) -> Result<FrequencySpectrum> {
        if buffer.is_empty() {
            return Err(AnalysisError::EmptyBuffer);
        }

        let n = buffer.len();
        let fft = self.planner.plan_fft_forward(n);

        let mut bins: Vec<Complex<f32>> = buffer
            .samples()
            .iter()
            .map(|&x| Complex::new(x, 0.0))
            .collect();
        fft.process(&mut bins);

        let magnitudes = bins.iter().map(|c| c.norm()).collect();
        Ok(FrequencySpectrum::from_magnitudes(magnitudes, buffer.sample_rate()))
    }
}

impl Default for SpectralTransform {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot magnitude spectrum of `buffer`.
pub fn magnitude_spectrum(buffer: &AudioBuffer) -> Result<FrequencySpectrum> {
    SpectralTransform::new().spectrum(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn bin_frequencies_even_length() {
        assert_eq!(bin_frequencies(4, 8), vec![0.0, 2.0, -4.0, -2.0]);
    }

    #[test]
    fn bin_frequencies_odd_length() {
        assert_eq!(bin_frequencies(5, 10), vec![0.0, 2.0, 4.0, -4.0, -2.0]);
    }

    #[test]
    fn empty_buffer_fails() {
        let buffer = AudioBuffer::new(Vec::new(), 44100).unwrap();
        assert_eq!(
            magnitude_spectrum(&buffer).unwrap_err(),
            AnalysisError::EmptyBuffer
        );
    }

    #[test]
    fn dc_signal_lands_in_bin_zero() {
        let buffer = AudioBuffer::new(vec![1.0; 64], 6400).unwrap();
        let spectrum = magnitude_spectrum(&buffer).unwrap();

        assert_eq!(spectrum.len(), 64);
        assert!((spectrum.magnitudes()[0] - 64.0).abs() < 1e-3);
        let rest: f32 = spectrum.magnitudes()[1..].iter().sum();
        assert!(rest < 1e-2, "leakage {rest}");
    }

    #[test]
    fn real_input_is_symmetric() {
        let samples: Vec<f32> = (0..256)
            .map(|i| (2.0 * PI * 10.0 * i as f32 / 256.0).sin() + 0.3)
            .collect();
        let buffer = AudioBuffer::new(samples, 256).unwrap();
        let spectrum = magnitude_spectrum(&buffer).unwrap();
        let mags = spectrum.magnitudes();

        for k in 1..128 {
            assert!(
                (mags[k] - mags[256 - k]).abs() < 1e-3,
                "bin {k}: {} vs {}",
                mags[k],
                mags[256 - k]
            );
        }
    }

    #[test]
    fn repeated_transform_is_identical() {
        let samples: Vec<f32> = (0..1000).map(|i| ((i * 7919) % 113) as f32 / 113.0).collect();
        let buffer = AudioBuffer::new(samples, 8000).unwrap();
        let mut transform = SpectralTransform::new();
        let a = transform.spectrum(&buffer).unwrap();
        let b = transform.spectrum(&buffer).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn bin_width_matches_rate_over_length() {
        let buffer = AudioBuffer::new(vec![0.0; 480], 48000).unwrap();
        let spectrum = magnitude_spectrum(&buffer).unwrap();
        assert_eq!(spectrum.bin_width(), 100.0);
        assert_eq!(spectrum.frequencies()[3], 300.0);
    }
}
