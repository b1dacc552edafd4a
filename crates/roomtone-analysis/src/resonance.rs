//! Dominant resonance frequency.

use crate::error::{AnalysisError, Result};
use crate::spectrum::FrequencySpectrum;

/// Frequency of the strongest bin among the first `N/2` bins.
///
/// Ties resolve to the lowest frequency. A one-bin spectrum returns its DC
/// bin.
pub fn resonance_peak(spectrum: &FrequencySpectrum) -> Result<f32> {
    if spectrum.is_empty() {
        return Err(AnalysisError::EmptyBuffer);
    }

    let half = (spectrum.len() / 2).max(1);
    let mags = &spectrum.magnitudes()[..half];

    let mut best = 0;
    for (i, &mag) in mags.iter().enumerate().skip(1) {
        if mag > mags[best] {
            best = i;
        }
    }

    Ok(spectrum.frequencies()[best])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::AudioBuffer;
    use crate::spectrum::magnitude_spectrum;
    use std::f64::consts::PI;

    fn spectrum_of(samples: Vec<f32>, sample_rate: u32) -> FrequencySpectrum {
        magnitude_spectrum(&AudioBuffer::new(samples, sample_rate).unwrap()).unwrap()
    }

    #[test]
    fn finds_bin_aligned_tone() {
        let samples = (0..44100)
            .map(|i| (2.0 * PI * 440.0 * i as f64 / 44100.0).sin() as f32)
            .collect();
        let spectrum = spectrum_of(samples, 44100);
        let peak = resonance_peak(&spectrum).unwrap();
        assert!((peak - 440.0).abs() <= spectrum.bin_width(), "peak {peak}");
    }

    #[test]
    fn ties_resolve_to_lowest_frequency() {
        let mags = vec![0.0, 3.0, 1.0, 3.0, 0.0, 0.0, 0.0, 3.0];
        let spectrum = FrequencySpectrum::from_magnitudes(mags, 8);
        assert_eq!(resonance_peak(&spectrum).unwrap(), 1.0);
    }

    #[test]
    fn mirror_half_is_ignored() {
        // Bin 5 is the largest overall but lies in the negative half.
        let mags = vec![0.0, 2.0, 1.0, 0.0, 0.0, 9.0, 1.0, 2.0];
        let spectrum = FrequencySpectrum::from_magnitudes(mags, 800);
        assert_eq!(resonance_peak(&spectrum).unwrap(), 100.0);
    }

    #[test]
    fn empty_spectrum_fails() {
        let spectrum = FrequencySpectrum::from_magnitudes(Vec::new(), 8000);
        assert_eq!(resonance_peak(&spectrum), Err(AnalysisError::EmptyBuffer));
    }

    #[test]
    fn single_sample_returns_dc() {
        let spectrum = spectrum_of(vec![0.7], 8000);
        assert_eq!(resonance_peak(&spectrum).unwrap(), 0.0);
    }

    #[test]
    fn never_reports_negative_frequency() {
        let samples: Vec<f32> = (0..101).map(|i| ((i * 37) % 11) as f32 - 5.0).collect();
        let spectrum = spectrum_of(samples, 1000);
        assert!(resonance_peak(&spectrum).unwrap() >= 0.0);
    }
}
