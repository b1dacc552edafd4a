//! Single-pass spectral summary.

use serde::Serialize;

use crate::bands::{BandPowers, band_powers};
use crate::buffer::AudioBuffer;
use crate::error::Result;
use crate::resonance::resonance_peak;
use crate::spectrum::{FrequencySpectrum, SpectralTransform};

/// Band triple and resonance peak from one transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpectralSummary {
    /// Aggregated magnitude per band.
    pub bands: BandPowers,
    /// Dominant frequency in Hz.
    pub resonance_hz: f32,
}

impl SpectralSummary {
    /// Derive the summary from an existing spectrum.
    pub fn from_spectrum(spectrum: &FrequencySpectrum) -> Result<Self> {
        Ok(Self {
            bands: band_powers(spectrum),
            resonance_hz: resonance_peak(spectrum)?,
        })
    }
}

/// Transform `buffer` once and derive both band powers and resonance.
pub fn analyze_spectrum(buffer: &AudioBuffer) -> Result<SpectralSummary> {
    let spectrum = SpectralTransform::new().spectrum(buffer)?;
    SpectralSummary::from_spectrum(&spectrum)
}
