//! Low/mid/high band energy from a magnitude spectrum.
//!
//! Band energy is the **linear sum of bin magnitudes** whose frequency falls
//! in `[low_hz, high_hz)`. Squared magnitudes are never used, so bar graphs
//! and reports built from [`BandPowers`] share one scale.
//!
//! Only raw non-negative bin frequencies can match, since every band starts
//! at or above 0 Hz; the mirrored negative-frequency half of the spectrum
//! never contributes.

use serde::Serialize;

use crate::spectrum::FrequencySpectrum;

/// A half-open frequency range `[low_hz, high_hz)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    /// Short label used in reports.
    pub name: &'static str,
    /// Inclusive lower edge in Hz.
    pub low_hz: f32,
    /// Exclusive upper edge in Hz.
    pub high_hz: f32,
}

impl Band {
    /// Create a band from its edges.
    pub const fn new(name: &'static str, low_hz: f32, high_hz: f32) -> Self {
        Self {
            name,
            low_hz,
            high_hz,
        }
    }

    /// True if `freq_hz` falls inside this band.
    pub fn contains(&self, freq_hz: f32) -> bool {
        self.low_hz <= freq_hz && freq_hz < self.high_hz
    }

    /// True if bin `k` of an `n`-point spectrum at `sample_rate` falls inside
    /// this band.
    ///
    /// Compares `k * rate` against `edge * n` instead of the rounded f32 bin
    /// frequency, so a bin just below an edge is never pushed onto it.
    pub fn contains_bin(&self, k: usize, n: usize, sample_rate: u32) -> bool {
        if k >= n {
            return false;
        }
        let signed = if k < n.div_ceil(2) {
            k as f64
        } else {
            k as f64 - n as f64
        };
        let scaled = signed * f64::from(sample_rate);
        let n = n as f64;
        f64::from(self.low_hz) * n <= scaled && scaled < f64::from(self.high_hz) * n
    }
}

/// 0 Hz to 1 kHz.
pub const LOW_BAND: Band = Band::new("low", 0.0, 1000.0);

/// 1 kHz to 4 kHz.
pub const MID_BAND: Band = Band::new("mid", 1000.0, 4000.0);

/// 4 kHz to 20 kHz.
pub const HIGH_BAND: Band = Band::new("high", 4000.0, 20000.0);

/// The three analysis bands, in ascending order.
pub const BANDS: [Band; 3] = [LOW_BAND, MID_BAND, HIGH_BAND];

/// Aggregated magnitude per band. All fields are `>= 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BandPowers {
    /// Sum over `[0, 1000)` Hz.
    pub low: f32,
    /// Sum over `[1000, 4000)` Hz.
    pub mid: f32,
    /// Sum over `[4000, 20000)` Hz.
    pub high: f32,
}

impl BandPowers {
    /// Values in [`BANDS`] order.
    pub fn as_array(&self) -> [f32; 3] {
        [self.low, self.mid, self.high]
    }

    /// `(band, value)` pairs in ascending band order.
    pub fn iter(&self) -> impl Iterator<Item = (Band, f32)> {
        BANDS.into_iter().zip(self.as_array())
    }

    /// Sum of all three bands.
    pub fn total(&self) -> f32 {
        self.low + self.mid + self.high
    }
}

/// Sum of magnitudes for bins inside `band`.
pub fn band_sum(spectrum: &FrequencySpectrum, band: Band) -> f32 {
    let n = spectrum.len();
    let rate = spectrum.sample_rate();
    spectrum
        .magnitudes()
        .iter()
        .enumerate()
        .filter(|&(k, _)| band.contains_bin(k, n, rate))
        .map(|(_, &mag)| mag)
        .sum()
}

/// Aggregate a spectrum into the low/mid/high triple.
pub fn band_powers(spectrum: &FrequencySpectrum) -> BandPowers {
    BandPowers {
        low: band_sum(spectrum, LOW_BAND),
        mid: band_sum(spectrum, MID_BAND),
        high: band_sum(spectrum, HIGH_BAND),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::AudioBuffer;
    use crate::spectrum::magnitude_spectrum;
    use std::f64::consts::PI;

    fn tone(freq: f64, sample_rate: u32, n: usize) -> AudioBuffer {
        let samples = (0..n)
            .map(|i| (2.0 * PI * freq * i as f64 / sample_rate as f64).sin() as f32)
            .collect();
        AudioBuffer::new(samples, sample_rate).unwrap()
    }

    #[test]
    fn edges_are_left_closed() {
        assert!(LOW_BAND.contains(0.0));
        assert!(!LOW_BAND.contains(1000.0));
        assert!(MID_BAND.contains(1000.0));
        assert!(!MID_BAND.contains(4000.0));
        assert!(HIGH_BAND.contains(4000.0));
        assert!(!HIGH_BAND.contains(20000.0));
        assert!(!LOW_BAND.contains(-1.0));
    }

    #[test]
    fn bin_just_below_edge_stays_in_band() {
        // Bin 46639 of 102839 at 44100 Hz is 19999.999 Hz, which rounds to
        // 20000.0 as f32.
        let (n, k) = (102_839, 46_639);
        let mut mags = vec![0.0; n];
        mags[k] = 1.0;
        let spectrum = FrequencySpectrum::from_magnitudes(mags, 44100);

        assert!(HIGH_BAND.contains_bin(k, n, 44100));
        assert!(!HIGH_BAND.contains_bin(k + 1, n, 44100));
        assert_eq!(
            band_powers(&spectrum),
            BandPowers {
                low: 0.0,
                mid: 0.0,
                high: 1.0
            }
        );
    }

    #[test]
    fn bin_on_edge_belongs_to_upper_band() {
        // 1 Hz bins: bin 1000 is exactly 1000 Hz.
        let mut mags = vec![0.0; 8000];
        mags[1000] = 2.0;
        mags[3999] = 3.0;
        let spectrum = FrequencySpectrum::from_magnitudes(mags, 8000);
        let powers = band_powers(&spectrum);
        assert_eq!(powers.low, 0.0);
        assert_eq!(powers.mid, 5.0);
    }

    #[test]
    fn negative_bins_never_match() {
        for k in 5..10 {
            assert!(BANDS.iter().all(|b| !b.contains_bin(k, 10, 10)));
        }
        assert!(!LOW_BAND.contains_bin(10, 10, 10));
    }

    #[test]
    fn tone_energy_lands_in_its_band() {
        // 1 Hz bins, so each tone sits exactly on a bin.
        for (freq, idx) in [(440.0, 0), (2000.0, 1), (8000.0, 2)] {
            let spectrum = magnitude_spectrum(&tone(freq, 44100, 44100)).unwrap();
            let powers = band_powers(&spectrum).as_array();
            let winner = (0..3)
                .max_by(|&a, &b| powers[a].partial_cmp(&powers[b]).unwrap())
                .unwrap();
            assert_eq!(winner, idx, "{freq} Hz -> {powers:?}");
        }
    }

    #[test]
    fn negative_frequencies_are_excluded() {
        // A 440 Hz tone has mirror energy at -440 Hz; only the positive bin
        // counts, which holds about N/2 of magnitude.
        let spectrum = magnitude_spectrum(&tone(440.0, 44100, 44100)).unwrap();
        let powers = band_powers(&spectrum);
        assert!((powers.low - 22050.0).abs() / 22050.0 < 0.01, "{}", powers.low);
    }

    #[test]
    fn above_twenty_khz_is_ignored() {
        let spectrum = magnitude_spectrum(&tone(21000.0, 48000, 48000)).unwrap();
        let powers = band_powers(&spectrum);
        // The tone bin alone holds ~24000; what remains in band is rounding.
        assert!(powers.total() < 240.0, "{powers:?}");
    }
}
