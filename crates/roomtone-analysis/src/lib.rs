//! Roomtone Analysis - spectral and reverberation diagnostics for mono audio
//!
//! This crate turns a decoded sample buffer into acoustic diagnostics:
//!
//! - [`normalize`] - NaN/Inf removal and channel collapse into an [`AudioBuffer`]
//! - [`spectrum`] - full-length FFT magnitude spectrum with bin frequencies
//! - [`bands`] - low/mid/high band energy (linear magnitude sums)
//! - [`resonance`] - dominant frequency in the non-negative half-spectrum
//! - [`reverb`] - Schroeder decay curve and RT60 crossing time
//! - [`compensate`] - exponential envelope that shortens excessive reverberation
//! - [`summary`] - band powers and resonance from a single transform
//!
//! Every operation is a pure function of its input buffer. Nothing here keeps
//! state between calls, so buffers can be analyzed from multiple threads.
//!
//! ## Example
//!
//! ```rust,ignore
//! use roomtone_analysis::{analyze_spectrum, compensate, estimate_rt60, normalize};
//!
//! let buffer = normalize(interleaved, channels, sample_rate)?;
//!
//! let summary = analyze_spectrum(&buffer)?;
//! println!("Resonance: {:.2} Hz", summary.resonance_hz);
//!
//! let rt60 = estimate_rt60(&buffer)?;
//! if rt60.seconds > 0.5 {
//!     let shortened = compensate(&buffer, 0.5)?.buffer;
//! }
//! ```

pub mod bands;
pub mod buffer;
pub mod compensate;
pub mod error;
pub mod normalize;
pub mod resonance;
pub mod reverb;
pub mod spectrum;
pub mod summary;

pub use bands::{BANDS, Band, BandPowers, band_powers};
pub use buffer::{AudioBuffer, AudioInfo};
pub use compensate::{Compensation, apply_decay_envelope, compensate};
pub use error::{AnalysisError, Result};
pub use normalize::{downmix, normalize, sanitize};
pub use resonance::resonance_peak;
pub use reverb::{
    DecayMetrics, RT60_THRESHOLD_DB, Rt60Estimate, decay_curve_db, decay_metrics,
    energy_decay_curve, estimate_rt60,
};
pub use spectrum::{FrequencySpectrum, SpectralTransform, bin_frequencies, magnitude_spectrum};
pub use summary::{SpectralSummary, analyze_spectrum};
