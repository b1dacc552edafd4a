//! Audio file I/O for roomtone.
//!
//! This crate provides:
//!
//! - **WAV loading**: [`read_wav`] decodes any PCM or float WAV into a mono
//!   [`AudioBuffer`](roomtone_analysis::AudioBuffer), sanitized and
//!   channel-averaged
//! - **Header probe**: [`read_wav_info`] for format details without decoding
//! - **WAV writing**: [`write_wav`] for compensated buffers
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use roomtone_io::{read_wav, write_wav};
//! use roomtone_analysis::compensate;
//!
//! let buffer = read_wav("room.wav")?;
//! let result = compensate(&buffer, 0.4)?;
//! write_wav("room_dry.wav", &result.buffer, 24)?;
//! ```

mod wav;

pub use wav::{WavFormat, WavInfo, read_wav, read_wav_info, write_wav};

/// Error types for audio I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// Decoded samples could not form a valid buffer.
    #[error("invalid audio: {0}")]
    Analysis(#[from] roomtone_analysis::AnalysisError),

    /// The requested bit depth cannot be written.
    #[error("Unsupported bit depth: {0}")]
    UnsupportedBitDepth(u16),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for audio I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
