//! Display WAV file metadata.

use clap::Args;
use roomtone_io::{WavFormat, read_wav_info};

/// Display WAV file information.
#[derive(Args)]
pub struct InfoArgs {
    /// Path to the WAV file
    pub file: std::path::PathBuf,
}

/// Run the info command.
pub fn run(args: InfoArgs) -> anyhow::Result<()> {
    let info = read_wav_info(&args.file)?;

    let format_str = match info.format {
        WavFormat::Pcm => "PCM",
        WavFormat::IeeeFloat => "IEEE Float",
    };

    println!("File:              {}", args.file.display());
    println!("Format:            {} {}-bit", format_str, info.bits_per_sample);
    println!("Channels:          {}", info.channels);
    println!("Duration (s):      {:.3}", info.duration_secs);
    println!("Sample Rate (Hz):  {}", info.sample_rate);
    println!("Number of Samples: {}", info.num_frames);

    Ok(())
}
