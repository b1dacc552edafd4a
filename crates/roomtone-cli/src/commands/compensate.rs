//! Reverberation shortening command.

use clap::Args;
use roomtone_analysis::compensate;
use roomtone_config::Settings;
use roomtone_io::{read_wav, write_wav};
use std::path::PathBuf;

#[derive(Args)]
pub struct CompensateArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file
    #[arg(short, long)]
    output: PathBuf,

    /// Target RT60 in seconds (defaults to the settings file value)
    #[arg(long)]
    target: Option<f32>,

    /// Output bit depth: 16, 24 or 32 (defaults to the settings file value)
    #[arg(long)]
    bits: Option<u16>,
}

pub fn run(args: CompensateArgs, settings: &Settings) -> anyhow::Result<()> {
    let target = args.target.unwrap_or(settings.target_rt60);
    let bits = args.bits.unwrap_or(settings.bits_per_sample);

    println!("Compensating {}...", args.input.display());

    let buffer = read_wav(&args.input)?;
    let result = compensate(&buffer, target)?;

    println!("  Current RT60: {:.3} s", result.current_rt60);
    println!("  Target RT60:  {:.3} s", target);
    if result.applied() {
        println!("  Decay factor: {:.3}", result.decay_factor);
    } else {
        println!("  Already at or below target; output is unchanged");
    }

    write_wav(&args.output, &result.buffer, bits)?;
    println!("Wrote {}", args.output.display());

    Ok(())
}
