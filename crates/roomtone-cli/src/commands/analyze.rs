//! Band energy, resonance and RT60 report.

use clap::Args;
use roomtone_analysis::{
    AudioInfo, BandPowers, DecayMetrics, Rt60Estimate, analyze_spectrum, decay_metrics,
    estimate_rt60,
};
use roomtone_config::{ReportFormat, Settings};
use roomtone_io::read_wav;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Print JSON instead of a table (overrides the settings file)
    #[arg(long)]
    json: bool,
}

/// Everything the analyze command reports for one file.
#[derive(Serialize)]
struct AnalysisReport {
    file: PathBuf,
    info: AudioInfo,
    bands: BandPowers,
    resonance_hz: f32,
    rt60: Option<Rt60Estimate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rt60_error: Option<String>,
    decay: Option<DecayMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    decay_error: Option<String>,
}

pub fn run(args: AnalyzeArgs, settings: &Settings) -> anyhow::Result<()> {
    let buffer = read_wav(&args.input)?;
    let summary = analyze_spectrum(&buffer)?;

    // An undefined RT60 is reported, not fatal: the spectral part still holds.
    let (rt60, rt60_error) = match estimate_rt60(&buffer) {
        Ok(estimate) => (Some(estimate), None),
        Err(err) => {
            tracing::warn!(%err, "rt60 unavailable");
            (None, Some(err.to_string()))
        }
    };
    let (decay, decay_error) = match decay_metrics(&buffer) {
        Ok(metrics) => (Some(metrics), None),
        Err(err) => {
            tracing::warn!(%err, "decay metrics unavailable");
            (None, Some(err.to_string()))
        }
    };

    let report = AnalysisReport {
        file: args.input,
        info: buffer.info(),
        bands: summary.bands,
        resonance_hz: summary.resonance_hz,
        rt60,
        rt60_error,
        decay,
        decay_error,
    };

    let format = if args.json {
        ReportFormat::Json
    } else {
        settings.report
    };
    match format {
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        ReportFormat::Text => print_text(&report),
    }

    Ok(())
}

fn print_text(report: &AnalysisReport) {
    println!("Analysis of {}", report.file.display());
    println!(
        "  {} samples, {} Hz, {:.2}s",
        report.info.num_samples, report.info.sample_rate, report.info.duration_secs
    );

    println!("\nBand energy (sum of magnitudes):");
    println!("  {:>6}  {:>16}  {:>14}", "Band", "Range (Hz)", "Energy");
    println!("  {:>6}  {:>16}  {:>14}", "----", "----------", "------");
    for (band, value) in report.bands.iter() {
        let range = format!("{:.0}-{:.0}", band.low_hz, band.high_hz);
        println!("  {:>6}  {:>16}  {:>14.2}", band.name, range, value);
    }

    println!("\nResonance peak: {:.2} Hz", report.resonance_hz);

    match (&report.rt60, &report.rt60_error) {
        (Some(rt60), _) => println!("RT60:           {:.3} s", rt60.seconds),
        (None, Some(err)) => println!("RT60:           undefined ({err})"),
        (None, None) => println!("RT60:           undefined"),
    }

    if let Some(decay) = &report.decay {
        let fmt = |v: Option<f32>| v.map_or_else(|| "-".to_string(), |s| format!("{s:.3} s"));
        println!(
            "  EDT: {}  T20: {}  T30: {}",
            fmt(decay.edt_seconds),
            fmt(decay.t20_seconds),
            fmt(decay.t30_seconds)
        );
    } else if let Some(err) = &report.decay_error {
        println!("  Decay metrics undefined ({err})");
    }
}
