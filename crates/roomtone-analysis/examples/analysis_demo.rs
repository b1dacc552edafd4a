//! Analysis demo: band energy, resonance, RT60 and compensation on a
//! synthetic room response.
//!
//! Run with: cargo run -p roomtone-analysis --example analysis_demo

use roomtone_analysis::{analyze_spectrum, compensate, decay_metrics, estimate_rt60, normalize};
use std::f64::consts::PI;

fn main() -> roomtone_analysis::Result<()> {
    let sample_rate = 48000u32;
    let rt60 = 1.1;

    // --- A stereo "room" ringing at 125 Hz and 2.5 kHz ---
    println!("=== Synthetic Room Response (RT60 {rt60} s) ===\n");

    let frames = 3 * sample_rate as usize;
    let mut interleaved = Vec::with_capacity(frames * 2);
    for i in 0..frames {
        let t = i as f64 / sample_rate as f64;
        let env = (-t * 1000f64.ln() / rt60).exp();
        let left = env * (2.0 * PI * 125.0 * t).sin();
        let right = env * 0.4 * (2.0 * PI * 2500.0 * t).sin();
        interleaved.push(left as f32);
        interleaved.push(right as f32);
    }

    let buffer = normalize(interleaved, 2, sample_rate)?;
    let info = buffer.info();
    println!(
        "{} samples at {} Hz ({:.2} s)\n",
        info.num_samples, info.sample_rate, info.duration_secs
    );

    // --- Spectrum ---
    let summary = analyze_spectrum(&buffer)?;
    for (band, value) in summary.bands.iter() {
        println!(
            "  {:>4} [{:>5.0}, {:>5.0}) Hz: {:>12.2}",
            band.name, band.low_hz, band.high_hz, value
        );
    }
    println!("  Resonance: {:.2} Hz\n", summary.resonance_hz);

    // --- Decay ---
    let estimate = estimate_rt60(&buffer)?;
    let metrics = decay_metrics(&buffer)?;
    println!("  RT60: {:.3} s (sample {})", estimate.seconds, estimate.crossing_index);
    println!("  EDT:  {:?}", metrics.edt_seconds);
    println!("  T20:  {:?}", metrics.t20_seconds);
    println!("  T30:  {:?}\n", metrics.t30_seconds);

    // --- Compensation ---
    let result = compensate(&buffer, 0.4)?;
    let after = estimate_rt60(&result.buffer)?;
    println!(
        "  Compensated with factor {:.3}: RT60 {:.3} s -> {:.3} s",
        result.decay_factor, result.current_rt60, after.seconds
    );

    Ok(())
}
