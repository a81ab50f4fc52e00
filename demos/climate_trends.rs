//! Climate anomaly trend smoothing, end to end.
//!
//! Builds a synthetic monthly anomaly series (warming trend + seasonal
//! cycle + deterministic high-frequency wiggle), then derives the three
//! trend lines a climate plot would draw:
//! - annual CTRM low-pass (period 12)
//! - five-year CTRM low-pass (period 60)
//! - annual five-pass Savitzky-Golay smooth (same length as the data)
//!
//! The trimming filters come back shorter than the input; their trim
//! offsets are used to align them against the decimal-year time axis,
//! exactly the way plotting code would slice the axis.

use anomaly_smoothing::prelude::*;

fn main() -> Result<(), SmoothingError> {
    // 38 years of monthly samples starting in 1979.
    let n = 38 * 12;
    let dates: Vec<f64> = (0..n)
        .map(|i| 1979.0 + (i % 12 + 1) as f64 / 12.0 - 1.0 / 24.0 + (i / 12) as f64)
        .collect();
    let anomalies: Vec<f64> = (0..n)
        .map(|i| {
            let t = i as f64;
            0.0015 * t                                  // warming trend
                + 0.15 * (t * std::f64::consts::TAU / 12.0).sin() // seasonal cycle
                + 0.08 * (t * 2.1).sin() * (t * 0.73).cos() // wiggle standing in for noise
        })
        .collect();

    println!("Synthetic monthly anomaly series: {n} samples, {:.2}..{:.2}", dates[0], dates[n - 1]);
    println!();

    // Annual and five-year low-pass trends.
    let annual = CascadedTripleRunningMean::new().period(12).smooth(&anomalies)?;
    let five_year = CascadedTripleRunningMean::new().period(60).smooth(&anomalies)?;

    // Annual Savitzky-Golay smooth, length-preserving.
    let sg = SavitzkyGolayCascade::new().period(12).order(3).smooth(&anomalies)?;

    print_trend("Annual LP (CTRM, period 12)", &annual, &dates);
    print_trend(">5 yr LP (CTRM, period 60)", &five_year, &dates);

    println!("Annual SG (5-pass, order 3): {} samples, no trimming", sg.len());
    println!(
        "  first/last smoothed values: {:+.4} @ {:.2}, {:+.4} @ {:.2}",
        sg[0],
        dates[0],
        sg[n - 1],
        dates[n - 1]
    );

    Ok(())
}

fn print_trend(label: &str, trend: &Smoothed<f64>, dates: &[f64]) {
    let range = trend.aligned_range();
    println!("{label}: {trend}");
    println!(
        "  covers {:.2}..{:.2}, first/last values {:+.4} / {:+.4}",
        dates[range.start],
        dates[range.end - 1],
        trend.values[0],
        trend.values[trend.len() - 1]
    );
    println!();
}
