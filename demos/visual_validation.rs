//! Combined visualization scenarios for OLS fitting.
//!
//! This script runs multiple scenarios to generate CSV data for external
//! plotting. It covers:
//! 1. The reference scenario (fit line plus residuals)
//! 2. Noise comparison (effect of the noise scale on the fit)
//! 3. Sample-size comparison (estimation error shrinking with N)

use ols_rs::prelude::*;
use std::fs::File;
use std::io::Write;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Running All Visualization Scenarios...");
    println!("======================================");
    println!();

    // Ensure output directory exists
    let output_dir = "output/visual/";
    std::fs::create_dir_all(output_dir)?;
    println!("Output directory: {}", output_dir);
    println!();

    run_reference_scenario()?;
    println!();

    run_noise_comparison()?;
    println!();

    run_sample_size_comparison()?;
    println!();

    println!("All scenarios completed successfully.");
    Ok(())
}

/// 1. Reference Scenario
///
/// One uniform feature, true model y = 2x + 1, noise sd 0.5. Writes the
/// scatter, fitted values, and residuals for a fit-plus-residual plot.
fn run_reference_scenario() -> Result<(), Box<dyn std::error::Error>> {
    println!("1. Reference scenario (N=100, noise 0.5)");

    let outcome = Study::new()
        .samples(100)
        .features(1)
        .noise_scale(0.5)
        .true_coefficients(&[2.0, 1.0])
        .seed(42)
        .return_diagnostics()
        .build()?
        .run()?;

    println!("{}", outcome.result);

    let plot = outcome.plot_data().expect("single-feature study");
    let path = "output/visual/reference_scenario.csv";
    let mut file = File::create(path)?;
    plot.write_csv(&mut file)?;

    let [(x0, y0), (x1, y1)] = plot.line;
    let line_path = "output/visual/reference_line.csv";
    let mut line_file = File::create(line_path)?;
    writeln!(line_file, "x,y_fitted")?;
    writeln!(line_file, "{},{}", x0, y0)?;
    writeln!(line_file, "{},{}", x1, y1)?;

    println!("Wrote {} and {}", path, line_path);
    Ok(())
}

/// 2. Noise Comparison
///
/// Same true model under increasing noise scales; one CSV per scale.
fn run_noise_comparison() -> Result<(), Box<dyn std::error::Error>> {
    println!("2. Noise comparison (0.1 / 0.5 / 1.0)");

    for &noise in &[0.1, 0.5, 1.0] {
        let outcome = Study::new()
            .samples(100)
            .noise_scale(noise)
            .true_coefficients(&[2.0, 1.0])
            .seed(42)
            .return_diagnostics()
            .build()?
            .run()?;

        let diag = outcome.result.diagnostics.as_ref().expect("requested");
        println!(
            "  noise {:>4}: slope {:.4}, intercept {:.4}, R^2 {:.4}",
            noise,
            outcome.result.coefficients[0],
            outcome.result.coefficients[1],
            diag.r_squared
        );

        let path = format!("output/visual/noise_{}.csv", noise);
        let mut file = File::create(&path)?;
        outcome.plot_data().expect("single feature").write_csv(&mut file)?;
    }

    Ok(())
}

/// 3. Sample-Size Comparison
///
/// Coefficient error against the true model as N grows.
fn run_sample_size_comparison() -> Result<(), Box<dyn std::error::Error>> {
    println!("3. Sample-size comparison");

    let path = "output/visual/sample_size.csv";
    let mut file = File::create(path)?;
    writeln!(file, "samples,slope_error,intercept_error")?;

    for &n in &[10usize, 30, 100, 300, 1000, 3000] {
        let outcome = Study::<f64>::new()
            .samples(n)
            .noise_scale(0.5)
            .true_coefficients(&[2.0, 1.0])
            .seed(42)
            .build()?
            .run()?;

        let slope_err = (outcome.result.coefficients[0] - 2.0).abs();
        let intercept_err = (outcome.result.coefficients[1] - 1.0).abs();
        writeln!(file, "{},{},{}", n, slope_err, intercept_err)?;
        println!(
            "  N={:>5}: slope error {:.4}, intercept error {:.4}",
            n, slope_err, intercept_err
        );
    }

    println!("Wrote {}", path);
    Ok(())
}
