//! Sizes the blended-wing-body example, sweeps fixed cost against range and writes
//! `range2weight.dat`, `range2cost.dat` and `range2best.dat` to the working directory.
//! The cost-vs-range chart opens at the end of the run; build with
//! `--no-default-features` to skip it on machines without a display.

use std::path::Path;

use bwb_sizing::sweep::summary;
use bwb_sizing::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut aircraft = Aircraft::new(AircraftParams::bwb_example());
    let outcome = aircraft.update_weight(ConvergenceSettings::default());
    summary::display_sizing(&aircraft, &outcome);

    println!("\n--- Best Range per Fixed Cost ---");
    let settings = SweepSettings::default();
    let report = run_sweep_with(&mut aircraft, &settings, summary::display_scenario);

    report.write_tables(Path::new("."))?;
    summary::display_report(&report);

    render_cost_curves(&report);

    Ok(())
}

#[cfg(feature = "plot")]
fn render_cost_curves(report: &SweepReport) {
    if let Err(err) = bwb_sizing::plot::show_cost_curves(report) {
        tracing::warn!("{err}, cost curves not rendered");
    }
}

#[cfg(not(feature = "plot"))]
fn render_cost_curves(_report: &SweepReport) {
    tracing::info!("built without the `plot` feature, cost curves not rendered");
}
