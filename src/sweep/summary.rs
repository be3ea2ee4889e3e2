use crate::aircraft::model::Aircraft;
use crate::aircraft::sizing::SizingOutcome;

use super::driver::{ScenarioResult, SweepReport};

fn format_mass(mass: f64) -> String {
    if mass.abs() >= 1000.0 {
        format!("{:.2} t", mass / 1000.0)
    } else {
        format!("{:.2} kg", mass)
    }
}

fn format_range(range: Option<f64>) -> String {
    match range {
        Some(range) => format!("{:.1} km", range),
        None => "n/a".to_string(),
    }
}

pub fn format_sizing(aircraft: &Aircraft, outcome: &SizingOutcome) -> String {
    format!(
        "Takeoff Weight: {} ({:.4} kg)\n\
         Fuel: {} ({:.4} kg)\n\
         Hydrogen System: {} ({:.4} kg)\n\
         Hydrogen Range: {:.2} km\n\
         Kerosene Range: {:.2} km\n\
         Cost per pax-km: {:.6}\n\
         Iterations: {} ({:?}, residual {:.3} kg)",
        format_mass(aircraft.takeoff_weight),
        aircraft.takeoff_weight,
        format_mass(aircraft.fuel),
        aircraft.fuel,
        format_mass(aircraft.h2_mass()),
        aircraft.h2_mass(),
        aircraft.range_h2(),
        aircraft.target_range,
        aircraft.cost,
        outcome.iterations,
        outcome.status,
        outcome.residual,
    )
}

pub fn format_scenario(scenario: &ScenarioResult) -> String {
    format!(
        "Fixed cost {:.0}: best range {}",
        scenario.extra_money,
        format_range(scenario.best_range())
    )
}

pub fn display_sizing(aircraft: &Aircraft, outcome: &SizingOutcome) {
    println!("--- Initial Sizing ---");
    println!("{}", format_sizing(aircraft, outcome));
}

pub fn display_scenario(scenario: &ScenarioResult) {
    println!("{}", format_scenario(scenario));
}

pub fn display_report(report: &SweepReport) {
    println!("\n--- Sweep Summary ---");
    for scenario in &report.scenarios {
        let best = scenario.best_sample();
        println!(
            "{} | cost {} | weight {} | converged {}/{}",
            format_scenario(scenario),
            best.map_or("n/a".to_string(), |sample| format!("{:.6}", sample.cost)),
            best.map_or("n/a".to_string(), |sample| format_mass(sample.takeoff_weight)),
            scenario.converged_count(),
            scenario.samples.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aircraft::sizing::SizingStatus;
    use crate::sweep::driver::SweepSample;

    #[test]
    fn test_format_mass() {
        assert_eq!(format_mass(2838.4), "2.84 t");
        assert_eq!(format_mass(512.0), "512.00 kg");
    }

    #[test]
    fn test_format_scenario() {
        let scenario = ScenarioResult {
            extra_money: 60_000.0,
            samples: vec![SweepSample {
                requested_range: 7000.0,
                range: 6116.94,
                takeoff_weight: 100_000.0,
                cost: 0.095,
                status: SizingStatus::Exhausted,
            }],
        };

        assert_eq!(format_scenario(&scenario), "Fixed cost 60000: best range 6116.9 km");
    }

    #[test]
    fn test_format_scenario_without_samples() {
        let scenario = ScenarioResult {
            extra_money: 70_000.0,
            samples: Vec::new(),
        };

        assert_eq!(format_scenario(&scenario), "Fixed cost 70000: best range n/a");
    }

    #[test]
    fn test_format_sizing_lists_hydrogen() {
        let mut aircraft = Aircraft::from_overrides([("h2_volume", 40.0)]);
        let outcome = aircraft.update_weight(Default::default());

        let text = format_sizing(&aircraft, &outcome);

        assert!(text.contains("Hydrogen System: 2.84 t (2838.4000 kg)"));
        assert!(text.contains("Iterations: 10 (Exhausted"));
    }
}
