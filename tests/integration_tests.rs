use approx::{assert_abs_diff_eq, assert_relative_eq};
use bwb_sizing::{
    errors::SizingError, iterate_weight, run_sweep, Aircraft, AircraftParams, ConvergenceSettings,
    SizingStatus, SweepSettings, RANGE_TO_BEST_FILE, RANGE_TO_COST_FILE, RANGE_TO_WEIGHT_FILE,
};

// Helper function to create the blended-wing-body study aircraft
fn create_example_aircraft() -> Aircraft {
    Aircraft::new(AircraftParams::bwb_example())
}

fn read_table(path: &std::path::Path) -> Vec<(f64, f64)> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| {
            let mut columns = line.split(' ').map(|value| value.parse::<f64>().unwrap());
            (columns.next().unwrap(), columns.next().unwrap())
        })
        .collect()
}

#[test]
fn test_example_sizing_produces_finite_positive_results() {
    let mut aircraft = create_example_aircraft();

    let outcome = aircraft.update_weight(ConvergenceSettings::default());

    assert!(aircraft.takeoff_weight.is_finite() && aircraft.takeoff_weight > 0.0);
    assert!(aircraft.fuel.is_finite() && aircraft.fuel > 0.0);
    assert!(aircraft.cost.is_finite() && aircraft.cost > 0.0);
    assert_eq!(outcome.iterations, 10);
    assert_eq!(outcome.status, SizingStatus::Exhausted);

    assert_abs_diff_eq!(aircraft.takeoff_weight, 127_893.41, epsilon = 0.5);
    assert_abs_diff_eq!(aircraft.fuel, 54_702.97, epsilon = 0.5);
    assert_abs_diff_eq!(aircraft.cost, 0.135858, epsilon = 1e-5);
    assert_abs_diff_eq!(aircraft.target_range, 7116.937, epsilon = 1e-3);
}

#[test]
fn test_repeated_update_weight_keeps_shrinking_range() {
    let mut aircraft = create_example_aircraft();
    let range_h2 = aircraft.range_h2();
    let settings = ConvergenceSettings::default();

    aircraft.update_weight(settings);
    let after_first = aircraft.target_range;
    aircraft.update_weight(settings);
    let after_second = aircraft.target_range;

    assert_relative_eq!(after_first, 8000.0 - range_h2, max_relative = 1e-12);
    assert_relative_eq!(after_second, 8000.0 - 2.0 * range_h2, max_relative = 1e-12);
    assert_abs_diff_eq!(after_second, 6233.875, epsilon = 1e-3);
}

#[test]
fn test_converged_kerosene_aircraft_is_stable_under_one_more_iteration() {
    let mut params = AircraftParams::bwb_example();
    params.h2_volume = 0.0;
    let mut aircraft = Aircraft::new(params);
    let settings = ConvergenceSettings {
        max_iterations: 100,
        tolerance: 10.0,
    };

    let outcome = aircraft.update_weight(settings);
    assert!(outcome.is_converged());

    let before = aircraft.takeoff_weight;
    iterate_weight(&mut aircraft);

    assert!((aircraft.takeoff_weight - before).abs() < settings.tolerance);
}

#[test]
fn test_unsupported_fuel_type_leaves_aircraft_untouched() {
    let mut aircraft = create_example_aircraft();
    aircraft.update_weight(ConvergenceSettings::default());
    let before = aircraft.clone();

    let result = aircraft.range_from_fuel("diesel");

    assert!(matches!(result, Err(SizingError::UnsupportedFuelType(_))));
    assert_eq!(aircraft, before);
}

#[test]
fn test_unknown_parameters_do_not_abort_construction() {
    let aircraft = Aircraft::from_overrides([("wing_area", 900.0), ("h2_volume", 40.0)]);

    assert_relative_eq!(aircraft.h2_mass(), 2838.4, max_relative = 1e-12);
    assert_eq!(aircraft.takeoff_weight, 154_760.0);
}

#[test]
fn test_full_sweep_best_ranges() {
    let mut aircraft = create_example_aircraft();
    aircraft.update_weight(ConvergenceSettings::default());
    let offset = aircraft.range_h2();

    let report = run_sweep(&mut aircraft, &SweepSettings::default());

    assert_eq!(report.scenarios.len(), 9);
    let expected_requested = [
        7000.0, 7200.0, 7400.0, 7500.0, 7600.0, 7700.0, 7800.0, 7900.0, 7900.0,
    ];
    let best = report.best_ranges();
    assert_eq!(best.len(), 9);
    for (k, ((extra_money, range), requested)) in best.iter().zip(expected_requested).enumerate() {
        assert_eq!(*extra_money, 60_000.0 + 10_000.0 * k as f64);
        assert_abs_diff_eq!(*range, requested - offset, epsilon = 1e-6);
    }

    let last = report.last_scenario().unwrap();
    assert_eq!(last.samples.len(), 51);
    assert_abs_diff_eq!(last.samples[0].range, 4116.937, epsilon = 1e-3);
    assert_abs_diff_eq!(last.samples[0].takeoff_weight, 55_001.08, epsilon = 0.5);
    assert_abs_diff_eq!(last.samples[0].cost, 0.234720, epsilon = 1e-5);
    assert_abs_diff_eq!(last.samples[50].takeoff_weight, 496_917.8, epsilon = 1.0);
}

#[test]
fn test_sweep_tables_on_disk() {
    let dir = std::env::temp_dir().join("bwb_sizing_sweep_tables");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();

    let mut aircraft = create_example_aircraft();
    let report = run_sweep(&mut aircraft, &SweepSettings::default());
    let paths = report.write_tables(&dir).unwrap();

    assert_eq!(
        paths,
        vec![
            dir.join(RANGE_TO_WEIGHT_FILE),
            dir.join(RANGE_TO_COST_FILE),
            dir.join(RANGE_TO_BEST_FILE)
        ]
    );

    let last = report.last_scenario().unwrap();
    let weights = read_table(&dir.join(RANGE_TO_WEIGHT_FILE));
    let costs = read_table(&dir.join(RANGE_TO_COST_FILE));
    let best = read_table(&dir.join(RANGE_TO_BEST_FILE));

    assert_eq!(weights.len(), 51);
    assert_eq!(costs.len(), 51);
    assert_eq!(best.len(), 9);
    for ((weight_row, cost_row), sample) in weights.iter().zip(&costs).zip(&last.samples) {
        assert_eq!(weight_row.0, sample.range);
        assert_eq!(weight_row.1, sample.takeoff_weight / 1000.0);
        assert_eq!(cost_row.1, sample.cost);
    }
    assert_eq!(best, report.best_ranges());
}
