// Physical Constants
pub const GRAVITY: f64 = 9.8; // m/s²
pub const SFC_UNIT_CONVERSION: f64 = 3.6; // kg/(N·h) -> km-consistent time base

// Fuel Constants
pub const KEROSENE_HEATING_VALUE: f64 = 43.1; // MJ/kg
pub const HYDROGEN_HEATING_VALUE: f64 = 120.0; // MJ/kg
pub const H2_MASS_PER_VOLUME: f64 = 70.96; // kg/m³, tank + propellant
pub const FUEL_MARGIN: f64 = 1.15; // 15% over the Breguet requirement

// Economics
pub const PASSENGER_MASS: f64 = 80.0; // kg per passenger incl. baggage

// Aircraft Defaults
pub const DEFAULT_TARGET_RANGE: f64 = 8000.0; // km
pub const DEFAULT_TAKEOFF_WEIGHT: f64 = 154_760.0; // kg
pub const DEFAULT_EMPTY_FRACTION: f64 = 0.45;
pub const DEFAULT_LIFT_TO_DRAG: f64 = 8.4;
pub const DEFAULT_SFC: f64 = 0.11; // kg/(N·h)
pub const DEFAULT_VELOCITY: f64 = 531.126; // m/s
pub const DEFAULT_PAYLOAD: f64 = 160.0 * PASSENGER_MASS; // kg
pub const DEFAULT_FUEL: f64 = 72.3 * 1000.0; // kg
pub const DEFAULT_EXTRA_MONEY: f64 = 100.0 * 1000.0;
pub const DEFAULT_COST: f64 = 1.0;
pub const DEFAULT_H2_VOLUME: f64 = 0.0; // m³
pub const DEFAULT_H2_MASS_RATIO: f64 = 0.8;

// Convergence Parameters
pub const MAX_ITERATIONS: usize = 10;
pub const CONVERGENCE_TOLERANCE: f64 = 10.0; // kg

// Sweep Parameters
pub const SCENARIO_COUNT: usize = 9;
pub const SCENARIO_BASE_COST: f64 = 60_000.0;
pub const SCENARIO_COST_STEP: f64 = 10_000.0;
pub const RANGE_SAMPLE_COUNT: usize = 51;
pub const RANGE_START: f64 = 5000.0; // km
pub const RANGE_STEP: f64 = 100.0; // km

// Output Files
pub const RANGE_TO_WEIGHT_FILE: &str = "range2weight.dat";
pub const RANGE_TO_COST_FILE: &str = "range2cost.dat";
pub const RANGE_TO_BEST_FILE: &str = "range2best.dat";
