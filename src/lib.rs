pub mod aircraft;
pub mod constants;
pub mod errors;
#[cfg(feature = "plot")]
pub mod plot;
pub mod sweep;

pub use constants::*;
pub use errors::{SizingError, SizingResult};

pub use aircraft::fuel::FuelType;
pub use aircraft::model::Aircraft;
pub use aircraft::params::{AircraftParams, Parameter};
pub use aircraft::sizing::{
    iterate_weight, size_for_range, ConvergenceSettings, SizingOutcome, SizingStatus,
};

// Re-export commonly used items from sweep
pub use sweep::driver::{
    run_sweep, run_sweep_with, CostCurve, ScenarioResult, SweepReport, SweepSample, SweepSettings,
};
pub use sweep::tables::write_table;
