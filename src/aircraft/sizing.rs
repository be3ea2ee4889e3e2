use tracing::debug;

use crate::constants::{CONVERGENCE_TOLERANCE, FUEL_MARGIN, MAX_ITERATIONS};

use super::model::Aircraft;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceSettings {
    pub max_iterations: usize,
    pub tolerance: f64, // kg
}

impl Default for ConvergenceSettings {
    fn default() -> Self {
        Self {
            max_iterations: MAX_ITERATIONS,
            tolerance: CONVERGENCE_TOLERANCE,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SizingStatus {
    Converged,
    Exhausted,
}

/// Result of one sizing pass. Both statuses carry usable values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizingOutcome {
    /// Kerosene leg, i.e. the requested range minus the hydrogen range.
    pub target_range: f64,
    pub takeoff_weight: f64,
    pub fuel: f64,
    pub cost: f64,
    pub iterations: usize,
    /// Weight change of the last iteration, NaN when no iteration ran.
    pub residual: f64,
    pub status: SizingStatus,
}

impl SizingOutcome {
    pub fn is_converged(&self) -> bool {
        self.status == SizingStatus::Converged
    }
}

/// One fixed-point step: strip the hydrogen system from the gross weight, refuel with
/// margin, close the weight budget. Returns the weight change.
pub fn iterate_weight(aircraft: &mut Aircraft) -> f64 {
    aircraft.takeoff_weight -= aircraft.h2_mass();
    aircraft.fuel = aircraft.fuel_for_range() * FUEL_MARGIN;

    let previous = aircraft.takeoff_weight;
    aircraft.takeoff_weight = aircraft.closure_weight();

    (previous - aircraft.takeoff_weight).abs()
}

/// Sizes `aircraft` for its current `target_range` without touching it.
pub fn size_for_range(aircraft: &Aircraft, settings: ConvergenceSettings) -> SizingOutcome {
    let mut state = aircraft.clone();
    state.target_range -= state.range_h2();

    let mut iterations = 0;
    let mut residual = f64::NAN;
    let mut status = SizingStatus::Exhausted;

    for iteration in 0..settings.max_iterations {
        residual = iterate_weight(&mut state);
        iterations = iteration + 1;
        debug!(
            iteration,
            takeoff_weight = state.takeoff_weight,
            fuel = state.fuel,
            residual,
            "weight iteration"
        );

        if residual < settings.tolerance {
            status = SizingStatus::Converged;
            break;
        }
    }

    if status == SizingStatus::Exhausted {
        debug!(
            iterations,
            residual,
            target_range = state.target_range,
            "weight iteration budget exhausted"
        );
    }

    SizingOutcome {
        target_range: state.target_range,
        takeoff_weight: state.takeoff_weight,
        fuel: state.fuel,
        cost: state.cost_per_pax_km(),
        iterations,
        residual,
        status,
    }
}
