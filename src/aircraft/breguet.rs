//! Breguet range equation in the unit system used throughout the crate:
//! range in km, masses in kg, velocity in m/s and SFC in kg/(N·h).

use crate::constants::{GRAVITY, SFC_UNIT_CONVERSION};

/// Range reachable by burning `fuel` out of a gross weight of `takeoff_weight`.
///
/// Not finite when `fuel >= takeoff_weight`.
pub fn range_from_fuel(
    velocity: f64,
    lift_to_drag: f64,
    sfc: f64,
    takeoff_weight: f64,
    fuel: f64,
) -> f64 {
    let c = sfc / SFC_UNIT_CONVERSION;
    let final_weight = takeoff_weight - fuel;

    (velocity * lift_to_drag * (takeoff_weight / final_weight).ln()) / (c * GRAVITY)
}

/// Fuel mass needed to fly `range` starting at `takeoff_weight`.
pub fn fuel_for_range(
    velocity: f64,
    lift_to_drag: f64,
    sfc: f64,
    takeoff_weight: f64,
    range: f64,
) -> f64 {
    let c = sfc / SFC_UNIT_CONVERSION;
    let final_weight = takeoff_weight / (range * c * GRAVITY / (velocity * lift_to_drag)).exp();

    takeoff_weight - final_weight
}
