use crate::constants::{
    H2_MASS_PER_VOLUME, HYDROGEN_HEATING_VALUE, KEROSENE_HEATING_VALUE, PASSENGER_MASS,
};
use crate::errors::SizingResult;

use super::breguet;
use super::fuel::FuelType;
use super::params::AircraftParams;
use super::sizing::{size_for_range, ConvergenceSettings, SizingOutcome};

/// Blended-wing-body aircraft with an optional liquid-hydrogen tank.
///
/// The hydrogen quantities are derived once in [`Aircraft::new`] and stay fixed for the
/// lifetime of the instance, even if `h2_volume` or `sfc` are changed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Aircraft {
    pub target_range: f64,   // km
    pub takeoff_weight: f64, // kg
    pub empty_fraction: f64,
    pub lift_to_drag: f64,
    pub sfc: f64,      // kg/(N·h)
    pub velocity: f64, // m/s
    pub payload: f64,  // kg
    pub fuel: f64,     // kg
    pub extra_money: f64,
    pub cost: f64,      // per passenger-km
    pub h2_volume: f64, // m³
    /// Carried for completeness, no formula consumes it.
    pub h2_mass_ratio: f64,
    h2_mass: f64,  // kg
    sfc_h2: f64,   // kg/(N·h)
    range_h2: f64, // km
}

impl Aircraft {
    pub fn new(params: AircraftParams) -> Self {
        let mut aircraft = Aircraft {
            target_range: params.target_range,
            takeoff_weight: params.takeoff_weight,
            empty_fraction: params.empty_fraction,
            lift_to_drag: params.lift_to_drag,
            sfc: params.sfc,
            velocity: params.velocity,
            payload: params.payload,
            fuel: params.fuel,
            extra_money: params.extra_money,
            cost: params.cost,
            h2_volume: params.h2_volume,
            h2_mass_ratio: params.h2_mass_ratio,
            h2_mass: 0.0,
            sfc_h2: 0.0,
            range_h2: 0.0,
        };

        aircraft.h2_mass = H2_MASS_PER_VOLUME * aircraft.h2_volume;
        aircraft.sfc_h2 = aircraft.sfc * KEROSENE_HEATING_VALUE / HYDROGEN_HEATING_VALUE;
        aircraft.range_h2 = aircraft.range_for(FuelType::H2);

        aircraft
    }

    /// Constructs from name/value pairs, see [`AircraftParams::from_overrides`].
    pub fn from_overrides<I, K>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        Self::new(AircraftParams::from_overrides(overrides))
    }

    pub fn h2_mass(&self) -> f64 {
        self.h2_mass
    }

    pub fn sfc_h2(&self) -> f64 {
        self.sfc_h2
    }

    pub fn range_h2(&self) -> f64 {
        self.range_h2
    }

    /// Forward Breguet range for the named fuel (`"fuel"` or `"h2"`).
    pub fn range_from_fuel(&self, fuel_type: &str) -> SizingResult<f64> {
        let fuel_type = fuel_type.parse::<FuelType>()?;
        Ok(self.range_for(fuel_type))
    }

    pub fn range_for(&self, fuel_type: FuelType) -> f64 {
        let (current_sfc, current_fuel) = match fuel_type {
            FuelType::Fuel => (self.sfc, self.fuel),
            FuelType::H2 => (self.sfc_h2, self.h2_mass),
        };

        breguet::range_from_fuel(
            self.velocity,
            self.lift_to_drag,
            current_sfc,
            self.takeoff_weight,
            current_fuel,
        )
    }

    /// Kerosene needed to fly `target_range` at the current takeoff weight, without margin.
    pub fn fuel_for_range(&self) -> f64 {
        breguet::fuel_for_range(
            self.velocity,
            self.lift_to_drag,
            self.sfc,
            self.takeoff_weight,
            self.target_range,
        )
    }

    pub fn passengers(&self) -> f64 {
        self.payload / PASSENGER_MASS
    }

    pub fn cost_per_pax_km(&self) -> f64 {
        let total = self.fuel + self.extra_money;

        total / (self.target_range * self.passengers())
    }

    /// Takeoff weight closing the mass budget for the current fuel load.
    pub fn closure_weight(&self) -> f64 {
        let other_weight = self.payload + self.fuel + self.h2_mass;
        (1.0 / (1.0 - self.empty_fraction)) * other_weight
    }

    /// Runs the weight/fuel iteration in place.
    ///
    /// `target_range` is reduced by `range_h2` on every call, so calling this twice
    /// without resetting `target_range` sizes for an ever shorter kerosene leg.
    pub fn update_weight(&mut self, settings: ConvergenceSettings) -> SizingOutcome {
        let outcome = size_for_range(self, settings);
        self.apply(&outcome);
        outcome
    }

    pub fn apply(&mut self, outcome: &SizingOutcome) {
        self.target_range = outcome.target_range;
        self.takeoff_weight = outcome.takeoff_weight;
        self.fuel = outcome.fuel;
        self.cost = outcome.cost;
    }
}

impl Default for Aircraft {
    fn default() -> Self {
        Aircraft::new(AircraftParams::default())
    }
}
