use std::str::FromStr;

use tracing::warn;

use crate::constants::*;
use crate::errors::SizingError;

/// Input-side description of the aircraft. Every recognized construction key maps to
/// exactly one field here; derived hydrogen quantities live on [`crate::Aircraft`].
#[derive(Debug, Clone, PartialEq)]
pub struct AircraftParams {
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
    pub h2_mass_ratio: f64,
}

impl Default for AircraftParams {
    fn default() -> Self {
        Self {
            target_range: DEFAULT_TARGET_RANGE,
            takeoff_weight: DEFAULT_TAKEOFF_WEIGHT,
            empty_fraction: DEFAULT_EMPTY_FRACTION,
            lift_to_drag: DEFAULT_LIFT_TO_DRAG,
            sfc: DEFAULT_SFC,
            velocity: DEFAULT_VELOCITY,
            payload: DEFAULT_PAYLOAD,
            fuel: DEFAULT_FUEL,
            extra_money: DEFAULT_EXTRA_MONEY,
            cost: DEFAULT_COST,
            h2_volume: DEFAULT_H2_VOLUME,
            h2_mass_ratio: DEFAULT_H2_MASS_RATIO,
        }
    }
}

/// Names accepted as construction overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    TargetRange,
    TakeoffWeight,
    EmptyFraction,
    LiftToDrag,
    Sfc,
    Velocity,
    Payload,
    Fuel,
    ExtraMoney,
    Cost,
    H2Volume,
    H2MassRatio,
}

impl Parameter {
    pub const ALL: [Parameter; 12] = [
        Parameter::TargetRange,
        Parameter::TakeoffWeight,
        Parameter::EmptyFraction,
        Parameter::LiftToDrag,
        Parameter::Sfc,
        Parameter::Velocity,
        Parameter::Payload,
        Parameter::Fuel,
        Parameter::ExtraMoney,
        Parameter::Cost,
        Parameter::H2Volume,
        Parameter::H2MassRatio,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Parameter::TargetRange => "target_R",
            Parameter::TakeoffWeight => "Wto",
            Parameter::EmptyFraction => "empty",
            Parameter::LiftToDrag => "LD",
            Parameter::Sfc => "SFC",
            Parameter::Velocity => "Velocity",
            Parameter::Payload => "payload",
            Parameter::Fuel => "fuel",
            Parameter::ExtraMoney => "extra_money",
            Parameter::Cost => "cost",
            Parameter::H2Volume => "h2_volume",
            Parameter::H2MassRatio => "Hmr",
        }
    }
}

impl FromStr for Parameter {
    type Err = SizingError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Parameter::ALL
            .into_iter()
            .find(|parameter| parameter.key() == key)
            .ok_or_else(|| SizingError::UnknownParameter(key.to_string()))
    }
}

impl AircraftParams {
    /// Builds a parameter set from the defaults, overriding every recognized key.
    /// Unrecognized keys are reported with a warning and skipped.
    pub fn from_overrides<I, K>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let mut params = Self::default();
        for (key, value) in overrides {
            match key.as_ref().parse::<Parameter>() {
                Ok(parameter) => params.set(parameter, value),
                Err(err) => warn!("{err}, ignored"),
            }
        }
        params
    }

    pub fn set(&mut self, parameter: Parameter, value: f64) {
        let field = match parameter {
            Parameter::TargetRange => &mut self.target_range,
            Parameter::TakeoffWeight => &mut self.takeoff_weight,
            Parameter::EmptyFraction => &mut self.empty_fraction,
            Parameter::LiftToDrag => &mut self.lift_to_drag,
            Parameter::Sfc => &mut self.sfc,
            Parameter::Velocity => &mut self.velocity,
            Parameter::Payload => &mut self.payload,
            Parameter::Fuel => &mut self.fuel,
            Parameter::ExtraMoney => &mut self.extra_money,
            Parameter::Cost => &mut self.cost,
            Parameter::H2Volume => &mut self.h2_volume,
            Parameter::H2MassRatio => &mut self.h2_mass_ratio,
        };
        *field = value;
    }

    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::TargetRange => self.target_range,
            Parameter::TakeoffWeight => self.takeoff_weight,
            Parameter::EmptyFraction => self.empty_fraction,
            Parameter::LiftToDrag => self.lift_to_drag,
            Parameter::Sfc => self.sfc,
            Parameter::Velocity => self.velocity,
            Parameter::Payload => self.payload,
            Parameter::Fuel => self.fuel,
            Parameter::ExtraMoney => self.extra_money,
            Parameter::Cost => self.cost,
            Parameter::H2Volume => self.h2_volume,
            Parameter::H2MassRatio => self.h2_mass_ratio,
        }
    }

    /// The blended-wing-body study configuration with a 40 m³ hydrogen tank.
    pub fn bwb_example() -> Self {
        Self::from_overrides([
            ("target_R", 8000.0),
            ("Wto", 134_760.0),
            ("empty", 0.45),
            ("LD", 8.4),
            ("SFC", 0.11),
            ("Velocity", 531.126),
            ("payload", 160.0 * 80.0),
            ("fuel", 72.3 * 1000.0),
            ("extra_money", 100.0 * 1000.0),
            ("h2_volume", 40.0),
        ])
    }
}
