use std::fmt;
use std::str::FromStr;

use crate::errors::SizingError;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FuelType {
    Fuel,
    H2,
}

impl FromStr for FuelType {
    type Err = SizingError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "fuel" => Ok(FuelType::Fuel),
            "h2" => Ok(FuelType::H2),
            other => Err(SizingError::UnsupportedFuelType(other.to_string())),
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FuelType::Fuel => write!(f, "fuel"),
            FuelType::H2 => write!(f, "h2"),
        }
    }
}
