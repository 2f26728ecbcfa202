//! Physical quantity kinds with a linear (ratio) scale.

use std::fmt;
use std::str::FromStr;

use ck_core::{Error, PrecisionConfig};
use serde::{Deserialize, Serialize};

/// A physical quantity whose units differ only by a scale factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityKind {
    /// Base unit: meter.
    Length,
    /// Base unit: kilogram.
    Weight,
    /// Base unit: square meter.
    Area,
    /// Base unit: liter.
    Volume,
    /// Base unit: meter per second.
    Speed,
    /// Base unit: second.
    Time,
}

impl QuantityKind {
    /// Every kind, in catalogue order.
    pub const ALL: [QuantityKind; 6] = [
        QuantityKind::Length,
        QuantityKind::Weight,
        QuantityKind::Area,
        QuantityKind::Volume,
        QuantityKind::Speed,
        QuantityKind::Time,
    ];

    /// Lowercase name, as used in messages and tool ids.
    pub fn name(self) -> &'static str {
        match self {
            QuantityKind::Length => "length",
            QuantityKind::Weight => "weight",
            QuantityKind::Area => "area",
            QuantityKind::Volume => "volume",
            QuantityKind::Speed => "speed",
            QuantityKind::Time => "time",
        }
    }

    /// Canonical name of the unit whose factor is exactly 1.
    pub fn base_unit(self) -> &'static str {
        match self {
            QuantityKind::Length => "meter",
            QuantityKind::Weight => "kilogram",
            QuantityKind::Area => "square_meter",
            QuantityKind::Volume => "liter",
            QuantityKind::Speed => "meter_per_second",
            QuantityKind::Time => "second",
        }
    }

    /// Decimal places used when displaying a converted value.
    pub fn display_precision(self, precision: &PrecisionConfig) -> u8 {
        match self {
            QuantityKind::Length => precision.length,
            QuantityKind::Weight => precision.weight,
            QuantityKind::Area => precision.area,
            QuantityKind::Volume => precision.volume,
            QuantityKind::Speed => precision.speed,
            QuantityKind::Time => precision.time,
        }
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for QuantityKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "length" | "distance" => Ok(QuantityKind::Length),
            "weight" | "mass" => Ok(QuantityKind::Weight),
            "area" => Ok(QuantityKind::Area),
            "volume" => Ok(QuantityKind::Volume),
            "speed" => Ok(QuantityKind::Speed),
            "time" | "duration" => Ok(QuantityKind::Time),
            other => Err(Error::invalid_input(format!("unknown quantity: {other}"))),
        }
    }
}
