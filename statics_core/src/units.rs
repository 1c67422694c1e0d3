//! # Unit Systems
//!
//! The solver is unit-agnostic: any consistent set of units goes in and the
//! same set comes out. The unit system chosen by the caller is only echoed in
//! response metadata and used for labels in text reports.
//!
//! ## Example
//!
//! ```rust
//! use statics_core::units::UnitSystem;
//!
//! let units: UnitSystem = "us".parse().unwrap();
//! assert_eq!(units, UnitSystem::Us);
//! assert_eq!(units.force(), "lbf");
//! assert_eq!(UnitSystem::default().moment(), "N·m");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::CalcError;

/// Unit system for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum UnitSystem {
    /// Newtons and metres
    #[default]
    #[serde(rename = "SI")]
    Si,
    /// Pounds-force and feet
    #[serde(rename = "US")]
    Us,
}

impl UnitSystem {
    pub fn length(&self) -> &'static str {
        match self {
            UnitSystem::Si => "m",
            UnitSystem::Us => "ft",
        }
    }

    pub fn force(&self) -> &'static str {
        match self {
            UnitSystem::Si => "N",
            UnitSystem::Us => "lbf",
        }
    }

    pub fn moment(&self) -> &'static str {
        match self {
            UnitSystem::Si => "N·m",
            UnitSystem::Us => "lbf·ft",
        }
    }

    pub fn intensity(&self) -> &'static str {
        match self {
            UnitSystem::Si => "N/m",
            UnitSystem::Us => "lbf/ft",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Si => write!(f, "SI"),
            UnitSystem::Us => write!(f, "US"),
        }
    }
}

impl FromStr for UnitSystem {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SI" | "" => Ok(UnitSystem::Si),
            "US" => Ok(UnitSystem::Us),
            _ => Err(CalcError::invalid_input(
                "unit_system",
                s,
                "Unknown unit system; expected SI or US",
            )),
        }
    }
}

impl<'de> Deserialize<'de> for UnitSystem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.as_deref()
            .unwrap_or_default()
            .parse()
            .map_err(serde::de::Error::custom)
    }
}
