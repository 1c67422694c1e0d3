//! # Supports
//!
//! Support A sits at x = 0 and support B at x = L. Support C is an optional
//! intermediate support that is only active when its type is not `None`.
//!
//! All supports here react vertically only. The type is carried for display
//! and for the horizontal component slot of the reaction report, which is
//! always zero because every modeled load is transverse.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::CalcError;

/// Support condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum SupportType {
    /// Fixed (pinned) support
    Fixed,

    /// Roller / movable support
    #[default]
    Roller,

    /// No support. Only valid for support C.
    None,
}

impl SupportType {
    /// All available support types for selection lists
    pub const ALL: [SupportType; 3] = [SupportType::Fixed, SupportType::Roller, SupportType::None];

    /// Returns true if this support provides a reaction
    pub fn is_active(&self) -> bool {
        !matches!(self, SupportType::None)
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SupportType::Fixed => "Fixed",
            SupportType::Roller => "Roller",
            SupportType::None => "None",
        }
    }
}

impl fmt::Display for SupportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for SupportType {
    type Err = CalcError;

    /// Case-insensitive; accepts the English names plus the Spanish labels
    /// (`Fijo`, `Movil`, `Ninguno`) that older form payloads still send.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fixed" | "fijo" | "pinned" => Ok(SupportType::Fixed),
            "roller" | "movable" | "movil" | "móvil" | "hinge" => Ok(SupportType::Roller),
            "none" | "ninguno" | "" => Ok(SupportType::None),
            _ => Err(CalcError::invalid_input(
                "support_type",
                s,
                "Expected one of Fixed, Roller, None",
            )),
        }
    }
}

impl<'de> Deserialize<'de> for SupportType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            Some(s) => s.parse().map_err(serde::de::Error::custom),
            None => Ok(SupportType::None),
        }
    }
}

/// Support position summary echoed in analysis results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportSummary {
    #[serde(rename = "type")]
    pub support_type: SupportType,
    /// `None` for an inactive support C
    pub position: Option<f64>,
}

/// Summary of all three supports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportLayout {
    #[serde(rename = "A")]
    pub a: SupportSummary,
    #[serde(rename = "B")]
    pub b: SupportSummary,
    #[serde(rename = "C")]
    pub c: SupportSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases() {
        assert_eq!("Fijo".parse::<SupportType>().unwrap(), SupportType::Fixed);
        assert_eq!("MÓVIL".parse::<SupportType>().unwrap(), SupportType::Roller);
        assert_eq!("hinge".parse::<SupportType>().unwrap(), SupportType::Roller);
        assert_eq!("Ninguno".parse::<SupportType>().unwrap(), SupportType::None);
        assert_eq!("  ".parse::<SupportType>().unwrap(), SupportType::None);
        assert!("clamp".parse::<SupportType>().is_err());
    }

    #[test]
    fn test_deserialize_null_is_none() {
        let t: SupportType = serde_json::from_str("null").unwrap();
        assert_eq!(t, SupportType::None);
        let t: SupportType = serde_json::from_str("\"Movil\"").unwrap();
        assert_eq!(t, SupportType::Roller);
    }

    #[test]
    fn test_serializes_canonical_name() {
        assert_eq!(serde_json::to_string(&SupportType::Fixed).unwrap(), "\"Fixed\"");
    }

    #[test]
    fn test_activity() {
        assert!(SupportType::Fixed.is_active());
        assert!(SupportType::Roller.is_active());
        assert!(!SupportType::None.is_active());
    }
}
