//! # Request/Response Envelope
//!
//! JSON shapes exchanged with callers of the solver, whether over HTTP or
//! in process. The envelope adds analysis options on the way in and
//! metadata on the way out; the numeric payload is exactly what
//! [`calculate`](crate::calculations::beam::calculate) returns.
//!
//! ## Example
//!
//! ```rust
//! use statics_core::api::{analyze, BeamRequest};
//!
//! let request: BeamRequest = serde_json::from_str(r#"{
//!     "length": 10,
//!     "point_loads": [{"label": "P", "position": 5, "magnitude": 100}],
//!     "analysis": {"num_points": 200, "unit_system": "si"}
//! }"#).unwrap();
//!
//! let response = analyze(&request).unwrap();
//! assert_eq!(response.analysis.diagrams.positions.len(), 201);
//! assert_eq!(response.metadata.unit_system.to_string(), "SI");
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::calculations::beam::{self, BeamAnalysis, BeamConfiguration, DEFAULT_SAMPLE_COUNT};
use crate::calculations::reactions::ReactionSet;
use crate::errors::{CalcError, CalcResult};
use crate::units::UnitSystem;

// ============================================================================
// Options
// ============================================================================

/// Preferred export format; echoed in metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
    Xlsx,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ExportFormat {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" | "" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "xlsx" => Ok(ExportFormat::Xlsx),
            _ => Err(CalcError::invalid_input(
                "export_format",
                s,
                "Unsupported export format; expected json, csv or xlsx",
            )),
        }
    }
}

impl<'de> Deserialize<'de> for ExportFormat {
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

fn default_num_points() -> usize {
    DEFAULT_SAMPLE_COUNT
}

/// Tuning parameters for one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    #[serde(default = "default_num_points")]
    pub num_points: usize,
    #[serde(default)]
    pub export_format: ExportFormat,
    #[serde(default)]
    pub unit_system: UnitSystem,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        AnalysisOptions {
            num_points: default_num_points(),
            export_format: ExportFormat::default(),
            unit_system: UnitSystem::default(),
        }
    }
}

// ============================================================================
// Request
// ============================================================================

/// Full analysis request: beam configuration plus options.
///
/// A top-level `num_points` takes precedence over `analysis.num_points`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamRequest {
    #[serde(flatten)]
    pub beam: BeamConfiguration,
    #[serde(default)]
    pub analysis: AnalysisOptions,
}

impl BeamRequest {
    pub fn new(beam: BeamConfiguration) -> Self {
        BeamRequest {
            beam,
            analysis: AnalysisOptions::default(),
        }
    }

    /// Configuration with the effective sample count resolved
    pub fn configuration(&self) -> BeamConfiguration {
        let mut beam = self.beam.clone();
        beam.num_points = Some(beam.num_points.unwrap_or(self.analysis.num_points));
        beam
    }
}

/// Request for the internal torque at a single position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TorsorAtRequest {
    #[serde(flatten)]
    pub request: BeamRequest,
    pub x: f64,
}

// ============================================================================
// Response
// ============================================================================

/// Response metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseMetadata {
    /// RFC 3339 UTC timestamp of the analysis
    pub timestamp: String,
    pub unit_system: UnitSystem,
    pub export_format: ExportFormat,
}

impl ResponseMetadata {
    pub fn new(options: &AnalysisOptions, at: DateTime<Utc>) -> Self {
        ResponseMetadata {
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            unit_system: options.unit_system,
            export_format: options.export_format,
        }
    }
}

/// Analysis result plus metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    #[serde(flatten)]
    pub analysis: BeamAnalysis,
    pub metadata: ResponseMetadata,
}

/// Failure body: a human-readable message and a stable code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
    pub code: String,
}

impl From<&CalcError> for ErrorResponse {
    fn from(err: &CalcError) -> Self {
        ErrorResponse {
            detail: err.to_string(),
            code: err.error_code().to_string(),
        }
    }
}

/// `{ "x_cm": ... }`; `null` when the loads sum to zero
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CenterOfMassReply {
    pub x_cm: Option<f64>,
}

/// `{ "x": ..., "torsor": ... }`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TorsorAtReply {
    pub x: f64,
    pub torsor: f64,
}

// ============================================================================
// Entry points
// ============================================================================

/// Run a full analysis and attach metadata
pub fn analyze(request: &BeamRequest) -> CalcResult<AnalysisResponse> {
    let analysis = beam::calculate(&request.configuration())?;
    Ok(AnalysisResponse {
        analysis,
        metadata: ResponseMetadata::new(&request.analysis, Utc::now()),
    })
}

/// Reactions only
pub fn reactions(request: &BeamRequest) -> CalcResult<ReactionSet> {
    beam::reactions(&request.configuration())
}

/// Position of the combined load resultant
pub fn center_of_mass(request: &BeamRequest) -> CalcResult<CenterOfMassReply> {
    let beam = request.configuration();
    beam.validate()?;
    Ok(CenterOfMassReply {
        x_cm: beam.loads.center_of_mass(),
    })
}

/// Internal torque at `x`
pub fn torsor_at(request: &TorsorAtRequest) -> CalcResult<TorsorAtReply> {
    let torsor = beam::torsor_at(&request.request.configuration(), request.x)?;
    Ok(TorsorAtReply {
        x: request.x,
        torsor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_top_level_num_points_wins() {
        let request: BeamRequest = serde_json::from_str(
            r#"{"length": 4, "num_points": 10, "analysis": {"num_points": 300}}"#,
        )
        .unwrap();
        assert_eq!(request.configuration().sample_count(), 10);

        let request: BeamRequest =
            serde_json::from_str(r#"{"length": 4, "analysis": {"num_points": 300}}"#).unwrap();
        assert_eq!(request.configuration().sample_count(), 300);
    }

    #[test]
    fn test_options_defaults_and_parsing() {
        let options: AnalysisOptions =
            serde_json::from_str(r#"{"export_format": "CSV", "unit_system": "us"}"#).unwrap();
        assert_eq!(options.num_points, DEFAULT_SAMPLE_COUNT);
        assert_eq!(options.export_format, ExportFormat::Csv);
        assert_eq!(options.unit_system, UnitSystem::Us);
        assert!(serde_json::from_str::<AnalysisOptions>(r#"{"export_format": "pdf"}"#).is_err());
    }

    #[test]
    fn test_spanish_support_labels_accepted() {
        let request: BeamRequest = serde_json::from_str(
            r#"{"length": 10, "support_a_type": "Fijo", "support_b_type": "Movil",
                "support_c_type": "Movil", "support_c_position": 5,
                "point_loads": [{"position": 5, "magnitude": 100}], "num_points": 10}"#,
        )
        .unwrap();
        let r = reactions(&request).unwrap();
        assert_eq!(r.a, r.c);
        assert!((r.total() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_metadata_timestamp_format() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let meta = ResponseMetadata::new(&AnalysisOptions::default(), at);
        assert_eq!(meta.timestamp, "2024-03-01T12:30:00.000Z");
    }

    #[test]
    fn test_response_shape() {
        let request = BeamRequest::new(
            BeamConfiguration::new(10.0)
                .with_point_load(crate::loads::PointLoad::new(5.0, 100.0))
                .with_num_points(4),
        );
        let value = serde_json::to_value(analyze(&request).unwrap()).unwrap();
        for key in [
            "reactions",
            "equilibrium",
            "center_of_mass",
            "diagrams",
            "torsor",
            "loads",
            "supports",
            "metadata",
        ] {
            assert!(value.get(key).is_some(), "missing key {}", key);
        }
        assert_eq!(value["reactions"]["A"]["vertical"], 50.0);
        assert_eq!(value["metadata"]["export_format"], "json");
    }

    #[test]
    fn test_center_of_mass_null_without_loads() {
        let request = BeamRequest::new(BeamConfiguration::new(5.0));
        let reply = center_of_mass(&request).unwrap();
        assert_eq!(serde_json::to_string(&reply).unwrap(), r#"{"x_cm":null}"#);
    }

    #[test]
    fn test_error_response_body() {
        let err = CalcError::invalid_input("length", "-1", "Beam length must be positive");
        let body = ErrorResponse::from(&err);
        assert_eq!(body.code, "INVALID_INPUT");
        assert!(body.detail.contains("length"));
    }
}
