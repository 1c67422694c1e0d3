//! CSV export of sampled diagrams.

use crate::calculations::beam::BeamAnalysis;
use crate::errors::{CalcError, CalcResult};

/// Header row of the diagram CSV
pub const CSV_HEADER: [&str; 4] = ["position", "shear", "moment", "torque"];

/// Write one CSV row per diagram sample.
///
/// ```rust
/// use statics_core::calculations::beam::{calculate, BeamConfiguration};
/// use statics_core::export::diagrams_to_csv;
///
/// let result = calculate(&BeamConfiguration::new(2.0).with_num_points(2)).unwrap();
/// let csv = diagrams_to_csv(&result).unwrap();
/// assert_eq!(csv.lines().count(), 4);
/// assert!(csv.starts_with("position,shear,moment,torque"));
/// ```
pub fn diagrams_to_csv(analysis: &BeamAnalysis) -> CalcResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(CSV_HEADER)
        .map_err(|e| CalcError::serialization(e.to_string()))?;
    for sample in analysis.samples() {
        writer
            .write_record([
                sample.position.to_string(),
                sample.shear.to_string(),
                sample.moment.to_string(),
                sample.torque.to_string(),
            ])
            .map_err(|e| CalcError::serialization(e.to_string()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| CalcError::serialization(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| CalcError::serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::beam::{calculate, BeamConfiguration};
    use crate::loads::PointLoad;

    #[test]
    fn test_rows_match_samples() {
        let beam = BeamConfiguration::new(10.0)
            .with_point_load(PointLoad::new(5.0, 100.0))
            .with_num_points(2);
        let csv = diagrams_to_csv(&calculate(&beam).unwrap()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "0,50,0,0");
        assert_eq!(lines[2], "5,50,250,250");
        assert_eq!(lines[3], "10,0,0,0");
    }
}
