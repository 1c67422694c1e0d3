//! # File I/O Module
//!
//! Reads beam requests from JSON files and writes results with atomic saves:
//! write to a `.tmp` sibling, sync, then rename over the target so a reader
//! never sees a half-written file.
//!
//! ## Example
//!
//! ```rust,no_run
//! use statics_core::api::analyze;
//! use statics_core::file_io::{load_request, save_json};
//! use std::path::Path;
//!
//! let request = load_request(Path::new("beam.json"))?;
//! let response = analyze(&request)?;
//! save_json(&response, Path::new("beam.result.json"))?;
//! # Ok::<(), statics_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::api::BeamRequest;
use crate::errors::{CalcError, CalcResult};

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Read a file to a string, mapping I/O failures to `FileError`
pub fn read_to_string(path: &Path) -> CalcResult<String> {
    let mut file = File::open(path)
        .map_err(|e| CalcError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
    Ok(contents)
}

/// Load a [`BeamRequest`] from a JSON file.
///
/// * `Err(CalcError::FileError)` - I/O error
/// * `Err(CalcError::SerializationError)` - Invalid JSON
pub fn load_request(path: &Path) -> CalcResult<BeamRequest> {
    let contents = read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })
}

/// Write text to `path` atomically
pub fn save_text(contents: &str, path: &Path) -> CalcResult<()> {
    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(contents.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Serialize `value` as pretty JSON and write it atomically
pub fn save_json<T: Serialize>(value: &T, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(value)?;
    save_text(&json, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_request() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("beam.json");
        fs::write(
            &path,
            r#"{"length": 6, "torsor": 18, "point_loads": [{"position": 4.5, "magnitude": 12}]}"#,
        )
        .unwrap();

        let request = load_request(&path).unwrap();
        assert_eq!(request.beam.length, 6.0);
        assert_eq!(request.beam.torsor, 18.0);
        assert_eq!(request.beam.loads.point_loads.len(), 1);
    }

    #[test]
    fn test_missing_file_is_file_error() {
        let dir = tempdir().unwrap();
        let err = load_request(&dir.path().join("missing.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_bad_json_is_serialization_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ length: ").unwrap();
        let err = load_request(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_atomic_save_leaves_no_tmp() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");
        save_json(&serde_json::json!({"ok": true}), &path).unwrap();

        assert!(path.exists());
        assert!(!tmp_path_for(&path).exists());
        let value: serde_json::Value = serde_json::from_str(&read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["ok"], true);
    }
}
