//! # File I/O Module
//!
//! Project file operations:
//! - **Atomic saves**: write to `.tmp`, fsync, rename so an interrupted save
//!   never leaves a truncated project behind
//! - **Version validation**: refuse files written by an incompatible schema
//!
//! ## File Format
//!
//! Projects are saved as `.frm` files containing pretty-printed JSON.
//!
//! ## Example
//!
//! ```rust,no_run
//! use framing_core::file_io::{save_project, load_project};
//! use framing_core::project::Project;
//! use std::path::Path;
//!
//! let project = Project::new("Garage");
//! let path = Path::new("garage.frm");
//!
//! save_project(&project, path)?;
//! let loaded = load_project(path)?;
//! assert_eq!(loaded.meta.name, "Garage");
//! # Ok::<(), framing_core::errors::EstimateError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::errors::{EstimateError, EstimateResult};
use crate::project::{Project, SCHEMA_VERSION};

/// Extension used for project files
pub const PROJECT_EXTENSION: &str = "frm";

/// Save a project with atomic write semantics.
///
/// 1. Serialize project to JSON
/// 2. Write to a temporary file (`.frm.tmp`)
/// 3. Sync to disk
/// 4. Rename over the target
pub fn save_project(project: &Project, path: &Path) -> EstimateResult<()> {
    let json = serde_json::to_string_pretty(project)?;

    let tmp_path = path.with_extension(format!("{PROJECT_EXTENSION}.tmp"));

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        EstimateError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        EstimateError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        EstimateError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        EstimateError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    info!(path = %path.display(), walls = project.wall_count(), "Project saved");
    Ok(())
}

/// Load a project from a file.
///
/// # Returns
///
/// * `Ok(Project)` - Successfully loaded project
/// * `Err(EstimateError::VersionMismatch)` - File version is incompatible
/// * `Err(EstimateError::SerializationError)` - Invalid JSON
/// * `Err(EstimateError::FileError)` - I/O error
pub fn load_project(path: &Path) -> EstimateResult<Project> {
    let contents = fs::read_to_string(path)
        .map_err(|e| EstimateError::file_error("read", path.display().to_string(), e.to_string()))?;

    let project: Project = serde_json::from_str(&contents).map_err(|e| EstimateError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })?;

    validate_version(&project.meta.version)?;

    info!(path = %path.display(), walls = project.wall_count(), "Project loaded");
    Ok(project)
}

/// Check that a file version can be read by this schema.
///
/// The major version must match. While the schema is 0.x, a file with a
/// newer minor version is rejected too.
fn validate_version(file_version: &str) -> EstimateResult<()> {
    let mismatch = || EstimateError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let parse = |v: &str| -> Vec<u32> { v.split('.').filter_map(|p| p.parse().ok()).collect() };
    let file_parts = parse(file_version);
    let current_parts = parse(SCHEMA_VERSION);

    let (Some(file_major), Some(current_major)) = (file_parts.first(), current_parts.first()) else {
        return Err(mismatch());
    };

    if file_major != current_major {
        return Err(mismatch());
    }

    if *current_major == 0 {
        if let (Some(file_minor), Some(current_minor)) = (file_parts.get(1), current_parts.get(1)) {
            if file_minor > current_minor {
                return Err(mismatch());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wall::{Wall, WallPreset};

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roundtrip.frm");

        let mut project = Project::new("Roundtrip");
        project
            .add_wall(Wall::new("Basement", WallPreset::BasementFloating.spec(20.0)))
            .unwrap();
        save_project(&project, &path).unwrap();

        let loaded = load_project(&path).unwrap();
        assert_eq!(loaded.meta.name, "Roundtrip");
        assert_eq!(loaded.walls, project.walls);
        assert_eq!(loaded.summary(), project.summary());
    }

    #[test]
    fn test_atomic_save_leaves_no_tmp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("atomic.frm");
        let tmp_path = path.with_extension("frm.tmp");

        save_project(&Project::new("Atomic"), &path).unwrap();

        assert!(!tmp_path.exists());
        assert!(path.exists());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_project(&dir.path().join("nope.frm")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.frm");
        fs::write(&path, "{ \"meta\": ").unwrap();
        let err = load_project(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_load_rejects_newer_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("future.frm");
        let mut project = Project::new("Future");
        project.meta.version = "0.9.0".to_string();
        fs::write(&path, serde_json::to_string(&project).unwrap()).unwrap();

        let err = load_project(&path).unwrap_err();
        assert_eq!(err.error_code(), "VERSION_MISMATCH");
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.7").is_ok());
        assert!(validate_version("0.0.3").is_ok());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("garbage").is_err());
    }
}
