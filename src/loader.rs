//! Unit loader
//!
//! One concrete front-end supplier: parses a YAML description of a unit
//! into the declaration model. The pipeline itself never reads files; the
//! CLI and tests use this to build units to feed it.
//!
//! The loader also enforces the model invariant the pipeline relies on:
//! method names are unique per declaration.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{VistaError, VistaResult};
use crate::model::Unit;

/// Parse a unit description from YAML text.
///
/// `file` is only used for error reporting.
pub fn parse_unit(yaml: &str, file: &Path) -> VistaResult<Unit> {
    let unit: Unit = serde_yaml_ng::from_str(yaml).map_err(|e| VistaError::InvalidUnit {
        file: file.to_path_buf(),
        message: e.to_string(),
    })?;

    for declaration in &unit.declarations {
        let mut seen = HashSet::new();
        for method in &declaration.methods {
            if !seen.insert(method.name.as_str()) {
                return Err(VistaError::DuplicateMethod {
                    declaration: declaration.name.clone(),
                    method: method.name.clone(),
                    file: file.to_path_buf(),
                });
            }
        }
    }

    Ok(unit)
}

/// Read and parse a unit description file.
pub fn load_unit(path: &Path) -> VistaResult<Unit> {
    let content = fs::read_to_string(path)?;
    parse_unit(&content, path)
}
