//! Error types for vista
//!
//! The pipeline itself never fails: invalid candidates become diagnostics,
//! not errors. `VistaError` covers the supplier/tooling boundary instead —
//! reading and parsing unit descriptions, and writing generated files.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for vista operations
pub type VistaResult<T> = Result<T, VistaError>;

/// Errors raised at the supplier/tooling boundary.
#[derive(Error, Debug)]
pub enum VistaError {
    /// Unit description is not valid YAML or does not match the model
    #[error("invalid unit description in {file}: {message}")]
    InvalidUnit { file: PathBuf, message: String },

    /// Two methods with the same name on one declaration
    ///
    /// Method names are unique per declaration; a supplier handing over
    /// duplicates has violated the model contract, so the loader rejects
    /// the whole unit rather than guessing which overload was meant.
    #[error("duplicate method '{method}' on declaration '{declaration}' in {file}")]
    DuplicateMethod {
        declaration: String,
        method: String,
        file: PathBuf,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
