//! Vista - perspective registration code generator
//!
//! Vista inspects a unit's declaration model for perspective-marked
//! declarations, validates the factory method the framework will invoke,
//! and renders the activity wiring source the framework needs - one
//! artifact per valid candidate, one non-fatal diagnostic per invalid one.

pub mod cli;
pub mod commands;
pub mod contract;
pub mod error;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod scan;
pub mod sinks;
pub mod validate;

// Re-exports for convenience
pub use contract::FrameworkContract;
pub use error::{VistaError, VistaResult};
pub use loader::{load_unit, parse_unit};
pub use model::{Declaration, Method, Parameter, TypeDescriptor, Unit};
pub use pipeline::{
    Diagnostic, DiagnosticSink, GenerationSink, Processor, Severity, UnitReport,
};
pub use render::GeneratedArtifact;
pub use scan::scan_candidates;
pub use validate::{validate_factory, FactoryArity, InvalidReason, ValidationOutcome};
