//! Generation pipeline
//!
//! Drives a unit through scan → validate → render, pushing one artifact or
//! one diagnostic per candidate to the injected sinks. Candidates are
//! processed in declaration order and are fully independent: a failure for
//! one never affects its siblings, and the worst outcome for a whole unit
//! is "zero artifacts, N diagnostics".
//!
//! Sinks are single-method consumer traits. Implementations can be
//! closures (blanket impls below), collecting structs, or anything that
//! accepts items synchronously in the order invoked.

use crate::contract::FrameworkContract;
use crate::model::Unit;
use crate::render::{render_activity, GeneratedArtifact};
use crate::scan::scan_candidates;
use crate::validate::{validate_factory, InvalidReason, ValidationOutcome};

/// How strongly a diagnostic is surfaced.
///
/// There is deliberately no fatal level: validation failures never abort
/// the pass and never fail the surrounding build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Note,
    Warning,
}

/// One notice about an invalid candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Qualified name of the declaration the notice is about.
    pub declaration: String,
    pub reason: InvalidReason,
}

impl Diagnostic {
    /// Stable reason code, for sinks that key on it.
    pub fn code(&self) -> &'static str {
        self.reason.code()
    }

    /// Human-readable message text, selected by the reason.
    pub fn message(&self) -> String {
        self.reason.to_string()
    }
}

/// Receives one rendered artifact per successful candidate.
pub trait GenerationSink {
    fn accept(&mut self, artifact: GeneratedArtifact);
}

impl<F: FnMut(GeneratedArtifact)> GenerationSink for F {
    fn accept(&mut self, artifact: GeneratedArtifact) {
        self(artifact)
    }
}

/// Receives one notice per invalid candidate.
pub trait DiagnosticSink {
    fn accept(&mut self, diagnostic: Diagnostic);
}

impl<F: FnMut(Diagnostic)> DiagnosticSink for F {
    fn accept(&mut self, diagnostic: Diagnostic) {
        self(diagnostic)
    }
}

/// Collected output of a full pass over one unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitReport {
    pub artifacts: Vec<GeneratedArtifact>,
    pub diagnostics: Vec<Diagnostic>,
}

/// The orchestrator: one pass per unit, no retries, no shared state.
#[derive(Debug, Clone, Default)]
pub struct Processor {
    contract: FrameworkContract,
}

impl Processor {
    pub fn new(contract: FrameworkContract) -> Self {
        Self { contract }
    }

    pub fn contract(&self) -> &FrameworkContract {
        &self.contract
    }

    /// Process a unit, pushing outcomes to the injected sinks.
    ///
    /// Each candidate yields exactly one sink call: an artifact on the
    /// generation sink or a warning on the diagnostic sink, never both.
    /// Sink calls follow the unit's declaration order.
    pub fn process(
        &self,
        unit: &Unit,
        generation: &mut dyn GenerationSink,
        diagnostics: &mut dyn DiagnosticSink,
    ) {
        for candidate in scan_candidates(unit, &self.contract) {
            match validate_factory(candidate, &self.contract) {
                ValidationOutcome::Valid {
                    declaration,
                    method,
                    arity,
                } => {
                    generation.accept(render_activity(
                        unit,
                        declaration,
                        method,
                        arity,
                        &self.contract,
                    ));
                }
                ValidationOutcome::Invalid {
                    declaration,
                    reason,
                } => {
                    diagnostics.accept(Diagnostic {
                        severity: Severity::Warning,
                        declaration: unit.qualified_name(declaration),
                        reason,
                    });
                }
            }
        }
    }

    /// Process a unit and collect both streams.
    pub fn run(&self, unit: &Unit) -> UnitReport {
        let mut artifacts = Vec::new();
        let mut diagnostics = Vec::new();
        self.process(
            unit,
            &mut |artifact: GeneratedArtifact| artifacts.push(artifact),
            &mut |diagnostic: Diagnostic| diagnostics.push(diagnostic),
        );
        UnitReport {
            artifacts,
            diagnostics,
        }
    }
}
