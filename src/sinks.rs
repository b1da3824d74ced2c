//! Diagnostic output sinks
//!
//! Sink implementations for surfacing pipeline diagnostics outside the
//! library: plain console lines for humans, NDJSON for CI/automation.
//! Both stay non-fatal by construction - they only write, never abort.

use std::io::Write;

use crate::pipeline::{Diagnostic, DiagnosticSink, Severity};

/// Writes one human-readable line per diagnostic.
pub struct ConsoleDiagnosticSink<W: Write> {
    writer: W,
}

impl<W: Write> ConsoleDiagnosticSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> DiagnosticSink for ConsoleDiagnosticSink<W> {
    fn accept(&mut self, diagnostic: Diagnostic) {
        let severity = match diagnostic.severity {
            Severity::Note => "note",
            Severity::Warning => "warning",
        };
        let _ = writeln!(
            self.writer,
            "{}: {}: {}",
            severity,
            diagnostic.declaration,
            diagnostic.message()
        );
    }
}

/// Writes one NDJSON object per diagnostic.
pub struct JsonDiagnosticSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonDiagnosticSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> DiagnosticSink for JsonDiagnosticSink<W> {
    fn accept(&mut self, diagnostic: Diagnostic) {
        let severity = match diagnostic.severity {
            Severity::Note => "note",
            Severity::Warning => "warning",
        };
        let event = serde_json::json!({
            "event": "diagnostic",
            "severity": severity,
            "declaration": diagnostic.declaration,
            "reason": diagnostic.code(),
            "message": diagnostic.message(),
        });
        let _ = writeln!(self.writer, "{}", event);
        let _ = self.writer.flush();
    }
}
