//! `vista compile` - render activity sources for a unit description.
//!
//! Diagnostics go to stderr (or stdout as NDJSON with `--json`) and never
//! affect the exit status: an all-invalid unit still compiles successfully,
//! it just generates nothing.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::loader::load_unit;
use crate::pipeline::{Diagnostic, DiagnosticSink, Processor};
use crate::render::GeneratedArtifact;
use crate::sinks::{ConsoleDiagnosticSink, JsonDiagnosticSink};

pub struct CompileOptions {
    pub unit: PathBuf,
    pub out: Option<PathBuf>,
    pub json: bool,
}

pub fn run(options: &CompileOptions) -> Result<()> {
    let unit = load_unit(&options.unit)
        .with_context(|| format!("failed to load unit {}", options.unit.display()))?;

    let report = Processor::default().run(&unit);

    emit_diagnostics(&report.diagnostics, options.json);

    match &options.out {
        Some(dir) => write_artifacts(dir, &report.artifacts)?,
        None => print_artifacts(&report.artifacts)?,
    }

    Ok(())
}

pub(crate) fn emit_diagnostics(diagnostics: &[Diagnostic], json: bool) {
    if json {
        let mut sink = JsonDiagnosticSink::new(io::stdout());
        for diagnostic in diagnostics {
            sink.accept(diagnostic.clone());
        }
    } else {
        let mut sink = ConsoleDiagnosticSink::new(io::stderr());
        for diagnostic in diagnostics {
            sink.accept(diagnostic.clone());
        }
    }
}

/// Write one `<GeneratedTypeName>.java` per artifact into `dir`.
fn write_artifacts(dir: &Path, artifacts: &[GeneratedArtifact]) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    for artifact in artifacts {
        let path = dir.join(format!("{}.java", artifact.type_name));
        fs::write(&path, &artifact.text)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    Ok(())
}

fn print_artifacts(artifacts: &[GeneratedArtifact]) -> Result<()> {
    let mut stdout = io::stdout();
    for artifact in artifacts {
        stdout.write_all(artifact.text.as_bytes())?;
    }
    Ok(())
}
