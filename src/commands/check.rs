//! `vista check` - compare generated sources against golden files.
//!
//! Runs the pipeline and compares each artifact byte-for-byte with
//! `<golden>/<GeneratedTypeName>.java`. Drift or a missing golden file
//! makes the command exit non-zero; validation diagnostics do not.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use similar::{ChangeTag, TextDiff};

use crate::loader::load_unit;
use crate::pipeline::Processor;

use super::compile::emit_diagnostics;

pub struct CheckOptions {
    pub unit: PathBuf,
    pub golden: PathBuf,
    pub json: bool,
}

/// Returns `true` when every artifact matches its golden file.
pub fn run(options: &CheckOptions) -> Result<bool> {
    let unit = load_unit(&options.unit)
        .with_context(|| format!("failed to load unit {}", options.unit.display()))?;

    let report = Processor::default().run(&unit);

    emit_diagnostics(&report.diagnostics, options.json);

    let mut clean = true;
    for artifact in &report.artifacts {
        let file_name = format!("{}.java", artifact.type_name);
        let golden_path = options.golden.join(&file_name);

        if !golden_path.exists() {
            println!("missing golden file: {}", golden_path.display());
            clean = false;
            continue;
        }

        let expected = fs::read_to_string(&golden_path)
            .with_context(|| format!("failed to read {}", golden_path.display()))?;

        if expected != artifact.text {
            println!("drift in {}:", file_name);
            print!("{}", render_diff(&file_name, &expected, &artifact.text));
            clean = false;
        }
    }

    if clean {
        println!(
            "{} artifact(s) match {}",
            report.artifacts.len(),
            options.golden.display()
        );
    }

    Ok(clean)
}

fn render_diff(path: &str, expected: &str, actual: &str) -> String {
    let diff = TextDiff::from_lines(expected, actual);

    let mut out = String::new();
    out.push_str(&format!("--- a/{}\n", path));
    out.push_str(&format!("+++ b/{}\n", path));

    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => "-",
            ChangeTag::Insert => "+",
            ChangeTag::Equal => " ",
        };
        out.push_str(&format!(
            "{}{}\n",
            sign,
            change.value().trim_end_matches('\n')
        ));
    }

    out
}
