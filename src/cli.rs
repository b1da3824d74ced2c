use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Vista - perspective registration code generator
#[derive(Parser, Debug)]
#[command(name = "vista")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit diagnostics as NDJSON for CI
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate activity sources from a unit description
    Compile {
        /// Path to the unit description YAML
        unit: PathBuf,

        /// Directory to write generated sources into (stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Compare generated sources against golden files
    Check {
        /// Path to the unit description YAML
        unit: PathBuf,

        /// Directory holding the expected sources
        #[arg(long)]
        golden: PathBuf,
    },
}
