//! Vista CLI - perspective registration code generator
//!
//! Usage: vista <COMMAND>
//!
//! Commands:
//!   compile  Generate activity sources from a unit description
//!   check    Compare generated sources against golden files

use anyhow::Result;
use clap::Parser;

use vista::cli::{Cli, Commands};
use vista::commands::{check, compile};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compile { unit, out } => compile::run(&compile::CompileOptions {
            unit,
            out,
            json: cli.json,
        }),
        Commands::Check { unit, golden } => {
            let clean = check::run(&check::CheckOptions {
                unit,
                golden,
                json: cli.json,
            })?;
            if !clean {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
