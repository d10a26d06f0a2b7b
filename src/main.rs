use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use admeflow_rust::io::process_csv;

#[derive(Parser)]
#[command(name = "admeflow", about = "ADME descriptor and drug-likeness pipeline", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a CSV of molecules and write the annotated table.
    Process {
        /// Input CSV path.
        #[arg(long)]
        input: PathBuf,
        /// Output CSV path.
        #[arg(long)]
        output: PathBuf,
        /// Name of the column holding SMILES strings.
        #[arg(long, default_value = "SMILES")]
        smiles_column: String,
    },
    /// Analyze one SMILES string and print the JSON report.
    Single {
        smiles: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match Cli::parse().command {
        Command::Process { input, output, smiles_column } => {
            let report = process_csv(&input, &output, &smiles_column)?;
            println!(
                "processed {} rows ({} failed, {} skipped) -> {}",
                report.processed,
                report.failed,
                report.skipped,
                output.display()
            );
        }
        Command::Single { smiles } => {
            let analysis = adme_core::analyze_smiles(&smiles)
                .with_context(|| format!("analysis failed for '{smiles}'"))?;
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        }
    }
    Ok(())
}
