//! diffgroup CLI
//!
//! Command-line interface for grouped row diffs of two tables

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "diffgroup")]
#[command(about = "diffgroup - group row differences between two tables", long_about = None)]
struct Cli {
    /// Enable logging to stderr with the given profile
    #[arg(long, global = true, value_enum)]
    log_profile: Option<commands::LogProfile>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare two JSON tables and group the differing rows
    Compare(commands::compare::CompareArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Some(profile) = cli.log_profile {
        diffgroup_core::logging_facility::init(profile.into());
    }

    let result = match cli.command {
        Commands::Compare(args) => commands::compare::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
