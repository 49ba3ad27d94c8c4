//! Compare command
//!
//! Usage: diffgroup compare <LEFT> <RIGHT> [--format text|json] [--output <FILE>]

use clap::{Args, ValueEnum};
use diffgroup_core::diff::render_summary;
use diffgroup_core::logging_facility::elapsed_ms;
use diffgroup_core::{
    groupcount_differences_between_rows, log_op_end, log_op_error, log_op_start, DiffGroupError,
    ExError, GroupCountTable, Table,
};
use diffgroup_core_types::RequestId;
use std::path::{Path, PathBuf};
use std::time::Instant;

const OP: &str = "compare";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table
    Text,
    /// JSON document with `columns` and `rows`
    Json,
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Left (reference) table, JSON
    pub left: PathBuf,

    /// Right table, JSON; its columns are aligned to the left table's order
    pub right: PathBuf,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute compare command
pub fn execute(args: CompareArgs) -> Result<(), Box<dyn std::error::Error>> {
    let request_id = RequestId::new();
    let started = Instant::now();
    log_op_start!(OP, request_id = request_id.as_str());

    match run(&args) {
        Ok(result) => {
            log_op_end!(
                OP,
                duration_ms = elapsed_ms(started),
                request_id = request_id.as_str(),
                groups = result.len()
            );
            write_result(&result, args.format, args.output.as_deref())?;
            Ok(())
        }
        Err(err) => {
            log_op_error!(
                OP,
                err.clone(),
                duration_ms = elapsed_ms(started),
                request_id = request_id.as_str()
            );
            Err(Box::new(ExError::from(err).with_request_id(request_id)))
        }
    }
}

fn run(args: &CompareArgs) -> Result<GroupCountTable, DiffGroupError> {
    let left = load_table(&args.left)?;
    let right = load_table(&args.right)?;
    groupcount_differences_between_rows(&left, &right)
}

fn load_table(path: &Path) -> Result<Table, DiffGroupError> {
    let text = std::fs::read_to_string(path).map_err(|e| DiffGroupError::Io {
        message: format!("{}: {}", path.display(), e),
    })?;
    Table::from_json_str(&text)
}

fn write_result(
    result: &GroupCountTable,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let rendered = match format {
        OutputFormat::Text => render_summary(result),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(result)?;
            json.push('\n');
            json
        }
    };

    if let Some(output_path) = output {
        std::fs::write(output_path, rendered)?;
        println!("✓ Wrote {} groups to {}", result.len(), output_path.display());
    } else {
        print!("{}", rendered);
    }

    Ok(())
}
