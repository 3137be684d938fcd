use std::io::Read;
use std::path::PathBuf;

use clap::Args;

use crate::error::AppError;
use crate::infra::{triage_report, TriageEngines, TriageRequest};

#[derive(Args, Debug)]
pub(crate) struct TriageArgs {
    /// Path to a JSON file holding the report; reads stdin when omitted
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Emit compact JSON instead of pretty-printed output
    #[arg(long)]
    pub(crate) compact: bool,
}

/// One-shot triage of a single report, for demos and pipeline smoke tests.
pub(crate) fn run_triage_demo(args: TriageArgs) -> Result<(), AppError> {
    let raw = match &args.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let request: TriageRequest = serde_json::from_str(&raw)?;
    let engines = TriageEngines::default();
    let outcome = triage_report(&engines, request);

    let rendered = if args.compact {
        serde_json::to_string(&outcome)?
    } else {
        serde_json::to_string_pretty(&outcome)?
    };
    println!("{rendered}");
    Ok(())
}
