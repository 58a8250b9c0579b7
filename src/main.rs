mod cli;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;
use crate::input::{INPUT_ENV_VAR, resolve_input_path};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let env_value = std::env::var_os(INPUT_ENV_VAR);
    let path = resolve_input_path(cli.path.as_deref(), env_value.as_deref());
    tracing::info!(path = %path.display(), "checking blueprint for scoreBreakdown");

    let outcome = pipeline::run(&path);
    if let Err(err) = &outcome {
        tracing::debug!(error = ?err, "check failed");
        let mut chain = err.chain().into_iter();
        if let Some(top) = chain.next() {
            eprintln!("error: {top}");
        }
        for cause in chain {
            eprintln!("  caused by: {cause}");
        }
    }
    ExitCode::from(cli.exit_status(&outcome))
}
