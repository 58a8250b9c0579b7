use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::pipeline::CheckError;

pub const EXIT_FOUND: u8 = 0;
pub const EXIT_NOT_FOUND: u8 = 1;
pub const EXIT_ERROR: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "blueprint-scorecheck",
    version,
    about = "Report the first exercise in a group-workout blueprint that carries a scoreBreakdown."
)]
pub struct Cli {
    /// Blueprint JSON to inspect (`.gz` is gunzipped). Falls back to
    /// $SCORECHECK_INPUT, then session-test-data/group-workouts/latest-group-workout.json.
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Raise log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Exit 0 whenever no error occurs, even if nothing was found.
    #[arg(long)]
    pub legacy_exit_code: bool,
}

impl Cli {
    pub fn exit_status(&self, outcome: &Result<bool, CheckError>) -> u8 {
        match outcome {
            Ok(true) => EXIT_FOUND,
            Ok(false) if self.legacy_exit_code => EXIT_FOUND,
            Ok(false) => EXIT_NOT_FOUND,
            Err(_) => EXIT_ERROR,
        }
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/cli.rs"]
mod tests;
