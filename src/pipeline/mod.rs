use std::error::Error;
use std::io::Write;
use std::path::Path;

use thiserror::Error;

use crate::input::InputError;
use crate::model::ShapeError;

pub mod stage1_load;
pub mod stage2_scan;
pub mod stage3_report;

use stage1_load::run_stage1;
use stage2_scan::run_stage2;
use stage3_report::run_stage3;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("unexpected document shape")]
    Shape(#[from] ShapeError),
    #[error("failed to render scoreBreakdown")]
    Render(#[from] serde_json::Error),
    #[error("failed to write report")]
    Output(#[from] std::io::Error),
}

impl CheckError {
    pub fn chain(&self) -> Vec<String> {
        let mut out = vec![self.to_string()];
        let mut source = self.source();
        while let Some(cause) = source {
            out.push(cause.to_string());
            source = cause.source();
        }
        out
    }
}

pub fn run(path: &Path) -> Result<bool, CheckError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_output(path, &mut out)
}

pub fn run_with_output<W: Write>(path: &Path, out: &mut W) -> Result<bool, CheckError> {
    let document = run_stage1(path)?;
    let stage2 = run_stage2(&document)?;

    tracing::debug!(
        blocks = stage2.stats.blocks,
        candidates = stage2.stats.candidates,
        exercises = stage2.stats.exercises,
        "scan finished"
    );
    match &stage2.hit {
        Some(hit) => tracing::info!(
            path = %hit.path,
            block_index = hit.block_index,
            exercise_index = hit.exercise_index,
            "scoreBreakdown found"
        ),
        None => tracing::info!("no scoreBreakdown found"),
    }

    run_stage3(stage2.hit.as_ref(), out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/run.rs"]
mod tests;
