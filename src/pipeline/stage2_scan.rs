use serde_json::Value;

use crate::model::ShapeError;
use crate::model::blueprint::DocumentView;
use crate::report::ReportContext;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub blocks: usize,
    pub candidates: usize,
    pub exercises: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdownHit<'a> {
    pub block_index: usize,
    pub block_id: Option<&'a Value>,
    pub client_id: &'a str,
    pub exercise_index: usize,
    pub exercise_name: Option<&'a Value>,
    pub score_breakdown: &'a Value,
    pub path: String,
}

impl<'a> ScoreBreakdownHit<'a> {
    pub fn report_context(&self) -> ReportContext<'a> {
        ReportContext {
            block_id: self.block_id,
            client_id: self.client_id,
            exercise_name: self.exercise_name,
            score_breakdown: self.score_breakdown,
        }
    }
}

#[derive(Debug)]
pub struct Stage2Output<'a> {
    pub hit: Option<ScoreBreakdownHit<'a>>,
    pub stats: ScanStats,
}

pub fn run_stage2(document: &Value) -> Result<Stage2Output<'_>, ShapeError> {
    let mut stats = ScanStats::default();
    let hit = find_first_score_breakdown(document, &mut stats)?;
    Ok(Stage2Output { hit, stats })
}

pub fn find_first_score_breakdown<'a>(
    document: &'a Value,
    stats: &mut ScanStats,
) -> Result<Option<ScoreBreakdownHit<'a>>, ShapeError> {
    let blueprint = DocumentView::new(document)?.blueprint()?;
    if !blueprint.is_present() {
        tracing::debug!("document has no blueprint");
    }

    for block in blueprint.blocks()? {
        let block = block?;
        stats.blocks += 1;

        for candidate in block.candidates()? {
            let candidate = candidate?;
            stats.candidates += 1;

            for exercise in candidate.exercises()? {
                let exercise = exercise?;
                stats.exercises += 1;

                if let Some(score_breakdown) = exercise.score_breakdown() {
                    return Ok(Some(ScoreBreakdownHit {
                        block_index: block.index,
                        block_id: block.block_id(),
                        client_id: candidate.client_id,
                        exercise_index: exercise.index,
                        exercise_name: exercise.name(),
                        score_breakdown,
                        path: exercise.path().to_string(),
                    }));
                }
            }
        }
    }

    Ok(None)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_scan.rs"]
mod tests;
