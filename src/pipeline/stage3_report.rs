use std::io::Write;

use crate::pipeline::CheckError;
use crate::pipeline::stage2_scan::ScoreBreakdownHit;
use crate::report::text::{render_found_text, render_not_found_text};

pub fn run_stage3<W: Write>(
    hit: Option<&ScoreBreakdownHit<'_>>,
    out: &mut W,
) -> Result<bool, CheckError> {
    let (text, found) = match hit {
        Some(hit) => (render_found_text(&hit.report_context())?, true),
        None => (render_not_found_text(), false),
    };
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(found)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_report.rs"]
mod tests;
