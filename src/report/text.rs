use crate::report::{FOUND_BANNER, NOT_FOUND_BANNER, ReportContext, display_field};

pub fn render_found_text(ctx: &ReportContext<'_>) -> Result<String, serde_json::Error> {
    let breakdown = serde_json::to_string_pretty(ctx.score_breakdown)?;

    let mut out = String::new();
    out.push_str(FOUND_BANNER);
    out.push('\n');
    out.push_str(&format!("Block: {}\n", display_field(ctx.block_id)));
    out.push_str(&format!("Client: {}\n", ctx.client_id));
    out.push_str(&format!(
        "Exercise: {}\n",
        display_field(ctx.exercise_name)
    ));
    out.push_str("scoreBreakdown:\n");
    out.push_str(&breakdown);
    out.push('\n');
    Ok(out)
}

pub fn render_not_found_text() -> String {
    format!("{NOT_FOUND_BANNER}\n")
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
