use serde_json::Value;

pub mod text;

pub const FOUND_BANNER: &str = "✅ Found scoreBreakdown in individualCandidates";
pub const NOT_FOUND_BANNER: &str = "❌ No scoreBreakdown found in individualCandidates";
pub const MISSING_FIELD: &str = "(missing)";

#[derive(Debug, Clone, PartialEq)]
pub struct ReportContext<'a> {
    pub block_id: Option<&'a Value>,
    pub client_id: &'a str,
    pub exercise_name: Option<&'a Value>,
    pub score_breakdown: &'a Value,
}

pub fn display_field(value: Option<&Value>) -> String {
    match value {
        None => MISSING_FIELD.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
