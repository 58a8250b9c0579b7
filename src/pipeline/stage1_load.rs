use std::path::Path;

use serde_json::Value;

use crate::input::{InputError, load_document};
use crate::model::blueprint::BLUEPRINT_KEY;

pub fn run_stage1(path: &Path) -> Result<Value, InputError> {
    let document = load_document(path)?;
    tracing::debug!(
        path = %path.display(),
        has_blueprint = document.get(BLUEPRINT_KEY).is_some(),
        "loaded document"
    );
    Ok(document)
}
