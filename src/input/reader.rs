use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use serde_json::Value;

use crate::input::InputError;

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn Read>, InputError> {
    let file = File::open(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    if is_gz(path) {
        Ok(Box::new(GzDecoder::new(reader)))
    } else {
        Ok(Box::new(reader))
    }
}

fn is_gz(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

pub fn load_document(path: &Path) -> Result<Value, InputError> {
    let mut bytes = Vec::new();
    {
        let mut reader = open_maybe_gz(path)?;
        reader
            .read_to_end(&mut bytes)
            .map_err(|source| InputError::Io {
                path: path.to_path_buf(),
                source,
            })?;
    }
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read input");

    serde_json::from_slice(&bytes).map_err(|source| InputError::Json {
        path: path.to_path_buf(),
        source,
    })
}
