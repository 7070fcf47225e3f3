use jsonpath_lib::select;
use serde_json::Value;

use crate::error::{PathError, Result};

/// Extracts the single scalar value addressed by `path` in `document`.
///
/// The path must resolve to exactly one location, and the value there
/// must be a string or a number. Read-only traversal; the document is
/// never modified.
pub fn extract_scalar(path: &str, document: &Value) -> Result<Value> {
    let hits = select(document, path).map_err(|e| PathError::Malformed {
        path: path.to_string(),
        message: e.to_string(),
    })?;

    if hits.len() != 1 {
        return Err(PathError::NotFound {
            path: path.to_string(),
        });
    }
    let value = hits[0].clone();

    if !value.is_string() && !value.is_number() {
        return Err(PathError::NotScalar {
            path: path.to_string(),
            found: value.to_string(),
        });
    }

    Ok(value)
}
