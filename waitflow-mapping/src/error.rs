use thiserror::Error;

/// Failure kinds for path extraction. Each condition signals a distinct
/// variant so the engine can build a precise runtime failure report
/// without string matching.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("no value matched path '{path}'")]
    NotFound { path: String },

    #[error("value at path '{path}' is not a scalar: {found}")]
    NotScalar { path: String, found: String },

    #[error("malformed path expression '{path}': {message}")]
    Malformed { path: String, message: String },
}

/// Crate-wide Result alias.
pub type Result<T> = std::result::Result<T, PathError>;
