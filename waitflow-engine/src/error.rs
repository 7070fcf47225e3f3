use thiserror::Error;

use waitflow_mapping::PathError;

use crate::scheduler::SchedulerError;

/// Typed failures surfaced to the execution engine by wait resolution.
///
/// None of these are recovered locally; the engine translates them into a
/// workflow-level runtime failure, never into a default duration. All are
/// deterministic for a given input and therefore not retry-eligible.
#[derive(Debug, Error)]
pub enum WaitError {
    #[error("no value matched path '{path}'")]
    PathNotFound { path: String },

    #[error("value at path '{path}' is not {expected}: {found}")]
    PathTypeMismatch {
        path: String,
        expected: &'static str,
        found: String,
    },

    #[error("malformed path expression '{path}': {message}")]
    MalformedPath { path: String, message: String },

    #[error(
        "'{value}' is not a valid ISO-8601 extended offset date-time string{}",
        .path.as_deref().map(|p| format!(" (at path '{p}')")).unwrap_or_default()
    )]
    TimestampFormat {
        /// Set when the value was extracted from the input document.
        path: Option<String>,
        value: String,
    },

    #[error("Wait state must define exactly one of Seconds, SecondsPath, Timestamp or TimestampPath")]
    InvalidDefinition,

    #[error("failed to schedule wait timer: {0}")]
    Scheduler(#[from] SchedulerError),
}

impl From<PathError> for WaitError {
    fn from(err: PathError) -> Self {
        match err {
            PathError::NotFound { path } => WaitError::PathNotFound { path },
            PathError::NotScalar { path, found } => WaitError::PathTypeMismatch {
                path,
                expected: "a scalar",
                found,
            },
            PathError::Malformed { path, message } => WaitError::MalformedPath { path, message },
        }
    }
}
