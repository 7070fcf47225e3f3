use chrono::{DateTime, FixedOffset, Utc};
use serde_json::Value;

use waitflow_dsl::WaitState;
use waitflow_mapping::extract_scalar;

use crate::context::EvaluationContext;
use crate::error::WaitError;
use crate::timestamp::parse_wait_timestamp;

/// The four wait-duration strategies of a Wait state.
///
/// Closed set; each variant is a pure function of
/// (configuration, input document, now) → seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitFunction {
    /// Literal number of seconds.
    Seconds(i64),
    /// Path to an integer (or numeric string) in the input document.
    SecondsPath(String),
    /// Literal absolute time in the canonical format.
    Timestamp(String),
    /// Path to a canonical-format timestamp string in the input document.
    TimestampPath(String),
}

impl WaitFunction {
    /// Number of seconds the workflow instance should stay suspended.
    ///
    /// May be zero or negative when an absolute timestamp has already
    /// elapsed; clamping is the scheduler's decision and does not happen
    /// here.
    pub fn resolve_wait_seconds(&self, ctx: &EvaluationContext) -> Result<i64, WaitError> {
        match self {
            WaitFunction::Seconds(seconds) => Ok(*seconds),

            WaitFunction::SecondsPath(path) => {
                let value = extract_scalar(path, ctx.input())?;
                coerce_seconds(path, &value)
            }

            WaitFunction::Timestamp(raw) => {
                let target = parse_wait_timestamp(raw)?;
                Ok(seconds_until(ctx, &target))
            }

            WaitFunction::TimestampPath(path) => {
                let value = extract_scalar(path, ctx.input())?;
                let raw = value.as_str().ok_or_else(|| WaitError::PathTypeMismatch {
                    path: path.clone(),
                    expected: "a timestamp string",
                    found: value.to_string(),
                })?;
                let target = match parse_wait_timestamp(raw) {
                    Ok(target) => target,
                    Err(WaitError::TimestampFormat { value, .. }) => {
                        return Err(WaitError::TimestampFormat {
                            path: Some(path.clone()),
                            value,
                        })
                    }
                    Err(other) => return Err(other),
                };
                Ok(seconds_until(ctx, &target))
            }
        }
    }
}

impl TryFrom<&WaitState> for WaitFunction {
    type Error = WaitError;

    /// Runtime re-check of the exactly-one rule that
    /// [`WaitState::validate`](waitflow_dsl::validation) enforces at load
    /// time.
    fn try_from(state: &WaitState) -> Result<Self, WaitError> {
        match (
            state.seconds,
            &state.seconds_path,
            &state.timestamp,
            &state.timestamp_path,
        ) {
            (Some(seconds), None, None, None) => Ok(WaitFunction::Seconds(seconds)),
            (None, Some(path), None, None) => Ok(WaitFunction::SecondsPath(path.clone())),
            (None, None, Some(raw), None) => Ok(WaitFunction::Timestamp(raw.clone())),
            (None, None, None, Some(path)) => Ok(WaitFunction::TimestampPath(path.clone())),
            _ => Err(WaitError::InvalidDefinition),
        }
    }
}

/// Signed distance from the context clock to `target`, in whole seconds.
fn seconds_until(ctx: &EvaluationContext, target: &DateTime<FixedOffset>) -> i64 {
    let delta = target.with_timezone(&Utc) - ctx.now();
    // floor, not truncation toward zero: -0.5s is a second already missed
    delta.num_milliseconds().div_euclid(1_000)
}

fn coerce_seconds(path: &str, value: &Value) -> Result<i64, WaitError> {
    match value {
        Value::Number(n) => n.as_i64().ok_or_else(|| seconds_mismatch(path, value)),
        Value::String(s) => s.parse::<i64>().map_err(|_| seconds_mismatch(path, value)),
        _ => Err(seconds_mismatch(path, value)),
    }
}

fn seconds_mismatch(path: &str, value: &Value) -> WaitError {
    WaitError::PathTypeMismatch {
        path: path.to_string(),
        expected: "an integer number of seconds",
        found: value.to_string(),
    }
}
