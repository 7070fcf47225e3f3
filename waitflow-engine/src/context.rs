use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::clock::Clock;

/// Per-step evaluation handle the engine hands to wait resolution.
///
/// Owned by the execution engine; this subsystem only reads from it.
/// Lifetime spans a single state evaluation.
pub struct EvaluationContext {
    run_id: String,
    state_name: String,
    input: Value,
    clock: Arc<dyn Clock>,
}

impl EvaluationContext {
    pub fn new(run_id: String, state_name: String, input: Value, clock: Arc<dyn Clock>) -> Self {
        Self {
            run_id,
            state_name,
            input,
            clock,
        }
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    pub fn state_name(&self) -> &str {
        &self.state_name
    }

    /// Current input document for the executing step.
    pub fn input(&self) -> &Value {
        &self.input
    }

    /// Current time as seen by the injected clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }
}
