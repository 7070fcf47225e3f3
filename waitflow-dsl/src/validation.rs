use thiserror::Error;

use crate::state::WaitState;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Wait state '{0}' defines none of Seconds, SecondsPath, Timestamp or TimestampPath")]
    MissingWaitFunction(String),

    #[error("Wait state '{0}' defines more than one of Seconds, SecondsPath, Timestamp and TimestampPath")]
    ConflictingWaitFunctions(String),

    #[error("Wait state '{0}' has negative Seconds: {1}")]
    NegativeSeconds(String, i64),

    #[error("State '{0}' has both 'Next' and 'End' fields set")]
    NextAndEndConflict(String),

    #[error("State '{0}' has neither 'Next' nor 'End' set")]
    MissingTransition(String),
}

impl WaitState {
    /// Validates the state definition at load time, before the engine
    /// ever evaluates it.
    pub fn validate(&self, name: &str) -> Result<(), ValidationError> {
        let configured = [
            self.seconds.is_some(),
            self.seconds_path.is_some(),
            self.timestamp.is_some(),
            self.timestamp_path.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count();

        match configured {
            0 => return Err(ValidationError::MissingWaitFunction(name.to_string())),
            1 => {}
            _ => return Err(ValidationError::ConflictingWaitFunctions(name.to_string())),
        }

        if let Some(seconds) = self.seconds {
            if seconds < 0 {
                return Err(ValidationError::NegativeSeconds(name.to_string(), seconds));
            }
        }

        if self.base.next.is_some() && self.base.end.unwrap_or(false) {
            return Err(ValidationError::NextAndEndConflict(name.to_string()));
        }

        if self.base.next.is_none() && !self.base.end.unwrap_or(false) {
            return Err(ValidationError::MissingTransition(name.to_string()));
        }

        Ok(())
    }
}
