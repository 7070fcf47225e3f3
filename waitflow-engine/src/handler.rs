use chrono::{DateTime, Duration as ChronoDuration, Utc};
use tracing::debug;
use uuid::Uuid;

use waitflow_dsl::WaitState;

use crate::context::EvaluationContext;
use crate::error::WaitError;
use crate::scheduler::{ScheduledWait, WaitHandle, WaitScheduler};
use crate::wait_function::WaitFunction;

/// Result of entering a Wait state. The engine holds the handle until the
/// matching resumption arrives (or cancels it when the instance is
/// aborted), then advances to `next_state`.
#[derive(Debug)]
pub struct WaitOutcome {
    pub wait_seconds: i64,
    pub fire_at: DateTime<Utc>,
    pub handle: WaitHandle,
    pub next_state: Option<String>,
}

pub struct WaitHandler<'a> {
    state: &'a WaitState,
}

impl<'a> WaitHandler<'a> {
    pub fn new(state: &'a WaitState) -> Self {
        Self { state }
    }

    /// Resolves the wait duration and arms a timer for it. Invoked once
    /// per Wait-state entry; every failure surfaces to the caller
    /// untranslated.
    pub async fn handle(
        &self,
        ctx: &EvaluationContext,
        scheduler: &dyn WaitScheduler,
    ) -> Result<WaitOutcome, WaitError> {
        let function = WaitFunction::try_from(self.state)?;
        let wait_seconds = function.resolve_wait_seconds(ctx)?;

        debug!(
            "⏳ [{}] wait '{}' resolved to {}s",
            ctx.run_id(),
            ctx.state_name(),
            wait_seconds
        );

        let fire_at = ctx.now() + ChronoDuration::seconds(wait_seconds);
        let handle = scheduler
            .schedule(ScheduledWait {
                timer_id: Uuid::new_v4().to_string(),
                run_id: ctx.run_id().to_string(),
                state_name: ctx.state_name().to_string(),
                fire_at,
            })
            .await?;

        Ok(WaitOutcome {
            wait_seconds,
            fire_at,
            handle,
            next_state: self.state.base.next.clone(),
        })
    }
}
