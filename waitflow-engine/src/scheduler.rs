use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::clock::Clock;

/// Resumption request for one suspended workflow instance.
#[derive(Debug, Clone)]
pub struct ScheduledWait {
    pub timer_id: String,
    pub run_id: String,
    pub state_name: String,
    pub fire_at: DateTime<Utc>,
}

/// Emitted once the full wait duration has elapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitResumption {
    pub timer_id: String,
    pub run_id: String,
    pub state_name: String,
}

#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("resumption channel closed")]
    ChannelClosed,
}

/// Revocation handle for a pending resumption.
#[derive(Debug)]
pub struct WaitHandle {
    timer_id: String,
    task: JoinHandle<()>,
}

impl WaitHandle {
    pub fn timer_id(&self) -> &str {
        &self.timer_id
    }

    /// Revokes the pending resumption. A cancelled wait never fires and
    /// must not advance the state machine.
    pub fn cancel(self) {
        debug!("🛑 timer {} cancelled", self.timer_id);
        self.task.abort();
    }
}

/// Contract between wait resolution and the engine's timer machinery.
///
/// Duration resolution happens-before `schedule`; the resumption is
/// delivered only after `fire_at` has passed, except under cancellation.
#[async_trait]
pub trait WaitScheduler: Send + Sync {
    async fn schedule(&self, wait: ScheduledWait) -> Result<WaitHandle, SchedulerError>;
}

/// Timer-based scheduler: one lightweight tokio timer task per pending
/// wait, resumptions delivered over an mpsc channel. No worker thread is
/// blocked for the duration of a wait, so many instances can be suspended
/// concurrently.
pub struct TimerScheduler {
    clock: Arc<dyn Clock>,
    tx: mpsc::UnboundedSender<WaitResumption>,
}

impl TimerScheduler {
    /// Returns the scheduler and the receiving end the engine drains
    /// resumptions from.
    pub fn new(clock: Arc<dyn Clock>) -> (Self, mpsc::UnboundedReceiver<WaitResumption>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { clock, tx }, rx)
    }
}

#[async_trait]
impl WaitScheduler for TimerScheduler {
    async fn schedule(&self, wait: ScheduledWait) -> Result<WaitHandle, SchedulerError> {
        if self.tx.is_closed() {
            return Err(SchedulerError::ChannelClosed);
        }

        // Elapsed timestamps fire immediately; the resolver hands the
        // true delta through unclamped.
        let delay = (wait.fire_at - self.clock.now())
            .to_std()
            .unwrap_or(Duration::ZERO);

        let resumption = WaitResumption {
            timer_id: wait.timer_id.clone(),
            run_id: wait.run_id,
            state_name: wait.state_name,
        };
        let tx = self.tx.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(resumption);
        });

        info!("🕒 timer {} armed, fires at {}", wait.timer_id, wait.fire_at);

        Ok(WaitHandle {
            timer_id: wait.timer_id,
            task,
        })
    }
}
