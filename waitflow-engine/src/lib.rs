// waitflow-engine/src/lib.rs
//! Wait-duration resolution for the waitflow execution engine.
//! Re-exports core types so downstream crates only need `waitflow_engine::*`.

pub mod clock;
pub mod context;
pub mod error;
pub mod handler;
pub mod scheduler;
pub mod timestamp;
pub mod wait_function;

pub use clock::{Clock, FixedClock, SystemClock};
pub use context::EvaluationContext;
pub use error::WaitError;
pub use handler::{WaitHandler, WaitOutcome};
pub use scheduler::{
    ScheduledWait, SchedulerError, TimerScheduler, WaitHandle, WaitResumption, WaitScheduler,
};
pub use timestamp::{format_wait_timestamp, parse_wait_timestamp};
pub use wait_function::WaitFunction;
