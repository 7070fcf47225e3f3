// waitflow-dsl/src/lib.rs
//! Wait state definition surface of the workflow description language.
//! Re-exports the state structs so downstream crates only need
//! `waitflow_dsl::*`.

pub mod state;
pub mod validation;

pub use state::{BaseState, WaitState};
pub use validation::ValidationError;
