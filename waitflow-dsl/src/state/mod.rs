pub mod base;
pub mod wait;

pub use base::BaseState;
pub use wait::WaitState;
