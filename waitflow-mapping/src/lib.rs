//! Path-expression extraction over workflow input documents.

pub mod error;
pub mod extract;

pub use error::{PathError, Result};
pub use extract::extract_scalar;
