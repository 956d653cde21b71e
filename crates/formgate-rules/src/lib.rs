//! formgate-rules
//!
//! Pure validation primitives used by the formgate form-state engine:
//!
//! - [`ValidationResult`] with the [`pass`] / [`fail`] constructors
//! - [`Validator`], a shareable pure function from a value to a result
//! - [`Rule`], either a validator or a precomputed result
//! - the [`string`] rule catalog (`required`, `number`, `length`, ...)

pub mod result;
pub mod string;
pub mod validator;

// Re-export primitives
pub use result::*;
pub use validator::*;

pub use string::{string_rule, StringRule};
