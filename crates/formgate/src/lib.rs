//! # formgate
//!
//! Form state and validation for UI layers: current values, which fields the
//! user has touched, and per-field errors derived from declarative rules that
//! may depend on other fields.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use formgate::{rules, Form, FormState, FormValidator};
//!
//! #[derive(Debug, Clone, Default, PartialEq, Form)]
//! struct RangeForm {
//!     enable: bool,
//!     min: String,
//!     max: String,
//! }
//!
//! let validator = FormValidator::<RangeForm>::new(|ctx| {
//!     let values = ctx.values();
//!     // rules only apply while the range is enabled
//!     if values.enable {
//!         ctx.add(&RangeForm::MIN, [rules::required(), rules::integer()]);
//!         ctx.add(
//!             &RangeForm::MAX,
//!             [rules::required(), rules::integer(), rules::integer_gt(values.min.clone())],
//!         );
//!     }
//! });
//!
//! let state = FormState::new(RangeForm::default());
//! let state = validator.change(&state, &RangeForm::ENABLE, true);
//! let state = validator.blur(&state, RangeForm::MIN.name());
//! let (passed, state) = validator.submit(&state);
//! ```
//!
//! ## Architecture
//!
//! This crate re-exports its component crates:
//!
//! - **`formgate-rules`** - validation results, validators and the string rule catalog
//! - **`formgate-types`** - nutype-validated value types (`DigitString`)
//! - **`formgate-derive`** - `#[derive(Form)]`

pub mod config;
pub mod form;
pub mod state;
pub mod touches;
pub mod validator;

// Re-export derive macro
pub use formgate_derive::Form;

pub use formgate_rules as validation;
pub use formgate_rules::string as rules;
pub use formgate_rules::{
    fail, first_failure, pass, Message, Rule, StringRule, ValidationResult, Validator,
};
pub use formgate_types as types;

pub use config::{FormBehavior, FormgateConfig};
pub use form::{Field, Form};
pub use state::{Errors, FormState};
pub use touches::Touches;
pub use validator::{build_validator, FormValidator, Registry};
