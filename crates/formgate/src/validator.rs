//! Form validator builder
//!
//! A [`FormValidator`] wraps a `configure` callback. On every validation pass
//! the callback is invoked with the *current* values and registers rule lists
//! per field through a [`Registry`], so the rules themselves can depend on
//! other fields (a field that is only required while a toggle is on, a
//! maximum that must exceed the current minimum, ...).
//!
//! ```rust,ignore
//! use formgate::{rules, FormState, FormValidator};
//!
//! let validator = FormValidator::<RangeForm>::new(|ctx| {
//!     let values = ctx.values();
//!     if values.enable {
//!         ctx.add(&RangeForm::MIN, [rules::required(), rules::integer()]);
//!         ctx.add(
//!             &RangeForm::MAX,
//!             [rules::required(), rules::integer(), rules::integer_gt(values.min.clone())],
//!         );
//!     }
//! });
//!
//! let (passed, state) = validator.validate_all(&FormState::new(RangeForm::default()));
//! ```
//!
//! Registration is touched-gated: rules added for an untouched field are not
//! evaluated at all, and once a field has an error, later `add` calls for it
//! in the same pass are skipped.

use std::fmt;
use std::sync::Arc;

use formgate_rules::{first_failure, Rule};
use tracing::{debug, trace};

use crate::config::FormBehavior;
use crate::form::{Field, Form};
use crate::state::{Errors, FormState};
use crate::touches::Touches;

/// Registration context handed to the `configure` callback
pub struct Registry<'a, F> {
    values: &'a F,
    touches: &'a Touches,
    errors: Errors,
    registered: usize,
}

impl<'a, F: Form> Registry<'a, F> {
    fn new(values: &'a F, touches: &'a Touches) -> Self {
        Self {
            values,
            touches,
            errors: Errors::new(),
            registered: 0,
        }
    }

    /// Current form values
    pub fn values(&self) -> &'a F {
        self.values
    }

    /// Registers a rule list for `field`.
    ///
    /// Rules run in order against the field's current value and stop at the
    /// first failure, whose message becomes the field's error.
    pub fn add<V, I>(&mut self, field: &Field<F, V>, rules: I)
    where
        I: IntoIterator,
        I::Item: Into<Rule<V>>,
    {
        let key = field.name();
        debug_assert!(
            F::has_field(key),
            "rules registered for `{}`, which is not a field of this form",
            key
        );
        self.registered += 1;

        if !self.touches.is_touched(key) {
            trace!(field = key, "skipping untouched field");
            return;
        }
        if self.errors.contains_key(key) {
            trace!(field = key, "field already failed in this pass");
            return;
        }

        if let Some(message) = first_failure(field.get(self.values), rules) {
            trace!(field = key, %message, "field failed validation");
            self.errors.insert(key, message);
        }
    }

    /// Registers a single rule for `field`.
    pub fn add_rule<V>(&mut self, field: &Field<F, V>, rule: impl Into<Rule<V>>) {
        self.add(field, std::iter::once(rule));
    }

    fn finish(self) -> Errors {
        debug!(
            registered = self.registered,
            errors = self.errors.len(),
            "form validation pass"
        );
        self.errors
    }
}

type Configure<F> = dyn Fn(&mut Registry<'_, F>) + Send + Sync;

/// Derives a form's errors from its current state
///
/// Cheap to clone; the configure callback is shared.
pub struct FormValidator<F> {
    configure: Arc<Configure<F>>,
    behavior: FormBehavior,
}

impl<F> Clone for FormValidator<F> {
    fn clone(&self) -> Self {
        Self {
            configure: Arc::clone(&self.configure),
            behavior: self.behavior,
        }
    }
}

impl<F> fmt::Debug for FormValidator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormValidator")
            .field("behavior", &self.behavior)
            .finish_non_exhaustive()
    }
}

/// Builds a [`FormValidator`] from a configure callback.
pub fn build_validator<F, C>(configure: C) -> FormValidator<F>
where
    F: Form,
    C: Fn(&mut Registry<'_, F>) + Send + Sync + 'static,
{
    FormValidator::new(configure)
}

impl<F: Form> FormValidator<F> {
    pub fn new<C>(configure: C) -> Self
    where
        C: Fn(&mut Registry<'_, F>) + Send + Sync + 'static,
    {
        Self {
            configure: Arc::new(configure),
            behavior: FormBehavior::default(),
        }
    }

    /// Sets how [`change`](Self::change) treats touches and revalidation.
    pub fn with_behavior(mut self, behavior: FormBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn behavior(&self) -> FormBehavior {
        self.behavior
    }

    /// Errors of `values` under `touches`; untouched fields never appear.
    pub fn generate_errors(&self, values: &F, touches: &Touches) -> Errors {
        let mut registry = Registry::new(values, touches);
        (self.configure)(&mut registry);
        registry.finish()
    }

    /// [`generate_errors`](Self::generate_errors) for a state's values and touches.
    pub fn errors_for(&self, state: &FormState<F>) -> Errors {
        self.generate_errors(state.values(), state.touches())
    }

    /// The state with its errors recomputed from scratch.
    pub fn revalidate(&self, state: &FormState<F>) -> FormState<F> {
        state.with_errors(self.errors_for(state))
    }

    /// Touches every field and recomputes errors.
    ///
    /// Returns whether the form passed, together with the new state.
    pub fn validate_all(&self, state: &FormState<F>) -> (bool, FormState<F>) {
        let next = self.revalidate(&state.touch_all());
        let passed = !next.has_any_error();
        debug!(passed, errors = next.errors().len(), "validated all fields");
        (passed, next)
    }

    /// Value change from the UI (onChange).
    pub fn change<V>(&self, state: &FormState<F>, field: &Field<F, V>, value: V) -> FormState<F> {
        let mut next = state.with_value(field, value);
        if self.behavior.touch_on_change {
            next = next.touch(field.name());
        }
        if self.behavior.validate_on_change {
            next = self.revalidate(&next);
        }
        next
    }

    /// Field left by the user (onBlur): touch it and recompute errors.
    pub fn blur(&self, state: &FormState<F>, key: &'static str) -> FormState<F> {
        self.revalidate(&state.touch(key))
    }

    /// Form submission; same as [`validate_all`](Self::validate_all).
    pub fn submit(&self, state: &FormState<F>) -> (bool, FormState<F>) {
        self.validate_all(state)
    }
}
