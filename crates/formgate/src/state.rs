// File: formgate/src/state.rs
// Purpose: Immutable form state and its pure transitions

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::form::{Field, Form};
use crate::touches::Touches;

/// Validation error message by field name
///
/// A missing key means the field has no error.
pub type Errors = BTreeMap<&'static str, String>;

/// Values, touched fields and errors of one form
///
/// Every transition returns a new state; a state value is never mutated once
/// built. `initials` is captured at construction and only used to answer
/// [`is_modified`](FormState::is_modified).
#[derive(Debug)]
pub struct FormState<F> {
    initials: Arc<F>,
    values: Arc<F>,
    touches: Touches,
    errors: Errors,
}

impl<F> Clone for FormState<F> {
    fn clone(&self) -> Self {
        Self {
            initials: Arc::clone(&self.initials),
            values: Arc::clone(&self.values),
            touches: self.touches.clone(),
            errors: self.errors.clone(),
        }
    }
}

impl<F: Form> FormState<F> {
    /// Fresh state: nothing touched, no errors, values equal to `initials`.
    pub fn new(initials: F) -> Self {
        let initials = Arc::new(initials);
        Self {
            values: Arc::clone(&initials),
            initials,
            touches: Touches::none(),
            errors: Errors::new(),
        }
    }

    pub fn initials(&self) -> &F {
        &self.initials
    }

    pub fn values(&self) -> &F {
        &self.values
    }

    pub fn touches(&self) -> &Touches {
        &self.touches
    }

    pub fn errors(&self) -> &Errors {
        &self.errors
    }

    pub fn error(&self, key: &str) -> Option<&str> {
        self.errors.get(key).map(|s| s.as_str())
    }

    pub fn is_touched(&self, key: &str) -> bool {
        self.touches.is_touched(key)
    }

    /// Replaces one field value, copying the rest of the value set.
    pub fn with_value<V>(&self, field: &Field<F, V>, value: V) -> Self {
        let mut values = F::clone(&self.values);
        field.set(&mut values, value);
        self.with_values(values)
    }

    /// Replaces the whole value set.
    pub fn with_values(&self, values: F) -> Self {
        Self {
            values: Arc::new(values),
            ..self.clone()
        }
    }

    pub fn with_touches(&self, touches: Touches) -> Self {
        Self {
            touches,
            ..self.clone()
        }
    }

    pub fn with_errors(&self, errors: Errors) -> Self {
        Self {
            errors,
            ..self.clone()
        }
    }

    /// Marks `key` touched.
    pub fn touch(&self, key: &'static str) -> Self {
        debug_assert!(F::has_field(key), "`{}` is not a field of this form", key);
        self.with_touches(self.touches.touch(key))
    }

    /// Marks every field touched.
    pub fn touch_all(&self) -> Self {
        self.with_touches(Touches::All)
    }

    pub fn has_any_error(&self) -> bool {
        self.errors.values().any(|message| !message.is_empty())
    }

    /// Whether the current values differ from the initial ones.
    ///
    /// Compared structurally: a value set equal to the initials counts as
    /// unmodified even when it is a different allocation.
    pub fn is_modified(&self) -> bool {
        !Arc::ptr_eq(&self.initials, &self.values) && *self.initials != *self.values
    }

    /// Every field touched and none has an error.
    pub fn is_all_valid(&self) -> bool {
        self.touches.covers(F::field_names()) && !self.has_any_error()
    }
}

impl<F: Serialize> Serialize for FormState<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FormState", 4)?;
        state.serialize_field("initials", self.initials.as_ref())?;
        state.serialize_field("values", self.values.as_ref())?;
        state.serialize_field("touches", &self.touches)?;
        state.serialize_field("errors", &self.errors)?;
        state.end()
    }
}
