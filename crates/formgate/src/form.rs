// File: formgate/src/form.rs
// Purpose: Form trait and typed field handles

use std::fmt;

/// A value set managed by a [`FormState`](crate::FormState)
///
/// Usually implemented with `#[derive(Form)]`, which also generates one
/// [`Field`] constant per struct field.
pub trait Form: Clone + PartialEq + 'static {
    /// All field names, in declaration order
    fn field_names() -> &'static [&'static str];

    /// Whether `name` is one of this form's fields
    fn has_field(name: &str) -> bool {
        Self::field_names().iter().any(|field| *field == name)
    }
}

/// Typed handle on one field of form `F` holding a `V`
///
/// The handle carries the field's name (the key used in touches and errors)
/// plus plain accessor functions, so it is `Copy` and usable in `const`s.
pub struct Field<F, V> {
    name: &'static str,
    get: fn(&F) -> &V,
    set: fn(&mut F, V),
}

impl<F, V> Field<F, V> {
    pub const fn new(name: &'static str, get: fn(&F) -> &V, set: fn(&mut F, V)) -> Self {
        Self { name, get, set }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub fn get<'a>(&self, form: &'a F) -> &'a V {
        (self.get)(form)
    }

    pub fn set(&self, form: &mut F, value: V) {
        (self.set)(form, value)
    }
}

impl<F, V> Clone for Field<F, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F, V> Copy for Field<F, V> {}

impl<F, V> fmt::Debug for Field<F, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Field").field(&self.name).finish()
    }
}
