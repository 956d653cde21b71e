//! Validators, custom messages and rule lists

use std::fmt;
use std::sync::Arc;

use crate::result::{fail, ValidationResult};

/// Pure function from a field value to a [`ValidationResult`]
///
/// Cloning is cheap: the function is shared behind an `Arc`.
pub struct Validator<V> {
    check: Arc<dyn Fn(&V) -> ValidationResult + Send + Sync>,
}

impl<V> Validator<V> {
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&V) -> ValidationResult + Send + Sync + 'static,
    {
        Self {
            check: Arc::new(check),
        }
    }

    pub fn validate(&self, value: &V) -> ValidationResult {
        (self.check)(value)
    }
}

impl<V: 'static> Validator<V> {
    /// Replaces the failure message of this validator.
    ///
    /// Passing results are returned untouched. An override that renders to
    /// an empty string keeps the validator's own message.
    pub fn with_message(self, message: impl Into<Message<V>>) -> Self {
        let message = message.into();
        Validator::new(move |value: &V| match self.validate(value) {
            ValidationResult::Passed => ValidationResult::Passed,
            ValidationResult::Failed { message: original } => {
                fail(message.render_or(value, original))
            }
        })
    }
}

impl<V> Clone for Validator<V> {
    fn clone(&self) -> Self {
        Self {
            check: Arc::clone(&self.check),
        }
    }
}

impl<V> fmt::Debug for Validator<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator").finish_non_exhaustive()
    }
}

/// Custom failure message: a literal, or computed from the rejected value
pub enum Message<V: ?Sized> {
    Literal(String),
    Dynamic(Arc<dyn Fn(&V) -> String + Send + Sync>),
}

impl<V: ?Sized> Message<V> {
    pub fn dynamic<F>(render: F) -> Self
    where
        F: Fn(&V) -> String + Send + Sync + 'static,
    {
        Message::Dynamic(Arc::new(render))
    }

    pub fn render(&self, value: &V) -> String {
        match self {
            Message::Literal(text) => text.clone(),
            Message::Dynamic(render) => render(value),
        }
    }

    /// Like [`render`](Self::render), but keeps `fallback` when the message
    /// renders to an empty string.
    pub fn render_or(&self, value: &V, fallback: String) -> String {
        let text = self.render(value);
        if text.is_empty() {
            fallback
        } else {
            text
        }
    }
}

impl<V: ?Sized> Clone for Message<V> {
    fn clone(&self) -> Self {
        match self {
            Message::Literal(text) => Message::Literal(text.clone()),
            Message::Dynamic(render) => Message::Dynamic(Arc::clone(render)),
        }
    }
}

impl<V: ?Sized> fmt::Debug for Message<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Message::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

impl<V: ?Sized> From<&str> for Message<V> {
    fn from(text: &str) -> Self {
        Message::Literal(text.to_string())
    }
}

impl<V: ?Sized> From<String> for Message<V> {
    fn from(text: String) -> Self {
        Message::Literal(text)
    }
}

/// One entry of a field's rule list
///
/// `Check` runs against the live value; `Outcome` was decided when the rule
/// was registered (for example a skip computed from another field).
pub enum Rule<V> {
    Check(Validator<V>),
    Outcome(ValidationResult),
}

impl<V> Rule<V> {
    pub fn evaluate(&self, value: &V) -> ValidationResult {
        match self {
            Rule::Check(validator) => validator.validate(value),
            Rule::Outcome(result) => result.clone(),
        }
    }
}

impl<V> Clone for Rule<V> {
    fn clone(&self) -> Self {
        match self {
            Rule::Check(validator) => Rule::Check(validator.clone()),
            Rule::Outcome(result) => Rule::Outcome(result.clone()),
        }
    }
}

impl<V> fmt::Debug for Rule<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Check(validator) => f.debug_tuple("Check").field(validator).finish(),
            Rule::Outcome(result) => f.debug_tuple("Outcome").field(result).finish(),
        }
    }
}

impl<V> From<Validator<V>> for Rule<V> {
    fn from(validator: Validator<V>) -> Self {
        Rule::Check(validator)
    }
}

impl<V> From<&Validator<V>> for Rule<V> {
    fn from(validator: &Validator<V>) -> Self {
        Rule::Check(validator.clone())
    }
}

impl<V> From<ValidationResult> for Rule<V> {
    fn from(result: ValidationResult) -> Self {
        Rule::Outcome(result)
    }
}

impl<V> From<&Rule<V>> for Rule<V> {
    fn from(rule: &Rule<V>) -> Self {
        rule.clone()
    }
}

/// Evaluates `rules` in order and returns the message of the first failure.
///
/// Rules after the first failure are never evaluated.
pub fn first_failure<V, I>(value: &V, rules: I) -> Option<String>
where
    I: IntoIterator,
    I::Item: Into<Rule<V>>,
{
    rules
        .into_iter()
        .find_map(|rule| rule.into().evaluate(value).into_message())
}
