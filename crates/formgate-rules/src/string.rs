//! String validation rules
//!
//! Every rule is produced by [`string_rule`], which pairs a rule-specific
//! check with an optional custom message. The custom message only replaces
//! the default one when the check fails.
//!
//! Apart from [`required`], every rule accepts the empty string: emptiness is
//! `required`'s concern, so an optional field stays valid until filled in.

use std::fmt;
use std::sync::Arc;

use formgate_types::{is_digit_string, DigitString};

use crate::result::{fail, pass, ValidationResult};
use crate::validator::{Message, Rule, Validator};

type Check = dyn Fn(&str) -> ValidationResult + Send + Sync;

/// A string rule with its (optional) message override
#[derive(Clone)]
pub struct StringRule {
    check: Arc<Check>,
    message: Option<Message<str>>,
}

/// Builds a rule from a bare check.
pub fn string_rule<F>(check: F) -> StringRule
where
    F: Fn(&str) -> ValidationResult + Send + Sync + 'static,
{
    StringRule {
        check: Arc::new(check),
        message: None,
    }
}

impl StringRule {
    /// Overrides the failure message.
    pub fn message(mut self, message: impl Into<Message<str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Overrides the failure message with one computed from the rejected value.
    ///
    /// When `render` returns an empty string the rule's default message is
    /// used instead.
    pub fn message_with<F>(self, render: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.message(Message::<str>::dynamic(render))
    }

    pub fn validate(&self, value: &str) -> ValidationResult {
        let result = (self.check)(value);
        match (&self.message, result) {
            (Some(message), ValidationResult::Failed { message: default }) => {
                fail(message.render_or(value, default))
            }
            (_, result) => result,
        }
    }
}

impl fmt::Debug for StringRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringRule")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl From<StringRule> for Validator<String> {
    fn from(rule: StringRule) -> Self {
        Validator::new(move |value: &String| rule.validate(value))
    }
}

impl From<StringRule> for Rule<String> {
    fn from(rule: StringRule) -> Self {
        Rule::Check(rule.into())
    }
}

impl From<&StringRule> for Rule<String> {
    fn from(rule: &StringRule) -> Self {
        Rule::Check(rule.clone().into())
    }
}

/// Length in Unicode scalar values, so a character outside the BMP counts once.
pub fn codepoint_len(value: &str) -> usize {
    value.chars().count()
}

/// Non-empty string.
pub fn required() -> StringRule {
    string_rule(|value| {
        if value.is_empty() {
            fail("This field is required.")
        } else {
            pass()
        }
    })
}

/// ASCII digits only.
pub fn number() -> StringRule {
    string_rule(|value| {
        if value.is_empty() || is_digit_string(value) {
            pass()
        } else {
            fail("Enter digits only.")
        }
    })
}

/// Exactly `size` characters.
pub fn length(size: usize) -> StringRule {
    string_rule(move |value| {
        if value.is_empty() || codepoint_len(value) == size {
            pass()
        } else {
            fail(format!("Enter exactly {} characters.", size))
        }
    })
}

/// At most `size` characters.
pub fn max_length(size: usize) -> StringRule {
    string_rule(move |value| {
        if value.is_empty() || codepoint_len(value) <= size {
            pass()
        } else {
            fail(format!("Enter at most {} characters.", size))
        }
    })
}

/// Non-negative integer literal of any size.
pub fn integer() -> StringRule {
    string_rule(|value| {
        if value.is_empty() || DigitString::parse(value).is_some() {
            pass()
        } else {
            fail("Enter a whole number.")
        }
    })
}

/// Integer strictly greater than `target`.
///
/// When `target` is not itself an integer literal (typically an unfilled
/// dependent field) the rule imposes no constraint and always passes.
pub fn integer_gt(target: impl Into<String>) -> StringRule {
    let target = target.into();
    let bound = DigitString::parse(&target);

    string_rule(move |value| {
        if value.is_empty() {
            return pass();
        }
        let Some(bound) = &bound else {
            return pass();
        };
        match DigitString::parse(value) {
            Some(parsed) if parsed.is_greater_than(bound) => pass(),
            _ => fail(format!("Enter an integer greater than {}.", target)),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_string_rule_factory() {
        let rule = string_rule(|value| {
            if value == "foo" {
                pass()
            } else {
                fail("value isn't foo!")
            }
        });

        assert_eq!(rule.validate("foo"), pass());
        assert_eq!(rule.validate(""), fail("value isn't foo!"));
    }

    #[test]
    fn test_custom_message_overrides_failures_only() {
        let rule = required().message("error");
        assert_eq!(rule.validate("foo"), pass());
        assert_eq!(rule.validate(""), fail("error"));

        let rule = max_length(2).message_with(|value| format!("'{}' is too long", value));
        assert_eq!(rule.validate("ab"), pass());
        assert_eq!(rule.validate("abc"), fail("'abc' is too long"));
    }

    #[test]
    fn test_empty_custom_message_falls_back_to_default() {
        let rule = length(3).message_with(|_| String::new());
        assert_eq!(rule.validate("abc"), pass());
        assert_eq!(rule.validate("ab"), fail("Enter exactly 3 characters."));

        let rule = required().message("");
        assert_eq!(rule.validate(""), fail("This field is required."));
    }

    #[test]
    fn test_required() {
        assert_eq!(required().validate(""), fail("This field is required."));
        assert_eq!(required().validate("foo"), pass());
        assert_eq!(required().validate(" "), pass());
    }

    #[rstest]
    #[case("", true)]
    #[case("0", true)]
    #[case("123456789", true)]
    #[case("007", true)]
    #[case("foo", false)]
    #[case("0x01", false)]
    #[case("1e3", false)]
    #[case("-1", false)]
    #[case("1.5", false)]
    fn test_number(#[case] input: &str, #[case] passes: bool) {
        let result = number().validate(input);
        if passes {
            assert_eq!(result, pass());
        } else {
            assert_eq!(result, fail("Enter digits only."));
        }
    }

    #[rstest]
    #[case("", true)]
    #[case("fo", false)]
    #[case("foo", true)]
    #[case("fooo", false)]
    #[case("𩸽ab", true)]
    #[case("𩸽𩸽𩸽", true)]
    #[case("𩸽𩸽", false)]
    fn test_length(#[case] input: &str, #[case] passes: bool) {
        let result = length(3).validate(input);
        if passes {
            assert_eq!(result, pass());
        } else {
            assert_eq!(result, fail("Enter exactly 3 characters."));
        }
    }

    #[rstest]
    #[case("", true)]
    #[case("fo", true)]
    #[case("foo", true)]
    #[case("fooo", false)]
    #[case("𩸽𩸽𩸽", true)]
    #[case("𩸽𩸽𩸽a", false)]
    fn test_max_length(#[case] input: &str, #[case] passes: bool) {
        let result = max_length(3).validate(input);
        if passes {
            assert_eq!(result, pass());
        } else {
            assert_eq!(result, fail("Enter at most 3 characters."));
        }
    }

    #[test]
    fn test_codepoint_len_counts_surrogate_pairs_once() {
        // U+29E3D is two UTF-16 code units and four UTF-8 bytes
        assert_eq!(codepoint_len("𩸽ab"), 3);
        assert_eq!("𩸽ab".encode_utf16().count(), 4);
    }

    #[rstest]
    #[case("", true)]
    #[case("0", true)]
    #[case("42", true)]
    #[case("123456789012345678901234567890", true)]
    #[case("-1", false)]
    #[case("+1", false)]
    #[case("1.0", false)]
    #[case("1e3", false)]
    #[case("0x10", false)]
    #[case("ten", false)]
    fn test_integer(#[case] input: &str, #[case] passes: bool) {
        let result = integer().validate(input);
        if passes {
            assert_eq!(result, pass());
        } else {
            assert_eq!(result, fail("Enter a whole number."));
        }
    }

    #[rstest]
    #[case("100", "", true)]
    #[case("100", "101", true)]
    #[case("100", "100", false)]
    #[case("100", "99", false)]
    #[case("100", "abc", false)]
    #[case("100", "-200", false)]
    #[case("0", "1", true)]
    #[case("0", "0", false)]
    #[case("0", "000", false)]
    #[case("99999999999999999999", "100000000000000000000", true)]
    #[case("100000000000000000000", "99999999999999999999", false)]
    fn test_integer_gt(#[case] target: &str, #[case] input: &str, #[case] passes: bool) {
        let result = integer_gt(target).validate(input);
        if passes {
            assert_eq!(result, pass());
        } else {
            assert_eq!(
                result,
                fail(format!("Enter an integer greater than {}.", target))
            );
        }
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("-1")]
    #[case("1.5")]
    fn test_integer_gt_skips_invalid_target(#[case] target: &str) {
        let rule = integer_gt(target);
        assert_eq!(rule.validate("anything"), pass());
        assert_eq!(rule.validate("0"), pass());
        assert_eq!(rule.validate(""), pass());
    }

    #[test]
    fn test_into_validator() {
        let validator: Validator<String> = length(2).into();
        assert_eq!(validator.validate(&"ab".to_string()), pass());
        assert_eq!(
            validator.validate(&"abc".to_string()),
            fail("Enter exactly 2 characters.")
        );
    }
}
