//! Validated value types for formgate rules
//!
//! Newtype wrappers built with `nutype`, so a value that reached the rule
//! comparison code has already been proven well-formed at construction.
//!
//! # Digit strings
//!
//! [`DigitString`] is a strict non-negative integer literal: ASCII digits only,
//! no sign, no decimal point, no exponent, no hex prefix and no whitespace.
//! Comparison is done on the decimal digits themselves, so values of any size
//! compare exactly.
//!
//! ```rust,ignore
//! use formgate_types::DigitString;
//!
//! let small = DigitString::try_new("100")?;
//! let huge = DigitString::try_new("340282366920938463463374607431768211456")?;
//! assert!(huge.is_greater_than(&small));
//!
//! assert!(DigitString::try_new("-1").is_err());
//! assert!(DigitString::try_new("1e3").is_err());
//! ```

use std::cmp::Ordering;

use nutype::nutype;
use once_cell::sync::Lazy;
use regex::Regex;

static DIGITS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// Returns true when `s` is one or more ASCII decimal digits.
pub fn is_digit_string(s: &str) -> bool {
    DIGITS_REGEX.is_match(s)
}

/// Strict non-negative integer literal of arbitrary length
///
/// Leading zeros are accepted (`"007"` is a valid literal equal to `7`).
#[nutype(
    validate(predicate = is_digit_string),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct DigitString(String);

impl DigitString {
    /// Parses `s`, returning `None` when it is not a strict digit literal.
    pub fn parse(s: &str) -> Option<Self> {
        Self::try_new(s.to_string()).ok()
    }

    /// Compares the numeric values of two literals.
    ///
    /// Equality here is numeric, so `"007"` and `"7"` compare as equal even
    /// though the wrapped strings differ.
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        let lhs = significant_digits(self.as_ref());
        let rhs = significant_digits(other.as_ref());
        lhs.len().cmp(&rhs.len()).then_with(|| lhs.cmp(rhs))
    }

    /// Numeric `self > other`.
    pub fn is_greater_than(&self, other: &Self) -> bool {
        self.cmp_value(other) == Ordering::Greater
    }
}

// "0", "000" and "" all collapse to the empty slice
fn significant_digits(s: &str) -> &str {
    s.trim_start_matches('0')
}
