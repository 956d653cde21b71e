//! Touched-field tracking
//!
//! A field the user has not interacted with is "untouched", and untouched
//! fields never surface validation errors. [`Touches::All`] marks every
//! field touched at once (used on submit) without enumerating field names.

use serde::{Serialize, Serializer};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Touches {
    /// Every field is touched
    All,
    /// Only the listed fields are touched
    Partial(BTreeSet<&'static str>),
}

impl Default for Touches {
    fn default() -> Self {
        Self::none()
    }
}

impl Touches {
    pub fn none() -> Self {
        Touches::Partial(BTreeSet::new())
    }

    pub fn all() -> Self {
        Touches::All
    }

    /// Returns touches with `key` marked. No-op when already `All`.
    pub fn touch(&self, key: &'static str) -> Self {
        match self {
            Touches::All => Touches::All,
            Touches::Partial(keys) => {
                let mut keys = keys.clone();
                keys.insert(key);
                Touches::Partial(keys)
            }
        }
    }

    pub fn is_touched(&self, key: &str) -> bool {
        match self {
            Touches::All => true,
            Touches::Partial(keys) => keys.contains(key),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Touches::All)
    }

    /// Whether every key in `keys` is touched
    pub fn covers(&self, keys: &[&str]) -> bool {
        match self {
            Touches::All => true,
            Touches::Partial(touched) => keys.iter().all(|key| touched.contains(*key)),
        }
    }
}

/// `true` for all fields, otherwise the list of touched field names.
impl Serialize for Touches {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Touches::All => serializer.serialize_bool(true),
            Touches::Partial(keys) => keys.serialize(serializer),
        }
    }
}
