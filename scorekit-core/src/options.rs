//! Keyword-style configuration passed through to scorers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Extra configuration accepted by every scorer.
///
/// Keys are free-form. A scorer reads the keys it understands and ignores the
/// rest, so callers can hand the same options to many scorers.
///
/// # Examples
///
/// ```
/// use scorekit_core::EvalOptions;
///
/// let options = EvalOptions::new().with("precision", 3);
/// assert_eq!(options.get("precision"), Some(&serde_json::json!(3)));
/// assert!(options.get("unknown").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvalOptions {
    entries: BTreeMap<String, Value>,
}

impl EvalOptions {
    /// Construct an empty option set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Insert or replace an option.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Add an option while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Return the value stored under `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Report whether no options are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over options in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<K, V> FromIterator<(K, V)> for EvalOptions
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
