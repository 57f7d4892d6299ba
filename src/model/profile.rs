//! Onboarding profile - the answers accumulated across steps
//!
//! A `Profile` is a value: every change produces a new profile and leaves the
//! original untouched, so a step can hand its result to the controller without
//! aliasing the profile it was built from.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// String-keyed mapping of onboarding answers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profile(Map<String, Value>);

impl Profile {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[cfg(test)]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy of this profile with `key` set to `value`
    pub fn with(&self, key: &str, value: impl Into<Value>) -> Profile {
        let mut next = self.clone();
        next.0.insert(key.to_string(), value.into());
        next
    }

    /// Copy of this profile with `key` removed
    pub fn without(&self, key: &str) -> Profile {
        let mut next = self.clone();
        next.0.remove(key);
        next
    }
}

/// Name of a JSON value's type, for diagnostics
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
