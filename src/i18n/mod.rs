//! i18n - Internationalization
//!
//! Components never own translations. They receive a `Translator` and look
//! keys up as `<namespace>:<dotted.path>`, falling back to the key itself.

mod catalog;

pub use catalog::Catalog;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A locale code such as `fi` or `en`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn code(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Translation lookup plus locale switching
pub trait Translator {
    /// Translate a `ns:key` lookup; unknown keys are returned unchanged
    fn t(&self, key: &str) -> String;

    /// Switch the active locale
    fn change_language(&mut self, locale: &Locale);

    fn locale(&self) -> &Locale;

    /// Translate and substitute `%{name}` placeholders
    fn t_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut result = self.t(key);
        for (name, value) in args {
            result = result.replace(&format!("%{{{name}}}"), value);
        }
        result
    }
}

/// Translate `key` inside namespace `ns`
pub fn t_ns(translator: &dyn Translator, ns: &str, key: &str) -> String {
    translator.t(&format!("{ns}:{key}"))
}
