//! Translation catalogue backed by `rust-i18n`
//!
//! The `en` and `fi` catalogues in `locales/` are compiled into the binary by
//! `i18n!` in `main.rs`. Each file holds one locale: top-level keys are
//! namespaces and nested mappings become dotted paths, so
//!
//! ```yaml
//! diet:
//!   options:
//!     vegan: Vegan
//! ```
//!
//! answers the lookup `diet:options.vegan`. Locale files dropped into the
//! config directory are loaded at runtime into a `SimpleBackend` that takes
//! precedence over the compiled catalogues.

use super::{Locale, Translator};
use anyhow::Result;
use rust_i18n::{t, Backend, SimpleBackend};
use serde_yaml::Value;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Locale used when the active locale has no entry for a key
const FALLBACK_LOCALE: &str = "en";

/// Translation catalogue for every loaded locale
pub struct Catalog {
    overrides: SimpleBackend,
    current: Locale,
}

impl Catalog {
    /// Catalogue holding the translations shipped with the binary
    pub fn embedded(locale: Locale) -> Self {
        Self {
            overrides: SimpleBackend::new(),
            current: locale,
        }
    }

    /// Merge a YAML document into `locale`, overriding existing keys
    pub fn add_yaml(&mut self, locale: &Locale, contents: &str) -> Result<()> {
        let root: Value = serde_yaml::from_str(contents)?;
        if !root.is_mapping() {
            anyhow::bail!("locale '{}' must be a mapping of namespaces", locale);
        }

        let mut flat = BTreeMap::new();
        flatten("", &root, &mut flat);
        let data: HashMap<&str, &str> = flat
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        self.overrides.add_translations(locale.code(), &data);
        Ok(())
    }

    /// Load every `<locale>.yml` / `<locale>.yaml` in `dir`; a missing
    /// directory is not an error
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize> {
        if !dir.is_dir() {
            return Ok(0);
        }

        let mut loaded = 0;
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if !matches!(
                path.extension().and_then(|e| e.to_str()),
                Some("yml") | Some("yaml")
            ) {
                continue;
            }
            let Some(code) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let contents = fs::read_to_string(&path)?;
            match self.add_yaml(&Locale::new(code), &contents) {
                Ok(()) => {
                    debug!(locale = code, path = %path.display(), "loaded locale file");
                    loaded += 1;
                }
                Err(e) => warn!(path = %path.display(), "skipping locale file: {e}"),
            }
        }
        Ok(loaded)
    }

    pub fn has_locale(&self, locale: &Locale) -> bool {
        let code = locale.code();
        rust_i18n::available_locales!()
            .iter()
            .any(|l| l.to_string() == code)
            || self
                .overrides
                .available_locales()
                .iter()
                .any(|l| l.to_string() == code)
    }

    fn override_for(&self, locale: &str, path: &str) -> Option<String> {
        self.overrides.translate(locale, path).map(|s| s.to_string())
    }
}

impl Translator for Catalog {
    fn t(&self, key: &str) -> String {
        let path = key.replacen(':', ".", 1);
        let locale = self.current.code();
        if let Some(text) = self.override_for(locale, &path) {
            return text;
        }

        // Compiled catalogues fall back to `en` and answer `<locale>.<path>`
        // when no locale has the key
        let text: String = t!(path.as_str(), locale = locale).into();
        if text != path && text != format!("{locale}.{path}") {
            return text;
        }

        self.override_for(FALLBACK_LOCALE, &path).unwrap_or_else(|| {
            debug!(key, locale, "missing translation");
            key.to_string()
        })
    }

    fn change_language(&mut self, locale: &Locale) {
        if !self.has_locale(locale) {
            warn!(
                locale = %locale,
                fallback = FALLBACK_LOCALE,
                "no translations loaded for locale, falling back"
            );
        }
        self.current = locale.clone();
    }

    fn locale(&self) -> &Locale {
        &self.current
    }

    fn t_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let (names, values): (Vec<&str>, Vec<String>) =
            args.iter().map(|(n, v)| (*n, v.to_string())).unzip();
        rust_i18n::replace_patterns(&self.t(key), &names, &values)
    }
}

/// Collapse nested mappings into `a.b.c` keys
fn flatten(prefix: &str, value: &Value, out: &mut BTreeMap<String, String>) {
    match value {
        Value::Mapping(map) => {
            for (key, child) in map {
                let Some(key) = scalar_to_string(key) else {
                    continue;
                };
                let path = if prefix.is_empty() {
                    key
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&path, child, out);
            }
        }
        other => {
            if let Some(text) = scalar_to_string(other) {
                out.insert(prefix.to_string(), text);
            }
        }
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
