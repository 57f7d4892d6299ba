use crate::i18n::Locale;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// A locale offered in the step's bottom bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleChoice {
    pub code: Locale,
    /// Name shown on the switch button, in the locale's own language
    pub name: String,
}

impl LocaleChoice {
    pub fn new(code: &str, name: &str) -> Self {
        Self {
            code: Locale::new(code),
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Active locale, remembered across runs
    pub locale: Locale,
    /// Locales offered as switch buttons, in display order
    pub switch_locales: Vec<LocaleChoice>,
    /// Flow definition YAML; the built-in flow is used when unset
    pub flow_path: Option<String>,
    /// Profile JSON to start from
    pub resume_path: Option<String>,
    /// Where the finished profile is written
    pub output_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Locale::new("fi"),
            switch_locales: vec![
                LocaleChoice::new("fi", "Suomi"),
                LocaleChoice::new("en", "English"),
            ],
            flow_path: None,
            resume_path: None,
            output_path: None,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".onboarding-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load the user's config, falling back to defaults
    pub fn load() -> Config {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Config::default(),
        }
    }

    pub fn load_from(path: &Path) -> Config {
        if !path.exists() {
            return Config::default();
        }

        let parsed = fs::read_to_string(path)
            .map_err(anyhow::Error::from)
            .and_then(|contents| serde_json::from_str(&contents).map_err(anyhow::Error::from));

        match parsed {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), "ignoring unreadable config: {e}");
                Config::default()
            }
        }
    }

    /// Save the config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        // Create config directory if it doesn't exist
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    /// Destination of the finished profile record
    pub fn output_path(&self) -> Option<PathBuf> {
        match &self.output_path {
            Some(path) => Some(PathBuf::from(path)),
            None => Self::config_dir().map(|dir| dir.join("profile.json")),
        }
    }

    /// Extra `<locale>.yml` translation files
    pub fn locales_dir() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("locales"))
    }
}
