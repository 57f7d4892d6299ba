//! Profile persistence
//!
//! A resume file is a plain JSON object used as the starting profile.
//! A finished onboarding is written as a record with a completion time.

use crate::model::Profile;
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A completed onboarding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub completed_at: DateTime<Local>,
    pub profile: Profile,
}

impl ProfileRecord {
    pub fn new(profile: Profile) -> Self {
        Self {
            completed_at: Local::now(),
            profile,
        }
    }
}

/// Load a starting profile; a missing file yields an empty profile
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<Profile> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Profile::new());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile {}", path.display()))?;
    let profile = serde_json::from_str(&contents)
        .with_context(|| format!("Profile {} is not a JSON object", path.display()))?;
    Ok(profile)
}

/// Write the finished profile record
pub fn save_record<P: AsRef<Path>>(path: P, record: &ProfileRecord) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
    }

    let json = serde_json::to_string_pretty(record)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
