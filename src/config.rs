//! Settings for the `codebook` binary.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// File read from the working directory when no settings path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "codebook.toml";

/// Morse message decoded by the `demo` command unless configured otherwise.
pub const DEMO_MESSAGE: &str =
    "-- .- .. -....- .--. -.-- - .... --- -. -....- ..--- ----- .---- ----.";

/// Top-level settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Filter directives used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Settings of the `demo` command.
    pub demo: DemoSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            demo: DemoSettings::default(),
        }
    }
}

/// Settings of the `demo` command.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DemoSettings {
    /// Morse message that is decoded and re-encoded.
    pub message: String,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            message: DEMO_MESSAGE.to_string(),
        }
    }
}

/// Load settings, falling back to defaults when no file is found.
///
/// An explicit path must exist. Without one, [`DEFAULT_SETTINGS_FILE`] is read if present.
pub fn load_settings(explicit: Option<PathBuf>) -> Result<Settings> {
    let (candidate, explicit_provided) = match explicit {
        Some(path) => (path, true),
        None => (PathBuf::from(DEFAULT_SETTINGS_FILE), false),
    };

    if candidate.exists() {
        read_settings(&candidate)
    } else if explicit_provided {
        bail!("settings file not found at {}", candidate.display());
    } else {
        Ok(Settings::default())
    }
}

fn read_settings(path: &Path) -> Result<Settings> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read settings from {}", path.display()))?;
    toml::from_str(&raw)
        .with_context(|| format!("failed to parse TOML settings at {}", path.display()))
}
