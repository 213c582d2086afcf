// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};

use crate::{SendUpdates, build_reminders, validate_send_updates};

/// The name of the gcalx application.
pub const APP_NAME: &str = "gcalx";

/// Calendar used when neither the command line nor the config names one.
pub const DEFAULT_CALENDAR: &str = "primary";

/// Configuration for the gcalx application.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Config {
    /// Account used when none is given on the command line.
    #[serde(default)]
    pub account: Option<String>,

    /// Calendar used when none is given on the command line.
    #[serde(default = "default_calendar")]
    pub calendar: String,

    /// Reminders applied to new events when no `--reminder` is given.
    #[serde(default)]
    pub default_reminders: Vec<String>,

    /// Default notification mode for create and update requests.
    #[serde(default)]
    pub send_updates: Option<String>,

    /// Path to the credentials file.
    #[serde(default)]
    pub credentials_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            account: None,
            calendar: default_calendar(),
            default_reminders: Vec::new(),
            send_updates: None,
            credentials_path: None,
        }
    }
}

impl Config {
    /// Normalize the configuration.
    ///
    /// Values are validated eagerly so a broken config fails before any
    /// command runs.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        if self.calendar.trim().is_empty() {
            self.calendar = default_calendar();
        }

        // Canonicalize notification mode
        if let Some(send_updates) = &self.send_updates {
            let canonical = validate_send_updates(send_updates)?;
            self.send_updates = (!canonical.is_empty()).then_some(canonical);
        }

        // Reject reminders that would fail on every `event new`
        build_reminders(&self.default_reminders)
            .map_err(|e| format!("Invalid default_reminders: {e}"))?;

        // Normalize credentials path
        match &self.credentials_path {
            Some(a) => {
                self.credentials_path = Some(
                    expand_path(a)
                        .map_err(|e| format!("Failed to expand credentials path: {e}"))?,
                );
            }

            None => match get_config_dir() {
                Ok(a) => self.credentials_path = Some(a.join(APP_NAME).join("credentials.toml")),
                Err(e) => tracing::warn!("Failed to get config directory: {e}"),
            },
        }

        Ok(())
    }

    /// The typed notification mode, if one is configured.
    pub fn send_updates(&self) -> Option<SendUpdates> {
        let value = self.send_updates.as_deref()?;
        SendUpdates::parse_optional(value).ok().flatten()
    }
}

fn default_calendar() -> String {
    DEFAULT_CALENDAR.to_string()
}

/// Handle tilde (~) and environment variables in the path
pub fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    // Handle tilde and home directory
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    // Handle config directories
    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_config_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::home_dir().ok_or("User-specific home directory not found".into())
}

/// The user's configuration directory, e.g. `$XDG_CONFIG_HOME`.
pub fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(not(unix))]
    let config_dir = dirs::config_dir();
    config_dir.ok_or("User-specific config directory not found".into())
}
