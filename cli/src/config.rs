// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use gcalx_core::{APP_NAME, Config, get_config_dir};

const GCALX_CONFIG_ENV: &str = "GCALX_CONFIG";
const GCALX_DEV_ENV: &str = "GCALX_DEV";

/// Loads the configuration.
///
/// The file is taken from `path`, then from `GCALX_CONFIG`, then from the
/// user's config directory. Only the last one may be missing, in which case
/// the built-in defaults apply.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(GCALX_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        if env_flag(GCALX_DEV_ENV) == Some(true) {
            let msg = format!(
                "{GCALX_DEV_ENV} is on, refusing to read the user config: \
                 pass --config or set {GCALX_CONFIG_ENV}"
            );
            return Err(msg.into());
        }

        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config file, using defaults");
            let mut config = Config::default();
            config.normalize()?;
            return Ok(config);
        }
        config
    };

    let mut config = fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()?
        .core;

    config
        .normalize()
        .map_err(|e| format!("Invalid config file at {}: {}", path.display(), e))?;
    Ok(config)
}

#[derive(Debug, serde::Deserialize)]
struct ConfigRaw {
    #[serde(default)]
    core: Config,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

/// Reads an on/off switch from the environment, ignoring case.
///
/// Unset and unrecognized values both give `None`.
fn env_flag(name: &str) -> Option<bool> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => {
            tracing::warn!(var = name, value = %raw, "expected an on/off value, ignoring it");
            None
        }
    }
}
