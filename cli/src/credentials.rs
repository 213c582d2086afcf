// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{collections::HashMap, error::Error, io, path::Path, str::FromStr};

use gcalx_core::{AuthError, CredentialStore, StoredToken};
use tokio::fs;

/// Credentials read from a TOML file, one table per account.
///
/// ```toml
/// [accounts."me@example.com"]
/// refresh_token = "1//..."
/// scopes = ["https://www.googleapis.com/auth/calendar"]
/// ```
#[derive(Debug, Default, serde::Deserialize)]
pub struct TomlCredentialStore {
    #[serde(default)]
    accounts: HashMap<String, StoredToken>,
}

impl TomlCredentialStore {
    /// Loads the store from `path`. A missing file yields an empty store.
    #[tracing::instrument]
    pub async fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        match fs::read_to_string(path).await {
            Ok(content) => content.parse::<Self>().map_err(|e| {
                format!("Failed to parse credentials at {}: {e}", path.display()).into()
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("no credentials file");
                Ok(Self::default())
            }
            Err(e) => {
                Err(format!("Failed to read credentials at {}: {e}", path.display()).into())
            }
        }
    }
}

impl FromStr for TomlCredentialStore {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}

impl CredentialStore for TomlCredentialStore {
    fn get_token(&self, email: &str) -> Result<Option<StoredToken>, AuthError> {
        Ok(self.accounts.get(email).cloned())
    }
}
