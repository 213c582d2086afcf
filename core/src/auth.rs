// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{collections::HashMap, fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::AuthError;

const SCOPE_CALENDAR: &str = "https://www.googleapis.com/auth/calendar";
const SCOPE_DRIVE: &str = "https://www.googleapis.com/auth/drive";
const SCOPE_GMAIL_MODIFY: &str = "https://www.googleapis.com/auth/gmail.modify";
const SCOPE_CONTACTS: &str = "https://www.googleapis.com/auth/contacts";
const SCOPE_CONTACTS_OTHER_RO: &str = "https://www.googleapis.com/auth/contacts.other.readonly";
const SCOPE_DIRECTORY_RO: &str = "https://www.googleapis.com/auth/directory.readonly";

/// A remote service an account can be authorized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Service {
    /// Calendar events.
    Calendar,

    /// Drive files.
    Drive,

    /// Gmail messages.
    Gmail,

    /// Contacts and the domain directory.
    Contacts,
}

impl Service {
    /// Every known service.
    pub const ALL: [Service; 4] = [
        Service::Calendar,
        Service::Drive,
        Service::Gmail,
        Service::Contacts,
    ];

    /// OAuth scopes a token needs before it may be used for this service.
    pub fn scopes(self) -> &'static [&'static str] {
        match self {
            Service::Calendar => &[SCOPE_CALENDAR],
            Service::Drive => &[SCOPE_DRIVE],
            Service::Gmail => &[SCOPE_GMAIL_MODIFY],
            Service::Contacts => &[SCOPE_CONTACTS, SCOPE_CONTACTS_OTHER_RO, SCOPE_DIRECTORY_RO],
        }
    }
}

impl AsRef<str> for Service {
    fn as_ref(&self) -> &str {
        match self {
            Service::Calendar => "calendar",
            Service::Drive => "drive",
            Service::Gmail => "gmail",
            Service::Contacts => "contacts",
        }
    }
}

impl Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for Service {
    type Err = AuthError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Service::ALL
            .into_iter()
            .find(|s| value.eq_ignore_ascii_case(s.as_ref()))
            .ok_or_else(|| AuthError::UnknownService(value.to_string()))
    }
}

/// Credentials persisted for one account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredToken {
    /// Long-lived token used to mint access tokens.
    pub refresh_token: String,

    /// Scopes granted when the token was issued. Older tokens may not record any.
    #[serde(default)]
    pub scopes: Vec<String>,
}

/// Where account credentials are kept, keyed by account email.
pub trait CredentialStore {
    /// Looks up the token of `email`, `Ok(None)` when the account has none.
    fn get_token(&self, email: &str) -> Result<Option<StoredToken>, AuthError>;
}

/// A credential store held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    tokens: HashMap<String, StoredToken>,
}

impl MemoryCredentialStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `token` for `email`, replacing any previous one.
    pub fn insert(&mut self, email: impl Into<String>, token: StoredToken) {
        self.tokens.insert(email.into(), token);
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get_token(&self, email: &str) -> Result<Option<StoredToken>, AuthError> {
        Ok(self.tokens.get(email).cloned())
    }
}

/// Checks that `email` holds a token good enough for `service`.
///
/// A token that records its granted scopes must include every scope the
/// service needs. A token that records none is accepted as is.
pub fn authorize<S>(store: &S, service: Service, email: &str) -> Result<StoredToken, AuthError>
where
    S: CredentialStore + ?Sized,
{
    let Some(token) = store.get_token(email)? else {
        tracing::debug!(%service, email, "no stored credentials");
        return Err(AuthError::AuthRequired {
            service: service.to_string(),
            email: email.to_string(),
        });
    };

    if !token.scopes.is_empty() {
        let missing: Vec<String> = service
            .scopes()
            .iter()
            .filter(|want| !token.scopes.iter().any(|have| have == *want))
            .map(ToString::to_string)
            .collect();

        if !missing.is_empty() {
            tracing::debug!(%service, email, ?missing, "stored credentials lack scopes");
            return Err(AuthError::MissingScopes {
                service: service.to_string(),
                email: email.to_string(),
                missing,
            });
        }
    }

    Ok(token)
}
