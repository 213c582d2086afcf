// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Errors raised while turning command arguments into request values.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// A closed-vocabulary field got a value outside its vocabulary.
    #[error("invalid {field} '{value}': must be one of {accepted}")]
    InvalidOption {
        /// The field being validated, e.g. `visibility`
        field: &'static str,
        /// The raw value as typed by the user
        value: String,
        /// Human readable list of the accepted values
        accepted: &'static str,
    },

    /// A duration could not be parsed or is out of range.
    #[error("invalid duration '{value}': {reason}")]
    InvalidDuration {
        /// The raw duration text
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// A reminder spec is malformed.
    #[error("invalid reminder '{spec}': {reason}")]
    InvalidReminder {
        /// The raw `method:duration` spec
        spec: String,
        /// Why it was rejected
        reason: String,
        /// The duration error, when the duration part was the problem
        #[source]
        source: Option<Box<RequestError>>,
    },

    /// More reminder overrides than the remote API accepts.
    #[error("too many reminders: got {count}, at most {max} are allowed")]
    TooManyReminders {
        /// Number of non-blank reminder specs supplied
        count: usize,
        /// The maximum allowed
        max: usize,
    },

    /// A date or timestamp could not be parsed.
    #[error("invalid date/time '{value}': {reason}")]
    InvalidDateTime {
        /// The raw value
        value: String,
        /// Why it was rejected
        reason: String,
    },
}

impl RequestError {
    pub(crate) fn invalid_duration(value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidDuration {
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_datetime(value: &str, reason: impl ToString) -> Self {
        Self::InvalidDateTime {
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Errors at the credential boundary.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// No stored credentials for the account.
    #[error("no credentials for {email} ({service})")]
    AuthRequired {
        /// Logical service name
        service: String,
        /// Account email
        email: String,
    },

    /// Credentials exist but were granted fewer scopes than the service needs.
    #[error("credentials for {email} ({service}) are missing scopes: {}", missing.join(", "))]
    MissingScopes {
        /// Logical service name
        service: String,
        /// Account email
        email: String,
        /// Scopes the token lacks, in registry order
        missing: Vec<String>,
    },

    /// The service name is not in the scope registry.
    #[error("unknown service '{0}'")]
    UnknownService(String),

    /// The credential store itself failed.
    #[error("credential store error: {0}")]
    Store(String),
}

impl AuthError {
    /// The instruction to show the user for this error, if there is one.
    pub fn remediation(&self) -> Option<String> {
        match self {
            Self::AuthRequired { email, .. } => Some(format!("run `login` for {email} first")),
            Self::MissingScopes { service, email, .. } => Some(format!(
                "re-authorize {email} with the additional {service} scopes"
            )),
            Self::UnknownService(_) | Self::Store(_) => None,
        }
    }
}
