// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{collections::BTreeSet, fmt::Display, str::FromStr};

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::{RequestError, parse_duration};

/// The remote API accepts at most this many reminder overrides per event.
pub const MAX_REMINDER_OVERRIDES: usize = 5;

const FIELD_USE_DEFAULT: &str = "useDefault";

/// How a reminder is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderMethod {
    /// A notification on the user's devices.
    Popup,

    /// An email to the user.
    Email,
}

impl AsRef<str> for ReminderMethod {
    fn as_ref(&self) -> &str {
        match self {
            ReminderMethod::Popup => "popup",
            ReminderMethod::Email => "email",
        }
    }
}

impl Display for ReminderMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for ReminderMethod {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.eq_ignore_ascii_case("popup") {
            Ok(ReminderMethod::Popup)
        } else if value.eq_ignore_ascii_case("email") {
            Ok(ReminderMethod::Email)
        } else {
            Err(())
        }
    }
}

/// A single reminder replacing the account's defaults for one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderOverride {
    /// Delivery method.
    pub method: ReminderMethod,

    /// Minutes before the start of the event.
    pub minutes: i64,
}

/// Reminder configuration of an event.
///
/// `force_send_fields` names fields that must be serialized even when they
/// hold their default value, the remote API falls back to account defaults
/// when `useDefault` is omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawReminderSet")]
pub struct ReminderSet {
    /// Whether the calendar's default reminders apply.
    pub use_default: bool,

    /// Event specific reminders, in the order given.
    pub overrides: Vec<ReminderOverride>,

    /// Fields serialized regardless of their value.
    pub force_send_fields: BTreeSet<&'static str>,
}

impl ReminderSet {
    /// A set of overrides that explicitly disables the calendar defaults.
    pub fn with_overrides(overrides: Vec<ReminderOverride>) -> Self {
        Self {
            use_default: false,
            overrides,
            force_send_fields: BTreeSet::from([FIELD_USE_DEFAULT]),
        }
    }

    /// Whether `useDefault` will be present in the serialized form.
    pub fn sends_use_default(&self) -> bool {
        self.use_default || self.force_send_fields.contains(FIELD_USE_DEFAULT)
    }
}

impl Serialize for ReminderSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let send_use_default = self.sends_use_default();
        let send_overrides = !self.overrides.is_empty();
        let len = usize::from(send_use_default) + usize::from(send_overrides);

        let mut state = serializer.serialize_struct("ReminderSet", len)?;
        if send_use_default {
            state.serialize_field(FIELD_USE_DEFAULT, &self.use_default)?;
        } else {
            state.skip_field(FIELD_USE_DEFAULT)?;
        }
        if send_overrides {
            state.serialize_field("overrides", &self.overrides)?;
        } else {
            state.skip_field("overrides")?;
        }
        state.end()
    }
}

/// Reminders as fetched from the API. An explicit `useDefault` is sent back.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawReminderSet {
    #[serde(default)]
    use_default: Option<bool>,

    #[serde(default)]
    overrides: Vec<ReminderOverride>,
}

impl From<RawReminderSet> for ReminderSet {
    fn from(raw: RawReminderSet) -> Self {
        let mut force_send_fields = BTreeSet::new();
        if raw.use_default.is_some() {
            force_send_fields.insert(FIELD_USE_DEFAULT);
        }
        Self {
            use_default: raw.use_default.unwrap_or_default(),
            overrides: raw.overrides,
            force_send_fields,
        }
    }
}

/// Parses a `method:duration` reminder spec, e.g. `popup:30m` or `email:1d`.
pub fn parse_reminder(spec: &str) -> Result<ReminderOverride, RequestError> {
    let invalid = |reason: &str, source: Option<RequestError>| RequestError::InvalidReminder {
        spec: spec.to_string(),
        reason: reason.to_string(),
        source: source.map(Box::new),
    };

    let (method, duration) = spec
        .trim()
        .split_once(':')
        .ok_or_else(|| invalid("expected method:duration", None))?;

    let method = method
        .trim()
        .parse::<ReminderMethod>()
        .map_err(|()| invalid("method must be popup or email", None))?;

    let minutes = parse_duration(duration)
        .map_err(|e| invalid(&format!("bad duration, {e}"), Some(e)))?;

    Ok(ReminderOverride { method, minutes })
}

/// Builds the reminder set for an event from raw specs.
///
/// Blank specs are dropped. When nothing is left the result is `None`, the
/// caller must then leave the reminders field out entirely.
pub fn build_reminders<S: AsRef<str>>(specs: &[S]) -> Result<Option<ReminderSet>, RequestError> {
    let specs: Vec<&str> = specs
        .iter()
        .map(AsRef::as_ref)
        .filter(|a| !a.trim().is_empty())
        .collect();

    if specs.is_empty() {
        return Ok(None);
    }

    let overrides = specs
        .iter()
        .map(|a| parse_reminder(a))
        .collect::<Result<Vec<_>, _>>()?;

    if overrides.len() > MAX_REMINDER_OVERRIDES {
        return Err(RequestError::TooManyReminders {
            count: overrides.len(),
            max: MAX_REMINDER_OVERRIDES,
        });
    }

    tracing::debug!(count = overrides.len(), "built reminder overrides");
    Ok(Some(ReminderSet::with_overrides(overrides)))
}
