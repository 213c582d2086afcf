// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::Event;

/// A start or end boundary of an event.
///
/// An event boundary is either a calendar date (all-day events) or an RFC 3339
/// instant, never both. On the wire this becomes `{"date": ..}` or
/// `{"dateTime": ..}`, plus the `timeZone` the API reported for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEventDateTime", into = "RawEventDateTime")]
pub enum EventDateTime {
    /// Calendar date, e.g. `2025-01-10`.
    Date {
        /// The date itself
        date: String,
        /// IANA time zone name, e.g. `Europe/Paris`
        time_zone: Option<String>,
    },

    /// RFC 3339 instant, e.g. `2025-01-10T12:00:00Z`.
    DateTime {
        /// The instant, offset included
        date_time: String,
        /// IANA time zone name the recurrence is expanded in
        time_zone: Option<String>,
    },
}

impl EventDateTime {
    /// An all-day boundary without a time zone.
    pub fn all_day(date: impl Into<String>) -> Self {
        EventDateTime::Date {
            date: date.into(),
            time_zone: None,
        }
    }

    /// A timed boundary without a time zone.
    pub fn timed(date_time: impl Into<String>) -> Self {
        EventDateTime::DateTime {
            date_time: date_time.into(),
            time_zone: None,
        }
    }

    /// Replaces the IANA time zone of the boundary.
    #[must_use]
    pub fn with_time_zone(mut self, tz: Option<String>) -> Self {
        match &mut self {
            EventDateTime::Date { time_zone, .. } | EventDateTime::DateTime { time_zone, .. } => {
                *time_zone = tz;
            }
        }
        self
    }

    /// The calendar date, if this is an all-day boundary.
    pub fn date(&self) -> Option<&str> {
        match self {
            EventDateTime::Date { date, .. } => Some(date),
            EventDateTime::DateTime { .. } => None,
        }
    }

    /// The instant, if this is a timed boundary.
    pub fn date_time(&self) -> Option<&str> {
        match self {
            EventDateTime::Date { .. } => None,
            EventDateTime::DateTime { date_time, .. } => Some(date_time),
        }
    }

    /// The raw value, whichever kind it is.
    pub fn value(&self) -> &str {
        match self {
            EventDateTime::Date { date: v, .. } | EventDateTime::DateTime { date_time: v, .. } => v,
        }
    }

    /// The IANA time zone, if the API reported one.
    pub fn time_zone(&self) -> Option<&str> {
        match self {
            EventDateTime::Date { time_zone, .. } | EventDateTime::DateTime { time_zone, .. } => {
                time_zone.as_deref()
            }
        }
    }

    /// Whether both boundaries are dates, or both are instants.
    pub fn same_kind(&self, other: &EventDateTime) -> bool {
        self.date().is_some() == other.date().is_some()
    }
}

/// Shape the value as an all-day date or as a timed instant.
///
/// The value is not validated here, the remote API rejects malformed input.
pub fn build_event_date_time(value: &str, is_all_day: bool) -> EventDateTime {
    if is_all_day {
        EventDateTime::all_day(value)
    } else {
        EventDateTime::timed(value)
    }
}

/// Whether the event is an all-day event, judged by its start boundary.
pub fn is_all_day_event(event: Option<&Event>) -> bool {
    event
        .and_then(|e| e.start.as_ref())
        .and_then(EventDateTime::date)
        .is_some_and(|d| !d.is_empty())
}

/// The API resource carries `date`, `dateTime` and `timeZone` side by side.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEventDateTime {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    date_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    time_zone: Option<String>,
}

impl TryFrom<RawEventDateTime> for EventDateTime {
    type Error = String;

    fn try_from(raw: RawEventDateTime) -> Result<Self, Self::Error> {
        let date = raw.date.filter(|a| !a.is_empty());
        let date_time = raw.date_time.filter(|a| !a.is_empty());
        let time_zone = raw.time_zone.filter(|a| !a.is_empty());
        match (date, date_time) {
            (Some(date), None) => Ok(EventDateTime::Date { date, time_zone }),
            (None, Some(date_time)) => Ok(EventDateTime::DateTime {
                date_time,
                time_zone,
            }),
            (Some(_), Some(_)) => Err("both date and dateTime are set".to_string()),
            (None, None) => Err("one of date or dateTime must be set".to_string()),
        }
    }
}

impl From<EventDateTime> for RawEventDateTime {
    fn from(value: EventDateTime) -> Self {
        match value {
            EventDateTime::Date { date, time_zone } => RawEventDateTime {
                date: Some(date),
                date_time: None,
                time_zone,
            },
            EventDateTime::DateTime {
                date_time,
                time_zone,
            } => RawEventDateTime {
                date: None,
                date_time: Some(date_time),
                time_zone,
            },
        }
    }
}
