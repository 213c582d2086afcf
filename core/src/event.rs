// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::{
    Timestamp,
    civil::Date,
    fmt::temporal::{Pieces, PiecesOffset},
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    Attendee, EventDateTime, ReminderSet, RequestError, SendUpdates, build_event_date_time,
    build_recurrence, build_reminders, continue_recurrence, is_all_day_event, parse_attendees,
    truncate_recurrence, validate_color_id, validate_transparency, validate_visibility,
};

/// Fields the server assigns to an event, never sent when inserting a copy.
const SERVER_ASSIGNED: &[&str] = &[
    "etag",
    "iCalUID",
    "htmlLink",
    "created",
    "updated",
    "sequence",
    "recurringEventId",
    "originalStartTime",
];

/// An event resource as the remote calendar API sees it.
///
/// Unset fields are `None` and left out of the serialized payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Server assigned identifier, absent on new events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Title of the event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Geographic location as free-form text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Inclusive start.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<EventDateTime>,

    /// Exclusive end.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<EventDateTime>,

    /// Guests. `Some(vec![])` removes every guest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendees: Option<Vec<Attendee>>,

    /// Reminder configuration, `None` keeps the calendar defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminders: Option<ReminderSet>,

    /// `RRULE`, `EXDATE` and `RDATE` lines of a recurring event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Vec<String>>,

    /// Canonical color id, `1` to `11`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_id: Option<String>,

    /// Canonical visibility.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,

    /// Canonical transparency, `opaque` or `transparent`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transparency: Option<String>,

    /// Every other field of the resource, sent back untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Draft for an event, raw values as they come from the command line.
///
/// Empty strings mean "not given".
#[derive(Debug, Default, Clone)]
pub struct EventDraft {
    /// The summary of the event.
    pub summary: String,

    /// The description of the event.
    pub description: String,

    /// The location of the event.
    pub location: String,

    /// Start, a date for all-day events or an RFC 3339 timestamp.
    pub start: String,

    /// End, in the same form as `start`.
    pub end: String,

    /// Whether `start` and `end` are dates.
    pub all_day: bool,

    /// Comma-separated attendee specs.
    pub attendees: String,

    /// Reminder specs like `popup:30m`.
    pub reminders: Vec<String>,

    /// Recurrence lines like `RRULE:FREQ=WEEKLY`.
    pub recurrence: Vec<String>,

    /// Color id.
    pub color: String,

    /// Visibility.
    pub visibility: String,

    /// Transparency, `busy` and `free` are accepted.
    pub transparency: String,
}

impl EventDraft {
    /// Validates the draft and assembles the event to insert.
    pub fn build(self) -> Result<Event, RequestError> {
        let event = Event {
            id: None,
            summary: non_empty(self.summary),
            description: non_empty(self.description),
            location: non_empty(self.location),
            start: boundary(&self.start, self.all_day),
            end: boundary(&self.end, self.all_day),
            attendees: parse_attendees(&self.attendees),
            reminders: build_reminders(&self.reminders)?,
            recurrence: build_recurrence(&self.recurrence),
            color_id: non_empty(validate_color_id(&self.color)?),
            visibility: non_empty(validate_visibility(&self.visibility)?),
            transparency: non_empty(validate_transparency(&self.transparency)?),
            extra: Map::new(),
        };
        tracing::debug!(?event, "built event");
        Ok(event)
    }
}

/// Patch for an event, allowing partial updates.
///
/// `None` leaves a field untouched. For the closed-vocabulary fields an
/// empty string removes the value.
#[derive(Debug, Default, Clone)]
pub struct EventPatch {
    /// New summary.
    pub summary: Option<String>,

    /// New description, empty clears it.
    pub description: Option<String>,

    /// New location, empty clears it.
    pub location: Option<String>,

    /// New start.
    pub start: Option<String>,

    /// New end.
    pub end: Option<String>,

    /// Whether the new start and end are dates. When not given, the existing
    /// event decides.
    pub all_day: Option<bool>,

    /// Comma-separated attendee specs, empty removes all guests.
    pub attendees: Option<String>,

    /// Reminder specs, all blank restores the calendar defaults.
    pub reminders: Option<Vec<String>>,

    /// Recurrence lines, all blank makes the event a single one.
    pub recurrence: Option<Vec<String>>,

    /// Color id.
    pub color: Option<String>,

    /// Visibility.
    pub visibility: Option<String>,

    /// Transparency.
    pub transparency: Option<String>,
}

impl EventPatch {
    /// Is this patch empty, meaning no fields are set
    pub fn is_empty(&self) -> bool {
        self.summary.is_none()
            && self.description.is_none()
            && self.location.is_none()
            && self.start.is_none()
            && self.end.is_none()
            && self.all_day.is_none()
            && self.attendees.is_none()
            && self.reminders.is_none()
            && self.recurrence.is_none()
            && self.color.is_none()
            && self.visibility.is_none()
            && self.transparency.is_none()
    }

    /// Applies the patch to an event, modifying it in place.
    ///
    /// All values are validated before anything is written, so the event is
    /// left untouched on error. A new start or end keeps the time zone of the
    /// boundary it replaces. The patch is rejected when it would leave one
    /// boundary a date and the other a date-time.
    pub fn apply_to(&self, e: &mut Event) -> Result<(), RequestError> {
        let color = self.color.as_deref().map(validate_color_id).transpose()?;
        let visibility = self
            .visibility
            .as_deref()
            .map(validate_visibility)
            .transpose()?;
        let transparency = self
            .transparency
            .as_deref()
            .map(validate_transparency)
            .transpose()?;
        let reminders = match &self.reminders {
            Some(specs) => Some(build_reminders(specs)?),
            None => None,
        };

        let all_day = self.all_day.unwrap_or_else(|| is_all_day_event(Some(&*e)));
        let start = match &self.start {
            Some(v) => replace_boundary(e.start.as_ref(), v, all_day),
            None => e.start.clone(),
        };
        let end = match &self.end {
            Some(v) => replace_boundary(e.end.as_ref(), v, all_day),
            None => e.end.clone(),
        };
        if let (Some(start), Some(end)) = (&start, &end)
            && !start.same_kind(end)
        {
            return Err(RequestError::invalid_datetime(
                end.value(),
                "start and end must both be dates or both be date-times",
            ));
        }

        if let Some(summary) = &self.summary {
            e.summary = Some(summary.clone());
        }
        if let Some(description) = &self.description {
            e.description = Some(description.clone());
        }
        if let Some(location) = &self.location {
            e.location = Some(location.clone());
        }

        e.start = start;
        e.end = end;

        if let Some(attendees) = &self.attendees {
            e.attendees = Some(parse_attendees(attendees).unwrap_or_default());
        }

        if let Some(reminders) = reminders {
            e.reminders = Some(reminders.unwrap_or_else(|| ReminderSet {
                use_default: true,
                ..Default::default()
            }));
        }

        if let Some(recurrence) = &self.recurrence {
            e.recurrence = Some(build_recurrence(recurrence).unwrap_or_default());
        }

        if let Some(color) = color {
            e.color_id = non_empty(color);
        }
        if let Some(visibility) = visibility {
            e.visibility = non_empty(visibility);
        }
        if let Some(transparency) = transparency {
            e.transparency = non_empty(transparency);
        }

        Ok(())
    }
}

/// Ends the series of a recurring event before `boundary`.
///
/// Used when an edit applies to "this and following" occurrences: the
/// original series stops just before the edited occurrence. Events without
/// recurrence are left alone.
pub fn truncate_series(e: &mut Event, boundary: &str) -> Result<(), RequestError> {
    match &e.recurrence {
        Some(rules) if !rules.is_empty() => {
            e.recurrence = Some(truncate_recurrence(rules, boundary)?);
            Ok(())
        }
        _ => {
            tracing::warn!(id = ?e.id, "event is not recurring, nothing to truncate");
            Ok(())
        }
    }
}

/// Splits a recurring event at `original_start`.
///
/// Returns the original series ending before `original_start` and a new
/// series, without an id, carrying the patch from that occurrence on. The new
/// series starts at `original_start` and keeps the length of the original
/// occurrences unless the patch moves it. Its `COUNT` only covers the
/// occurrences left, see [`continue_recurrence`].
pub fn split_series(
    existing: &Event,
    patch: &EventPatch,
    original_start: &str,
) -> Result<(Event, Event), RequestError> {
    let mut following = existing.clone();
    following.id = None;
    following
        .extra
        .retain(|key, _| !SERVER_ASSIGNED.contains(&key.as_str()));
    let elapsed_days = move_to_occurrence(&mut following, original_start)?;
    if let Some(rules) = &following.recurrence {
        following.recurrence = Some(continue_recurrence(rules, elapsed_days));
    }
    patch.apply_to(&mut following)?;

    let mut parent = existing.clone();
    truncate_series(&mut parent, original_start)?;

    Ok((parent, following))
}

/// Moves the start of `e` to `occurrence`, shifting the end by the same amount.
///
/// Returns how many days the start moved, `None` when the event has no start.
fn move_to_occurrence(e: &mut Event, occurrence: &str) -> Result<Option<i64>, RequestError> {
    let Some(start) = e.start.clone() else {
        tracing::debug!(occurrence, "series has no start, keeping it as is");
        return Ok(None);
    };

    let days = match &start {
        EventDateTime::DateTime { date_time, .. } => {
            let from = parse_timestamp(date_time)?;
            let to = parse_timestamp(occurrence)?;
            let shift = to.duration_since(from);
            if let Some(end) = e.end.clone()
                && let Some(end_value) = end.date_time()
            {
                let moved = parse_timestamp(end_value)?
                    .checked_add(shift)
                    .map_err(|err| RequestError::invalid_datetime(end_value, err))?;
                let moved = format_with_offset_of(moved, end_value);
                e.end = Some(EventDateTime::timed(moved).with_time_zone(time_zone_of(&end)));
            }
            (shift.as_secs() + 43_200).div_euclid(86_400)
        }
        EventDateTime::Date { date, .. } => {
            let from = parse_date(date)?;
            let to = parse_date(occurrence)?;
            let shift = to
                .since(from)
                .map_err(|err| RequestError::invalid_datetime(occurrence, err))?;
            if let Some(end) = e.end.clone()
                && let Some(end_value) = end.date()
            {
                let moved = parse_date(end_value)?
                    .checked_add(shift)
                    .map_err(|err| RequestError::invalid_datetime(end_value, err))?;
                e.end = Some(
                    EventDateTime::all_day(moved.to_string()).with_time_zone(time_zone_of(&end)),
                );
            }
            i64::from(shift.get_days())
        }
    };

    e.start = Some(
        build_event_date_time(occurrence, start.date().is_some())
            .with_time_zone(time_zone_of(&start)),
    );
    Ok(Some(days))
}

/// Formats `ts` in the UTC offset written in `like`, or in UTC when it has none.
fn format_with_offset_of(ts: Timestamp, like: &str) -> String {
    match Pieces::parse(like).ok().and_then(|p| p.offset()) {
        Some(PiecesOffset::Numeric(offset)) => ts.display_with_offset(offset.offset()).to_string(),
        _ => ts.to_string(),
    }
}

fn time_zone_of(value: &EventDateTime) -> Option<String> {
    value.time_zone().map(ToString::to_string)
}

fn parse_timestamp(value: &str) -> Result<Timestamp, RequestError> {
    value
        .parse()
        .map_err(|err| RequestError::invalid_datetime(value, err))
}

fn parse_date(value: &str) -> Result<Date, RequestError> {
    value
        .parse()
        .map_err(|err| RequestError::invalid_datetime(value, err))
}

/// A fully assembled request for the remote calendar API.
///
/// Without `event_id` this inserts a new event, with it the event is updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    /// Target calendar.
    pub calendar_id: String,

    /// Target event, `None` for inserts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,

    /// Which guests get notified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_updates: Option<SendUpdates>,

    /// Event body.
    pub event: Event,
}

impl EventRequest {
    /// A request inserting `event` into `calendar_id`.
    pub fn insert(calendar_id: impl Into<String>, event: Event) -> Self {
        Self {
            calendar_id: calendar_id.into(),
            event_id: None,
            send_updates: None,
            event,
        }
    }

    /// A request replacing the event `event_id` in `calendar_id`.
    pub fn update(
        calendar_id: impl Into<String>,
        event_id: impl Into<String>,
        event: Event,
    ) -> Self {
        Self {
            calendar_id: calendar_id.into(),
            event_id: Some(event_id.into()),
            send_updates: None,
            event,
        }
    }

    /// Sets the notification mode.
    pub fn with_send_updates(mut self, send_updates: Option<SendUpdates>) -> Self {
        self.send_updates = send_updates;
        self
    }
}

fn non_empty(s: String) -> Option<String> {
    (!s.is_empty()).then_some(s)
}

fn boundary(value: &str, all_day: bool) -> Option<EventDateTime> {
    (!value.is_empty()).then(|| build_event_date_time(value, all_day))
}

fn replace_boundary(
    old: Option<&EventDateTime>,
    value: &str,
    all_day: bool,
) -> Option<EventDateTime> {
    boundary(value, all_day).map(|b| b.with_time_zone(old.and_then(time_zone_of)))
}
