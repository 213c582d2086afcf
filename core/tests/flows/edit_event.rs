// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Editing existing events, single occurrences and whole series.

use gcalx_core::{
    Event, EventDateTime, EventPatch, EventRequest, RequestError, split_series, truncate_series,
};
use serde_json::json;

use crate::common::{assert_field_present, recurring_event, timed_event, to_json};

#[test]
fn edit_round_trips_through_api_json() {
    let fetched = json!({
        "id": "evt1",
        "status": "confirmed",
        "summary": "Dentist",
        "start": { "date": "2025-02-03" },
        "end": { "date": "2025-02-04" },
        "reminders": { "useDefault": true },
    });
    let mut event: Event = serde_json::from_value(fetched).unwrap();

    let patch = EventPatch {
        end: Some("2025-02-05".to_string()),
        location: Some("Main street".to_string()),
        ..Default::default()
    };
    patch.apply_to(&mut event).unwrap();

    // The existing event is all-day, so the new end stays a date
    assert_eq!(event.end, Some(EventDateTime::all_day("2025-02-05")));

    let request = EventRequest::update("primary", "evt1", event);
    let json = to_json(&request);
    assert_field_present(&json, "eventId", &json!("evt1"));
    assert_field_present(
        &json["event"],
        "reminders",
        &json!({ "useDefault": true }),
    );
    assert_field_present(&json["event"], "status", &json!("confirmed"));
}

#[test]
fn explicit_all_day_flag_overrides_existing_kind() {
    let mut event = timed_event("evt2", "Offsite");
    let patch = EventPatch {
        start: Some("2025-03-01".to_string()),
        end: Some("2025-03-03".to_string()),
        all_day: Some(true),
        ..Default::default()
    };
    patch.apply_to(&mut event).unwrap();

    assert_eq!(event.start, Some(EventDateTime::all_day("2025-03-01")));
    assert_eq!(event.end, Some(EventDateTime::all_day("2025-03-03")));
}

#[test]
fn edit_following_occurrences_splits_series() {
    let existing = recurring_event("series1", 20);
    let patch = EventPatch {
        summary: Some("Weekly sync (moved)".to_string()),
        start: Some("2025-02-07T10:00:00Z".to_string()),
        end: Some("2025-02-07T11:00:00Z".to_string()),
        ..Default::default()
    };

    let (parent, following) = split_series(&existing, &patch, "2025-02-07T09:00:00Z").unwrap();

    assert_eq!(parent.id.as_deref(), Some("series1"));
    assert_eq!(
        parent.recurrence.as_deref(),
        Some(
            &[
                "RRULE:FREQ=WEEKLY;BYDAY=FR;UNTIL=20250207T085959Z".to_string(),
                "EXDATE:20250117T090000Z".to_string(),
            ][..]
        )
    );

    assert_eq!(following.id, None);
    assert_eq!(following.summary.as_deref(), Some("Weekly sync (moved)"));
    assert_eq!(
        following.start,
        Some(EventDateTime::timed("2025-02-07T10:00:00Z"))
    );
    // A BYDAY rule loses its COUNT
    assert_eq!(
        following.recurrence.as_deref(),
        Some(
            &[
                "RRULE:FREQ=WEEKLY;BYDAY=FR".to_string(),
                "EXDATE:20250117T090000Z".to_string(),
            ][..]
        )
    );

    let requests = [
        EventRequest::update("primary", "series1", parent),
        EventRequest::insert("primary", following),
    ];
    assert!(requests[0].event_id.is_some());
    assert!(requests[1].event_id.is_none());
}

#[test]
fn edit_following_occurrences_counts_down() {
    let existing = Event {
        recurrence: Some(vec!["RRULE:FREQ=DAILY;COUNT=10".to_string()]),
        ..timed_event("series3", "Daily check-in")
    };
    let patch = EventPatch {
        location: Some("Room 4".to_string()),
        ..Default::default()
    };

    let (parent, following) = split_series(&existing, &patch, "2025-01-13T09:00:00Z").unwrap();

    // Three of the ten occurrences happened before the split
    assert_eq!(
        parent.recurrence,
        Some(vec!["RRULE:FREQ=DAILY;UNTIL=20250113T085959Z".to_string()])
    );
    assert_eq!(
        following.recurrence,
        Some(vec!["RRULE:FREQ=DAILY;COUNT=7".to_string()])
    );
    assert_eq!(following.end, Some(EventDateTime::timed("2025-01-13T10:00:00Z")));
}

#[test]
fn truncating_with_bad_boundary_fails_cleanly() {
    let mut event = recurring_event("series2", 5);
    let before = event.clone();
    let err = truncate_series(&mut event, "next friday").unwrap_err();

    assert!(matches!(err, RequestError::InvalidDateTime { .. }));
    assert_eq!(event, before);
}

#[test]
fn all_day_series_truncates_to_previous_day() {
    let mut event = Event {
        start: Some(EventDateTime::all_day("2025-01-01")),
        end: Some(EventDateTime::all_day("2025-01-02")),
        recurrence: Some(vec!["RRULE:FREQ=DAILY".to_string()]),
        ..Default::default()
    };
    truncate_series(&mut event, "2025-01-15").unwrap();
    assert_eq!(
        event.recurrence,
        Some(vec!["RRULE:FREQ=DAILY;UNTIL=20250114".to_string()])
    );
}
