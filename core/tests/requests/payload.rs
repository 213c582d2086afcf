// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Shape of the serialized request payloads.

use gcalx_core::{EventDraft, EventRequest, SendUpdates};
use serde_json::json;

use crate::common::{assert_field_omitted, assert_field_present, test_event_draft, to_json};

#[test]
fn unset_fields_are_omitted() {
    let event = test_event_draft("Focus time").build().unwrap();
    let json = to_json(&event);

    for field in [
        "id",
        "description",
        "location",
        "attendees",
        "reminders",
        "recurrence",
        "colorId",
        "visibility",
        "transparency",
    ] {
        assert_field_omitted(&json, field);
    }
    assert_field_present(&json, "summary", &json!("Focus time"));
    assert_field_present(&json, "start", &json!({ "dateTime": "2025-01-10T09:00:00Z" }));
}

#[test]
fn populated_draft_serializes_every_field() {
    let draft = EventDraft {
        description: "Quarterly planning".to_string(),
        location: "Room 4".to_string(),
        attendees: "a@example.com;optional, b@example.com;comment=remote".to_string(),
        reminders: vec!["popup:15m".to_string(), "email:1d".to_string()],
        recurrence: vec!["RRULE:FREQ=MONTHLY;COUNT=3".to_string()],
        color: "5".to_string(),
        visibility: "Private".to_string(),
        transparency: "busy".to_string(),
        ..test_event_draft("Planning")
    };
    let json = to_json(&draft.build().unwrap());

    assert_field_present(
        &json,
        "attendees",
        &json!([
            { "email": "a@example.com", "optional": true },
            { "email": "b@example.com", "comment": "remote" },
        ]),
    );
    assert_field_present(
        &json,
        "reminders",
        &json!({
            "useDefault": false,
            "overrides": [
                { "method": "popup", "minutes": 15 },
                { "method": "email", "minutes": 1440 },
            ],
        }),
    );
    assert_field_present(&json, "recurrence", &json!(["RRULE:FREQ=MONTHLY;COUNT=3"]));
    assert_field_present(&json, "colorId", &json!("5"));
    assert_field_present(&json, "visibility", &json!("private"));
    assert_field_present(&json, "transparency", &json!("opaque"));
}

#[test]
fn blank_lists_are_omitted_not_empty() {
    let draft = EventDraft {
        attendees: " , ;optional".to_string(),
        reminders: vec![String::new(), "  ".to_string()],
        recurrence: vec![String::new()],
        ..test_event_draft("Nothing extra")
    };
    let json = to_json(&draft.build().unwrap());

    assert_field_omitted(&json, "attendees");
    assert_field_omitted(&json, "reminders");
    assert_field_omitted(&json, "recurrence");
}

#[test]
fn request_plan_carries_target_and_notification_mode() {
    let event = test_event_draft("Review").build().unwrap();
    let request = EventRequest::insert("team@group.calendar", event)
        .with_send_updates(Some(SendUpdates::All));
    let json = to_json(&request);

    assert_field_present(&json, "calendarId", &json!("team@group.calendar"));
    assert_field_present(&json, "sendUpdates", &json!("all"));
    assert_field_omitted(&json, "eventId");
}
