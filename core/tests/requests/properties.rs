// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Behaviour of the individual parsers through the public API.

use gcalx_core::{
    Attendee, MAX_DURATION_MINUTES, ReminderMethod, ReminderOverride, RequestError,
    build_reminders, parse_attendee, parse_duration, parse_reminder, recurrence_until,
    truncate_recurrence, validate_color_id, validate_send_updates, validate_transparency,
    validate_visibility,
};

#[test]
fn color_id_validation_is_identity_on_range() {
    for n in 1..=11 {
        let s = n.to_string();
        assert_eq!(validate_color_id(&s).unwrap(), s);
    }
    assert_eq!(validate_color_id("").unwrap(), "");
    assert!(validate_color_id("0").is_err());
    assert!(validate_color_id("12").is_err());
    assert!(validate_color_id("blue").is_err());
}

#[test]
fn validators_are_idempotent_on_canonical_output() {
    for input in ["DEFAULT", "public", "Private", "confidential"] {
        let once = validate_visibility(input).unwrap();
        assert_eq!(validate_visibility(&once).unwrap(), once);
    }
    for input in ["busy", "free", "OPAQUE"] {
        let once = validate_transparency(input).unwrap();
        assert_eq!(validate_transparency(&once).unwrap(), once);
    }
    for input in ["ALL", "externalonly", "none"] {
        let once = validate_send_updates(input).unwrap();
        assert_eq!(validate_send_updates(&once).unwrap(), once);
    }
}

#[test]
fn invalid_option_error_names_the_vocabulary() {
    let err = validate_transparency("maybe").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("transparency"), "{message}");
    assert!(message.contains("maybe"), "{message}");
    assert!(message.contains("opaque"), "{message}");
}

#[test]
fn duration_bounds() {
    assert_eq!(parse_duration("1h").unwrap(), 60);
    assert_eq!(parse_duration("1d").unwrap(), 1440);
    assert_eq!(parse_duration("1w").unwrap(), 10080);
    assert_eq!(parse_duration("4w").unwrap(), MAX_DURATION_MINUTES);
    assert!(parse_duration("5w").is_err());
    assert!(parse_duration("40321").is_err());
    assert!(parse_duration("-1").is_err());
}

#[test]
fn reminder_specs() {
    assert_eq!(
        parse_reminder("popup:30m").unwrap(),
        ReminderOverride {
            method: ReminderMethod::Popup,
            minutes: 30
        }
    );
    assert_eq!(
        parse_reminder("EMAIL:1d").unwrap(),
        ReminderOverride {
            method: ReminderMethod::Email,
            minutes: 1440
        }
    );
    assert!(parse_reminder("sms:30m").is_err());
}

#[test]
fn reminder_sets() {
    let empty: Vec<String> = Vec::new();
    assert_eq!(build_reminders(&empty).unwrap(), None);
    assert_eq!(build_reminders(&["", " "]).unwrap(), None);

    let six = ["popup:1m"; 6];
    assert!(matches!(
        build_reminders(&six),
        Err(RequestError::TooManyReminders { count: 6, .. })
    ));

    let set = build_reminders(&["email:1d", "popup:10m"]).unwrap().unwrap();
    assert!(set.sends_use_default());
    assert!(!set.use_default);
    let methods: Vec<_> = set.overrides.iter().map(|o| o.method).collect();
    assert_eq!(methods, [ReminderMethod::Email, ReminderMethod::Popup]);
}

#[test]
fn recurrence_boundaries() {
    assert_eq!(recurrence_until("2025-01-10").unwrap(), "20250109");
    assert_eq!(
        recurrence_until("2025-01-10T12:00:00Z").unwrap(),
        "20250110T115959Z"
    );

    let rules = ["RRULE:FREQ=WEEKLY;COUNT=10", "EXDATE:20250101T100000Z"];
    assert_eq!(
        truncate_recurrence(&rules, "2025-01-10T12:00:00Z").unwrap(),
        [
            "RRULE:FREQ=WEEKLY;UNTIL=20250110T115959Z",
            "EXDATE:20250101T100000Z"
        ]
    );
}

#[test]
fn attendee_specs() {
    assert_eq!(parse_attendee(";optional"), None);
    assert_eq!(parse_attendee(""), None);
    assert_eq!(
        parse_attendee("dave@example.com;OPTIONAL;comment=Hi"),
        Some(Attendee {
            email: "dave@example.com".to_string(),
            optional: true,
            comment: "Hi".to_string(),
            ..Default::default()
        })
    );
}

#[test]
fn attendee_unknown_modifiers_are_ignored() {
    // Documents the lenient behaviour: unrecognized modifiers do not fail.
    let attendee = parse_attendee("eve@example.com;vip;comment=x").unwrap();
    assert!(!attendee.optional);
    assert_eq!(attendee.comment, "x");
}
