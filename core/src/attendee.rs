// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A guest of an event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    /// Email address of the guest.
    pub email: String,

    /// Whether attendance is optional.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub optional: bool,

    /// Free-form comment attached to the guest.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,

    /// Fields reported by the API such as `responseStatus` or `displayName`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Parses a single attendee spec of the form `email[;optional][;comment=text]`.
///
/// Returns `None` when the email part is empty so callers can skip the entry.
/// Modifiers other than `optional` and `comment=` are ignored.
pub fn parse_attendee(spec: &str) -> Option<Attendee> {
    let mut parts = spec.split(';');
    let email = parts.next().unwrap_or_default().trim();
    if email.is_empty() {
        return None;
    }

    let mut attendee = Attendee {
        email: email.to_string(),
        ..Default::default()
    };
    for token in parts {
        if token.trim().eq_ignore_ascii_case("optional") {
            attendee.optional = true;
        } else if let Some((key, text)) = token.split_once('=')
            && key.trim().eq_ignore_ascii_case("comment")
        {
            attendee.comment = text.to_string();
        } else if !token.trim().is_empty() {
            tracing::debug!(email, token, "ignoring unknown attendee modifier");
        }
    }
    Some(attendee)
}

/// Splits a comma-separated list, trimming entries and dropping empty ones.
///
/// Returns `None` when nothing is left.
pub fn split_csv(s: &str) -> Option<Vec<String>> {
    let items: Vec<String> = s
        .split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(ToString::to_string)
        .collect();

    (!items.is_empty()).then_some(items)
}

/// Parses a comma-separated attendee list, skipping entries without an email.
pub fn parse_attendees(csv: &str) -> Option<Vec<Attendee>> {
    let attendees: Vec<Attendee> = split_csv(csv)?
        .iter()
        .filter_map(|a| parse_attendee(a))
        .collect();

    (!attendees.is_empty()).then_some(attendees)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attendee(email: &str, optional: bool, comment: &str) -> Attendee {
        Attendee {
            email: email.to_string(),
            optional,
            comment: comment.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn parses_attendee_specs() {
        let cases = [
            ("alice@example.com", attendee("alice@example.com", false, "")),
            ("bob@example.com;optional", attendee("bob@example.com", true, "")),
            (
                "carol@example.com;comment=FYI only",
                attendee("carol@example.com", false, "FYI only"),
            ),
            (
                "dave@example.com;OPTIONAL;comment=Hi",
                attendee("dave@example.com", true, "Hi"),
            ),
        ];
        for (input, want) in cases {
            assert_eq!(parse_attendee(input), Some(want), "input {input:?}");
        }
    }

    #[test]
    fn yields_no_attendee_without_email() {
        assert_eq!(parse_attendee(""), None);
        assert_eq!(parse_attendee(";optional"), None);
        assert_eq!(parse_attendee("  ;comment=x"), None);
    }

    #[test]
    fn comment_splits_on_first_equals_only() {
        let got = parse_attendee("erin@example.com;comment=a=b= c ").unwrap();
        assert_eq!(got.comment, "a=b= c ");
    }

    #[test]
    fn ignores_unknown_modifiers() {
        // Lenient on purpose: unknown tokens are dropped rather than rejected.
        let got = parse_attendee("frank@example.com;required;resource=yes;optional").unwrap();
        assert_eq!(got, attendee("frank@example.com", true, ""));
    }

    #[test]
    fn splits_csv() {
        assert_eq!(split_csv(""), None);
        assert_eq!(split_csv(" , ,"), None);
        assert_eq!(
            split_csv(" a@b.com, c@d.com ,,"),
            Some(vec!["a@b.com".to_string(), "c@d.com".to_string()])
        );
    }

    #[test]
    fn parses_attendee_list() {
        let got = parse_attendees("a@b.com;optional, ;comment=skip, c@d.com").unwrap();
        assert_eq!(
            got,
            vec![attendee("a@b.com", true, ""), attendee("c@d.com", false, "")]
        );
        assert_eq!(parse_attendees(";optional"), None);
        assert_eq!(parse_attendees(""), None);
    }

    #[test]
    fn serializes_without_unset_modifiers() {
        let json = serde_json::to_value(attendee("a@b.com", false, "")).unwrap();
        assert_eq!(json, serde_json::json!({ "email": "a@b.com" }));

        let json = serde_json::to_value(attendee("a@b.com", true, "Hi")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "email": "a@b.com", "optional": true, "comment": "Hi" })
        );
    }

    #[test]
    fn keeps_fields_reported_by_the_api() {
        let json = serde_json::json!({
            "email": "a@b.com",
            "displayName": "Ann",
            "responseStatus": "accepted",
        });
        let guest: Attendee = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(guest.email, "a@b.com");
        assert_eq!(guest.extra["responseStatus"], "accepted");
        assert_eq!(serde_json::to_value(&guest).unwrap(), json);
    }
}
