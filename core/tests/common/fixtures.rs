// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.
//!
//! This module provides helper functions to create drafts, existing events
//! and credential stores.

use gcalx_core::{Event, EventDateTime, EventDraft, MemoryCredentialStore, StoredToken};

/// Account used by the credential fixtures.
pub const TEST_EMAIL: &str = "me@example.com";

/// Creates a timed event draft with the given summary.
///
/// # Example
///
/// ```ignore
/// let draft = test_event_draft("Team Meeting");
/// ```
#[must_use]
pub fn test_event_draft(summary: &str) -> EventDraft {
    EventDraft {
        summary: summary.to_string(),
        start: "2025-01-10T09:00:00Z".to_string(),
        end: "2025-01-10T10:00:00Z".to_string(),
        ..Default::default()
    }
}

/// Creates an existing single event as the remote API would return it.
#[must_use]
pub fn timed_event(id: &str, summary: &str) -> Event {
    Event {
        id: Some(id.to_string()),
        summary: Some(summary.to_string()),
        start: Some(EventDateTime::timed("2025-01-10T09:00:00Z")),
        end: Some(EventDateTime::timed("2025-01-10T10:00:00Z")),
        ..Default::default()
    }
}

/// Creates an existing weekly event with `count` occurrences and one exception.
#[must_use]
pub fn recurring_event(id: &str, count: u32) -> Event {
    Event {
        recurrence: Some(vec![
            format!("RRULE:FREQ=WEEKLY;BYDAY=FR;COUNT={count}"),
            "EXDATE:20250117T090000Z".to_string(),
        ]),
        ..timed_event(id, "Weekly sync")
    }
}

/// Creates a token granted the given scopes.
#[must_use]
pub fn token_with_scopes(scopes: &[&str]) -> StoredToken {
    StoredToken {
        refresh_token: "1//test-refresh-token".to_string(),
        scopes: scopes.iter().map(ToString::to_string).collect(),
    }
}

/// Creates a credential store holding one token for [`TEST_EMAIL`].
#[must_use]
pub fn test_store(scopes: &[&str]) -> MemoryCredentialStore {
    let mut store = MemoryCredentialStore::new();
    store.insert(TEST_EMAIL, token_with_scopes(scopes));
    store
}
