// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.
//!
//! This module provides assertions on the serialized request payloads.

use serde::Serialize;
use serde_json::Value;

/// Serializes a value the way it would be sent to the remote API.
///
/// # Panics
///
/// Panics if serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).expect("request should serialize")
}

/// Asserts that `field` is not present in the JSON object.
///
/// # Panics
///
/// Panics if the value is not an object or the field is present.
pub fn assert_field_omitted(json: &Value, field: &str) {
    let object = json.as_object().expect("expected a JSON object");
    assert!(
        !object.contains_key(field),
        "expected `{field}` to be omitted, got {json}"
    );
}

/// Asserts that `field` is present in the JSON object with the given value.
///
/// # Panics
///
/// Panics if the value is not an object or the field does not match.
pub fn assert_field_present(json: &Value, field: &str, expected: &Value) {
    let object = json.as_object().expect("expected a JSON object");
    assert_eq!(
        object.get(field),
        Some(expected),
        "field `{field}` mismatch in {json}"
    );
}
