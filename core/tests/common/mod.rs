// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Test data factories (fixtures)
//! - Custom assertion helpers

mod assertions;
mod fixtures;

#[allow(unused_imports)]
pub use assertions::{assert_field_omitted, assert_field_present, to_json};
#[allow(unused_imports)]
pub use fixtures::{
    TEST_EMAIL, recurring_event, test_event_draft, test_store, timed_event, token_with_scopes,
};
