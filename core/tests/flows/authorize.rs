// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Credential checks before a request is handed to a transport.

use gcalx_core::{AuthError, CredentialStore, Service, StoredToken, authorize};

use crate::common::{TEST_EMAIL, test_store};

struct FailingStore;

impl CredentialStore for FailingStore {
    fn get_token(&self, _email: &str) -> Result<Option<StoredToken>, AuthError> {
        Err(AuthError::Store("keyring locked".to_string()))
    }
}

#[test]
fn not_found_and_insufficient_are_distinct() {
    let store = test_store(&["https://www.googleapis.com/auth/drive"]);

    let err = authorize(&store, Service::Calendar, "other@example.com").unwrap_err();
    assert!(matches!(err, AuthError::AuthRequired { .. }), "{err:?}");

    let err = authorize(&store, Service::Calendar, TEST_EMAIL).unwrap_err();
    match err {
        AuthError::MissingScopes { missing, .. } => {
            assert_eq!(missing, Service::Calendar.scopes());
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn every_service_passes_with_its_own_scopes() {
    for service in Service::ALL {
        let store = test_store(service.scopes());
        assert!(authorize(&store, service, TEST_EMAIL).is_ok(), "{service}");
    }
}

#[test]
fn store_failures_propagate() {
    let err = authorize(&FailingStore, Service::Drive, TEST_EMAIL).unwrap_err();
    assert_eq!(err, AuthError::Store("keyring locked".to_string()));
    assert_eq!(err.remediation(), None);
}
