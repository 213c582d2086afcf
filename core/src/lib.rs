// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Request construction for a remote calendar API.
//!
//! Turns loosely formatted command arguments into validated values and
//! assembles them into event requests. Nothing here performs I/O.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

mod attendee;
mod auth;
mod config;
mod datetime;
mod duration;
mod error;
mod event;
mod options;
mod recurrence;
mod reminder;

pub use crate::attendee::{Attendee, parse_attendee, parse_attendees, split_csv};
pub use crate::auth::{CredentialStore, MemoryCredentialStore, Service, StoredToken, authorize};
pub use crate::config::{APP_NAME, Config, DEFAULT_CALENDAR, expand_path, get_config_dir};
pub use crate::datetime::{EventDateTime, build_event_date_time, is_all_day_event};
pub use crate::duration::{MAX_DURATION_MINUTES, parse_duration};
pub use crate::error::{AuthError, RequestError};
pub use crate::event::{
    Event, EventDraft, EventPatch, EventRequest, split_series, truncate_series,
};
pub use crate::options::{
    ColorId, SendUpdates, Transparency, Visibility, validate_color_id, validate_send_updates,
    validate_transparency, validate_visibility,
};
pub use crate::recurrence::{
    build_recurrence, continue_recurrence, recurrence_until, truncate_recurrence,
};
pub use crate::reminder::{
    MAX_REMINDER_OVERRIDES, ReminderMethod, ReminderOverride, ReminderSet, build_reminders,
    parse_reminder,
};
