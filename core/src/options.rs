// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Closed-vocabulary event fields: color, visibility, transparency and the
//! attendee notification mode.
//!
//! Every field follows the same contract: empty input means "leave unset",
//! anything else is matched case-insensitively and yields the canonical
//! spelling the remote API expects.

use std::{fmt::Display, str::FromStr};

use crate::RequestError;

/// Validates a color identifier, returning the canonical id or an empty string when unset.
pub fn validate_color_id(value: &str) -> Result<String, RequestError> {
    Ok(canonical(ColorId::parse_optional(value)?))
}

/// Validates a visibility, returning the canonical value or an empty string when unset.
pub fn validate_visibility(value: &str) -> Result<String, RequestError> {
    Ok(canonical(Visibility::parse_optional(value)?))
}

/// Validates a transparency, resolving the `busy`/`free` aliases.
pub fn validate_transparency(value: &str) -> Result<String, RequestError> {
    Ok(canonical(Transparency::parse_optional(value)?))
}

/// Validates the attendee notification mode for create/update requests.
pub fn validate_send_updates(value: &str) -> Result<String, RequestError> {
    Ok(canonical(SendUpdates::parse_optional(value)?))
}

fn canonical<T: Display>(value: Option<T>) -> String {
    value.map(|a| a.to_string()).unwrap_or_default()
}

/// Event color, an index into the calendar's event palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(into = "String")]
pub struct ColorId(u8);

impl ColorId {
    /// The smallest palette index.
    pub const MIN: u8 = 1;

    /// The largest palette index.
    pub const MAX: u8 = 11;

    const FIELD: &str = "color";
    const ACCEPTED: &str = "an integer from 1 to 11";

    /// Parses an optional color id, empty input yields `None`.
    pub fn parse_optional(value: &str) -> Result<Option<Self>, RequestError> {
        if value.is_empty() {
            Ok(None)
        } else {
            value.parse().map(Some)
        }
    }

    /// The palette index.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl FromStr for ColorId {
    type Err = RequestError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || RequestError::InvalidOption {
            field: Self::FIELD,
            value: value.to_string(),
            accepted: Self::ACCEPTED,
        };

        let n: i64 = value.parse().map_err(|_| invalid())?;
        match u8::try_from(n) {
            Ok(n) if (Self::MIN..=Self::MAX).contains(&n) => Ok(Self(n)),
            _ => Err(invalid()),
        }
    }
}

impl Display for ColorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ColorId> for String {
    fn from(value: ColorId) -> Self {
        value.to_string()
    }
}

/// Defines a closed-vocabulary enum with its canonical names and accepted aliases.
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident, field = $field:literal, accepted = $accepted:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $canonical:literal $(| $alias:literal)*
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $canonical)]
                $variant,
            )+
        }

        impl $name {
            const FIELD: &str = $field;
            const ACCEPTED: &str = $accepted;

            /// Parses an optional value, empty input yields `None`.
            pub fn parse_optional(value: &str) -> Result<Option<Self>, RequestError> {
                if value.is_empty() {
                    Ok(None)
                } else {
                    value.parse().map(Some)
                }
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                match self {
                    $( $name::$variant => $canonical, )+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_ref())
            }
        }

        impl FromStr for $name {
            type Err = RequestError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                $(
                    if value.eq_ignore_ascii_case($canonical)
                        $(|| value.eq_ignore_ascii_case($alias))*
                    {
                        return Ok($name::$variant);
                    }
                )+
                Err(RequestError::InvalidOption {
                    field: Self::FIELD,
                    value: value.to_string(),
                    accepted: Self::ACCEPTED,
                })
            }
        }
    };
}

vocabulary! {
    /// Who can see the event details.
    Visibility, field = "visibility", accepted = "default, public, private, confidential" {
        /// Use the calendar's default visibility.
        Default => "default",

        /// Details are visible to all readers of the calendar.
        Public => "public",

        /// Details are visible only to attendees.
        Private => "private",

        /// Same as private, kept for compatibility.
        Confidential => "confidential",
    }
}

vocabulary! {
    /// Whether the event blocks time on the calendar.
    Transparency, field = "transparency", accepted = "opaque (busy), transparent (free)" {
        /// The event blocks time.
        Opaque => "opaque" | "busy",

        /// The event does not block time.
        Transparent => "transparent" | "free",
    }
}

vocabulary! {
    /// Which guests receive notifications about a change.
    SendUpdates, field = "send-updates", accepted = "all, externalOnly, none" {
        /// Notify all guests.
        All => "all",

        /// Notify only guests outside the organizer's domain.
        ExternalOnly => "externalOnly",

        /// Notify nobody.
        None => "none",
    }
}
