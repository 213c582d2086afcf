// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::RequestError;

/// Upper bound for a parsed duration, four weeks in minutes.
pub const MAX_DURATION_MINUTES: i64 = 4 * 7 * 24 * 60;

/// Unit suffix of a duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DurationUnit {
    Minute,
    Hour,
    Day,
    Week,
}

impl DurationUnit {
    fn from_suffix(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'm' => Some(Self::Minute),
            'h' => Some(Self::Hour),
            'd' => Some(Self::Day),
            'w' => Some(Self::Week),
            _ => None,
        }
    }

    const fn minutes(self) -> i64 {
        match self {
            Self::Minute => 1,
            Self::Hour => 60,
            Self::Day => 24 * 60,
            Self::Week => 7 * 24 * 60,
        }
    }
}

/// Parse a duration like `30`, `30m`, `2h`, `1d` or `1w` into minutes.
///
/// A bare integer is taken as minutes. Suffixes are case-insensitive. The
/// result must lie within `0..=MAX_DURATION_MINUTES` whatever unit was used.
pub fn parse_duration(value: &str) -> Result<i64, RequestError> {
    let s = value.trim();
    let Some(last) = s.chars().last() else {
        return Err(RequestError::invalid_duration(value, "empty duration"));
    };

    let (magnitude, unit) = if last.is_ascii_digit() {
        (s, DurationUnit::Minute)
    } else if let Some(unit) = DurationUnit::from_suffix(last) {
        (s.strip_suffix(last).unwrap_or_default(), unit)
    } else {
        return Err(RequestError::invalid_duration(
            value,
            format!("unknown unit '{last}', expected one of m, h, d, w"),
        ));
    };

    let n: i64 = magnitude
        .parse()
        .map_err(|_| RequestError::invalid_duration(value, "magnitude is not an integer"))?;
    if n < 0 {
        return Err(RequestError::invalid_duration(value, "must not be negative"));
    }

    match n.checked_mul(unit.minutes()) {
        Some(minutes) if minutes <= MAX_DURATION_MINUTES => {
            tracing::trace!(value, minutes, "parsed duration");
            Ok(minutes)
        }
        _ => Err(RequestError::invalid_duration(
            value,
            format!("exceeds the maximum of {MAX_DURATION_MINUTES} minutes (4 weeks)"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_durations() {
        let cases = [
            ("30", 30),
            ("0", 0),
            ("40320", 40320),
            ("30m", 30),
            ("1h", 60),
            ("2h", 120),
            ("1d", 1440),
            ("3d", 4320),
            ("1w", 10080),
            ("4w", 40320),
            ("1H", 60),
            ("1D", 1440),
            ("1M", 1),
            ("30M", 30),
        ];
        for (input, want) in cases {
            assert_eq!(parse_duration(input), Ok(want), "input {input:?}");
        }
    }

    #[test]
    fn rejects_invalid_durations() {
        for input in ["", "   ", "abc", "-1", "-1h", "40321", "5w", "29d", "1x", "h", "1.5h"] {
            let err = parse_duration(input).expect_err(input);
            assert!(
                matches!(err, RequestError::InvalidDuration { .. }),
                "input {input:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn rejects_overflowing_magnitude() {
        let huge = format!("{}w", i64::MAX);
        assert!(parse_duration(&huge).is_err());
    }

    #[test]
    fn error_keeps_raw_value() {
        match parse_duration("5w") {
            Err(RequestError::InvalidDuration { value, .. }) => assert_eq!(value, "5w"),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
