// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::{SignedDuration, Timestamp, civil::Date};

use crate::RequestError;

const RRULE_PREFIX: &str = "RRULE:";

/// Computes the inclusive `UNTIL` value for a series ending at `end`.
///
/// A plain date yields the previous day as `YYYYMMDD`, a timestamp yields the
/// instant one second earlier in UTC as `YYYYMMDDTHHMMSSZ`.
pub fn recurrence_until(end: &str) -> Result<String, RequestError> {
    if end.contains('T') {
        let ts: Timestamp = end
            .parse()
            .map_err(|e| RequestError::invalid_datetime(end, e))?;
        let until = ts
            .checked_sub(SignedDuration::from_secs(1))
            .map_err(|e| RequestError::invalid_datetime(end, e))?;
        Ok(until.strftime("%Y%m%dT%H%M%SZ").to_string())
    } else {
        let date: Date = end
            .parse()
            .map_err(|e| RequestError::invalid_datetime(end, e))?;
        let until = date
            .yesterday()
            .map_err(|e| RequestError::invalid_datetime(end, e))?;
        Ok(until.strftime("%Y%m%d").to_string())
    }
}

/// Ends a recurring series at `end`.
///
/// Every `RRULE:` line drops its `COUNT` and `UNTIL` parts and gets a fresh
/// `UNTIL`. Other lines such as `EXDATE:` are kept as they are, in order.
/// Rule part names are matched regardless of case.
pub fn truncate_recurrence<S: AsRef<str>>(
    rules: &[S],
    end: &str,
) -> Result<Vec<String>, RequestError> {
    let until = recurrence_until(end)?;
    tracing::debug!(end, until, "truncating recurrence");

    let truncated = rules
        .iter()
        .map(AsRef::as_ref)
        .map(|line| match rrule_params(line) {
            Some(params) => {
                let mut parts: Vec<&str> = params
                    .split(';')
                    .filter(|p| !p.is_empty())
                    .filter(|p| !is_part(p, "COUNT") && !is_part(p, "UNTIL"))
                    .collect();
                let until = format!("UNTIL={until}");
                parts.push(&until);
                format!("{RRULE_PREFIX}{}", parts.join(";"))
            }
            None => line.to_string(),
        })
        .collect();

    Ok(truncated)
}

/// Carries the rules of a series over to a new series whose first occurrence
/// lies `elapsed_days` after the first one of the original.
///
/// `UNTIL` stays as it is. `COUNT` shrinks by the occurrences before the new
/// start when the rule repeats at a fixed daily or weekly period. Any other
/// counted rule loses its `COUNT`, as does every rule when `elapsed_days` is
/// unknown.
pub fn continue_recurrence<S: AsRef<str>>(rules: &[S], elapsed_days: Option<i64>) -> Vec<String> {
    rules
        .iter()
        .map(AsRef::as_ref)
        .map(|line| {
            let Some(params) = rrule_params(line) else {
                return line.to_string();
            };
            let parts: Vec<&str> = params.split(';').filter(|p| !p.is_empty()).collect();
            let Some(count) = parts.iter().find_map(|p| part_value(p, "COUNT")) else {
                return line.to_string();
            };

            let remaining = count
                .trim()
                .parse::<i64>()
                .ok()
                .zip(elapsed_days)
                .zip(fixed_period_days(&parts))
                .map(|((count, elapsed), period)| {
                    let passed = if elapsed > 0 {
                        (elapsed + period - 1) / period
                    } else {
                        0
                    };
                    (count - passed).max(1)
                });

            let parts: Vec<String> = match remaining {
                Some(remaining) => parts
                    .iter()
                    .map(|p| {
                        if is_part(p, "COUNT") {
                            format!("COUNT={remaining}")
                        } else {
                            (*p).to_string()
                        }
                    })
                    .collect(),
                None => {
                    tracing::warn!(line, "cannot tell how many occurrences passed, dropping COUNT");
                    parts
                        .iter()
                        .filter(|p| !is_part(p, "COUNT"))
                        .map(ToString::to_string)
                        .collect()
                }
            };
            format!("{RRULE_PREFIX}{}", parts.join(";"))
        })
        .collect()
}

/// Days between two occurrences of a rule without any `BY*` part.
fn fixed_period_days(parts: &[&str]) -> Option<i64> {
    let by_rule = parts.iter().any(|p| {
        p.get(..2)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("BY"))
    });
    if by_rule {
        return None;
    }

    let unit = match parts.iter().find_map(|p| part_value(p, "FREQ"))? {
        freq if freq.eq_ignore_ascii_case("DAILY") => 1,
        freq if freq.eq_ignore_ascii_case("WEEKLY") => 7,
        _ => return None,
    };
    let interval = match parts.iter().find_map(|p| part_value(p, "INTERVAL")) {
        Some(v) => v.trim().parse::<i64>().ok().filter(|n| *n > 0)?,
        None => 1,
    };
    Some(unit * interval)
}

/// The parameters of an `RRULE:` line, the prefix matched regardless of case.
fn rrule_params(line: &str) -> Option<&str> {
    line.get(..RRULE_PREFIX.len())
        .filter(|prefix| prefix.eq_ignore_ascii_case(RRULE_PREFIX))
        .and_then(|_| line.get(RRULE_PREFIX.len()..))
}

fn part_value<'a>(part: &'a str, name: &str) -> Option<&'a str> {
    part.split_once('=')
        .filter(|(key, _)| key.trim().eq_ignore_ascii_case(name))
        .map(|(_, value)| value)
}

fn is_part(part: &str, name: &str) -> bool {
    part_value(part, name).is_some()
}

/// Collects recurrence lines, dropping blank ones.
///
/// Returns `None` when nothing is left, so the field can be omitted.
pub fn build_recurrence<S: AsRef<str>>(lines: &[S]) -> Option<Vec<String>> {
    let lines: Vec<String> = lines
        .iter()
        .map(AsRef::as_ref)
        .filter(|a| !a.trim().is_empty())
        .map(ToString::to_string)
        .collect();

    (!lines.is_empty()).then_some(lines)
}
