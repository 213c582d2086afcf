// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use colored::Colorize;
use gcalx_core::{EventDateTime, EventRequest};

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

/// Writes the request plan, one entry per request in submission order.
pub fn write_requests(
    buf: &mut impl io::Write,
    requests: &[EventRequest],
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *buf, requests)?;
            writeln!(buf)?;
        }
        OutputFormat::Text => {
            for (i, request) in requests.iter().enumerate() {
                if i > 0 {
                    writeln!(buf)?;
                }
                write_request_text(buf, request)?;
            }
        }
    }
    Ok(())
}

pub fn print_requests(
    requests: &[EventRequest],
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    write_requests(&mut io::stdout().lock(), requests, format)
}

fn write_request_text(buf: &mut impl io::Write, request: &EventRequest) -> io::Result<()> {
    let (verb, target) = match &request.event_id {
        Some(id) => ("update", format!("{}/{id}", request.calendar_id)),
        None => ("insert", request.calendar_id.clone()),
    };
    writeln!(buf, "{} {}", verb.bold(), target)?;

    let event = &request.event;
    let mut field = |name: &str, value: &str| writeln!(buf, "  {:<14}{value}", format!("{name}:"));

    if let Some(summary) = &event.summary {
        field("summary", summary)?;
    }
    if let Some(start) = &event.start {
        field("start", &format_boundary(start))?;
    }
    if let Some(end) = &event.end {
        field("end", &format_boundary(end))?;
    }
    if let Some(location) = &event.location {
        field("location", location)?;
    }
    if let Some(description) = &event.description {
        field("description", description)?;
    }
    if let Some(attendees) = &event.attendees {
        let emails: Vec<String> = attendees
            .iter()
            .map(|a| {
                if a.optional {
                    format!("{} (optional)", a.email)
                } else {
                    a.email.clone()
                }
            })
            .collect();
        field("attendees", &emails.join(", "))?;
    }
    if let Some(reminders) = &event.reminders {
        let text = if reminders.use_default {
            "calendar defaults".to_string()
        } else {
            reminders
                .overrides
                .iter()
                .map(|o| format!("{} {}m", o.method, o.minutes))
                .collect::<Vec<_>>()
                .join(", ")
        };
        field("reminders", &text)?;
    }
    if let Some(recurrence) = &event.recurrence {
        for line in recurrence {
            field("recurrence", line)?;
        }
    }
    if let Some(color) = &event.color_id {
        field("color", color)?;
    }
    if let Some(visibility) = &event.visibility {
        field("visibility", visibility)?;
    }
    if let Some(transparency) = &event.transparency {
        field("transparency", transparency)?;
    }
    if let Some(send_updates) = request.send_updates {
        field("send-updates", send_updates.as_ref())?;
    }
    Ok(())
}

fn format_boundary(value: &EventDateTime) -> String {
    let text = match value.date() {
        Some(d) => format!("{d} (all day)"),
        None => value.value().to_string(),
    };
    match value.time_zone() {
        Some(tz) => format!("{text} [{tz}]"),
        None => text,
    }
}
