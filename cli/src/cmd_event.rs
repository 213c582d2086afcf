// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::Path, path::PathBuf};

use clap::{ArgMatches, Command, ValueEnum, ValueHint, arg, value_parser};
use gcalx_core::{
    Config, Event, EventDraft, EventPatch, EventRequest, RequestError, SendUpdates, split_series,
};
use tokio::fs;

use crate::arg::{CommonArgs, EventArgs};
use crate::util::{OutputFormat, print_requests};

#[derive(Debug, Clone)]
pub struct CmdEventNew {
    pub summary: String,
    pub start: String,
    pub end: String,
    pub all_day: bool,
    pub description: Option<String>,
    pub location: Option<String>,
    pub attendees: Option<String>,
    pub reminders: Option<Vec<String>>,
    pub rrules: Option<Vec<String>>,
    pub color: Option<String>,
    pub visibility: Option<String>,
    pub transparency: Option<String>,

    pub calendar: Option<String>,
    pub send_updates: Option<String>,
    pub output_format: OutputFormat,
}

impl CmdEventNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Assemble the request creating a new event")
            .arg(arg!(summary: <SUMMARY> "Summary of the event"))
            .args(EventArgs::all())
            .mut_arg("start", |a| a.required(true))
            .mut_arg("end", |a| a.required(true))
            .arg(CommonArgs::calendar())
            .arg(CommonArgs::send_updates())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            summary: matches.get_one("summary").cloned().unwrap_or_default(),
            start: EventArgs::get_start(matches).unwrap_or_default(),
            end: EventArgs::get_end(matches).unwrap_or_default(),
            all_day: EventArgs::get_all_day(matches),
            description: EventArgs::get_description(matches),
            location: EventArgs::get_location(matches),
            attendees: EventArgs::get_attendees(matches),
            reminders: EventArgs::get_reminders(matches),
            rrules: EventArgs::get_rrules(matches),
            color: EventArgs::get_color(matches),
            visibility: EventArgs::get_visibility(matches),
            transparency: EventArgs::get_transparency(matches),

            calendar: CommonArgs::get_calendar(matches),
            send_updates: CommonArgs::get_send_updates(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "assembling new event...");
        let requests = self.plan(config)?;
        print_requests(&requests, self.output_format)
    }

    /// Builds the insert request, falling back to the configured defaults.
    pub fn plan(&self, config: &Config) -> Result<Vec<EventRequest>, Box<dyn Error>> {
        let reminders = match &self.reminders {
            Some(reminders) => reminders.clone(),
            None => config.default_reminders.clone(),
        };

        let draft = EventDraft {
            summary: self.summary.clone(),
            description: self.description.clone().unwrap_or_default(),
            location: self.location.clone().unwrap_or_default(),
            start: self.start.clone(),
            end: self.end.clone(),
            all_day: self.all_day,
            attendees: self.attendees.clone().unwrap_or_default(),
            reminders,
            recurrence: self.rrules.clone().unwrap_or_default(),
            color: self.color.clone().unwrap_or_default(),
            visibility: self.visibility.clone().unwrap_or_default(),
            transparency: self.transparency.clone().unwrap_or_default(),
        };
        let event = draft.build()?;

        let calendar = self.calendar.as_ref().unwrap_or(&config.calendar);
        let send_updates = resolve_send_updates(self.send_updates.as_deref(), config)?;
        Ok(vec![
            EventRequest::insert(calendar, event).with_send_updates(send_updates),
        ])
    }
}

/// Which occurrences of a recurring event an edit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EditScope {
    /// Only the given event or occurrence.
    Single,

    /// The given occurrence and every later one.
    Future,
}

#[derive(Debug, Clone)]
pub struct CmdEventEdit {
    pub id: String,
    pub existing: Option<PathBuf>,
    pub scope: EditScope,
    pub original_start: Option<String>,
    pub patch: EventPatch,

    pub calendar: Option<String>,
    pub send_updates: Option<String>,
    pub output_format: OutputFormat,
}

impl CmdEventEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Assemble the request(s) updating an event")
            .arg(arg!(id: <EVENT_ID> "Id of the event to edit"))
            .arg(arg!(summary: -s --summary <SUMMARY> "New summary of the event"))
            .args(EventArgs::all())
            .arg(
                arg!(--existing <FILE> "The event as fetched from the API, in JSON")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(
                arg!(--scope <SCOPE> "Which occurrences to change")
                    .value_parser(value_parser!(EditScope))
                    .default_value("single"),
            )
            .arg(arg!(--"original-start" <START> "Start of the occurrence the edit begins at"))
            .arg(CommonArgs::calendar())
            .arg(CommonArgs::send_updates())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let patch = EventPatch {
            summary: matches.get_one("summary").cloned(),
            description: EventArgs::get_description(matches),
            location: EventArgs::get_location(matches),
            start: EventArgs::get_start(matches),
            end: EventArgs::get_end(matches),
            all_day: EventArgs::get_all_day(matches).then_some(true),
            attendees: EventArgs::get_attendees(matches),
            reminders: EventArgs::get_reminders(matches),
            recurrence: EventArgs::get_rrules(matches),
            color: EventArgs::get_color(matches),
            visibility: EventArgs::get_visibility(matches),
            transparency: EventArgs::get_transparency(matches),
        };

        Self {
            id: matches.get_one("id").cloned().unwrap_or_default(),
            existing: matches.get_one("existing").cloned(),
            scope: matches
                .get_one("scope")
                .copied()
                .unwrap_or(EditScope::Single),
            original_start: matches.get_one("original-start").cloned(),
            patch,

            calendar: CommonArgs::get_calendar(matches),
            send_updates: CommonArgs::get_send_updates(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "assembling event edit...");
        let existing = match &self.existing {
            Some(path) => Some(load_event(path).await?),
            None => None,
        };
        let requests = self.plan(existing, config)?;
        print_requests(&requests, self.output_format)
    }

    /// Builds the update request, or for a series split the update of the
    /// original series followed by the insert of the new one.
    pub fn plan(
        &self,
        existing: Option<Event>,
        config: &Config,
    ) -> Result<Vec<EventRequest>, Box<dyn Error>> {
        if self.patch.is_empty() {
            return Err("Nothing to change, pass at least one field to edit".into());
        }

        let calendar = self.calendar.as_ref().unwrap_or(&config.calendar);
        let send_updates = resolve_send_updates(self.send_updates.as_deref(), config)?;

        let requests = match self.scope {
            EditScope::Single => {
                let mut event = existing.unwrap_or_default();
                self.patch.apply_to(&mut event)?;
                vec![EventRequest::update(calendar, &self.id, event)]
            }
            EditScope::Future => {
                let (Some(existing), Some(original_start)) = (existing, &self.original_start)
                else {
                    return Err("--scope future requires --existing and --original-start".into());
                };

                let (parent, following) = split_series(&existing, &self.patch, original_start)?;
                tracing::debug!(id = self.id, "splitting series");
                vec![
                    EventRequest::update(calendar, &self.id, parent),
                    EventRequest::insert(calendar, following),
                ]
            }
        };

        Ok(requests
            .into_iter()
            .map(|a| a.with_send_updates(send_updates))
            .collect())
    }
}

fn resolve_send_updates(
    flag: Option<&str>,
    config: &Config,
) -> Result<Option<SendUpdates>, RequestError> {
    match flag {
        Some(value) => SendUpdates::parse_optional(value),
        None => Ok(config.send_updates()),
    }
}

async fn load_event(path: &Path) -> Result<Event, Box<dyn Error>> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| format!("Failed to read event at {}: {e}", path.display()))?;
    let event = serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse event at {}: {e}", path.display()))?;
    Ok(event)
}
