// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgAction, ArgMatches, arg, value_parser};

use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("json")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Json)
    }

    pub fn calendar() -> Arg {
        arg!(--calendar <CALENDAR_ID> "Calendar to operate on, defaults to the configured one")
    }

    pub fn get_calendar(matches: &ArgMatches) -> Option<String> {
        matches.get_one("calendar").cloned()
    }

    pub fn send_updates() -> Arg {
        arg!(--"send-updates" <MODE> "Who gets notified: all, externalOnly or none")
    }

    pub fn get_send_updates(matches: &ArgMatches) -> Option<String> {
        matches.get_one("send-updates").cloned()
    }

    pub fn account() -> Arg {
        arg!(-a --account <EMAIL> "Account to use, defaults to the configured one")
    }

    pub fn get_account(matches: &ArgMatches) -> Option<String> {
        matches.get_one("account").cloned()
    }
}

/// Field flags shared by `event new` and `event edit`.
#[derive(Debug, Clone, Copy)]
pub struct EventArgs;

impl EventArgs {
    pub fn all() -> [Arg; 11] {
        [
            Self::start(),
            Self::end(),
            Self::all_day(),
            Self::description(),
            Self::location(),
            Self::attendees(),
            Self::reminder(),
            Self::rrule(),
            Self::color(),
            Self::visibility(),
            Self::transparency(),
        ]
    }

    pub fn start() -> Arg {
        arg!(--start <START> "Start, YYYY-MM-DD for all-day events or an RFC 3339 timestamp")
    }

    pub fn get_start(matches: &ArgMatches) -> Option<String> {
        matches.get_one("start").cloned()
    }

    pub fn end() -> Arg {
        arg!(--end <END> "End (exclusive), in the same form as --start")
    }

    pub fn get_end(matches: &ArgMatches) -> Option<String> {
        matches.get_one("end").cloned()
    }

    pub fn all_day() -> Arg {
        arg!(--"all-day" "Treat --start and --end as dates").action(ArgAction::SetTrue)
    }

    pub fn get_all_day(matches: &ArgMatches) -> bool {
        matches.get_flag("all-day")
    }

    pub fn description() -> Arg {
        arg!(--description <DESCRIPTION> "Description of the event")
    }

    pub fn get_description(matches: &ArgMatches) -> Option<String> {
        matches.get_one("description").cloned()
    }

    pub fn location() -> Arg {
        arg!(--location <LOCATION> "Location of the event")
    }

    pub fn get_location(matches: &ArgMatches) -> Option<String> {
        matches.get_one("location").cloned()
    }

    pub fn attendees() -> Arg {
        arg!(--attendees <ATTENDEES> "Comma-separated guests, email[;optional][;comment=text]")
    }

    pub fn get_attendees(matches: &ArgMatches) -> Option<String> {
        matches.get_one("attendees").cloned()
    }

    pub fn reminder() -> Arg {
        arg!(--reminder <SPEC> "Reminder as method:duration, e.g. popup:30m (repeatable)")
            .action(ArgAction::Append)
    }

    pub fn get_reminders(matches: &ArgMatches) -> Option<Vec<String>> {
        matches
            .get_many::<String>("reminder")
            .map(|a| a.cloned().collect())
    }

    pub fn rrule() -> Arg {
        arg!(--rrule <LINE> "Recurrence line, e.g. RRULE:FREQ=WEEKLY (repeatable)")
            .action(ArgAction::Append)
    }

    pub fn get_rrules(matches: &ArgMatches) -> Option<Vec<String>> {
        matches
            .get_many::<String>("rrule")
            .map(|a| a.cloned().collect())
    }

    pub fn color() -> Arg {
        arg!(--color <COLOR_ID> "Color id, 1 to 11")
    }

    pub fn get_color(matches: &ArgMatches) -> Option<String> {
        matches.get_one("color").cloned()
    }

    pub fn visibility() -> Arg {
        arg!(--visibility <VISIBILITY> "default, public, private or confidential")
    }

    pub fn get_visibility(matches: &ArgMatches) -> Option<String> {
        matches.get_one("visibility").cloned()
    }

    pub fn transparency() -> Arg {
        arg!(--transparency <TRANSPARENCY> "opaque (busy) or transparent (free)")
    }

    pub fn get_transparency(matches: &ArgMatches) -> Option<String> {
        matches.get_one("transparency").cloned()
    }
}
