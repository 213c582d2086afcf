// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, io, path::PathBuf, process::ExitCode};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use gcalx_core::{APP_NAME, AuthError, Config};
use tracing_subscriber::EnvFilter;

use crate::cmd_auth::CmdAuthCheck;
use crate::cmd_event::{CmdEventEdit, CmdEventNew};
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::config::parse_config;

/// Run the gcalx command-line interface.
///
/// Errors are printed to stderr and turn into a failing exit code.
pub async fn run() -> ExitCode {
    init_tracing();
    let result = match Cli::parse() {
        Ok(cli) => cli.run().await,
        Err(e) => Err(e),
    };
    exit_code(result)
}

fn init_tracing() {
    let result = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .try_init();
    if let Err(e) = result {
        eprintln!("Failed to set up logging: {e}");
    }
}

fn exit_code(result: Result<(), Box<dyn Error>>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(e.as_ref());
            ExitCode::FAILURE
        }
    }
}

fn report(e: &(dyn Error + 'static)) {
    eprintln!("{} {}", "Error:".red(), e);
    if let Some(hint) = e.downcast_ref::<AuthError>().and_then(AuthError::remediation) {
        eprintln!("{} {}", "Hint:".yellow(), hint);
    }
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Build validated calendar API requests from the command line.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/gcalx/config.toml on Linux and MacOS, \
%LOCALAPPDATA%/gcalx/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(
                Command::new("event")
                    .alias("e")
                    .about("Assemble event requests")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdEventNew::command())
                    .subcommand(CmdEventEdit::command()),
            )
            .subcommand(
                Command::new("auth")
                    .about("Inspect stored account credentials")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdAuthCheck::command()),
            )
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some(("event", matches)) => match matches.subcommand() {
                Some((CmdEventNew::NAME, matches)) => EventNew(CmdEventNew::from(matches)),
                Some((CmdEventEdit::NAME, matches)) => EventEdit(CmdEventEdit::from(matches)),
                _ => return Err("Unknown event command".into()),
            },
            Some(("auth", matches)) => match matches.subcommand() {
                Some((CmdAuthCheck::NAME, matches)) => AuthCheck(CmdAuthCheck::from(matches)),
                _ => return Err("Unknown auth command".into()),
            },
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            _ => return Err("No command given".into()),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Assemble the insert request of a new event
    EventNew(CmdEventNew),

    /// Assemble the update request(s) of an existing event
    EventEdit(CmdEventEdit),

    /// Check the stored credentials of an account
    AuthCheck(CmdAuthCheck),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            GenerateCompletion(a) => a.run(),
            command => {
                tracing::debug!("parsing configuration...");
                let config = parse_config(config).await?;
                command.run_with(&config).await
            }
        }
    }

    async fn run_with(self, config: &Config) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            EventNew(a) => a.run(config),
            EventEdit(a) => a.run(config).await,
            AuthCheck(a) => a.run(config).await,
            GenerateCompletion(a) => a.run(),
        }
    }
}
