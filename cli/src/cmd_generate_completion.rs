// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command, ValueEnum, arg, value_parser};
use clap_complete::aot::{self, Generator};
use clap_complete_nushell::Nushell;

use crate::Cli;

/// Prints the completion script of the `gcalx` command tree.
#[derive(Debug, Clone, Copy)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Print the completion script for a shell")
            .hide(true)
            .arg(arg!(shell: <SHELL> "Shell to complete for").value_parser(value_parser!(Shell)))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            shell: matches.get_one("shell").copied().unwrap_or(Shell::Bash),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(shell = ?self.shell, "writing completion script...");
        self.generate(&mut io::stdout());
        Ok(())
    }

    pub fn generate(self, buf: &mut impl io::Write) {
        let mut cmd = Cli::command();
        let bin = cmd.get_name().to_string();
        aot::generate(self.shell, &mut cmd, bin, buf);
    }
}

/// Shells a completion script can be written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Nushell,
    #[value(name = "powershell")]
    #[allow(clippy::enum_variant_names)]
    PowerShell,
    Zsh,
}

impl Shell {
    /// The clap_complete shell, `None` for shells served by a separate crate.
    fn builtin(self) -> Option<aot::Shell> {
        match self {
            Shell::Bash => Some(aot::Shell::Bash),
            Shell::Elvish => Some(aot::Shell::Elvish),
            Shell::Fish => Some(aot::Shell::Fish),
            Shell::PowerShell => Some(aot::Shell::PowerShell),
            Shell::Zsh => Some(aot::Shell::Zsh),
            Shell::Nushell => None,
        }
    }
}

impl Generator for Shell {
    fn file_name(&self, name: &str) -> String {
        match self.builtin() {
            Some(shell) => shell.file_name(name),
            None => Nushell.file_name(name),
        }
    }

    fn generate(&self, cmd: &Command, buf: &mut dyn io::Write) {
        match self.builtin() {
            Some(shell) => shell.generate(cmd, buf),
            None => Nushell.generate(cmd, buf),
        }
    }
}
