// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end of gcalx: turns flags into validated calendar API
//! requests and prints them.

mod arg;
mod cli;
mod cmd_auth;
mod cmd_event;
mod cmd_generate_completion;
mod config;
mod credentials;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::cmd_auth::CmdAuthCheck;
pub use crate::cmd_event::{CmdEventEdit, CmdEventNew, EditScope};
pub use crate::cmd_generate_completion::{CmdGenerateCompletion, Shell};
pub use crate::config::parse_config;
pub use crate::credentials::TomlCredentialStore;
pub use crate::util::OutputFormat;
