// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use gcalx_core::{Config, CredentialStore, Service, authorize};

use crate::arg::CommonArgs;
use crate::credentials::TomlCredentialStore;

/// Checks that an account holds a token covering a service's scopes.
#[derive(Debug, Clone)]
pub struct CmdAuthCheck {
    pub account: Option<String>,
    pub service: Service,
}

impl CmdAuthCheck {
    pub const NAME: &str = "check";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Check that an account is authorized for a service")
            .arg(CommonArgs::account())
            .arg(
                arg!(--service <SERVICE> "Service to check the granted scopes for")
                    .value_parser(value_parser!(Service))
                    .default_value("calendar"),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            account: CommonArgs::get_account(matches),
            service: matches
                .get_one("service")
                .copied()
                .unwrap_or(Service::Calendar),
        }
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "checking authorization...");
        let path = config
            .credentials_path
            .as_deref()
            .ok_or("No credentials path configured")?;
        let store = TomlCredentialStore::load(path).await?;
        let email = self.check(&store, config)?;
        println!(
            "{} {email} is authorized for {}",
            "Ok:".green(),
            self.service
        );
        Ok(())
    }

    /// Resolves the account and authorizes it against `store`.
    pub fn check<S>(&self, store: &S, config: &Config) -> Result<String, Box<dyn Error>>
    where
        S: CredentialStore + ?Sized,
    {
        let email = self
            .account
            .as_ref()
            .or(config.account.as_ref())
            .ok_or("No account given, pass --account or set `account` in the config")?;

        authorize(store, self.service, email)?;
        Ok(email.clone())
    }
}
