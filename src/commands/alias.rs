use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_error, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};

/// Pattern alias keys must match; shown in the validation error.
const ALIAS_KEY_PATTERN: &str = "[A-Za-z0-9_-]{1,30}";

#[derive(Debug, Args)]
pub struct AliasArgs {
    #[command(subcommand)]
    command: AliasCommands,
}

#[derive(Debug, Subcommand)]
enum AliasCommands {
    #[command(about = "List of all user aliases", visible_alias = "ls")]
    List,
    #[command(about = "Add alias entry", visible_alias = "set")]
    Add {
        #[arg(help = "Alias name")]
        name: String,
        #[arg(help = "Issue or project id")]
        id: String,
    },
    #[command(about = "Remove alias entry", visible_alias = "rm")]
    Delete {
        #[arg(help = "Alias name")]
        name: String,
    },
}

pub fn cmd(args: AliasArgs) -> Result<()> {
    let mut config = Config::read()?;

    match args.command {
        AliasCommands::List => {
            if config.aliases.is_empty() {
                msg_print!(Message::NoAliasesSet);
                return Ok(());
            }
            View::aliases(&config.aliases)
        }
        AliasCommands::Add { name, id } => {
            validate(&name, &id)?;
            config.set_alias(&name, &id)?;
            msg_success!(Message::AliasAdded(name, id));
            Ok(())
        }
        AliasCommands::Delete { name } => {
            if config.alias(&name).is_none() {
                msg_error!(Message::AliasNotFound(name));
                return Ok(());
            }
            config.set_alias(&name, "")?;
            msg_success!(Message::AliasDeleted(name));
            Ok(())
        }
    }
}

/// Validates an alias entry before it reaches the store.
fn validate(name: &str, id: &str) -> Result<()> {
    let key_ok = !name.is_empty()
        && name.len() <= 30
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !key_ok {
        msg_bail_anyhow!(Message::InvalidAliasKey(ALIAS_KEY_PATTERN.to_string()));
    }

    if id.parse::<i64>().is_err() {
        msg_bail_anyhow!(Message::AliasValueNotInteger);
    }

    Ok(())
}
