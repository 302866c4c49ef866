use crate::api::RedmineClient;
use crate::libs::config::{Config, DefaultKey};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_error_anyhow, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct DefaultsArgs {
    #[command(subcommand)]
    command: DefaultsCommands,
}

#[derive(Debug, Subcommand)]
enum DefaultsCommands {
    #[command(about = "List of all user session defaults", visible_alias = "ls")]
    List,
    #[command(about = "Add default value", visible_alias = "set")]
    Add {
        #[arg(help = "Setting name")]
        key: String,
        #[arg(help = "Default value")]
        value: String,
    },
}

pub async fn cmd(args: DefaultsArgs) -> Result<()> {
    let mut config = Config::read()?;

    match args.command {
        DefaultsCommands::List => {
            if config.defaults.is_empty() {
                msg_print!(Message::NoDefaultsSet);
                return Ok(());
            }
            View::defaults(&config.defaults)
        }
        DefaultsCommands::Add { key, value } => {
            let key: DefaultKey = key.parse()?;

            // The activity default is checked against the live catalog at
            // set time; later use re-resolves it anyway.
            if key == DefaultKey::Activity {
                let client = RedmineClient::new(&config)?;
                let activities = client
                    .activities()
                    .await
                    .map_err(|err| msg_error_anyhow!(Message::ActivitiesFetchFailed(err.to_string())))?;
                if activities.resolve(&value).is_none() {
                    msg_bail_anyhow!(Message::InvalidActivity(activities.names()));
                }
            }

            config.set_default(key, &value)?;
            msg_success!(Message::DefaultAdded(key.as_str().to_string(), value));
            Ok(())
        }
    }
}
