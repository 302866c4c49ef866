use crate::api::{ApiError, RedmineClient};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Password};

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(short, long, help = "Host of the Redmine server (e.g. https://redmine.example.org)")]
    server: Option<String>,
    #[arg(short, long, help = "Username")]
    username: Option<String>,
    #[arg(short, long, help = "Password")]
    password: Option<String>,
}

/// Authenticates against the server and persists the credentials. Flags
/// that were not given are collected interactively, with the previously
/// used host offered as the default.
pub async fn cmd(args: LoginArgs) -> Result<()> {
    let mut config = Config::read()?;
    let theme = ColorfulTheme::default();

    let host = match args.server {
        Some(host) => host,
        None => {
            let mut input = Input::with_theme(&theme).with_prompt(Message::PromptHost.to_string());
            if !config.host.is_empty() {
                input = input.default(config.host.clone());
            }
            input.interact_text()?
        }
    };
    let username: String = match args.username {
        Some(username) => username,
        None => Input::with_theme(&theme)
            .with_prompt(Message::PromptUsername.to_string())
            .interact_text()?,
    };
    let password = match args.password {
        Some(password) => password,
        None => Password::with_theme(&theme)
            .with_prompt(Message::PromptPassword.to_string())
            .interact()?,
    };

    let user = match RedmineClient::login(&host, &username, &password).await {
        Ok(user) => user,
        Err(ApiError::Status(401)) => msg_bail_anyhow!(Message::WrongLoginCredentials),
        Err(ApiError::Status(status)) => msg_bail_anyhow!(Message::LoginFailed(status)),
        Err(err) => return Err(err.into()),
    };

    config.host = host;
    config.api_key = user.api_key;
    config.user_id = user.id;
    config.save()?;

    msg_success!(Message::LoginSucceeded);
    Ok(())
}
