pub mod activities;
pub mod alias;
pub mod default;
pub mod issues;
pub mod login;
pub mod logout;
pub mod projects;
pub mod search;
pub mod status;
pub mod time;

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Log in to a Redmine server")]
    Login(login::LoginArgs),
    #[command(about = "Log out and forget the API key")]
    Logout,
    #[command(about = "Overall account info", visible_alias = "me")]
    Status,
    #[command(about = "Time entries on projects and issues", visible_alias = "l")]
    Log(time::LogArgs),
    #[command(about = "Show issue details and issue lists")]
    Issues(issues::IssuesArgs),
    #[command(about = "Show project details and project lists")]
    Projects(projects::ProjectsArgs),
    #[command(about = "Search Redmine", visible_alias = "s")]
    Search(search::SearchArgs),
    #[command(about = "Words that can be used instead of issue or project ids")]
    Alias(alias::AliasArgs),
    #[command(about = "User session defaults")]
    Defaults(default::DefaultsArgs),
    #[command(about = "List time entry activities")]
    Activities,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Login(args) => login::cmd(args).await,
            Commands::Logout => logout::cmd(),
            Commands::Status => status::cmd().await,
            Commands::Log(args) => time::cmd(args).await,
            Commands::Issues(args) => issues::cmd(args).await,
            Commands::Projects(args) => projects::cmd(args).await,
            Commands::Search(args) => search::cmd(args).await,
            Commands::Alias(args) => alias::cmd(args),
            Commands::Defaults(args) => default::cmd(args).await,
            Commands::Activities => activities::cmd().await,
        }
    }
}

/// Validates a raw id argument as an integer. Runs before any request is
/// built.
pub(crate) fn parse_id(raw: &str, what: &str) -> Result<i64> {
    raw.parse::<i64>()
        .map_err(|_| msg_error_anyhow!(Message::IdMustBeInteger(what.to_string(), raw.to_string())))
}

/// Resolves an id argument that may be an alias, then validates it as an
/// integer. Aliases only name issue and project ids.
pub(crate) fn resolve_id(config: &Config, raw: &str, what: &str) -> Result<i64> {
    let value = config.alias(raw).unwrap_or(raw);

    parse_id(value, what)
}
