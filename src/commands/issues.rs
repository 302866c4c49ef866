use super::resolve_id;
use crate::api::RedmineClient;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::msg_error_anyhow;
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
#[command(arg_required_else_help(true))]
pub struct IssuesArgs {
    #[command(subcommand)]
    command: Option<IssueCommands>,
    #[arg(help = "Issue id or alias")]
    id: Option<String>,
}

#[derive(Debug, Subcommand)]
enum IssueCommands {
    #[command(about = "List all issues assigned to the user", visible_alias = "list")]
    My,
    #[command(about = "List all issues watched by the user")]
    Watched,
}

pub async fn cmd(args: IssuesArgs) -> Result<()> {
    let config = Config::read()?;
    let client = RedmineClient::new(&config)?;

    match (args.command, args.id) {
        (Some(IssueCommands::My), _) => {
            let issues = client
                .my_issues()
                .await
                .map_err(|err| msg_error_anyhow!(Message::IssuesFetchFailed(err.to_string())))?;
            View::issues(&issues)
        }
        (Some(IssueCommands::Watched), _) => {
            let issues = client
                .watched_issues()
                .await
                .map_err(|err| msg_error_anyhow!(Message::IssuesFetchFailed(err.to_string())))?;
            View::issues(&issues)
        }
        (None, Some(raw)) => {
            let id = resolve_id(&config, &raw, "issue")?;
            let issue = client
                .issue(id)
                .await
                .map_err(|err| msg_error_anyhow!(Message::IssueFetchFailed(id, err.to_string())))?;
            View::issue(&issue)
        }
        (None, None) => Err(msg_error_anyhow!(Message::IdMustBeInteger("issue".to_string(), String::new()))),
    }
}
