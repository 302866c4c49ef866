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
pub struct ProjectsArgs {
    #[command(subcommand)]
    command: Option<ProjectCommands>,
    #[arg(help = "Project id or alias")]
    id: Option<String>,
}

#[derive(Debug, Subcommand)]
enum ProjectCommands {
    #[command(about = "List all projects visible to the user", visible_alias = "list")]
    My,
}

pub async fn cmd(args: ProjectsArgs) -> Result<()> {
    let config = Config::read()?;
    let client = RedmineClient::new(&config)?;

    match (args.command, args.id) {
        (Some(ProjectCommands::My), _) => {
            let projects = client
                .projects()
                .await
                .map_err(|err| msg_error_anyhow!(Message::ProjectsFetchFailed(err.to_string())))?;
            View::projects(&projects)
        }
        (None, Some(raw)) => {
            let id = resolve_id(&config, &raw, "project")?;
            let project = client
                .project(id)
                .await
                .map_err(|err| msg_error_anyhow!(Message::ProjectFetchFailed(id, err.to_string())))?;
            View::project(&project, &client.project_url(project.id))
        }
        (None, None) => Err(msg_error_anyhow!(Message::IdMustBeInteger("project".to_string(), String::new()))),
    }
}
