//! Time entry commands: list, add to issue or project, update, delete.
//!
//! Issue and project id arguments accept aliases. Activity names fall back
//! to the configured `activity` default; dates accept `today`, `yesterday`
//! or a literal date.

use super::{parse_id, resolve_id};
use crate::api::{Activities, RedmineClient, TimeEntryPayload};
use crate::libs::config::{Config, DefaultKey};
use crate::libs::date::{end_of_day, SpentOn};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_error_anyhow, msg_success};
use anyhow::Result;
use chrono::Local;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct LogArgs {
    #[command(subcommand)]
    command: LogCommands,
}

#[derive(Debug, Subcommand)]
enum LogCommands {
    #[command(about = "List user time entries", visible_alias = "ls")]
    List(ListArgs),
    #[command(about = "Add time entry to issue", visible_alias = "i")]
    Issue(AddArgs),
    #[command(about = "Add time entry to project", visible_alias = "p")]
    Project(AddArgs),
    #[command(about = "Update time entry", visible_alias = "u")]
    Update(UpdateArgs),
    #[command(about = "Delete time entries", visible_alias = "rm")]
    Delete(DeleteArgs),
}

#[derive(Debug, Args)]
struct ListArgs {
    #[arg(short, long, default_value_t = 10, help = "Limit number of results")]
    limit: usize,
}

#[derive(Debug, Args)]
struct AddArgs {
    #[arg(help = "Issue or project id, or an alias")]
    id: String,
    #[arg(short, long, default_value = "today", help = "The date the time was spent ('today', 'yesterday', '2020-01-15')")]
    date: String,
    #[arg(short = 't', long, help = "The number of spent hours")]
    hours: f32,
    #[arg(short, long, help = "The name of activity for spent time (overrides the configured default)")]
    activity: Option<String>,
    #[arg(short, long, help = "Short comment")]
    message: Option<String>,
}

#[derive(Debug, Args)]
struct UpdateArgs {
    #[arg(help = "Time entry id")]
    id: String,
    #[arg(short, long, help = "The date the time was spent ('today', 'yesterday', '2020-01-15')")]
    date: Option<String>,
    #[arg(short = 't', long, help = "The number of spent hours")]
    hours: Option<f32>,
    #[arg(short, long, help = "The name of activity for spent time")]
    activity: Option<String>,
    #[arg(short, long, help = "Short comment; pass an empty string to clear it")]
    message: Option<String>,
}

#[derive(Debug, Args)]
struct DeleteArgs {
    #[arg(required = true, help = "Time entry ids")]
    ids: Vec<String>,
}

enum Target {
    Issue,
    Project,
}

impl Target {
    fn name(&self) -> &'static str {
        match self {
            Target::Issue => "issue",
            Target::Project => "project",
        }
    }
}

pub async fn cmd(args: LogArgs) -> Result<()> {
    match args.command {
        LogCommands::List(args) => list(args).await,
        LogCommands::Issue(args) => add(args, Target::Issue).await,
        LogCommands::Project(args) => add(args, Target::Project).await,
        LogCommands::Update(args) => update(args).await,
        LogCommands::Delete(args) => delete(args).await,
    }
}

async fn list(args: ListArgs) -> Result<()> {
    let client = RedmineClient::new(&Config::read()?)?;

    let query = format!("limit={}&user_id=me", args.limit);
    let entries = client
        .time_entries(&query)
        .await
        .map_err(|err| msg_error_anyhow!(Message::TimeEntriesFetchFailed(err.to_string())))?;

    View::time_entries(&entries, end_of_day(Local::now().date_naive()))
}

async fn add(args: AddArgs, target: Target) -> Result<()> {
    let config = Config::read()?;
    let id = resolve_id(&config, &args.id, target.name())?;
    let client = RedmineClient::new(&config)?;

    let spent_on = SpentOn::parse(&args.date, Local::now().date_naive())?;
    let activity_name = match args.activity.or_else(|| config.default_value(DefaultKey::Activity).map(str::to_string)) {
        Some(name) => name,
        None => msg_bail_anyhow!(Message::ActivityNotProvided),
    };
    let activity_id = resolve_activity(&client, &activity_name).await?;

    let mut payload = TimeEntryPayload {
        spent_on: Some(spent_on),
        hours: Some(args.hours),
        activity_id: Some(activity_id),
        comments: args.message,
        ..Default::default()
    };
    match target {
        Target::Issue => payload.issue_id = Some(id),
        Target::Project => payload.project_id = Some(id),
    }

    let entry = client
        .create_time_entry(&payload)
        .await
        .map_err(|err| msg_error_anyhow!(Message::TimeEntryCreateFailed(err.to_string())))?;

    msg_success!(Message::TimeEntryCreated);
    View::time_entry(&entry)
}

async fn update(args: UpdateArgs) -> Result<()> {
    let config = Config::read()?;
    let id = parse_id(&args.id, "time entry")?;
    let client = RedmineClient::new(&config)?;

    let mut payload = TimeEntryPayload::default();
    if let Some(date) = args.date {
        payload.spent_on = Some(SpentOn::parse(&date, Local::now().date_naive())?);
    }
    if let Some(name) = args.activity {
        payload.activity_id = Some(resolve_activity(&client, &name).await?);
    }
    payload.hours = args.hours;
    // An absent message leaves the comment untouched; an empty one clears it.
    payload.comments = args.message;

    client
        .update_time_entry(id, &payload)
        .await
        .map_err(|err| msg_error_anyhow!(Message::TimeEntryUpdateFailed(err.to_string())))?;
    msg_success!(Message::TimeEntryUpdated);

    let entry = client
        .time_entry(id)
        .await
        .map_err(|err| msg_error_anyhow!(Message::TimeEntryFetchFailed(id, err.to_string())))?;

    View::time_entry(&entry)
}

async fn delete(args: DeleteArgs) -> Result<()> {
    let config = Config::read()?;
    let client = RedmineClient::new(&config)?;

    // Every id is validated before the first request goes out.
    let ids = args
        .ids
        .iter()
        .map(|raw| parse_id(raw, "time entry"))
        .collect::<Result<Vec<_>>>()?;

    for id in ids {
        client
            .delete_time_entry(id)
            .await
            .map_err(|err| msg_error_anyhow!(Message::TimeEntryDeleteFailed(err.to_string())))?;

        msg_success!(Message::TimeEntryDeleted(id));
    }

    Ok(())
}

async fn resolve_activity(client: &RedmineClient, name: &str) -> Result<i64> {
    let activities: Activities = client
        .activities()
        .await
        .map_err(|err| msg_error_anyhow!(Message::ActivitiesFetchFailed(err.to_string())))?;

    match activities.resolve(name) {
        Some(id) => Ok(id),
        None => Err(msg_error_anyhow!(Message::InvalidActivity(activities.names()))),
    }
}
