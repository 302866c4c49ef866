use crate::api::RedmineClient;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::msg_error_anyhow;
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let client = RedmineClient::new(&Config::read()?)?;

    let activities = client
        .activities()
        .await
        .map_err(|err| msg_error_anyhow!(Message::ActivitiesFetchFailed(err.to_string())))?;

    View::activities(activities.entries())
}
