use crate::api::RedmineClient;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::report::StatusReport;
use crate::libs::view::View;
use crate::msg_error_anyhow;
use anyhow::Result;

/// Shows user info and statistics for several periods: sum of tracked
/// hours, average hours per entry, number of issues and number of projects.
/// Nothing is rendered when any of the underlying requests fails.
pub async fn cmd() -> Result<()> {
    let client = RedmineClient::new(&Config::read()?)?;

    let report = StatusReport::collect(&client)
        .await
        .map_err(|err| msg_error_anyhow!(Message::StatusFetchFailed(err.to_string())))?;

    View::status(&report)
}
