use super::{ApiError, Entity, RedmineClient};
use serde::Deserialize;

const ISSUES_URL: &str = "/issues.json";

/// Redmine issue model.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Issue {
    pub id: i64,
    #[serde(default)]
    pub project: Entity,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Deserialize)]
struct IssueResponse {
    issue: Issue,
}

#[derive(Deserialize)]
struct IssuesResponse {
    issues: Vec<Issue>,
}

impl RedmineClient {
    /// Fetches a single issue.
    pub async fn issue(&self, id: i64) -> Result<Issue, ApiError> {
        let res = self.get(&format!("/issues/{}.json", id), "").await?;

        match res.status() {
            reqwest::StatusCode::OK => Ok(res.json::<IssueResponse>().await?.issue),
            reqwest::StatusCode::NOT_FOUND => Err(ApiError::NotFound { what: "issue", id }),
            status => Err(ApiError::Status(status.as_u16())),
        }
    }

    /// Fetches issues assigned to the current user.
    pub async fn my_issues(&self) -> Result<Vec<Issue>, ApiError> {
        self.issues("assigned_to_id=me").await
    }

    /// Fetches issues the current user watches, most recently updated first.
    pub async fn watched_issues(&self) -> Result<Vec<Issue>, ApiError> {
        self.issues("set_filter=1&sort=updated_on%3Adesc&watcher_id=me").await
    }

    async fn issues(&self, query: &str) -> Result<Vec<Issue>, ApiError> {
        let res = self.get(ISSUES_URL, query).await?;

        match res.status() {
            reqwest::StatusCode::OK => Ok(res.json::<IssuesResponse>().await?.issues),
            status => Err(ApiError::Status(status.as_u16())),
        }
    }
}
