use super::{ApiError, Entity, RedmineClient};
use chrono::{DateTime, Utc};
use serde::Deserialize;

const PROJECTS_URL: &str = "/projects.json";

/// Server-side result limit for the project listing.
const PROJECT_LIMIT: usize = 200;

/// Redmine project model.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Project {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub identifier: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: i32,
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub parent: Option<Entity>,
}

#[derive(Deserialize)]
struct ProjectResponse {
    project: Project,
}

#[derive(Deserialize)]
struct ProjectsResponse {
    projects: Vec<Project>,
}

impl RedmineClient {
    /// Fetches a single project.
    pub async fn project(&self, id: i64) -> Result<Project, ApiError> {
        let res = self.get(&format!("/projects/{}.json", id), "").await?;

        match res.status() {
            reqwest::StatusCode::OK => Ok(res.json::<ProjectResponse>().await?.project),
            reqwest::StatusCode::NOT_FOUND => Err(ApiError::NotFound { what: "project", id }),
            status => Err(ApiError::Status(status.as_u16())),
        }
    }

    /// Fetches all projects visible to the current user.
    pub async fn projects(&self) -> Result<Vec<Project>, ApiError> {
        let res = self.get(PROJECTS_URL, &format!("limit={}", PROJECT_LIMIT)).await?;

        match res.status() {
            reqwest::StatusCode::OK => Ok(res.json::<ProjectsResponse>().await?.projects),
            status => Err(ApiError::Status(status.as_u16())),
        }
    }

    /// Web URL of a project on the configured server.
    pub fn project_url(&self, id: i64) -> String {
        format!("{}/projects/{}", self.base_url(), id)
    }
}
