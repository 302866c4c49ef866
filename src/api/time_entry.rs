//! Time entry models and CRUD calls.
//!
//! Time entries are remote-owned: the server assigns ids and is always
//! authoritative. The client only stages creation and update payloads; the
//! payload is sparse, so an update never overwrites server-side values the
//! caller did not touch.

use super::{ApiError, Entity, EntityId, RedmineClient, ValidationErrors};
use crate::libs::date::SpentOn;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const TIME_ENTRIES_URL: &str = "/time_entries.json";

fn time_entry_url(id: i64) -> String {
    format!("/time_entries/{}.json", id)
}

/// Redmine time entry model.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimeEntry {
    pub id: i64,
    #[serde(default)]
    pub project: Entity,
    /// Issue reference; id 0 means the time was logged against the project.
    #[serde(default)]
    pub issue: EntityId,
    #[serde(default)]
    pub user: Entity,
    #[serde(default)]
    pub activity: Entity,
    #[serde(default)]
    pub hours: f64,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub spent_on: SpentOn,
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_on: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct TimeEntriesResponse {
    time_entries: Vec<TimeEntry>,
}

#[derive(Deserialize)]
struct TimeEntryResponse {
    time_entry: TimeEntry,
}

/// Request body for creating or updating a time entry.
///
/// Only fields the caller explicitly set are serialized. The distinction
/// matters for updates: an absent field leaves the server value untouched,
/// while `comments: Some("")` really clears the comment.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct TimeEntryPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spent_on: Option<SpentOn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

#[derive(Serialize)]
struct TimeEntryBody<'a> {
    time_entry: &'a TimeEntryPayload,
}

impl RedmineClient {
    /// Fetches time entries for an opaque server-side query expression
    /// (date range, user scope, limit). The expression is not validated here.
    pub async fn time_entries(&self, query: &str) -> Result<Vec<TimeEntry>, ApiError> {
        let res = self.get(TIME_ENTRIES_URL, query).await?;

        match res.status() {
            reqwest::StatusCode::OK => Ok(res.json::<TimeEntriesResponse>().await?.time_entries),
            status => Err(ApiError::Status(status.as_u16())),
        }
    }

    /// Fetches a single time entry.
    pub async fn time_entry(&self, id: i64) -> Result<TimeEntry, ApiError> {
        let res = self.get(&time_entry_url(id), "").await?;

        match res.status() {
            reqwest::StatusCode::OK => Ok(res.json::<TimeEntryResponse>().await?.time_entry),
            reqwest::StatusCode::NOT_FOUND => Err(ApiError::NotFound { what: "time entry", id }),
            status => Err(ApiError::Status(status.as_u16())),
        }
    }

    /// Creates a new time entry and returns the entity the server assigned.
    /// Validation failures surface the server's messages verbatim.
    pub async fn create_time_entry(&self, payload: &TimeEntryPayload) -> Result<TimeEntry, ApiError> {
        let res = self.post(TIME_ENTRIES_URL, &TimeEntryBody { time_entry: payload }).await?;

        match res.status() {
            reqwest::StatusCode::CREATED => Ok(res.json::<TimeEntryResponse>().await?.time_entry),
            reqwest::StatusCode::UNPROCESSABLE_ENTITY => {
                Err(ApiError::Validation(res.json::<ValidationErrors>().await?.errors))
            }
            status => Err(ApiError::Status(status.as_u16())),
        }
    }

    /// Applies a sparse update to an existing time entry.
    pub async fn update_time_entry(&self, id: i64, payload: &TimeEntryPayload) -> Result<(), ApiError> {
        let res = self.put(&time_entry_url(id), &TimeEntryBody { time_entry: payload }).await?;

        match res.status() {
            reqwest::StatusCode::OK | reqwest::StatusCode::NO_CONTENT => Ok(()),
            reqwest::StatusCode::UNPROCESSABLE_ENTITY => {
                Err(ApiError::Validation(res.json::<ValidationErrors>().await?.errors))
            }
            status => Err(ApiError::Status(status.as_u16())),
        }
    }

    /// Deletes a time entry. A missing entry is reported as its own
    /// condition instead of a bare status code.
    pub async fn delete_time_entry(&self, id: i64) -> Result<(), ApiError> {
        let res = self.delete(&time_entry_url(id)).await?;

        match res.status() {
            reqwest::StatusCode::OK | reqwest::StatusCode::NO_CONTENT => Ok(()),
            reqwest::StatusCode::NOT_FOUND => Err(ApiError::NotFound { what: "time entry", id }),
            status => Err(ApiError::Status(status.as_u16())),
        }
    }
}
