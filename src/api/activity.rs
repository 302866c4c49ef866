use super::{ApiError, RedmineClient};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const ACTIVITIES_URL: &str = "/enumerations/time_entry_activities.json";

/// A named category of time-tracking work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: i64,
    pub name: String,
}

/// Catalog of time entry activities, fetched once per command invocation.
///
/// Resolution is an exact, case-sensitive match against the fetched names;
/// the lookup table is built once per fetch.
#[derive(Debug, Clone, Default)]
pub struct Activities {
    entries: Vec<Activity>,
    lookup: HashMap<String, i64>,
}

#[derive(Deserialize)]
struct ActivitiesResponse {
    #[serde(rename = "time_entry_activities")]
    activities: Vec<Activity>,
}

impl Activities {
    pub fn new(entries: Vec<Activity>) -> Self {
        let lookup = entries.iter().map(|activity| (activity.name.clone(), activity.id)).collect();

        Self { entries, lookup }
    }

    /// Resolves an activity name to its id.
    pub fn resolve(&self, name: &str) -> Option<i64> {
        self.lookup.get(name).copied()
    }

    /// Activity names, used to build "allowed ones" error messages.
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|activity| activity.name.clone()).collect()
    }

    pub fn entries(&self) -> &[Activity] {
        &self.entries
    }
}

impl RedmineClient {
    /// Fetches all activities a time entry can be recorded under. The
    /// enumeration endpoint returns a bounded set, so there is no paging.
    pub async fn activities(&self) -> Result<Activities, ApiError> {
        let res = self.get(ACTIVITIES_URL, "").await?;
        let response = res.json::<ActivitiesResponse>().await?;

        Ok(Activities::new(response.activities))
    }
}
