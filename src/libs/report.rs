//! Account status aggregation.
//!
//! The status report combines the current user with spent-time statistics
//! for six rolling periods. All seven requests run concurrently; the first
//! failure discards the whole report.

use crate::api::time_entry::TimeEntry;
use crate::api::user::User;
use crate::api::{ApiError, RedmineClient};
use std::collections::HashSet;

/// Server-side result limit for period queries.
const PERIOD_LIMIT: usize = 200;

/// Fixed reporting periods, in rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Today,
    Yesterday,
    ThisWeek,
    LastWeek,
    ThisMonth,
    LastMonth,
}

impl Period {
    /// Server-side `spent_on` shorthand for the period.
    pub fn query_code(&self) -> &'static str {
        match self {
            Period::Today => "t",
            Period::Yesterday => "ld",
            Period::ThisWeek => "w",
            Period::LastWeek => "lw",
            Period::ThisMonth => "m",
            Period::LastMonth => "lm",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::Today => "Today",
            Period::Yesterday => "Yesterday",
            Period::ThisWeek => "This Week",
            Period::LastWeek => "Last Week",
            Period::ThisMonth => "This Month",
            Period::LastMonth => "Last Month",
        }
    }
}

/// Aggregated spent-time figures for one reporting period.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PeriodStats {
    pub hours_sum: f64,
    pub hours_avg: f64,
    pub issue_count: usize,
    pub project_count: usize,
}

impl PeriodStats {
    /// Computes the period figures from a list of time entries.
    pub fn from_entries(entries: &[TimeEntry]) -> Self {
        let mut hours_sum = 0.0;
        let mut issues = HashSet::new();
        let mut projects = HashSet::new();

        for entry in entries {
            hours_sum += entry.hours;
            issues.insert(entry.issue.id);
            projects.insert(entry.project.id);
        }
        // Issue id 0 marks time tracked directly on a project.
        issues.remove(&0);

        let hours_avg = match entries.is_empty() {
            true => 0.0,
            false => hours_sum / entries.len() as f64,
        };

        Self {
            hours_sum,
            hours_avg,
            issue_count: issues.len(),
            project_count: projects.len(),
        }
    }
}

/// Account overview: the current user plus one stats slot per period.
#[derive(Debug)]
pub struct StatusReport {
    pub user: User,
    pub periods: [(Period, PeriodStats); 6],
}

impl StatusReport {
    /// Issues all seven requests concurrently and fails as a whole on the
    /// first error. Results land in fixed slots, so rendering order never
    /// depends on completion order.
    pub async fn collect(client: &RedmineClient) -> Result<Self, ApiError> {
        let (user, today, yesterday, this_week, last_week, this_month, last_month) = tokio::try_join!(
            client.current_user(),
            period_stats(client, Period::Today),
            period_stats(client, Period::Yesterday),
            period_stats(client, Period::ThisWeek),
            period_stats(client, Period::LastWeek),
            period_stats(client, Period::ThisMonth),
            period_stats(client, Period::LastMonth),
        )?;

        Ok(Self {
            user,
            periods: [
                (Period::Today, today),
                (Period::Yesterday, yesterday),
                (Period::ThisWeek, this_week),
                (Period::LastWeek, last_week),
                (Period::ThisMonth, this_month),
                (Period::LastMonth, last_month),
            ],
        })
    }
}

async fn period_stats(client: &RedmineClient, period: Period) -> Result<PeriodStats, ApiError> {
    let query = format!("spent_on={}&user_id=me&limit={}", period.query_code(), PERIOD_LIMIT);
    let entries = client.time_entries(&query).await?;

    Ok(PeriodStats::from_entries(&entries))
}
