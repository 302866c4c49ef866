//! Console rendering for remi data.
//!
//! All tables and detail printouts go through [`View`], keeping column sets
//! and ordering in one place.

use crate::api::issue::Issue;
use crate::api::project::Project;
use crate::api::search::SearchItem;
use crate::api::{Activity, TimeEntry, User};
use crate::libs::report::StatusReport;
use anyhow::Result;
use chrono::NaiveDateTime;
use prettytable::{row, Table};
use std::collections::HashMap;

pub struct View {}

impl View {
    /// Table of time entries with spent-on dates rendered relative to the
    /// given reference moment.
    pub fn time_entries(entries: &[TimeEntry], reference: NaiveDateTime) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "PROJECT", "ISSUE ID", "ACTIVITY", "HOURS", "SPENT ON", "COMMENT"]);
        for entry in entries {
            table.add_row(row![
                entry.id,
                entry.project.name,
                entry.issue,
                entry.activity.name,
                entry.hours,
                entry.spent_on.relative(reference),
                entry.comments
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Single time entry, shown after create and update.
    pub fn time_entry(entry: &TimeEntry) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ENTRY ID", "PROJECT NAME", "ISSUE ID", "HOURS", "ACTIVITY", "COMMENT", "SPENT ON"]);
        table.add_row(row![
            entry.id,
            entry.project.name,
            entry.issue,
            entry.hours,
            entry.activity.name,
            entry.comments,
            entry.spent_on.day_date()
        ]);
        table.printstd();

        Ok(())
    }

    pub fn aliases(aliases: &HashMap<String, String>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ALIAS", "ID"]);
        for (name, id) in aliases {
            table.add_row(row![name, id]);
        }
        table.printstd();

        Ok(())
    }

    pub fn defaults(defaults: &HashMap<String, String>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DEFAULT ENTITY", "VALUE"]);
        for (key, value) in defaults {
            table.add_row(row![key, value]);
        }
        table.printstd();

        Ok(())
    }

    pub fn activities(activities: &[Activity]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME"]);
        for activity in activities {
            table.add_row(row![activity.id, activity.name]);
        }
        table.printstd();

        Ok(())
    }

    pub fn issues(issues: &[Issue]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "PROJECT", "SUBJECT"]);
        for issue in issues {
            table.add_row(row![issue.id, issue.project.name, issue.subject]);
        }
        table.printstd();

        Ok(())
    }

    pub fn issue(issue: &Issue) -> Result<()> {
        println!("[{}] {}", issue.id, issue.project.name);
        println!("{}", issue.subject);
        println!("{}", issue.description);

        Ok(())
    }

    pub fn project(project: &Project, url: &str) -> Result<()> {
        println!("[{}] {}", project.id, project.identifier);
        println!("{} ({})", project.name, url);
        println!("{}", project.description);

        Ok(())
    }

    /// Project listing with subprojects indented under their parents.
    pub fn projects(projects: &[Project]) -> Result<()> {
        for project in projects {
            match project.parent {
                None => println!("[{}] {}", project.id, project.name),
                Some(_) => println!(" ‣ [{}] {}", project.id, project.name),
            }
        }

        Ok(())
    }

    pub fn search_results(results: &[SearchItem]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["RESOURCE ID", "TITLE", "URL"]);
        for result in results {
            table.add_row(row![result.id, result.title, result.url]);
        }
        table.printstd();

        Ok(())
    }

    /// Identity line plus the period table, in fixed period order.
    pub fn status(report: &StatusReport) -> Result<()> {
        Self::user_line(&report.user);

        let mut table = Table::new();
        table.add_row(row!["PERIOD", "HOURS", "H/LOG", "# OF I", "# OF P"]);
        for (period, stats) in &report.periods {
            table.add_row(row![
                period.label(),
                format_hours(stats.hours_sum),
                format_hours(stats.hours_avg),
                stats.issue_count,
                stats.project_count
            ]);
        }
        table.printstd();

        Ok(())
    }

    fn user_line(user: &User) {
        println!("[{}] {} {} ({})", user.id, user.firstname, user.lastname, user.email);
    }
}

/// One decimal place, with trailing zeros and dots trimmed.
fn format_hours(value: f64) -> String {
    let text = format!("{:.1}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
