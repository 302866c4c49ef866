//! Core library modules for the remi application.
//!
//! Provides the infrastructure the commands are built on: the persistent
//! configuration store, calendar-date handling for the Redmine wire format,
//! the status report aggregation, console table rendering and the central
//! messaging system.

pub mod config;
pub mod data_storage;
pub mod date;
pub mod messages;
pub mod report;
pub mod view;

/// Joins items into a comma-separated list of single-quoted values.
pub fn quoted_list<S: AsRef<str>>(items: &[S]) -> String {
    items.iter().map(|item| format!("'{}'", item.as_ref())).collect::<Vec<_>>().join(", ")
}
