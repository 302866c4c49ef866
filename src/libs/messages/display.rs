//! Display implementation for remi application messages.
//!
//! Converts structured [`Message`] values into the human-readable text shown
//! on the terminal. All wording lives here, in one match.

use super::types::Message;
use crate::libs::quoted_list;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === AUTHENTICATION MESSAGES ===
            Message::LoginSucceeded => "You have successfully logged in!".to_string(),
            Message::LogoutSucceeded => "You have successfully logged out!".to_string(),
            Message::WrongLoginCredentials => "Wrong login credentials!".to_string(),
            Message::LoginFailed(status) => format!("Cannot login user (status {})", status),
            Message::NotLoggedIn => "You are not logged in".to_string(),

            // === ALIAS MESSAGES ===
            Message::AliasAdded(name, id) => format!("'{}: {}' has been successfully added to aliases", name, id),
            Message::AliasDeleted(name) => format!("Alias with key '{}' has been deleted", name),
            Message::AliasNotFound(name) => format!("Alias with key '{}' does not exist, so can't be deleted", name),
            Message::NoAliasesSet => "You have no aliases set.\nThese can be set with: 'remi alias add [name] [id]'".to_string(),
            Message::InvalidAliasKey(pattern) => format!("Alias key must have pattern '{}'", pattern),
            Message::AliasValueNotInteger => "Alias value must be integer".to_string(),

            // === DEFAULTS MESSAGES ===
            Message::DefaultAdded(key, value) => format!("'{}: {}' has been successfully added to defaults", key, value),
            Message::NoDefaultsSet => "You have no defaults set.\nThese can be set with: 'remi defaults add [name] [value]'".to_string(),
            Message::InvalidDefaultKey(keys) => format!("Invalid default (allowed ones: [{}])", quoted_list(keys)),

            // === DATE MESSAGES ===
            Message::InvalidDateFormat(format) => format!("Invalid date format (use '{}' instead)", format),

            // === ACTIVITY MESSAGES ===
            Message::ActivitiesFetchFailed(err) => format!("Cannot get time entry activities: {}", err),
            Message::InvalidActivity(names) => format!("Invalid activity (allowed ones: [{}])", quoted_list(names)),
            Message::ActivityNotProvided => "Provide activity either by flag or setting default".to_string(),

            // === TIME ENTRY MESSAGES ===
            Message::TimeEntryCreated => "Time entry created!".to_string(),
            Message::TimeEntryUpdated => "Time entry updated!".to_string(),
            Message::TimeEntryDeleted(id) => format!("Time entry with id {} successfully deleted", id),
            Message::TimeEntryCreateFailed(err) => format!("Cannot create time entry: {}", err),
            Message::TimeEntryUpdateFailed(err) => format!("Cannot update time entry: {}", err),
            Message::TimeEntryDeleteFailed(err) => format!("Cannot delete time entry: {}", err),
            Message::TimeEntriesFetchFailed(err) => format!("Cannot get time entries: {}", err),
            Message::TimeEntryFetchFailed(id, err) => format!("Time entry with id {} cannot be fetched: {}", id, err),
            Message::IdMustBeInteger(what, given) => format!("{} id must be integer, but given {}", what, given),

            // === ISSUE AND PROJECT MESSAGES ===
            Message::IssueFetchFailed(id, err) => format!("Cannot fetch issue with id {}: {}", id, err),
            Message::IssuesFetchFailed(err) => format!("Cannot fetch issues: {}", err),
            Message::ProjectFetchFailed(id, err) => format!("Cannot fetch project with id {}: {}", id, err),
            Message::ProjectsFetchFailed(err) => format!("Cannot fetch projects: {}", err),

            // === SEARCH MESSAGES ===
            Message::SearchFailed(err) => format!("Search failed: {}", err),
            Message::NoSearchResults => "No results found".to_string(),
            Message::SearchSummary(total, from, to) => {
                format!("Found {} results. Showing results from {}. to {}.", total, from, to)
            }

            // === STATUS MESSAGES ===
            Message::StatusFetchFailed(err) => format!("Failed to get status: {}", err),

            // === PROMPTS ===
            Message::PromptHost => "Host (e.g. https://redmine.example.org)".to_string(),
            Message::PromptUsername => "Username".to_string(),
            Message::PromptPassword => "Password".to_string(),
        };

        write!(f, "{}", text)
    }
}
