//! Redmine API client.
//!
//! One client per process talks to a single Redmine server over its JSON
//! REST API. Requests after login carry the user's API key in the
//! `X-Redmine-API-Key` header; the login request itself uses basic
//! authentication and lives in [`user`].
//!
//! Endpoint-specific models and calls are grouped per resource module;
//! this module holds the shared plumbing and the [`ApiError`] taxonomy.

use crate::libs::config::Config;
use crate::libs::quoted_list;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub mod activity;
pub mod issue;
pub mod project;
pub mod search;
pub mod time_entry;
pub mod user;

// Re-export the models commands work with most.
pub use activity::{Activities, Activity};
pub use time_entry::{TimeEntry, TimeEntryPayload};
pub use user::User;

/// Header carrying the API key on authenticated requests.
pub const API_KEY_HEADER: &str = "X-Redmine-API-Key";

/// User agent sent with every request.
pub const APP_USER_AGENT: &str = "remi";

/// Errors produced by the Redmine API layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Host or API key missing from the configuration.
    #[error("you are not logged in")]
    NotAuthenticated,
    /// 422 response; the server's messages are surfaced verbatim.
    #[error("{}", quoted_list(.0))]
    Validation(Vec<String>),
    /// 404 response on a resource-specific request.
    #[error("there is no {what} with id {id}")]
    NotFound { what: &'static str, id: i64 },
    /// Any other non-success status.
    #[error("status {0}")]
    Status(u16),
    /// Connection failure or malformed response body.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// HTTP client bound to one Redmine server and API key.
#[derive(Debug)]
pub struct RedmineClient {
    pub(crate) http: Client,
    base_url: String,
    api_key: String,
}

impl RedmineClient {
    /// Creates a client from stored credentials. Fails before any request
    /// is built when host or API key are missing.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        if config.host.is_empty() || config.api_key.is_empty() {
            return Err(ApiError::NotAuthenticated);
        }

        Ok(Self {
            http: Client::new(),
            base_url: base_url(&config.host),
            api_key: config.api_key.clone(),
        })
    }

    /// Base URL of the configured server, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attaches the headers every authenticated request carries.
    pub(crate) fn with_headers(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header(API_KEY_HEADER, &self.api_key)
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, APP_USER_AGENT)
    }

    pub(crate) async fn get(&self, path: &str, query: &str) -> Result<Response, ApiError> {
        // Query strings are opaque server-side expressions built by the
        // callers; they are appended as-is.
        let url = match query.is_empty() {
            true => self.url(path),
            false => format!("{}?{}", self.url(path), query),
        };

        Ok(self.with_headers(self.http.get(url)).send().await?)
    }

    pub(crate) async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<Response, ApiError> {
        Ok(self.with_headers(self.http.post(self.url(path))).json(body).send().await?)
    }

    pub(crate) async fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<Response, ApiError> {
        Ok(self.with_headers(self.http.put(self.url(path))).json(body).send().await?)
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<Response, ApiError> {
        Ok(self.with_headers(self.http.delete(self.url(path))).send().await?)
    }
}

/// Normalizes a configured host into a base URL; `https://` is assumed
/// when no scheme is given.
pub(crate) fn base_url(host: &str) -> String {
    let host = host.trim_end_matches('/');
    if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("https://{}", host)
    }
}

/// Named reference embedded in other models.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Entity {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

/// Bare id reference; id 0 means the reference is absent.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EntityId {
    #[serde(default)]
    pub id: i64,
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            0 => write!(f, "-"),
            id => write!(f, "{}", id),
        }
    }
}

/// Error body of a 422 response.
#[derive(Debug, Deserialize)]
pub(crate) struct ValidationErrors {
    pub errors: Vec<String>,
}
