use super::{base_url, ApiError, RedmineClient, APP_USER_AGENT};
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

const CURRENT_USER_URL: &str = "/users/current.json";

/// The login request is the only one issued before any stored credential is
/// known to be valid, so it carries its own short timeout.
const AUTH_TIMEOUT: Duration = Duration::from_secs(3);

/// Redmine user model.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(rename = "login", default)]
    pub username: String,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(rename = "mail", default)]
    pub email: String,
    #[serde(default)]
    pub api_key: String,
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    user: User,
}

impl RedmineClient {
    /// Fetches the currently authenticated user.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        let res = self.get(CURRENT_USER_URL, "").await?;

        match res.status() {
            StatusCode::OK => Ok(res.json::<UserResponse>().await?.user),
            status => Err(ApiError::Status(status.as_u16())),
        }
    }

    /// Authenticates against a server with basic credentials and returns the
    /// user record, which carries the API key used for all later requests.
    pub async fn login(host: &str, username: &str, password: &str) -> Result<User, ApiError> {
        let url = format!("{}{}", base_url(host), CURRENT_USER_URL);
        let res = Client::new()
            .get(url)
            .basic_auth(username, Some(password))
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, APP_USER_AGENT)
            .timeout(AUTH_TIMEOUT)
            .send()
            .await?;

        match res.status() {
            StatusCode::OK => Ok(res.json::<UserResponse>().await?.user),
            status => Err(ApiError::Status(status.as_u16())),
        }
    }
}
