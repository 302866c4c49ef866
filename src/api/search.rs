use super::{ApiError, RedmineClient};
use serde::Deserialize;

const SEARCH_URL: &str = "/search.json";

/// Redmine search result model.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchItem {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub datetime: String,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(rename = "results")]
    items: Vec<SearchItem>,
    total_count: i64,
}

impl RedmineClient {
    /// Runs a server-side search and returns the matching items together
    /// with the total result count.
    pub async fn search(&self, query: &str, offset: usize, limit: usize) -> Result<(Vec<SearchItem>, i64), ApiError> {
        let res = self
            .with_headers(self.http.get(self.url(SEARCH_URL)).query(&[
                ("q", query.to_string()),
                ("offset", offset.to_string()),
                ("limit", limit.to_string()),
            ]))
            .send()
            .await?;

        match res.status() {
            reqwest::StatusCode::OK => {
                let response = res.json::<SearchResponse>().await?;
                Ok((response.items, response.total_count))
            }
            status => Err(ApiError::Status(status.as_u16())),
        }
    }
}
