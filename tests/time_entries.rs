#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use mockito::{Server, ServerGuard};
    use remi::api::{RedmineClient, TimeEntryPayload};
    use remi::libs::config::Config;
    use remi::libs::date::SpentOn;

    fn config_for(server: &ServerGuard) -> Config {
        Config {
            host: server.url(),
            api_key: "secret".to_string(),
            ..Default::default()
        }
    }

    fn spent_on(text: &str) -> SpentOn {
        SpentOn::parse(text, NaiveDate::default()).unwrap()
    }

    #[test]
    fn test_client_requires_credentials() {
        let err = RedmineClient::new(&Config::default()).unwrap_err();
        assert_eq!(err.to_string(), "you are not logged in");
    }

    #[test]
    fn test_payload_skips_unset_fields() {
        let payload = TimeEntryPayload {
            hours: Some(1.5),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&payload).unwrap(), serde_json::json!({ "hours": 1.5 }));
    }

    #[test]
    fn test_payload_carries_explicit_empty_comment() {
        // Clearing a comment sends a true empty string; an absent comment
        // is simply not serialized.
        let payload = TimeEntryPayload {
            comments: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&payload).unwrap(), serde_json::json!({ "comments": "" }));
    }

    #[tokio::test]
    async fn test_create_time_entry() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/time_entries.json")
            .match_header("x-redmine-api-key", "secret")
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"time_entry":{"id":77,"project":{"id":10,"name":"Backend"},"issue":{"id":0},
                    "user":{"id":1,"name":"Admin"},"activity":{"id":1,"name":"Development"},
                    "hours":2.5,"comments":"","spent_on":"2024-01-05"}}"#,
            )
            .create_async()
            .await;

        let client = RedmineClient::new(&config_for(&server)).unwrap();
        let payload = TimeEntryPayload {
            project_id: Some(10),
            spent_on: Some(spent_on("2024-01-05")),
            hours: Some(2.5),
            activity_id: Some(1),
            ..Default::default()
        };

        let entry = client.create_time_entry(&payload).await.unwrap();
        assert_eq!(entry.id, 77);
        assert_eq!(entry.project.name, "Backend");
        assert_eq!(entry.spent_on, spent_on("2024-01-05"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_surfaces_validation_errors_verbatim() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/time_entries.json")
            .with_status(422)
            .with_header("content-type", "application/json")
            .with_body(r#"{"errors":["Hours can't be blank"]}"#)
            .create_async()
            .await;

        let client = RedmineClient::new(&config_for(&server)).unwrap();
        let err = client.create_time_entry(&TimeEntryPayload::default()).await.unwrap_err();
        assert!(err.to_string().contains("Hours can't be blank"));
    }

    #[tokio::test]
    async fn test_update_sends_sparse_payload() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("PUT", "/time_entries/5.json")
            .match_body(mockito::Matcher::JsonString(r#"{"time_entry":{"hours":3.0}}"#.to_string()))
            .with_status(200)
            .create_async()
            .await;

        let client = RedmineClient::new(&config_for(&server)).unwrap();
        let payload = TimeEntryPayload {
            hours: Some(3.0),
            ..Default::default()
        };

        client.update_time_entry(5, &payload).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_surfaces_validation_errors_verbatim() {
        let mut server = Server::new_async().await;
        server
            .mock("PUT", "/time_entries/5.json")
            .with_status(422)
            .with_header("content-type", "application/json")
            .with_body(r#"{"errors":["Activity is not included in the list"]}"#)
            .create_async()
            .await;

        let client = RedmineClient::new(&config_for(&server)).unwrap();
        let err = client.update_time_entry(5, &TimeEntryPayload::default()).await.unwrap_err();
        assert!(err.to_string().contains("Activity is not included in the list"));
    }

    #[tokio::test]
    async fn test_delete_time_entry() {
        let mut server = Server::new_async().await;
        let mock = server.mock("DELETE", "/time_entries/12.json").with_status(204).create_async().await;

        let client = RedmineClient::new(&config_for(&server)).unwrap();
        client.delete_time_entry(12).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_delete_missing_entry_reports_not_found() {
        let mut server = Server::new_async().await;
        server.mock("DELETE", "/time_entries/999.json").with_status(404).create_async().await;

        let client = RedmineClient::new(&config_for(&server)).unwrap();
        let err = client.delete_time_entry(999).await.unwrap_err();
        assert_eq!(err.to_string(), "there is no time entry with id 999");
    }

    #[tokio::test]
    async fn test_delete_other_failures_report_status() {
        let mut server = Server::new_async().await;
        server.mock("DELETE", "/time_entries/13.json").with_status(500).create_async().await;

        let client = RedmineClient::new(&config_for(&server)).unwrap();
        let err = client.delete_time_entry(13).await.unwrap_err();
        assert_eq!(err.to_string(), "status 500");
    }

    #[tokio::test]
    async fn test_list_time_entries() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/time_entries.json?limit=2&user_id=me")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"time_entries":[
                    {"id":1,"project":{"id":4,"name":"Backend"},"issue":{"id":101},
                     "user":{"id":1,"name":"Admin"},"activity":{"id":9,"name":"Development"},
                     "hours":2.0,"comments":"refactoring","spent_on":"2024-03-01"},
                    {"id":2,"project":{"id":4,"name":"Backend"},"issue":{"id":0},
                     "user":{"id":1,"name":"Admin"},"activity":{"id":9,"name":"Development"},
                     "hours":1.0,"comments":"","spent_on":null}]}"#,
            )
            .create_async()
            .await;

        let client = RedmineClient::new(&config_for(&server)).unwrap();
        let entries = client.time_entries("limit=2&user_id=me").await.unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].issue.id, 101);
        assert_eq!(entries[0].issue.to_string(), "101");
        // Issue id 0 means the time was logged against the project.
        assert_eq!(entries[1].issue.to_string(), "-");
        // A null spent_on decodes to the zero value without error.
        assert_eq!(entries[1].spent_on, SpentOn::default());
    }
}
