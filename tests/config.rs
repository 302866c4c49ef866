#[cfg(test)]
mod tests {
    use remi::libs::config::{Config, DefaultKey};
    use serial_test::serial;
    use std::str::FromStr;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Test context to ensure a clean environment for each config test.
    /// It redirects the platform data directory into a temporary directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    #[serial]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        // When no config file exists, read() should return the default config.
        let config = Config::read().unwrap();
        assert!(config.host.is_empty());
        assert!(config.api_key.is_empty());
        assert!(config.aliases.is_empty());
        assert!(config.defaults.is_empty());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    #[serial]
    fn test_save_and_read_config(_ctx: &mut ConfigTestContext) {
        let mut config = Config::default();
        config.host = "https://redmine.example.org".to_string();
        config.api_key = "secret".to_string();
        config.user_id = 42;
        config.save().unwrap();

        let read_config = Config::read().unwrap();
        assert_eq!(read_config.host, "https://redmine.example.org");
        assert_eq!(read_config.api_key, "secret");
        assert_eq!(read_config.user_id, 42);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    #[serial]
    fn test_set_and_get_alias(_ctx: &mut ConfigTestContext) {
        let mut config = Config::read().unwrap();
        config.set_alias("build-1", "42").unwrap();

        assert_eq!(config.alias("build-1"), Some("42"));
        // The alias survives a fresh read from disk.
        assert_eq!(Config::read().unwrap().alias("build-1"), Some("42"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    #[serial]
    fn test_empty_value_removes_alias(_ctx: &mut ConfigTestContext) {
        let mut config = Config::read().unwrap();
        config.set_alias("build-1", "42").unwrap();
        config.set_alias("build-1", "").unwrap();

        assert_eq!(config.alias("build-1"), None);
        assert_eq!(Config::read().unwrap().alias("build-1"), None);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    #[serial]
    fn test_set_and_get_default(_ctx: &mut ConfigTestContext) {
        let mut config = Config::read().unwrap();
        config.set_default(DefaultKey::Activity, "Development").unwrap();

        assert_eq!(config.default_value(DefaultKey::Activity), Some("Development"));
        assert_eq!(Config::read().unwrap().default_value(DefaultKey::Activity), Some("Development"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    #[serial]
    fn test_credentials_require_host_and_api_key(_ctx: &mut ConfigTestContext) {
        let mut config = Config::default();
        assert!(config.credentials().is_err());

        config.host = "https://redmine.example.org".to_string();
        assert!(config.credentials().is_err());

        config.api_key = "secret".to_string();
        let (host, api_key) = config.credentials().unwrap();
        assert_eq!(host, "https://redmine.example.org");
        assert_eq!(api_key, "secret");
    }

    #[test]
    fn test_unknown_default_key_is_rejected() {
        assert!(DefaultKey::from_str("activity").is_ok());
        let err = DefaultKey::from_str("editor").unwrap_err();
        assert!(err.to_string().contains("'activity'"));
    }
}
