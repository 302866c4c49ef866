#[cfg(test)]
mod tests {
    use remi::api::{Activities, Activity};

    fn catalog() -> Activities {
        Activities::new(vec![
            Activity {
                id: 1,
                name: "Development".to_string(),
            },
            Activity {
                id: 2,
                name: "Design".to_string(),
            },
        ])
    }

    #[test]
    fn test_resolve_exact_name() {
        assert_eq!(catalog().resolve("Design"), Some(2));
        assert_eq!(catalog().resolve("Development"), Some(1));
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        assert_eq!(catalog().resolve("design"), None);
        assert_eq!(catalog().resolve("DEVELOPMENT"), None);
    }

    #[test]
    fn test_resolve_unknown_name() {
        assert_eq!(catalog().resolve("Testing"), None);
    }

    #[test]
    fn test_names_preserve_catalog_order() {
        assert_eq!(catalog().names(), vec!["Development".to_string(), "Design".to_string()]);
    }
}
