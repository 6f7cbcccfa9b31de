#[cfg(test)]
mod config_tests {
    use std::time::Duration;
    use crate::config::structs::configuration::Configuration;
    use crate::config::structs::user_config::UserConfig;

    #[test]
    fn test_default_configuration_is_valid() {
        let config = Configuration::init();
        assert!(config.validate().is_ok());
        assert_eq!(config.tracker_config.request_interval, 300);
        assert_eq!(config.tracker_config.request_interval_minimum, 10);
        assert_eq!(config.tracker_config.default_numwant, 50);
    }

    #[test]
    fn test_staleness_threshold_is_twice_the_interval() {
        let mut config = Configuration::init();
        config.tracker_config.request_interval = 120;
        assert_eq!(config.staleness_threshold(), Duration::from_secs(240));
    }

    #[test]
    fn test_validate_rejects_empty_shared_key() {
        let mut config = Configuration::init();
        config.tracker_config.shared_key = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_intervals() {
        let mut config = Configuration::init();
        config.tracker_config.request_interval_minimum = config.tracker_config.request_interval + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_log_level() {
        let mut config = Configuration::init();
        config.log_level = String::from("chatty");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_bind_address() {
        let mut config = Configuration::init();
        config.http_server[0].bind_address = String::from("localhost");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_hex_user_secret() {
        let mut config = Configuration::init();
        config.users.push(UserConfig {
            username: String::from("alice"),
            secret: String::from("not-hex"),
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip_keeps_users() {
        let mut config = Configuration::init();
        config.users.push(UserConfig {
            username: String::from("alice"),
            secret: String::from("deadbeef"),
        });
        let serialized = toml::to_string(&config).unwrap();
        let loaded = Configuration::load(serialized.as_bytes()).unwrap();
        assert_eq!(loaded.users, config.users);
        assert_eq!(loaded.http_server.len(), 1);
    }

    #[test]
    fn test_users_section_is_optional() {
        let mut config = Configuration::init();
        config.users.clear();
        let serialized = toml::to_string(&config).unwrap();
        let without_users: String = serialized
            .lines()
            .filter(|line| !line.starts_with("users"))
            .collect::<Vec<_>>()
            .join("\n");
        let loaded = Configuration::load(without_users.as_bytes()).unwrap();
        assert!(loaded.users.is_empty());
    }
}
