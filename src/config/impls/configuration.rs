use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use std::thread::available_parallelism;
use std::time::Duration;
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::config::structs::tracker_config::TrackerConfig;

impl Configuration {
    pub fn init() -> Configuration {
        let threads = available_parallelism().map(|n| n.get() as u64).unwrap_or(4);
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            tracker_config: TrackerConfig {
                shared_key: String::from("ChangeThisSharedKey"),
                request_interval: 300,
                request_interval_minimum: 10,
                default_numwant: 50,
                max_numwant: 200,
                peers_cleanup_interval: 600,
                torrents_dir: None,
            },
            http_server: vec!(
                HttpTrackersConfig {
                    enabled: true,
                    bind_address: String::from("0.0.0.0:4200"),
                    real_ip: String::from("X-Real-IP"),
                    keep_alive: 60,
                    request_timeout: 15,
                    disconnect_timeout: 15,
                    threads,
                }
            ),
            users: vec![],
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => Self::load(data.as_slice()).map_err(ConfigurationError::ParseError),
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path).map_err(ConfigurationError::IOError)?;
        file.write_all(data.as_ref()).map_err(ConfigurationError::IOError)
    }

    pub fn save_to_file(&self, path: &str) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(self).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new(&format!("will not create automatically {path} file")));
                }
                eprintln!("Creating config file..");

                return match Configuration::init().save_to_file(path) {
                    Ok(_) => {
                        eprintln!("Please edit the {path} file, exiting now...");
                        Err(CustomError::new(&format!("created {path} file")))
                    }
                    Err(e) => {
                        eprintln!("{path} file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {path} file")))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CustomError> {
        parse_log_level(self.log_level.as_str())?;

        let tracker_config = &self.tracker_config;
        if tracker_config.shared_key.is_empty() {
            return Err(CustomError::new("[VALIDATE CONFIG] tracker_config.shared_key must not be empty"));
        }
        if tracker_config.request_interval == 0 {
            return Err(CustomError::new("[VALIDATE CONFIG] tracker_config.request_interval must be positive"));
        }
        if tracker_config.request_interval_minimum > tracker_config.request_interval {
            return Err(CustomError::new("[VALIDATE CONFIG] tracker_config.request_interval_minimum exceeds request_interval"));
        }
        if tracker_config.default_numwant == 0 {
            return Err(CustomError::new("[VALIDATE CONFIG] tracker_config.default_numwant must be positive"));
        }
        if tracker_config.max_numwant < tracker_config.default_numwant {
            return Err(CustomError::new("[VALIDATE CONFIG] tracker_config.max_numwant is lower than default_numwant"));
        }
        if tracker_config.peers_cleanup_interval == 0 {
            return Err(CustomError::new("[VALIDATE CONFIG] tracker_config.peers_cleanup_interval must be positive"));
        }

        for http_server in &self.http_server {
            if http_server.bind_address.parse::<SocketAddr>().is_err() {
                return Err(CustomError::new(&format!("[VALIDATE CONFIG] invalid bind address \"{}\"", http_server.bind_address)));
            }
        }

        for user in &self.users {
            if user.secret.is_empty() || hex::decode(&user.secret).is_err() {
                return Err(CustomError::new(&format!("[VALIDATE CONFIG] secret of user \"{}\" is not a hex string", user.username)));
            }
        }

        Ok(())
    }

    /// Peers silent for longer than this are reaped.
    pub fn staleness_threshold(&self) -> Duration {
        Duration::from_secs(self.tracker_config.request_interval * 2)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::init()
    }
}
