#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::env;
use std::path;

use anyhow::bail;
use anyhow::Result;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::IntoEnumIterator;
use tokio::fs;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Eq, PartialEq, EnumIter, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    ConfigFile,
    GatewayTimeout,
    GatewayURL,
    SessionFile,
    Username,
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return "".to_string();
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        if key == ConfigKey::Username {
            let mut user = env::var("USER").unwrap_or_else(|_| return "".to_string());
            if user.is_empty() {
                user = "Admin".to_string();
            }

            return user;
        }

        #[cfg(not(target_os = "macos"))]
        let config_path = dirs::cache_dir().unwrap().join("backoffice/config.toml");
        #[cfg(target_os = "macos")]
        let config_path =
            path::PathBuf::from(env::var("HOME").unwrap()).join(".config/backoffice/config.toml");

        let session_path = dirs::cache_dir().unwrap().join("backoffice/session.json");

        let res = match key {
            ConfigKey::GatewayTimeout => "10000",
            ConfigKey::GatewayURL => "http://localhost:8080",

            // Special
            ConfigKey::ConfigFile => config_path.to_str().unwrap(),
            ConfigKey::SessionFile => session_path.to_str().unwrap(),
            ConfigKey::Username => "",
        };

        return res.to_string();
    }

    pub async fn load(config_file: Option<&str>) -> Result<()> {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key));
        }

        if let Some(config_file) = config_file {
            Config::set(ConfigKey::ConfigFile, config_file);
        }

        let config_path = path::PathBuf::from(Config::get(ConfigKey::ConfigFile));
        if config_path.exists() {
            let toml_str = fs::read_to_string(config_path).await?;
            let doc = toml_str.parse::<toml_edit::Document>()?;

            for key in ConfigKey::iter() {
                if let Some(val) = doc.get(&key.to_string()) {
                    if let Some(val_int) = val.as_integer() {
                        Config::set(key, &val_int.to_string());
                    } else if let Some(val_str) = val.as_str() {
                        if val_str.is_empty() {
                            continue;
                        }
                        Config::set(key, val_str);
                    }
                }
            }
        }

        let timeout = Config::get(ConfigKey::GatewayTimeout);
        if timeout.parse::<u64>().is_err() {
            bail!(format!(
                "config.toml has an invalid value for key '{key}': {timeout}",
                key = ConfigKey::GatewayTimeout
            ));
        }

        tracing::debug!(
            gateway_url = Config::get(ConfigKey::GatewayURL),
            gateway_timeout = Config::get(ConfigKey::GatewayTimeout),
            session_file = Config::get(ConfigKey::SessionFile),
            username = Config::get(ConfigKey::Username),
            "config"
        );

        return Ok(());
    }

    pub fn serialize_default() -> String {
        let toml_str = ConfigKey::iter()
            .filter_map(|key| {
                let entry = match key {
                    ConfigKey::ConfigFile => {
                        return None;
                    }
                    ConfigKey::GatewayTimeout => {
                        "# Request timeout in milliseconds.\ngateway-timeout = 10000".to_string()
                    }
                    ConfigKey::GatewayURL => {
                        format!(
                            "# Base URL of the remote admin service.\ngateway-url = \"{url}\"",
                            url = Config::default(ConfigKey::GatewayURL)
                        )
                    }
                    ConfigKey::SessionFile => {
                        "# Where the session credential and cached identity are persisted.\n# session-file = \"\"".to_string()
                    }
                    ConfigKey::Username => {
                        "# Your user name shown in the console.\n# username = \"\"".to_string()
                    }
                };

                return Some(entry);
            })
            .collect::<Vec<String>>()
            .join("\n\n");

        return toml_str;
    }
}
