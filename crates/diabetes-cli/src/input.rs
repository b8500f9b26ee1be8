use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ArgMatches;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ServeConfig {
    pub version: String,
    pub model_path: String,
    pub bind_address: String,
    pub port: u16,
    pub sidebar_image: Option<String>,
    pub sidebar_text: String,
    pub sidebar_credit: Option<SidebarCredit>,
}

/// Author line shown under the sidebar text, rendered as a link.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SidebarCredit {
    pub author: String,
    pub url: String,
}

impl Default for ServeConfig {
    fn default() -> Self {
        ServeConfig {
            version: clap::crate_version!().to_string(),
            model_path: String::from("models/diabetes_model.json"),
            bind_address: String::from("127.0.0.1"),
            port: 8501,
            sidebar_image: None,
            sidebar_text: String::from(
                "This project is using Diabetic Dataset from kaggle with 90% Accuracy till now",
            ),
            sidebar_credit: Some(SidebarCredit {
                author: String::from("Eng. Ramez Mohamed"),
                url: String::from("https://www.linkedin.com/in/ramezmo1/"),
            }),
        }
    }
}

impl ServeConfig {
    /// Build the configuration from an optional JSON file, then apply CLI
    /// overrides. Missing or invalid fields in the file keep their defaults.
    pub fn from_arguments(config_path: Option<&PathBuf>, matches: &ArgMatches) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => ServeConfig::default(),
        };

        if let Some(model_path) = matches.get_one::<PathBuf>("model_path") {
            config.model_path = model_path.to_string_lossy().into_owned();
        }
        if let Some(bind_address) = matches.get_one::<String>("bind") {
            config.bind_address = bind_address.clone();
        }
        if let Some(port) = matches.get_one::<u16>("port") {
            config.port = *port;
        }
        if let Some(image) = matches.get_one::<PathBuf>("sidebar_image") {
            config.sidebar_image = Some(image.to_string_lossy().into_owned());
        }

        Ok(config)
    }

    pub fn from_file(config_path: &PathBuf) -> Result<Self> {
        let config_json = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let partial: serde_json::Value = serde_json::from_str(&config_json)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
        let mut config = ServeConfig::default();

        macro_rules! load_or_default {
            ($field:ident) => {
                if let Some(val) = partial.get(stringify!($field)) {
                    if let Ok(parsed) = serde_json::from_value(val.clone()) {
                        config.$field = parsed;
                    } else {
                        log::warn!(
                            "Config Invalid value for '{}', using default: {:?}",
                            stringify!($field), config.$field
                        );
                    }
                } else {
                    log::warn!(
                        "Config Missing field '{}', using default: {:?}",
                        stringify!($field), config.$field
                    );
                }
            };
        }

        load_or_default!(version);
        if config.version != clap::crate_version!() {
            log::warn!(
                "[Diabetes::Config] Config written for version {}, running {}",
                config.version,
                clap::crate_version!()
            );
        } else {
            log::info!("[Diabetes::Config] Config version {}", config.version);
        }
        load_or_default!(model_path);
        load_or_default!(bind_address);
        load_or_default!(port);
        load_or_default!(sidebar_image);
        load_or_default!(sidebar_text);
        load_or_default!(sidebar_credit);

        Ok(config)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .bind_address
            .parse()
            .with_context(|| format!("Invalid bind address: {}", self.bind_address))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
