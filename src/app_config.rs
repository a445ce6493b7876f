use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading
/// and validating configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Endpoint serving the emoji short-name table
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Identifying User-Agent header sent with the fetch
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Base path used in generated image tags
    #[serde(default = "default_image_base_path")]
    pub image_base_path: String,

    /// Fixed pixel width used in generated image tags
    #[serde(default = "default_image_width_px")]
    pub image_width_px: u32,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_endpoint() -> String {
    "https://api.github.com/emojis".to_string()
}

fn default_user_agent() -> String {
    concat!("emojimd/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_image_base_path() -> String {
    "/images/emoji".to_string()
}

fn default_image_width_px() -> u32 {
    21
}

impl Config {
    /// Validate the configuration, returning an error describing the first
    /// problem found
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.is_empty() {
            return Err(anyhow!("Emoji endpoint must not be empty"));
        }
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(anyhow!("Emoji endpoint must be an http(s) URL: {}", self.endpoint));
        }
        if self.user_agent.is_empty() {
            return Err(anyhow!("User-Agent must not be empty, the endpoint rejects unidentified clients"));
        }
        if self.image_width_px == 0 {
            return Err(anyhow!("Image width must be greater than zero"));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            user_agent: default_user_agent(),
            image_base_path: default_image_base_path(),
            image_width_px: default_image_width_px(),
            log_level: LogLevel::default(),
        }
    }
}

/// Log level configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}
