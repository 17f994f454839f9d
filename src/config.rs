use thiserror::Error;

use crate::components::DEFAULT_MAX_VISIBLE_BUTTONS;
use crate::pagination::DEFAULT_PAGE_PARAM;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
    #[error("failed to parse {name} as integer: {source}")]
    ParseInt {
        name: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Web Server
    pub web_host: String,
    pub web_port: u16,

    // Pagination
    pub max_visible_buttons: i64,
    pub page_param: String,

    // Preview listing
    pub total_pages: i64,
    pub rows_per_page: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            web_host: "0.0.0.0".to_string(),
            web_port: 8080,
            max_visible_buttons: DEFAULT_MAX_VISIBLE_BUTTONS,
            page_param: DEFAULT_PAGE_PARAM.to_string(),
            total_pages: 20,
            rows_per_page: 10,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            // Web Server
            web_host: env_or_default("WEB_HOST", &defaults.web_host),
            web_port: parse_env("WEB_PORT", defaults.web_port)?,

            // Pagination
            max_visible_buttons: parse_env("MAX_VISIBLE_BUTTONS", defaults.max_visible_buttons)?,
            page_param: env_or_default("PAGE_PARAM", &defaults.page_param),

            // Preview listing
            total_pages: parse_env("TOTAL_PAGES", defaults.total_pages)?,
            rows_per_page: parse_env("ROWS_PER_PAGE", defaults.rows_per_page)?,
        })
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_visible_buttons < 1 {
            return Err(ConfigError::InvalidValue {
                name: "MAX_VISIBLE_BUTTONS".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.total_pages < 1 {
            return Err(ConfigError::InvalidValue {
                name: "TOTAL_PAGES".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.rows_per_page < 1 {
            return Err(ConfigError::InvalidValue {
                name: "ROWS_PER_PAGE".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.page_param.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "PAGE_PARAM".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Address the web server binds to.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.web_host, self.web_port)
    }
}

fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.trim().parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}
