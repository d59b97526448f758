use std::env;
use std::fmt;

use lettre::Address;
use thiserror::Error;

pub const FROM_VAR: &str = "FROM_EMAIL";
pub const TO_VAR: &str = "TO_EMAIL";
pub const PASSWORD_VAR: &str = "GOOGLE_APP_PASSWORD";
pub const HOST_VAR: &str = "SMTP_HOST";
pub const PORT_VAR: &str = "SMTP_PORT";

pub const DEFAULT_RELAY_HOST: &str = "smtp.gmail.com";
/// Mail submission port, upgraded with STARTTLS.
pub const DEFAULT_RELAY_PORT: u16 = 587;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} is not a valid email address: {value:?}")]
    InvalidAddress { var: &'static str, value: String },

    #[error("{var} must be a valid port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },
}

/// Delivery parameters, gathered once at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct MailConfig {
    pub from: Address,
    pub to: Address,
    /// Used with `from` as the relay login.
    pub password: String,
    pub relay_host: String,
    pub relay_port: u16,
}

impl MailConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Blank values count as
    /// missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let from = parse_address(FROM_VAR, require(FROM_VAR)?)?;
        let to = parse_address(TO_VAR, require(TO_VAR)?)?;
        let password = require(PASSWORD_VAR)?;

        let relay_host = get(HOST_VAR).unwrap_or_else(|| DEFAULT_RELAY_HOST.to_string());
        let relay_port = match get(PORT_VAR) {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort {
                var: PORT_VAR,
                value,
            })?,
            None => DEFAULT_RELAY_PORT,
        };

        Ok(Self {
            from,
            to,
            password,
            relay_host,
            relay_port,
        })
    }
}

fn parse_address(var: &'static str, value: String) -> Result<Address, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidAddress { var, value })
}

impl fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailConfig")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("password", &"<redacted>")
            .field("relay_host", &self.relay_host)
            .field("relay_port", &self.relay_port)
            .finish()
    }
}
