use std::{env, fmt, net::SocketAddr};

use url::Url;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Default base URL of the shop-management API during local development.
pub const DEFAULT_SOURCE_URL: &str = "http://127.0.0.1:3333/api/";

/// Application runtime environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    Test,
}

impl Environment {
    fn from_str(value: &str) -> Result<Self, ConfigError> {
        match value {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            "test" => Ok(Self::Test),
            other => Err(ConfigError::InvalidEnvironment(other.to_string())),
        }
    }

    /// Returns `true` when the current environment should behave as development.
    pub fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }

    /// Returns the canonical name used for logging labels.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Test => "test",
        }
    }
}

/// Runtime configuration resolved from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub environment: Environment,
    /// Base URL of the shop-management API supplying stats and orders.
    pub source_base_url: Url,
    /// Bearer token sent on every order source request.
    pub source_token: String,
}

impl AppConfig {
    /// Constructs the configuration by reading and validating environment variables.
    ///
    /// `APP_BIND_ADDR`, `APP_ENV` and `ORDER_SOURCE_URL` fall back to
    /// development defaults; `ORDER_SOURCE_TOKEN` defaults to empty, which the
    /// local development API accepts.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env_value = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let environment = Environment::from_str(&env_value)?;

        let bind_value =
            env::var("APP_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_value.parse().map_err(ConfigError::BindAddress)?;

        let source_value =
            env::var("ORDER_SOURCE_URL").unwrap_or_else(|_| DEFAULT_SOURCE_URL.to_string());
        let source_base_url = Url::parse(&source_value).map_err(ConfigError::SourceUrl)?;

        let source_token = env::var("ORDER_SOURCE_TOKEN").unwrap_or_default();

        Ok(Self {
            bind_addr,
            environment,
            source_base_url,
            source_token,
        })
    }
}

/// Errors that can occur during configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    InvalidEnvironment(String),
    BindAddress(std::net::AddrParseError),
    SourceUrl(url::ParseError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnvironment(value) => write!(
                f,
                "APP_ENV must be one of 'development', 'production', or 'test' (got {value})"
            ),
            Self::BindAddress(err) => write!(f, "invalid APP_BIND_ADDR value: {err}"),
            Self::SourceUrl(err) => write!(f, "invalid ORDER_SOURCE_URL value: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {}
