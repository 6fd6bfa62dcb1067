use crate::shared::core::primitives::{Capacity, CapacityError};

pub const CAPACITY_KEY: &str = "COURSE_CAPACITY";
pub const HOST_KEY: &str = "HOST";
pub const PORT_KEY: &str = "PORT";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },

    #[error(transparent)]
    Capacity(#[from] CapacityError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub capacity: Capacity,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_capacity = lookup(CAPACITY_KEY).ok_or(ConfigError::Missing(CAPACITY_KEY))?;
        let capacity = Capacity::new(parse(CAPACITY_KEY, raw_capacity)?)?;
        let host = lookup(HOST_KEY).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup(PORT_KEY) {
            Some(raw) => parse(PORT_KEY, raw)?,
            None => DEFAULT_PORT,
        };
        Ok(Self {
            capacity,
            host,
            port,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, raw: String) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value: raw })
}
