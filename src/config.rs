use std::{env, net::SocketAddr};

use crate::{Error, Result};

const DEFAULT_PARTITION_KEY_ATTRIBUTE: &str = "key_cond";
const DEFAULT_BIND_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub table_name: String,
    pub partition_key_attribute: String,
    pub dynamodb_endpoint: Option<String>,
    pub bind_host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Ok(Self {
            table_name: non_empty("TABLE_NAME").ok_or_else(|| Error::ConfigMissing {
                var: "TABLE_NAME".to_string(),
            })?,
            partition_key_attribute: non_empty("PARTITION_KEY_ATTRIBUTE")
                .unwrap_or_else(|| DEFAULT_PARTITION_KEY_ATTRIBUTE.to_string()),
            dynamodb_endpoint: non_empty("DYNAMODB_ENDPOINT"),
            bind_host: non_empty("BIND_HOST").unwrap_or_else(|| DEFAULT_BIND_HOST.to_string()),
            port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let raw = format!("{}:{}", self.bind_host, self.port);
        raw.parse().map_err(|_| Error::ConfigInvalid {
            var: "BIND_HOST".to_string(),
            value: raw,
        })
    }
}
