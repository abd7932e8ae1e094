//! Configuration model loaded from external sources.

use serde::Deserialize;

use std::time::Duration;

use crate::db::PoolSettings;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub database_url: String,
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
    #[serde(default = "default_busy_timeout_secs")]
    pub busy_timeout_secs: u64,
}

impl ServerConfig {
    pub fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            max_size: self.pool_size,
            busy_timeout: Duration::from_secs(self.busy_timeout_secs),
        }
    }
}

fn default_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_pool_size() -> u32 {
    10
}

fn default_busy_timeout_secs() -> u64 {
    30
}
