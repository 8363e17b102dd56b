// Capacities for the bounded booking containers
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_STACK_MAX_SIZE: usize = 3;
pub const DEFAULT_QUEUE_CAPACITY: usize = 5;
pub const DEFAULT_LIST_MAX_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BookingConfig {
    pub stack_max_size: usize,
    pub queue_capacity: usize,
    pub list_max_len: usize,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            stack_max_size: DEFAULT_STACK_MAX_SIZE,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            list_max_len: DEFAULT_LIST_MAX_LEN,
        }
    }
}

impl BookingConfig {
    // Missing fields keep their defaults
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        let config: BookingConfig =
            serde_json::from_str(json_str).map_err(|e| ConfigError::Json(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stack_max_size == 0 {
            return Err(ConfigError::ZeroCapacity("stack_max_size"));
        }
        if self.queue_capacity == 0 {
            return Err(ConfigError::ZeroCapacity("queue_capacity"));
        }
        if self.list_max_len == 0 {
            return Err(ConfigError::ZeroCapacity("list_max_len"));
        }
        Ok(())
    }
}
