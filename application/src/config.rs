use std::time::Duration;

use crate::infrastructure_config::Config;

#[derive(Debug, Clone, Copy)]
pub struct ProcessingSettings {
    pub timeout: Duration,
}

impl ProcessingSettings {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            timeout: Duration::from_secs(config.processing.timeout_secs),
        }
    }
}
