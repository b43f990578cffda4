use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub processing: ProcessingConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origin: Option<String>,
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    pub timeout_secs: u64,
    pub max_dimension: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    pub include_location: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogFormat {
    #[serde(rename = "json")]
    Json,
    #[serde(rename = "pretty")]
    Pretty,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
                cors_origin: None,
                max_upload_bytes: 16 * 1024 * 1024,
            },
            processing: ProcessingConfig {
                timeout_secs: 30,
                max_dimension: 8192,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: LogFormat::Pretty,
                include_location: false,
            },
        }
    }
}

impl Config {
    pub fn validate(&self) -> AppResult<()> {
        if self.server.host.trim().is_empty() {
            return Err(AppError::ConfigError {
                message: "server host cannot be empty".to_string(),
            });
        }

        if self.server.port == 0 {
            return Err(AppError::ConfigError {
                message: "server port must be greater than 0".to_string(),
            });
        }

        if self.server.max_upload_bytes == 0 {
            return Err(AppError::ConfigError {
                message: "max_upload_bytes must be greater than 0".to_string(),
            });
        }

        if self.processing.timeout_secs == 0 {
            return Err(AppError::ConfigError {
                message: "processing timeout_secs must be greater than 0".to_string(),
            });
        }

        if self.processing.max_dimension == 0 {
            return Err(AppError::ConfigError {
                message: "processing max_dimension must be greater than 0".to_string(),
            });
        }

        if self.logging.level.trim().is_empty() {
            return Err(AppError::ConfigError {
                message: "logging level cannot be empty".to_string(),
            });
        }

        Ok(())
    }

    #[must_use]
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
