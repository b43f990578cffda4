use std::{error::Error, io::stdout};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use camgrid_application::infrastructure_config::{Config, LogFormat, LoggingConfig};

const SERVICE_NAME: &str = "camgrid-server";

/// `RUST_LOG` wins over the configured level when it parses.
fn env_filter(logging: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level))
}

/// Installs the global subscriber. Fails if one is already set.
pub fn setup_logging(config: &Config) -> Result<(), Box<dyn Error>> {
    let filter = env_filter(&config.logging);

    match config.logging.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(JsonStorageLayer)
            .with(BunyanFormattingLayer::new(SERVICE_NAME.to_string(), stdout))
            .try_init()?,
        LogFormat::Pretty => {
            let location = config.logging.include_location;
            tracing_subscriber::fmt()
                .event_format(fmt::format().with_target(true).compact())
                .with_env_filter(filter)
                .with_file(location)
                .with_line_number(location)
                .try_init()
                .map_err(|e| -> Box<dyn Error> { e })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_install_is_an_error() {
        let config = Config::default();
        assert!(setup_logging(&config).is_ok());
        assert!(setup_logging(&config).is_err());
    }
}
