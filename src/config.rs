use config::{Config, ConfigError, File, FileFormat};
use serde::Deserialize;
use tracing::{error, info, warn};

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Environment variable that overrides the configured listen port.
const PORT_ENV_VAR: &str = "PORT";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub port: u16,
}

pub fn load_config() -> Result<Settings, ConfigError> {
    info!("Attempting to load configuration from {}", DEFAULT_CONFIG_PATH);

    let settings = Config::builder()
        .add_source(File::new(DEFAULT_CONFIG_PATH, FileFormat::Toml).required(true))
        .build()
        .and_then(|config| config.try_deserialize::<Settings>());

    match settings {
        Ok(mut settings) => {
            override_port(&mut settings, std::env::var(PORT_ENV_VAR).ok());
            info!("Successfully loaded configuration: {:?}", settings);
            Ok(settings)
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            Err(e)
        }
    }
}

/// The PORT variable beats the file so deployment schedulers can pick the
/// socket. An unparsable value is ignored with a warning.
fn override_port(settings: &mut Settings, raw: Option<String>) {
    let Some(raw) = raw else { return };
    match raw.parse::<u16>() {
        Ok(port) => {
            info!("Overriding listen port from {}: {}", PORT_ENV_VAR, port);
            settings.server.port = port;
        }
        Err(e) => {
            warn!("Ignoring unparsable {}={:?}: {}", PORT_ENV_VAR, raw, e);
        }
    }
}
