use crate::ConfigError;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ExpressConfig {
    /// Port to bind the HTTP server to
    ///
    /// Env: STAKING_EXPRESS_PORT
    /// Default: 8080
    #[serde(default = "default_port")]
    pub port: u16,

    /// Host to bind the HTTP server to
    ///
    /// Env: STAKING_EXPRESS_BIND_HOST
    /// Default: 127.0.0.1
    #[serde(default = "default_bind_host")]
    pub bind_host: String,
}

fn default_port() -> u16 {
    8080
}

fn default_bind_host() -> String {
    "127.0.0.1".to_string()
}

impl ExpressConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::ValidateError(
                "Express port cannot be 0".to_string(),
            ));
        }

        if self.bind_host.is_empty() {
            return Err(ConfigError::ValidateError(
                "Express bind host cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for ExpressConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind_host: default_bind_host(),
        }
    }
}
