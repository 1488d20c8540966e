use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration from environment: {0}")]
    EnvError(#[from] envy::Error),

    #[error("Chain configuration error: {0}")]
    ChainsError(#[from] crate::chains::ChainsConfigError),

    #[error("{0}")]
    ValidateError(String),
}
