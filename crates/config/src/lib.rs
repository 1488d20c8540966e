mod chains;
mod error;
mod express;
mod log;

pub use chains::{AddressFormat, ChainEntry, ChainsConfig, ChainsConfigError};
pub use error::ConfigError;
pub use express::ExpressConfig;
pub use log::LogConfig;

use serde::Deserialize;

/// Environment variable holding the per-chain JSON configuration.
pub const CHAINS_ENV: &str = "STAKING_CHAINS";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct StakingApiConfig {
    #[serde(default)]
    pub express: ExpressConfig,

    #[serde(default)]
    pub log: LogConfig,

    /// Parsed from [`CHAINS_ENV`] after the envy pass; a JSON map does not
    /// fit envy's flat key model, so envy must not touch this field.
    #[serde(skip)]
    pub chains: ChainsConfig,
}

impl StakingApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let mut config = envy::prefixed("STAKING_").from_env::<Self>()?;

        if let Ok(raw) = std::env::var(CHAINS_ENV) {
            config.chains = ChainsConfig::from_json(&raw)?;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.express.validate()?;
        self.log.validate()?;
        self.chains.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_config() {
        let config = StakingApiConfig::default();
        assert_eq!(config.express.port, 8080);
        assert_eq!(config.log.level, "info");
        assert!(config.chains.is_empty());
    }

    #[test]
    #[serial]
    fn test_from_env_with_chains() {
        unsafe {
            std::env::set_var(
                CHAINS_ENV,
                r#"{"moonriver":{"url":"wss://moonriver.example:443","addressFormat":"ethereum"}}"#,
            );
        }

        let config = StakingApiConfig::from_env().expect("config should load");
        let entry = config.chains.get("moonriver").expect("chain present");
        assert_eq!(entry.address_format, AddressFormat::Ethereum);

        unsafe {
            std::env::remove_var(CHAINS_ENV);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_bad_chains_json() {
        unsafe {
            std::env::set_var(CHAINS_ENV, "not json");
        }

        assert!(StakingApiConfig::from_env().is_err());

        unsafe {
            std::env::remove_var(CHAINS_ENV);
        }
    }
}
