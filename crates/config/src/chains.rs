use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChainsConfigError {
    #[error("Failed to parse chains config JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Invalid URL '{url}' for chain '{chain}': {reason}")]
    InvalidUrl {
        chain: String,
        url: String,
        reason: String,
    },
}

/// Account encoding used by a chain's staking pallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFormat {
    /// 32-byte accounts, SS58 encoded (most Substrate chains)
    #[default]
    Substrate,
    /// 20-byte accounts, 0x-hex encoded (Moonbeam-style chains)
    Ethereum,
}

/// Per-chain configuration entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChainEntry {
    /// Node WebSocket or HTTP URL
    pub url: String,

    #[serde(default)]
    pub address_format: AddressFormat,

    /// Maximum number of nominators backing a single collator.
    ///
    /// A runtime constant on chain; mirrored here because the service layer
    /// does not decode runtime metadata.
    #[serde(default = "default_max_nominators_per_collator")]
    pub max_nominators_per_collator: u32,
}

fn default_max_nominators_per_collator() -> u32 {
    300
}

/// Map of chain identifier to chain entry.
///
/// Env: STAKING_CHAINS
/// Format: JSON object keyed by chain id
/// Example: '{"moonriver":{"url":"wss://node:443","addressFormat":"ethereum"}}'
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChainsConfig(HashMap<String, ChainEntry>);

impl ChainsConfig {
    pub fn from_json(raw: &str) -> Result<Self, ChainsConfigError> {
        let chains: HashMap<String, ChainEntry> = serde_json::from_str(raw)?;
        Ok(Self(chains))
    }

    pub fn get(&self, chain_id: &str) -> Option<&ChainEntry> {
        self.0.get(chain_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ChainEntry)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn validate(&self) -> Result<(), ChainsConfigError> {
        for (chain, entry) in &self.0 {
            let parsed =
                url::Url::parse(&entry.url).map_err(|e| ChainsConfigError::InvalidUrl {
                    chain: chain.clone(),
                    url: entry.url.clone(),
                    reason: e.to_string(),
                })?;

            match parsed.scheme() {
                "ws" | "wss" | "http" | "https" => {}
                scheme => {
                    return Err(ChainsConfigError::InvalidUrl {
                        chain: chain.clone(),
                        url: entry.url.clone(),
                        reason: format!(
                            "invalid scheme '{}', must be ws, wss, http or https",
                            scheme
                        ),
                    });
                }
            }
        }

        Ok(())
    }
}
