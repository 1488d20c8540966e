//! Account codec seam.
//!
//! The staking pallet is generic over the runtime account type: Moonbeam-style
//! chains use 20-byte Ethereum accounts, most others 32-byte SS58 accounts.
//! [`ChainAccount`] covers parsing the request string form, SCALE
//! encode/decode for storage keys and values, and rendering back to the wire
//! form.

use parity_scale_codec::{Decode, Encode};
use sp_core::crypto::{AccountId32, Ss58Codec};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("invalid account '{0}' for this chain")]
pub struct AccountParseError(pub String);

pub trait ChainAccount: Encode + Decode + Clone + Send + Sync + 'static {
    fn parse(s: &str) -> Result<Self, AccountParseError>;

    /// Wire representation (0x-hex or SS58).
    fn to_display(&self) -> String;
}

/// 20-byte Ethereum-style account, 0x-hex encoded on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct AccountId20(pub [u8; 20]);

impl ChainAccount for AccountId20 {
    fn parse(s: &str) -> Result<Self, AccountParseError> {
        let stripped = s
            .strip_prefix("0x")
            .ok_or_else(|| AccountParseError(s.to_string()))?;
        let bytes = hex::decode(stripped).map_err(|_| AccountParseError(s.to_string()))?;
        let array: [u8; 20] = bytes
            .try_into()
            .map_err(|_| AccountParseError(s.to_string()))?;
        Ok(Self(array))
    }

    fn to_display(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl ChainAccount for AccountId32 {
    fn parse(s: &str) -> Result<Self, AccountParseError> {
        AccountId32::from_ss58check(s).map_err(|_| AccountParseError(s.to_string()))
    }

    fn to_display(&self) -> String {
        self.to_ss58check()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE_SS58: &str = "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY";

    #[test]
    fn account_id_20_round_trips_hex() {
        let account = AccountId20::parse("0x3b939fead1557c741ff06492fd0127bd287a421e").unwrap();
        assert_eq!(
            account.to_display(),
            "0x3b939fead1557c741ff06492fd0127bd287a421e"
        );
    }

    #[test]
    fn account_id_20_rejects_bad_inputs() {
        assert!(AccountId20::parse("3b939fead1557c741ff06492fd0127bd287a421e").is_err());
        assert!(AccountId20::parse("0xdeadbeef").is_err());
        assert!(AccountId20::parse("0xzz939fead1557c741ff06492fd0127bd287a421e").is_err());
    }

    #[test]
    fn account_id_20_scale_encoding_is_raw_bytes() {
        let account = AccountId20::parse("0x3b939fead1557c741ff06492fd0127bd287a421e").unwrap();
        assert_eq!(account.encode().len(), 20);
        assert_eq!(account.encode(), account.0.to_vec());
    }

    #[test]
    fn account_id_32_parses_ss58() {
        let account = <AccountId32 as ChainAccount>::parse(ALICE_SS58).unwrap();
        assert_eq!(account.to_display(), ALICE_SS58);
        assert_eq!(account.encode().len(), 32);
    }

    #[test]
    fn account_id_32_rejects_hex() {
        assert!(<AccountId32 as ChainAccount>::parse("0xdeadbeef").is_err());
    }
}
