//! Storage keys and SCALE value layouts of `pallet_parachain_staking`.
//!
//! Keys are built by hand (twox128 pallet/item prefixes, twox64concat hashed
//! map keys) so the service can read storage over raw `state_getStorage`
//! without decoding runtime metadata.

use parity_scale_codec::{Decode, Encode};
use sp_crypto_hashing::{twox_64, twox_128};

pub const PALLET: &[u8] = b"ParachainStaking";

/// Staking points awarded per authored block.
pub const POINTS_PER_BLOCK: u32 = 20;

/// Key of a plain storage value: twox128(pallet) ++ twox128(item).
pub fn value_key(pallet: &[u8], item: &[u8]) -> Vec<u8> {
    let mut key = Vec::with_capacity(32);
    key.extend_from_slice(&twox_128(pallet));
    key.extend_from_slice(&twox_128(item));
    key
}

fn twox_64_concat(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(8 + data.len());
    out.extend_from_slice(&twox_64(data));
    out.extend_from_slice(data);
    out
}

/// Key of a Twox64Concat map entry.
pub fn map_key<K: Encode>(pallet: &[u8], item: &[u8], key: &K) -> Vec<u8> {
    let mut full = value_key(pallet, item);
    full.extend_from_slice(&twox_64_concat(&key.encode()));
    full
}

/// Key of a (Twox64Concat, Twox64Concat) double map entry.
pub fn double_map_key<K1: Encode, K2: Encode>(
    pallet: &[u8],
    item: &[u8],
    key1: &K1,
    key2: &K2,
) -> Vec<u8> {
    let mut full = map_key(pallet, item, key1);
    full.extend_from_slice(&twox_64_concat(&key2.encode()));
    full
}

/// Prefix under which all second keys of a double map entry live.
pub fn double_map_prefix<K1: Encode>(pallet: &[u8], item: &[u8], key1: &K1) -> Vec<u8> {
    map_key(pallet, item, key1)
}

// ------------------------------------------------------------------------
// Storage value layouts
// ------------------------------------------------------------------------

/// `ParachainStaking::Round`
#[derive(Debug, Clone, PartialEq, Encode, Decode)]
pub struct RoundInfo {
    pub current: u32,
    pub first: u32,
    pub length: u32,
}

/// An account bonding an amount (candidate pool entries, delegations).
#[derive(Debug, Clone, PartialEq, Encode, Decode)]
pub struct Bond<A> {
    pub owner: A,
    pub amount: u128,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode)]
pub enum CapacityStatus {
    Full,
    Empty,
    Partial,
}

impl CapacityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CapacityStatus::Full => "full",
            CapacityStatus::Empty => "empty",
            CapacityStatus::Partial => "partial",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Encode, Decode)]
pub struct CandidateBondLessRequest {
    pub amount: u128,
    pub when_executable: u32,
}

#[derive(Debug, Clone, PartialEq, Encode, Decode)]
pub enum CollatorStatus {
    Active,
    Idle,
    Leaving(u32),
}

impl CollatorStatus {
    pub fn to_display(&self) -> String {
        match self {
            CollatorStatus::Active => "active".to_string(),
            CollatorStatus::Idle => "idle".to_string(),
            CollatorStatus::Leaving(round) => format!("leaving({})", round),
        }
    }
}

/// `ParachainStaking::CandidateInfo(account)`
#[derive(Debug, Clone, PartialEq, Encode, Decode)]
pub struct CandidateMetadata {
    pub bond: u128,
    pub delegation_count: u32,
    pub total_counted: u128,
    pub lowest_top_delegation_amount: u128,
    pub highest_bottom_delegation_amount: u128,
    pub lowest_bottom_delegation_amount: u128,
    pub top_capacity: CapacityStatus,
    pub bottom_capacity: CapacityStatus,
    pub request: Option<CandidateBondLessRequest>,
    pub status: CollatorStatus,
}

/// `ParachainStaking::TopDelegations(account)`
#[derive(Debug, Clone, PartialEq, Encode, Decode)]
pub struct Delegations<A> {
    pub delegations: Vec<Bond<A>>,
    pub total: u128,
}

/// Delegation entry inside an `AtStake` snapshot.
#[derive(Debug, Clone, PartialEq, Encode, Decode)]
pub struct BondWithAutoCompound<A> {
    pub owner: A,
    pub amount: u128,
    /// Auto-compound percentage (SCALE `Percent`)
    pub auto_compound: u8,
}

/// `ParachainStaking::AtStake(round, account)`
#[derive(Debug, Clone, PartialEq, Encode, Decode)]
pub struct CollatorSnapshot<A> {
    pub bond: u128,
    pub delegations: Vec<BondWithAutoCompound<A>>,
    pub total: u128,
}
