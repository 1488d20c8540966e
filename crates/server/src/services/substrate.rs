//! RPC-backed staking service.
//!
//! Answers the realtime operations straight from a parachain node over
//! JSON-RPC. History operations stay on the trait defaults: they need an
//! event indexer, which is a separate backend.

use futures::future::try_join_all;
use parity_scale_codec::Decode;
use subxt_rpcs::RpcClient;
use subxt_rpcs::client::rpc_params;

use config::ChainEntry;

use super::storage::{
    self, Bond, CandidateMetadata, CollatorSnapshot, Delegations, RoundInfo, POINTS_PER_BLOCK,
};
use super::{ChainAccount, ServiceError, StakingService};
use crate::types::*;
use async_trait::async_trait;

/// Largest round span accepted by `collator_produced_blocks`. Each round in
/// the span costs one storage read.
pub const MAX_ROUND_RANGE: u32 = 128;

const KEYS_PAGE_SIZE: u32 = 256;

pub struct SubstrateStakingService<A: ChainAccount> {
    chain_id: String,
    rpc: RpcClient,
    max_nominators_per_collator: u32,
    _account: std::marker::PhantomData<A>,
}

impl<A: ChainAccount> SubstrateStakingService<A> {
    /// Connect to the node configured for `chain_id`.
    pub async fn connect(chain_id: &str, entry: &ChainEntry) -> Result<Self, subxt_rpcs::Error> {
        let rpc = RpcClient::from_insecure_url(&entry.url).await?;
        Ok(Self {
            chain_id: chain_id.to_string(),
            rpc,
            max_nominators_per_collator: entry.max_nominators_per_collator,
            _account: std::marker::PhantomData,
        })
    }

    #[cfg(test)]
    fn with_client(chain_id: &str, rpc: RpcClient, max_nominators_per_collator: u32) -> Self {
        Self {
            chain_id: chain_id.to_string(),
            rpc,
            max_nominators_per_collator,
            _account: std::marker::PhantomData,
        }
    }

    /// Read and decode a storage value; `None` when the key has no entry.
    async fn fetch_storage<T: Decode>(
        &self,
        key: &[u8],
        item: &'static str,
    ) -> Result<Option<T>, ServiceError> {
        let key_hex = format!("0x{}", hex::encode(key));
        let raw: Option<String> = self
            .rpc
            .request("state_getStorage", rpc_params![key_hex])
            .await?;

        match raw {
            None => Ok(None),
            Some(hex_value) => decode_storage_value(&hex_value, item).map(Some),
        }
    }

    /// Enumerate all storage keys under `prefix`.
    async fn fetch_keys(&self, prefix: &[u8]) -> Result<Vec<Vec<u8>>, ServiceError> {
        let prefix_hex = format!("0x{}", hex::encode(prefix));
        let mut keys = Vec::new();
        let mut start_key: Option<String> = None;

        loop {
            let page: Vec<String> = self
                .rpc
                .request(
                    "state_getKeysPaged",
                    rpc_params![&prefix_hex, KEYS_PAGE_SIZE, &start_key],
                )
                .await?;

            let page_len = page.len();
            start_key = page.last().cloned();

            for key_hex in page {
                let bytes = hex::decode(key_hex.trim_start_matches("0x"))
                    .map_err(|_| ServiceError::Decode("storage key"))?;
                keys.push(bytes);
            }

            if page_len < KEYS_PAGE_SIZE as usize {
                break;
            }
        }

        Ok(keys)
    }

    async fn candidate_state(&self, account_str: &str) -> Result<CollatorState, ServiceError> {
        let account = A::parse(account_str)?;

        let info_key = storage::map_key(storage::PALLET, b"CandidateInfo", &account);
        let top_key = storage::map_key(storage::PALLET, b"TopDelegations", &account);

        let (info, top) = tokio::join!(
            self.fetch_storage::<CandidateMetadata>(&info_key, "CandidateInfo"),
            self.fetch_storage::<Delegations<A>>(&top_key, "TopDelegations"),
        );

        let info = info?.ok_or_else(|| ServiceError::CollatorNotFound(account_str.to_string()))?;
        let top = top?.unwrap_or(Delegations {
            delegations: Vec::new(),
            total: 0,
        });

        Ok(CollatorState {
            account: account.to_display(),
            self_bond: info.bond.to_string(),
            total_counted: info.total_counted.to_string(),
            delegation_count: info.delegation_count,
            lowest_top_delegation_amount: info.lowest_top_delegation_amount.to_string(),
            status: info.status.to_display(),
            top_capacity: info.top_capacity.as_str().to_string(),
            bottom_capacity: info.bottom_capacity.as_str().to_string(),
            top_delegations: top
                .delegations
                .iter()
                .map(|bond| DelegatorBond {
                    account: bond.owner.to_display(),
                    amount: bond.amount.to_string(),
                })
                .collect(),
            top_delegations_total: top.total.to_string(),
        })
    }
}

#[async_trait]
impl<A: ChainAccount> StakingService for SubstrateStakingService<A> {
    fn chain_id(&self) -> &str {
        &self.chain_id
    }

    async fn latest_block_number(&self) -> Result<u64, ServiceError> {
        let header: serde_json::Value =
            self.rpc.request("chain_getHeader", rpc_params![]).await?;

        let number_hex = header
            .get("number")
            .and_then(|v| v.as_str())
            .ok_or(ServiceError::HeaderFieldMissing("number"))?;

        parse_hex_u64(number_hex).ok_or(ServiceError::HeaderFieldMissing("number"))
    }

    async fn current_round_info(&self) -> Result<RoundInfoResponse, ServiceError> {
        let key = storage::value_key(storage::PALLET, b"Round");
        let round: RoundInfo = self
            .fetch_storage(&key, "Round")
            .await?
            .ok_or(ServiceError::StorageMissing("Round"))?;

        Ok(RoundInfoResponse {
            current: round.current,
            first: round.first.to_string(),
            length: round.length,
        })
    }

    async fn max_nominators_per_collator(&self) -> Result<u32, ServiceError> {
        // Runtime constant, mirrored in chain config (no metadata decoding
        // in this service).
        Ok(self.max_nominators_per_collator)
    }

    async fn collator_candidate_pool(&self) -> Result<Vec<CollatorBond>, ServiceError> {
        let key = storage::value_key(storage::PALLET, b"CandidatePool");
        let pool: Vec<Bond<A>> = self
            .fetch_storage(&key, "CandidatePool")
            .await?
            .unwrap_or_default();

        Ok(pool
            .iter()
            .map(|bond| CollatorBond {
                account: bond.owner.to_display(),
                amount: bond.amount.to_string(),
            })
            .collect())
    }

    async fn selected_collators(&self) -> Result<Vec<String>, ServiceError> {
        let key = storage::value_key(storage::PALLET, b"SelectedCandidates");
        let selected: Vec<A> = self
            .fetch_storage(&key, "SelectedCandidates")
            .await?
            .unwrap_or_default();

        Ok(selected.iter().map(|a| a.to_display()).collect())
    }

    async fn collator_state(
        &self,
        request: CollatorsRequest,
    ) -> Result<Vec<CollatorState>, ServiceError> {
        try_join_all(
            request
                .collators
                .iter()
                .map(|account| self.candidate_state(account)),
        )
        .await
    }

    async fn max_collators_per_round(&self) -> Result<u32, ServiceError> {
        let key = storage::value_key(storage::PALLET, b"TotalSelected");
        self.fetch_storage(&key, "TotalSelected")
            .await?
            .ok_or(ServiceError::StorageMissing("TotalSelected"))
    }

    async fn stake_snapshot(
        &self,
        request: StakeSnapshotRequest,
    ) -> Result<StakeSnapshotResponse, ServiceError> {
        let prefix =
            storage::double_map_prefix(storage::PALLET, b"AtStake", &request.round_index);
        let keys = self.fetch_keys(&prefix).await?;

        let mut collators = Vec::with_capacity(keys.len());
        let mut total_staked: u128 = 0;

        for key in keys {
            let account = account_from_key_tail::<A>(&key, prefix.len())
                .ok_or(ServiceError::Decode("AtStake key"))?;

            let snapshot: CollatorSnapshot<A> = self
                .fetch_storage(&key, "AtStake")
                .await?
                .ok_or(ServiceError::StorageMissing("AtStake"))?;

            total_staked = total_staked.saturating_add(snapshot.total);
            collators.push(CollatorStakeSnapshot {
                account: account.to_display(),
                self_bond: snapshot.bond.to_string(),
                nominator_stake: snapshot.total.saturating_sub(snapshot.bond).to_string(),
                total_stake: snapshot.total.to_string(),
                delegation_count: snapshot.delegations.len() as u32,
            });
        }

        Ok(StakeSnapshotResponse {
            round_index: request.round_index,
            total_staked: total_staked.to_string(),
            collators,
        })
    }

    async fn collator_produced_blocks(
        &self,
        request: CollatorProducedBlocksRequest,
    ) -> Result<Vec<ProducedBlocksRecord>, ServiceError> {
        // Checked subtraction; end == u32::MAX must not wrap the span to 0
        // and bypass the cap.
        let diff = request
            .end_round_index
            .checked_sub(request.start_round_index)
            .ok_or_else(|| {
                ServiceError::InvalidRequest(
                    "endRoundIndex must not precede startRoundIndex".to_string(),
                )
            })?;
        if diff >= MAX_ROUND_RANGE {
            return Err(ServiceError::InvalidRequest(format!(
                "round range too large: {} rounds requested, at most {} allowed",
                diff as u64 + 1,
                MAX_ROUND_RANGE
            )));
        }
        let span = diff + 1;

        let account = A::parse(&request.collator)?;

        let mut records = Vec::with_capacity(span as usize);
        for round in request.start_round_index..=request.end_round_index {
            let key =
                storage::double_map_key(storage::PALLET, b"AwardedPts", &round, &account);
            let points: u32 = self.fetch_storage(&key, "AwardedPts").await?.unwrap_or(0);

            records.push(ProducedBlocksRecord {
                round_index: round,
                points,
                produced_blocks: points / POINTS_PER_BLOCK,
            });
        }

        Ok(records)
    }
}

/// Parse a 0x-prefixed hex block number.
fn parse_hex_u64(hex_str: &str) -> Option<u64> {
    u64::from_str_radix(hex_str.strip_prefix("0x").unwrap_or(hex_str), 16).ok()
}

fn decode_storage_value<T: Decode>(hex_value: &str, item: &'static str) -> Result<T, ServiceError> {
    let bytes =
        hex::decode(hex_value.trim_start_matches("0x")).map_err(|_| ServiceError::Decode(item))?;
    T::decode(&mut &bytes[..]).map_err(|_| ServiceError::Decode(item))
}

/// Recover the second map key of a double map entry from the raw storage key.
/// The tail after the prefix is twox64concat: an 8-byte hash followed by the
/// SCALE-encoded account.
fn account_from_key_tail<A: ChainAccount>(key: &[u8], prefix_len: usize) -> Option<A> {
    let tail = key.get(prefix_len + 8..)?;
    A::decode(&mut &tail[..]).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::account::AccountId20;
    use parity_scale_codec::Encode;

    #[test]
    fn parses_hex_block_numbers() {
        assert_eq!(parse_hex_u64("0x10"), Some(16));
        assert_eq!(parse_hex_u64("0x0"), Some(0));
        assert_eq!(parse_hex_u64("ff"), Some(255));
        assert_eq!(parse_hex_u64("0xzz"), None);
    }

    #[test]
    fn decodes_storage_hex() {
        let round = RoundInfo {
            current: 5,
            first: 1500,
            length: 300,
        };
        let hex_value = format!("0x{}", hex::encode(round.encode()));

        let decoded: RoundInfo = decode_storage_value(&hex_value, "Round").unwrap();
        assert_eq!(decoded, round);
    }

    #[test]
    fn decode_rejects_truncated_values() {
        let result: Result<RoundInfo, _> = decode_storage_value("0x0102", "Round");
        assert!(matches!(result, Err(ServiceError::Decode("Round"))));
    }

    #[test]
    fn recovers_account_from_double_map_key() {
        let round: u32 = 7;
        let account = AccountId20([3u8; 20]);

        let prefix = storage::double_map_prefix(storage::PALLET, b"AtStake", &round);
        let key = storage::double_map_key(storage::PALLET, b"AtStake", &round, &account);

        let recovered: AccountId20 = account_from_key_tail(&key, prefix.len()).unwrap();
        assert_eq!(recovered, account);
    }

    #[test]
    fn key_tail_too_short_is_none() {
        let key = vec![0u8; 10];
        assert!(account_from_key_tail::<AccountId20>(&key, 8).is_none());
    }

    mod rpc {
        use super::*;
        use subxt_rpcs::client::mock_rpc_client::Json as MockJson;
        use subxt_rpcs::client::{MockRpcClient, RpcClient};

        fn service(mock_client: MockRpcClient) -> SubstrateStakingService<AccountId20> {
            SubstrateStakingService::with_client("moonriver", RpcClient::new(mock_client), 300)
        }

        fn storage_hex<T: Encode>(value: &T) -> String {
            format!("0x{}", hex::encode(value.encode()))
        }

        #[tokio::test]
        async fn latest_block_number_parses_header() {
            let mock_client = MockRpcClient::builder()
                .method_handler("chain_getHeader", async |_params| {
                    MockJson(serde_json::json!({
                        "number": "0x10",
                        "parentHash": "0x00"
                    }))
                })
                .build();

            let number = service(mock_client).latest_block_number().await.unwrap();
            assert_eq!(number, 16);
        }

        #[tokio::test]
        async fn current_round_info_decodes_round_storage() {
            let round = RoundInfo {
                current: 900,
                first: 270_000,
                length: 300,
            };
            let encoded = storage_hex(&round);
            let mock_client = MockRpcClient::builder()
                .method_handler("state_getStorage", move |_params| {
                    let encoded = encoded.clone();
                    async move { MockJson(serde_json::json!(encoded)) }
                })
                .build();

            let info = service(mock_client).current_round_info().await.unwrap();
            assert_eq!(info.current, 900);
            assert_eq!(info.first, "270000");
            assert_eq!(info.length, 300);
        }

        #[tokio::test]
        async fn produced_blocks_derive_from_awarded_points() {
            let points: u32 = 60;
            let encoded = storage_hex(&points);
            let mock_client = MockRpcClient::builder()
                .method_handler("state_getStorage", move |_params| {
                    let encoded = encoded.clone();
                    async move { MockJson(serde_json::json!(encoded)) }
                })
                .build();

            let records = service(mock_client)
                .collator_produced_blocks(CollatorProducedBlocksRequest {
                    chain_id: "moonriver".to_string(),
                    collator: "0x3b939fead1557c741ff06492fd0127bd287a421e".to_string(),
                    start_round_index: 10,
                    end_round_index: 12,
                })
                .await
                .unwrap();

            assert_eq!(records.len(), 3);
            assert_eq!(records[0].round_index, 10);
            assert_eq!(records[0].points, 60);
            assert_eq!(records[0].produced_blocks, 3);
        }

        #[tokio::test]
        async fn inverted_round_range_is_rejected_before_any_rpc() {
            let mock_client = MockRpcClient::builder().build();

            let result = service(mock_client)
                .collator_produced_blocks(CollatorProducedBlocksRequest {
                    chain_id: "moonriver".to_string(),
                    collator: "0x3b939fead1557c741ff06492fd0127bd287a421e".to_string(),
                    start_round_index: 12,
                    end_round_index: 10,
                })
                .await;

            assert!(matches!(result, Err(ServiceError::InvalidRequest(_))));
        }

        #[tokio::test]
        async fn round_range_to_u32_max_is_rejected_without_overflow() {
            let mock_client = MockRpcClient::builder().build();

            let result = service(mock_client)
                .collator_produced_blocks(CollatorProducedBlocksRequest {
                    chain_id: "moonriver".to_string(),
                    collator: "0x3b939fead1557c741ff06492fd0127bd287a421e".to_string(),
                    start_round_index: 0,
                    end_round_index: u32::MAX,
                })
                .await;

            assert!(matches!(result, Err(ServiceError::InvalidRequest(_))));
        }

        #[tokio::test]
        async fn round_range_over_limit_is_rejected() {
            let mock_client = MockRpcClient::builder().build();

            let result = service(mock_client)
                .collator_produced_blocks(CollatorProducedBlocksRequest {
                    chain_id: "moonriver".to_string(),
                    collator: "0x3b939fead1557c741ff06492fd0127bd287a421e".to_string(),
                    start_round_index: 0,
                    end_round_index: MAX_ROUND_RANGE,
                })
                .await;

            assert!(matches!(result, Err(ServiceError::InvalidRequest(_))));
        }

        #[tokio::test]
        async fn missing_candidate_info_maps_to_not_found() {
            let mock_client = MockRpcClient::builder()
                .method_handler("state_getStorage", async |_params| {
                    MockJson(serde_json::Value::Null)
                })
                .build();

            let result = service(mock_client)
                .collator_state(CollatorsRequest {
                    chain_id: "moonriver".to_string(),
                    collators: vec!["0x3b939fead1557c741ff06492fd0127bd287a421e".to_string()],
                })
                .await;

            assert!(matches!(result, Err(ServiceError::CollatorNotFound(_))));
        }
    }
}
