//! Shared test plumbing: a recording mock staking service and request
//! helpers driving the router with `tower::ServiceExt::oneshot`.

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU64, Ordering},
};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use config::StakingApiConfig;
use http_body_util::BodyExt;
use tower::ServiceExt;

use parachain_staking_api::app::create_app;
use parachain_staking_api::services::{ServiceError, ServiceRegistry, StakingService};
use parachain_staking_api::state::AppState;
use parachain_staking_api::types::*;

/// A call that reached the mock service: method name plus the forwarded
/// request serialized to JSON.
pub type RecordedCall = (String, serde_json::Value);

/// Mock staking service that records every call and answers with canned
/// values. History methods other than `collator_reward` keep the trait
/// defaults so the 501 path stays reachable.
pub struct MockStakingService {
    chain_id: String,
    pub calls: Arc<Mutex<Vec<RecordedCall>>>,
    counter: AtomicU64,
}

impl MockStakingService {
    pub fn new(chain_id: &str) -> Self {
        Self {
            chain_id: chain_id.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            counter: AtomicU64::new(0),
        }
    }

    fn record<R: serde::Serialize>(&self, method: &str, request: &R) {
        self.calls
            .lock()
            .unwrap()
            .push((method.to_string(), serde_json::to_value(request).unwrap()));
    }

    fn record_plain(&self, method: &str) {
        self.calls
            .lock()
            .unwrap()
            .push((method.to_string(), serde_json::Value::Null));
    }
}

#[async_trait]
impl StakingService for MockStakingService {
    fn chain_id(&self) -> &str {
        &self.chain_id
    }

    async fn latest_block_number(&self) -> Result<u64, ServiceError> {
        self.record_plain("latest_block_number");
        Ok(4242)
    }

    async fn current_round_info(&self) -> Result<RoundInfoResponse, ServiceError> {
        self.record_plain("current_round_info");
        Ok(RoundInfoResponse {
            current: 900,
            first: "270000".to_string(),
            length: 300,
        })
    }

    async fn max_nominators_per_collator(&self) -> Result<u32, ServiceError> {
        self.record_plain("max_nominators_per_collator");
        Ok(300)
    }

    async fn collator_candidate_pool(&self) -> Result<Vec<CollatorBond>, ServiceError> {
        self.record_plain("collator_candidate_pool");
        Ok(vec![CollatorBond {
            account: "0x0101010101010101010101010101010101010101".to_string(),
            amount: "1000000".to_string(),
        }])
    }

    async fn selected_collators(&self) -> Result<Vec<String>, ServiceError> {
        self.record_plain("selected_collators");
        Ok(vec![
            "0x0101010101010101010101010101010101010101".to_string(),
        ])
    }

    async fn collator_state(
        &self,
        request: CollatorsRequest,
    ) -> Result<Vec<CollatorState>, ServiceError> {
        self.record("collator_state", &request);
        Ok(vec![])
    }

    /// Cached route; increments per real invocation so tests can see
    /// whether the handler ran or the cache answered.
    async fn max_collators_per_round(&self) -> Result<u32, ServiceError> {
        self.record_plain("max_collators_per_round");
        Ok(self.counter.fetch_add(1, Ordering::SeqCst) as u32 + 1)
    }

    async fn stake_snapshot(
        &self,
        request: StakeSnapshotRequest,
    ) -> Result<StakeSnapshotResponse, ServiceError> {
        self.record("stake_snapshot", &request);
        Ok(StakeSnapshotResponse {
            round_index: request.round_index,
            total_staked: "5000".to_string(),
            collators: vec![],
        })
    }

    async fn collator_produced_blocks(
        &self,
        request: CollatorProducedBlocksRequest,
    ) -> Result<Vec<ProducedBlocksRecord>, ServiceError> {
        self.record("collator_produced_blocks", &request);
        Ok(vec![ProducedBlocksRecord {
            round_index: request.start_round_index,
            points: 40,
            produced_blocks: 2,
        }])
    }

    async fn collator_reward(
        &self,
        request: CollatorRewardRequest,
    ) -> Result<CollatorRewardResponse, ServiceError> {
        self.record("collator_reward", &request);
        Ok(CollatorRewardResponse {
            collator: request.collator.clone(),
            start_round_index: request.start_round_index,
            end_round_index: request.end_round_index,
            total_reward: "123456".to_string(),
            rounds: vec![],
        })
    }
}

/// Router over a single registered mock chain; returns the app and the mock's
/// call log.
pub fn test_app(chain_id: &str) -> (Router, Arc<Mutex<Vec<RecordedCall>>>) {
    let mock = MockStakingService::new(chain_id);
    let calls = mock.calls.clone();

    let registry = ServiceRegistry::builder().register(Arc::new(mock)).build();
    let state = AppState::with_services(StakingApiConfig::default(), registry);

    (create_app(state), calls)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

pub async fn post(app: Router, uri: &str, body: &serde_json::Value) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}
