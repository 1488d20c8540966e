//! End-to-end routing tests: requests resolve the per-chain service by
//! `chainId` and are forwarded to it unchanged; unknown chains are rejected
//! before any service call.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{get, post, test_app};

#[tokio::test]
async fn unknown_chain_returns_400_without_service_call() {
    let (app, calls) = test_app("moonriver");

    let (status, body) = get(app, "/parachain/staking/getLatestBlockNumber?chainId=acala").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "not supported chain network: acala");
    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_chain_in_post_body_returns_400_without_service_call() {
    let (app, calls) = test_app("moonriver");

    let (status, body) = post(
        app,
        "/parachain/staking/getCollatorReward",
        &json!({
            "chainId": "kusama",
            "collator": "0x0101010101010101010101010101010101010101",
            "startRoundIndex": 10,
            "endRoundIndex": 12
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "not supported chain network: kusama");
    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn known_chain_get_is_dispatched() {
    let (app, calls) = test_app("moonriver");

    let (status, body) =
        get(app, "/parachain/staking/getLatestBlockNumber?chainId=moonriver").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(4242));

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "latest_block_number");
}

#[tokio::test]
async fn round_info_is_serialized_camel_case() {
    let (app, _) = test_app("moonriver");

    let (status, body) =
        get(app, "/parachain/staking/getCurrentRoundInfo?chainId=moonriver").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"current": 900, "first": "270000", "length": 300}));
}

#[tokio::test]
async fn post_body_is_forwarded_verbatim() {
    let (app, calls) = test_app("moonriver");

    let request = json!({
        "chainId": "moonriver",
        "collator": "0x0101010101010101010101010101010101010101",
        "startRoundIndex": 100,
        "endRoundIndex": 110
    });
    let (status, body) = post(app, "/parachain/staking/getCollatorReward", &request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["collator"], request["collator"]);
    assert_eq!(body["totalReward"], "123456");

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "collator_reward");
    assert_eq!(calls[0].1, request);
}

#[tokio::test]
async fn snapshot_request_reaches_service_with_round_index() {
    let (app, calls) = test_app("moonriver");

    let (status, body) = post(
        app,
        "/parachain/staking/atStake",
        &json!({"chainId": "moonriver", "roundIndex": 812}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["roundIndex"], 812);

    let calls = calls.lock().unwrap();
    assert_eq!(calls[0].1["roundIndex"], 812);
}

#[tokio::test]
async fn history_route_without_indexer_returns_501() {
    let (app, _) = test_app("moonriver");

    let (status, body) = post(
        app,
        "/parachain/staking/getDelegatorRewardHistory",
        &json!({"chainId": "moonriver", "delegator": "0x0202020202020202020202020202020202020202"}),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
    assert_eq!(body["error"], "history queries require an indexer backend");
}

#[tokio::test]
async fn malformed_query_returns_json_error() {
    let (app, calls) = test_app("moonriver");

    let (status, body) =
        get(app, "/parachain/staking/getLatestBlockNumber?chainId=moonriver&bogus=1").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("error").is_some());
    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn incomplete_body_returns_json_400() {
    let (app, calls) = test_app("moonriver");

    let (status, body) = post(
        app,
        "/parachain/staking/atStake",
        &json!({"chainId": "moonriver"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error_msg = body["error"].as_str().unwrap();
    assert!(
        error_msg.contains("roundIndex"),
        "Error should name the missing field, got: {error_msg}"
    );
    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn health_reports_connected_chains() {
    let (app, _) = test_app("moonriver");

    let (status, body) = get(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["connectedChains"], 1);
}

#[tokio::test]
async fn root_lists_staking_routes_and_chains() {
    let (app, _) = test_app("moonriver");

    let (status, body) = get(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["chains"], json!(["moonriver"]));
    let routes = body["routes"].as_array().unwrap();
    assert!(
        routes
            .iter()
            .any(|r| r["path"] == "/parachain/staking/getCurrentRoundInfo")
    );
}
