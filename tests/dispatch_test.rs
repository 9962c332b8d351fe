//! Integration tests for the dispatcher and protocol envelope.

use std::time::Duration;

use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use cfbd_stats::mcp::protocol::JsonRpcRequest;
use cfbd_stats::{CfbdClient, StatsCache, ToolDispatcher};

async fn mock_upstream(body: String, hits: usize) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
        body.len(),
        body
    );

    tokio::spawn(async move {
        for _ in 0..hits {
            let (mut socket, _) = match listener.accept().await {
                Ok(conn) => conn,
                Err(_) => return,
            };
            let mut buf = [0u8; 8192];
            let _ = socket.read(&mut buf).await;
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{}", addr)
}

fn request(value: serde_json::Value) -> JsonRpcRequest {
    serde_json::from_value(value).unwrap()
}

#[tokio::test]
async fn test_tool_call_round_trip() {
    let body = json!([
        {"year": 2024, "school": "Georgia", "talent": 975.0},
        {"year": 2024, "school": "Oklahoma", "talent": 920.0},
    ])
    .to_string();
    let base = mock_upstream(body, 1).await;
    let dispatcher = ToolDispatcher::new(CfbdClient::with_base_url("test-key", base).unwrap());

    let response = dispatcher
        .handle_request(request(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "tools/call",
            "params": {"name": "get_talent_rating", "arguments": {"team": "sooners", "year": 2024}},
        })))
        .await
        .unwrap();

    assert!(response.error.is_none());
    let result = response.result.unwrap();
    let text = result["content"][0]["text"].as_str().unwrap();

    // The content is the pretty-printed fetch result.
    let payload: serde_json::Value = serde_json::from_str(text).unwrap();
    assert_eq!(payload["success"], true);
    assert_eq!(payload["team"], "Oklahoma");
    assert_eq!(payload["national_rank"], 2);
}

#[tokio::test]
async fn test_fetch_failure_is_still_a_successful_dispatch() {
    let base = mock_upstream("[]".to_string(), 1).await;
    let dispatcher = ToolDispatcher::new(CfbdClient::with_base_url("test-key", base).unwrap());

    let response = dispatcher
        .handle_request(request(json!({
            "jsonrpc": "2.0",
            "id": 2,
            "method": "tools/call",
            "params": {"name": "get_team_stats", "arguments": {"team": "Oklahoma", "year": 2024}},
        })))
        .await
        .unwrap();

    // Lookup failures travel as data, not as protocol errors.
    assert!(response.error.is_none());
    let result = response.result.unwrap();
    let text = result["content"][0]["text"].as_str().unwrap();
    let payload: serde_json::Value = serde_json::from_str(text).unwrap();
    assert_eq!(payload["success"], false);
    assert!(payload["message"].as_str().unwrap().contains("Oklahoma"));
}

#[tokio::test]
async fn test_zero_ttl_cache_forces_refetch() {
    let body = json!([{"year": 2024, "team": "Oklahoma", "total": {"wins": 10, "losses": 3}}])
        .to_string();
    // One upstream hit only: with an already-expired cache the second
    // call must go back upstream, find the socket gone, and fail.
    let base = mock_upstream(body, 1).await;
    let dispatcher = ToolDispatcher::with_cache(
        CfbdClient::with_base_url("test-key", base).unwrap(),
        StatsCache::with_ttl(Duration::ZERO),
    );

    let call = json!({
        "jsonrpc": "2.0",
        "id": 3,
        "method": "tools/call",
        "params": {"name": "get_team_records", "arguments": {"team": "Oklahoma", "year": 2024}},
    });

    let first = dispatcher.handle_request(request(call.clone())).await.unwrap();
    let text = first.result.unwrap()["content"][0]["text"]
        .as_str()
        .unwrap()
        .to_string();
    let payload: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(payload["success"], true);

    let second = dispatcher.handle_request(request(call)).await.unwrap();
    let text = second.result.unwrap()["content"][0]["text"]
        .as_str()
        .unwrap()
        .to_string();
    let payload: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(payload["success"], false, "expired entry must not be served");
}

#[tokio::test]
async fn test_tools_list_needs_no_upstream() {
    // Point at a port nobody listens on; tools/list is static data.
    let dispatcher = ToolDispatcher::new(
        CfbdClient::with_base_url("test-key", "http://127.0.0.1:9").unwrap(),
    );

    let response = dispatcher
        .handle_request(request(json!({
            "jsonrpc": "2.0",
            "id": 4,
            "method": "tools/list",
        })))
        .await
        .unwrap();

    let tools = response.result.unwrap()["tools"].as_array().unwrap().len();
    assert_eq!(tools, 8);
}

#[tokio::test]
async fn test_concurrent_calls_for_different_teams() {
    let body = json!([{"year": 2024, "team": "X", "total": {"wins": 1, "losses": 0}}]).to_string();
    let base = mock_upstream(body, 2).await;
    let dispatcher = std::sync::Arc::new(ToolDispatcher::new(
        CfbdClient::with_base_url("test-key", base).unwrap(),
    ));

    let call = |id: u32, team: &str| {
        request(json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": "tools/call",
            "params": {"name": "get_team_records", "arguments": {"team": team, "year": 2024}},
        }))
    };

    let a = tokio::spawn({
        let dispatcher = dispatcher.clone();
        let req = call(5, "Oklahoma");
        async move { dispatcher.handle_request(req).await }
    });
    let b = tokio::spawn({
        let dispatcher = dispatcher.clone();
        let req = call(6, "Texas");
        async move { dispatcher.handle_request(req).await }
    });

    for handle in [a, b] {
        let response = handle.await.unwrap().unwrap();
        assert!(response.error.is_none());
    }
}
