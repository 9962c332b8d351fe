//! Unit tests for tool dispatch (no network; only paths that fail before
//! reaching the upstream client)

use serde_json::json;

use super::*;

fn dispatcher() -> ToolDispatcher {
    let client = CfbdClient::new("test-key").unwrap();
    ToolDispatcher::new(client)
}

#[tokio::test]
async fn test_unknown_tool_is_an_error() {
    let result = dispatcher()
        .call_tool("get_weather", json!({"team": "Oklahoma"}))
        .await;

    match result {
        Err(CfbdError::UnknownTool { name }) => assert_eq!(name, "get_weather"),
        other => panic!("Expected UnknownTool, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_missing_team_is_invalid_arguments() {
    let result = dispatcher()
        .call_tool("get_roster", json!({"year": 2024}))
        .await;

    match result {
        Err(CfbdError::InvalidArguments { message }) => {
            assert!(message.contains("team"), "message was: {}", message);
        }
        other => panic!("Expected InvalidArguments, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_wrong_argument_type_is_invalid_arguments() {
    let result = dispatcher()
        .call_tool("get_team_stats", json!({"team": "Oklahoma", "year": "twenty"}))
        .await;

    assert!(matches!(result, Err(CfbdError::InvalidArguments { .. })));
}

#[test]
fn test_list_tools_matches_catalog() {
    let tools = dispatcher().list_tools().tools;
    assert_eq!(tools.len(), 8);
    assert!(tools.iter().any(|t| t.name == "get_talent_rating"));
}

#[tokio::test]
async fn test_handle_request_unknown_method() {
    let request: JsonRpcRequest = serde_json::from_value(json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "resources/list",
    }))
    .unwrap();

    let response = dispatcher().handle_request(request).await.unwrap();
    let error = response.error.unwrap();
    assert_eq!(error.code, -32601);
    assert!(error.message.contains("resources/list"));
}

#[tokio::test]
async fn test_handle_request_unknown_tool_code() {
    let request: JsonRpcRequest = serde_json::from_value(json!({
        "jsonrpc": "2.0",
        "id": 2,
        "method": "tools/call",
        "params": {"name": "get_weather", "arguments": {"team": "Oklahoma"}},
    }))
    .unwrap();

    let response = dispatcher().handle_request(request).await.unwrap();
    assert_eq!(response.error.unwrap().code, -32601);
}

#[tokio::test]
async fn test_handle_request_missing_team_code() {
    let request: JsonRpcRequest = serde_json::from_value(json!({
        "jsonrpc": "2.0",
        "id": 3,
        "method": "tools/call",
        "params": {"name": "get_roster", "arguments": {}},
    }))
    .unwrap();

    let response = dispatcher().handle_request(request).await.unwrap();
    assert_eq!(response.error.unwrap().code, -32602);
}

#[tokio::test]
async fn test_handle_request_initialize() {
    let request: JsonRpcRequest = serde_json::from_value(json!({
        "jsonrpc": "2.0",
        "id": 4,
        "method": "initialize",
        "params": {"protocolVersion": "2024-11-05", "capabilities": {}},
    }))
    .unwrap();

    let response = dispatcher().handle_request(request).await.unwrap();
    let result = response.result.unwrap();
    assert_eq!(result["serverInfo"]["name"], "cfbd-stats");
}

#[tokio::test]
async fn test_handle_request_tools_list() {
    let request: JsonRpcRequest = serde_json::from_value(json!({
        "jsonrpc": "2.0",
        "id": 5,
        "method": "tools/list",
    }))
    .unwrap();

    let response = dispatcher().handle_request(request).await.unwrap();
    let tools = response.result.unwrap()["tools"].as_array().unwrap().len();
    assert_eq!(tools, 8);
}

#[tokio::test]
async fn test_notifications_get_no_response() {
    let request: JsonRpcRequest = serde_json::from_value(json!({
        "jsonrpc": "2.0",
        "method": "notifications/initialized",
    }))
    .unwrap();

    assert!(dispatcher().handle_request(request).await.is_none());
}
