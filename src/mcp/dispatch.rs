//! Maps tool calls onto fetchers and speaks the JSON-RPC method surface.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cache::StatsCache;
use crate::cfbd::CfbdClient;
use crate::error::{CfbdError, Result};
use crate::fetch::{
    fetch_game_stats, fetch_player_stats, fetch_recruiting_rankings, fetch_recruits,
    fetch_roster, fetch_talent_rating, fetch_team_records, fetch_team_stats, FetchContext,
    FetchResult,
};
use crate::mcp::protocol::{
    CallToolParams, CallToolResult, InitializeResult, JsonRpcError, JsonRpcRequest,
    JsonRpcResponse, ListToolsResult, ToolContent,
};
use crate::mcp::schema::tool_schemas;

#[cfg(test)]
mod tests;

#[derive(Debug, Deserialize)]
struct TeamArgs {
    team: String,
    year: Option<u16>,
}

#[derive(Debug, Deserialize)]
struct PlayerStatsArgs {
    team: String,
    year: Option<u16>,
    category: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RecruitsArgs {
    team: String,
    year: Option<u16>,
    position: Option<String>,
}

/// Routes tool invocations to the matching fetcher.
///
/// Owns the upstream client and the response caches; one dispatcher is
/// shared across all in-flight requests.
pub struct ToolDispatcher {
    ctx: FetchContext,
}

impl ToolDispatcher {
    pub fn new(client: CfbdClient) -> Self {
        Self {
            ctx: FetchContext::new(client),
        }
    }

    /// Construct with an explicit cache (tests inject short TTLs here).
    pub fn with_cache(client: CfbdClient, cache: StatsCache) -> Self {
        Self {
            ctx: FetchContext::with_cache(client, cache),
        }
    }

    /// The static tool catalog.
    pub fn list_tools(&self) -> ListToolsResult {
        ListToolsResult {
            tools: tool_schemas(),
        }
    }

    /// Invoke the named tool. Lookup failures come back as a successful
    /// call whose payload says `"success": false`; only a bad tool name
    /// or unusable arguments are dispatch errors.
    pub async fn call_tool(&self, name: &str, arguments: Value) -> Result<CallToolResult> {
        tracing::info!(tool = name, "tool called");

        let text = match name {
            "get_player_stats" => {
                let args: PlayerStatsArgs = parse_args(arguments)?;
                let result =
                    fetch_player_stats(&self.ctx, &args.team, args.year, args.category.as_deref())
                        .await;
                to_text(&result)?
            }
            "get_team_stats" => {
                let args: TeamArgs = parse_args(arguments)?;
                to_text(&fetch_team_stats(&self.ctx, &args.team, args.year).await)?
            }
            "get_game_stats" => {
                let args: TeamArgs = parse_args(arguments)?;
                to_text(&fetch_game_stats(&self.ctx, &args.team, args.year).await)?
            }
            "get_recruiting_rankings" => {
                let args: TeamArgs = parse_args(arguments)?;
                to_text(&fetch_recruiting_rankings(&self.ctx, &args.team, args.year).await)?
            }
            "get_recruits" => {
                let args: RecruitsArgs = parse_args(arguments)?;
                let result =
                    fetch_recruits(&self.ctx, &args.team, args.year, args.position.as_deref())
                        .await;
                to_text(&result)?
            }
            "get_talent_rating" => {
                let args: TeamArgs = parse_args(arguments)?;
                to_text(&fetch_talent_rating(&self.ctx, &args.team, args.year).await)?
            }
            "get_team_records" => {
                let args: TeamArgs = parse_args(arguments)?;
                to_text(&fetch_team_records(&self.ctx, &args.team, args.year).await)?
            }
            "get_roster" => {
                let args: TeamArgs = parse_args(arguments)?;
                to_text(&fetch_roster(&self.ctx, &args.team, args.year).await)?
            }
            _ => {
                return Err(CfbdError::UnknownTool {
                    name: name.to_string(),
                })
            }
        };

        Ok(CallToolResult {
            content: vec![ToolContent::text(text)],
        })
    }

    /// Route one JSON-RPC request. Notifications return `None`.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.is_notification() {
            return None;
        }
        let id = request.id.clone().unwrap_or(Value::Null);

        let response = match request.method.as_str() {
            "initialize" => JsonRpcResponse::success(id, InitializeResult::default()),
            "tools/list" => JsonRpcResponse::success(id, self.list_tools()),
            "tools/call" => {
                let params: CallToolParams =
                    match serde_json::from_value(request.params.unwrap_or(Value::Null)) {
                        Ok(params) => params,
                        Err(e) => {
                            return Some(JsonRpcResponse::error(
                                id,
                                JsonRpcError::invalid_params(e.to_string()),
                            ))
                        }
                    };

                match self.call_tool(&params.name, params.arguments).await {
                    Ok(result) => JsonRpcResponse::success(id, result),
                    Err(CfbdError::UnknownTool { name }) => {
                        JsonRpcResponse::error(id, JsonRpcError::unknown_tool(&name))
                    }
                    Err(CfbdError::InvalidArguments { message }) => {
                        JsonRpcResponse::error(id, JsonRpcError::invalid_params(message))
                    }
                    Err(e) => JsonRpcResponse::error(id, JsonRpcError::internal_error(e.to_string())),
                }
            }
            method => JsonRpcResponse::error(id, JsonRpcError::method_not_found(method)),
        };

        Some(response)
    }
}

fn parse_args<T: DeserializeOwned>(arguments: Value) -> Result<T> {
    serde_json::from_value(arguments).map_err(|e| CfbdError::InvalidArguments {
        message: e.to_string(),
    })
}

fn to_text<T: Serialize>(result: &FetchResult<T>) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}
