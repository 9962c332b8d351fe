//! Tool protocol surface: JSON-RPC envelope types, the static tool
//! catalog, and the dispatcher that routes tool calls to fetchers.

pub mod dispatch;
pub mod protocol;
pub mod schema;

pub use dispatch::ToolDispatcher;
pub use protocol::{
    CallToolParams, CallToolResult, JsonRpcError, JsonRpcRequest, JsonRpcResponse,
    ListToolsResult, ToolContent, ToolSchema,
};
