//! CFBD Statistics Tool Server
//!
//! A JSON-RPC tool server exposing college-football statistics lookups
//! backed by the CollegeFootballData.com API: player stats, team stats,
//! game logs, recruiting data, roster, records, and talent ratings.
//!
//! ## Architecture
//!
//! - **Team normalizer** ([`teams`]): maps nicknames ("OU", "Sooners") to
//!   canonical school names before any query is built.
//! - **Response cache** ([`cache`]): a five-minute TTL cache per
//!   statistic kind, keyed by the normalized query.
//! - **Upstream client** ([`cfbd`]): authenticated, timeout-bounded GET
//!   requests against the CFBD REST API, parsed into typed records.
//! - **Fetchers** ([`fetch`]): one per tool; compose the three pieces
//!   above and reshape raw records into the tool's result. Lookup
//!   failures are data (`"success": false`), never errors.
//! - **Dispatcher** ([`mcp`]): routes `tools/list` and `tools/call` onto
//!   the fetchers and wraps results in the protocol envelope.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use cfbd_stats::{CfbdClient, ToolDispatcher};
//! use serde_json::json;
//!
//! # async fn example() -> cfbd_stats::Result<()> {
//! let dispatcher = ToolDispatcher::new(CfbdClient::from_env()?);
//! let result = dispatcher
//!     .call_tool("get_team_records", json!({"team": "Sooners", "year": 2024}))
//!     .await?;
//! # let _ = result;
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! Set `CFBD_API_KEY` to your CollegeFootballData.com bearer token:
//! ```bash
//! export CFBD_API_KEY=...
//! ```

pub mod cache;
pub mod cfbd;
pub mod error;
pub mod fetch;
pub mod mcp;
pub mod teams;

// Re-export commonly used types
pub use cache::{StatsCache, TtlCache, CACHE_TTL};
pub use cfbd::{CfbdClient, API_KEY_ENV_VAR, CFBD_BASE_URL};
pub use error::{CfbdError, Result};
pub use fetch::{FetchContext, FetchResult};
pub use mcp::ToolDispatcher;
pub use teams::normalize_team;
