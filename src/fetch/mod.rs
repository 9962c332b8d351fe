//! Statistic fetchers: one per tool, all following the same template.
//!
//! Each fetcher normalizes the team name, defaults the year to the
//! current season, probes its cache, queries the CFBD endpoint on a miss,
//! and reshapes the raw records into the tool's result shape. Upstream
//! errors and empty result sets both come back as [`FetchResult::Failure`]
//! values; fetchers never return `Err` to the dispatcher.

use chrono::Datelike;
use serde::Serialize;

use crate::cache::StatsCache;
use crate::cfbd::CfbdClient;

pub mod game_stats;
pub mod player_stats;
pub mod records;
pub mod recruiting;
pub mod roster;
pub mod talent;
pub mod team_stats;

pub use game_stats::{fetch_game_stats, GameStatsData, GameSummary};
pub use player_stats::{fetch_player_stats, PlayerStatsData, PlayerSummary};
pub use records::{fetch_team_records, RecordsData};
pub use recruiting::{
    fetch_recruiting_rankings, fetch_recruits, RecruitSummary, RecruitingRankData, RecruitsData,
};
pub use roster::{fetch_roster, RosterData, RosterEntry, RosterPlayerSummary};
pub use talent::{fetch_talent_rating, TalentData};
pub use team_stats::{fetch_team_stats, TeamStatsData};


/// Shared resources every fetcher needs: the upstream client and the
/// per-kind response caches.
pub struct FetchContext {
    pub client: CfbdClient,
    pub cache: StatsCache,
}

impl FetchContext {
    pub fn new(client: CfbdClient) -> Self {
        Self {
            client,
            cache: StatsCache::new(),
        }
    }

    pub fn with_cache(client: CfbdClient, cache: StatsCache) -> Self {
        Self { client, cache }
    }
}

/// The season year used when a caller omits `year`. Applied exactly once,
/// at the fetcher boundary.
pub fn current_year() -> u16 {
    chrono::Utc::now().year() as u16
}

/// Outcome of a statistic lookup, in the wire shape callers expect:
/// `{"success":true,"team":...,"year":...,<kind fields>}` or
/// `{"success":false,"team":...,"year":...,"message":...}`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum FetchResult<T> {
    Success(FetchSuccess<T>),
    Failure(FetchFailure),
}

#[derive(Debug, Clone, Serialize)]
pub struct FetchSuccess<T> {
    pub success: bool,
    pub team: String,
    pub year: u16,
    #[serde(flatten)]
    pub data: T,
}

#[derive(Debug, Clone, Serialize)]
pub struct FetchFailure {
    pub success: bool,
    pub team: String,
    pub year: u16,
    pub message: String,
}

impl<T> FetchResult<T> {
    pub fn success(team: impl Into<String>, year: u16, data: T) -> Self {
        FetchResult::Success(FetchSuccess {
            success: true,
            team: team.into(),
            year,
            data,
        })
    }

    pub fn failure(team: impl Into<String>, year: u16, message: impl Into<String>) -> Self {
        FetchResult::Failure(FetchFailure {
            success: false,
            team: team.into(),
            year,
            message: message.into(),
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FetchResult::Success(_))
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            FetchResult::Success(_) => None,
            FetchResult::Failure(f) => Some(&f.message),
        }
    }
}
