//! Typed records for the CFBD endpoints this server queries.
//!
//! The upstream responses are JSON arrays of loosely-specified objects.
//! Each record type here names only the fields the reshaping rules rely
//! on, defaults anything the API may omit, and keeps genuinely free-form
//! values (`stat`, per-game stat blobs) as `serde_json::Value`.

use serde::{Deserialize, Serialize};
use serde_json::Value;


/// One stat line from `/stats/player/season` (one row per player, category
/// and stat type).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSeasonStat {
    #[serde(default)]
    pub season: Option<u16>,
    #[serde(rename = "playerId", default)]
    pub player_id: Option<Value>,
    #[serde(default)]
    pub player: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub conference: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(rename = "statType", default)]
    pub stat_type: Option<String>,
    #[serde(default)]
    pub stat: Option<Value>,
}

/// One row from `/stats/season`. For a single team/year query CFBD
/// returns a one-element array; the fetcher unwraps it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamSeasonStats {
    #[serde(default)]
    pub season: Option<u16>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub conference: Option<String>,
    #[serde(flatten)]
    pub stats: Value,
}

/// One game from `/games/teams`. Points are absent for games that have
/// not been played yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamGame {
    #[serde(default)]
    pub week: Option<u16>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub home_team: String,
    #[serde(default)]
    pub away_team: String,
    #[serde(default)]
    pub home_points: Option<i64>,
    #[serde(default)]
    pub away_points: Option<i64>,
    #[serde(default)]
    pub stats: Value,
}

/// One row from `/recruiting/teams` (class rank for a team/year).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRecruitingRank {
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub points: Option<Value>,
}

/// One recruit from `/recruiting/players`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recruit {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(rename = "stateProvince", default)]
    pub state_province: Option<String>,
    #[serde(default)]
    pub school: Option<String>,
    #[serde(default)]
    pub stars: Option<u8>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub ranking: Option<u32>,
    #[serde(rename = "positionRanking", default)]
    pub position_ranking: Option<u32>,
    #[serde(rename = "stateRanking", default)]
    pub state_ranking: Option<u32>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub weight: Option<f64>,
}

/// One row from `/talent` (roster talent composite for one school).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamTalent {
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub talent: f64,
}

/// Win/loss/tie triple inside a `/records` row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordSplit {
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub ties: u32,
}

/// One row from `/records`. Sub-records may be missing entirely for
/// partial seasons; the fetcher defaults them to all zeros.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRecord {
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub total: Option<RecordSplit>,
    #[serde(rename = "conferenceGames", default)]
    pub conference_games: Option<RecordSplit>,
    #[serde(rename = "homeGames", default)]
    pub home_games: Option<RecordSplit>,
    #[serde(rename = "awayGames", default)]
    pub away_games: Option<RecordSplit>,
}

/// One player from `/roster`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterPlayer {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub jersey: Option<i32>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub weight: Option<i32>,
    #[serde(default)]
    pub home_city: Option<String>,
    #[serde(default)]
    pub home_state: Option<String>,
}

impl RosterPlayer {
    /// "First Last", tolerating either half missing.
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        )
        .trim()
        .to_string()
    }

    /// "City, ST" when both are present, bare state when only the state
    /// is known, "Unknown" otherwise.
    pub fn hometown(&self) -> String {
        match (self.home_city.as_deref(), self.home_state.as_deref()) {
            (Some(city), Some(state)) => format!("{}, {}", city, state),
            (None, Some(state)) => state.to_string(),
            _ => "Unknown".to_string(),
        }
    }
}

impl Recruit {
    /// Same synthesis rule as [`RosterPlayer::hometown`].
    pub fn hometown(&self) -> String {
        match (self.city.as_deref(), self.state_province.as_deref()) {
            (Some(city), Some(state)) => format!("{}, {}", city, state),
            (None, Some(state)) => state.to_string(),
            _ => "Unknown".to_string(),
        }
    }
}
