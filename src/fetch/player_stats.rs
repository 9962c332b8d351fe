//! Individual player season statistics (`/stats/player/season`).

use std::collections::BTreeMap;

use serde::Serialize;

use crate::cfbd::types::PlayerSeasonStat;
use crate::fetch::{current_year, FetchContext, FetchResult};
use crate::teams::normalize_team;

#[derive(Debug, Clone, Serialize)]
pub struct PlayerStatsData {
    pub players: BTreeMap<String, PlayerSummary>,
}

/// One player's stat lines, keyed by category ("passing", "rushing", ...).
#[derive(Debug, Clone, Serialize)]
pub struct PlayerSummary {
    pub name: String,
    pub position: String,
    pub stats: BTreeMap<String, PlayerSeasonStat>,
}

/// Group raw stat lines by player, then index each player's lines by
/// category. A later line for the same category supersedes the earlier
/// one.
pub(crate) fn organize_players(rows: Vec<PlayerSeasonStat>) -> PlayerStatsData {
    let mut players: BTreeMap<String, PlayerSummary> = BTreeMap::new();

    for row in rows {
        let name = row.player.clone().unwrap_or_else(|| "Unknown".to_string());
        let entry = players
            .entry(name.clone())
            .or_insert_with(|| PlayerSummary {
                name,
                position: row.position.clone().unwrap_or_else(|| "N/A".to_string()),
                stats: BTreeMap::new(),
            });

        let category = row
            .category
            .clone()
            .unwrap_or_else(|| "general".to_string());
        entry.stats.insert(category, row);
    }

    PlayerStatsData { players }
}

pub async fn fetch_player_stats(
    ctx: &FetchContext,
    team: &str,
    year: Option<u16>,
    category: Option<&str>,
) -> FetchResult<PlayerStatsData> {
    let team = normalize_team(team);
    let year = year.unwrap_or_else(current_year);

    let key = format!("player_{}_{}_{}", team, year, category.unwrap_or("all"));
    if let Some(hit) = ctx.cache.player_stats.get(&key) {
        tracing::debug!(%key, "cache hit");
        return hit;
    }

    let mut params = vec![("year", year.to_string()), ("team", team.clone())];
    if let Some(category) = category {
        params.push(("category", category.to_string()));
    }

    let rows: Vec<PlayerSeasonStat> = match ctx.client.get("/stats/player/season", &params).await {
        Ok(rows) => rows,
        Err(e) => return FetchResult::failure(team, year, e.to_string()),
    };

    if rows.is_empty() {
        let message = format!("No player stats found for {} in {}", team, year);
        return FetchResult::failure(team, year, message);
    }

    let result = FetchResult::success(team, year, organize_players(rows));
    ctx.cache.player_stats.put(key, result.clone());
    result
}
