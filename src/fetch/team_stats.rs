//! Team season totals (`/stats/season`).

use serde::Serialize;

use crate::cfbd::types::TeamSeasonStats;
use crate::fetch::{current_year, FetchContext, FetchResult};
use crate::teams::normalize_team;

#[derive(Debug, Clone, Serialize)]
pub struct TeamStatsData {
    pub stats: TeamSeasonStats,
}

pub async fn fetch_team_stats(
    ctx: &FetchContext,
    team: &str,
    year: Option<u16>,
) -> FetchResult<TeamStatsData> {
    let team = normalize_team(team);
    let year = year.unwrap_or_else(current_year);

    let key = format!("team_{}_{}", team, year);
    if let Some(hit) = ctx.cache.team_stats.get(&key) {
        tracing::debug!(%key, "cache hit");
        return hit;
    }

    let params = [("year", year.to_string()), ("team", team.clone())];
    let mut rows: Vec<TeamSeasonStats> = match ctx.client.get("/stats/season", &params).await {
        Ok(rows) => rows,
        Err(e) => return FetchResult::failure(team, year, e.to_string()),
    };

    if rows.is_empty() {
        let message = format!("No team stats found for {} in {}", team, year);
        return FetchResult::failure(team, year, message);
    }

    // CFBD returns a one-element array for a single team/year query.
    let stats = rows.swap_remove(0);
    let result = FetchResult::success(team, year, TeamStatsData { stats });
    ctx.cache.team_stats.put(key, result.clone());
    result
}
