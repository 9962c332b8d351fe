//! Team roster (`/roster`).

use std::collections::BTreeMap;

use serde::Serialize;

use crate::cfbd::types::RosterPlayer;
use crate::fetch::{current_year, FetchContext, FetchResult};
use crate::teams::normalize_team;

#[derive(Debug, Clone, Serialize)]
pub struct RosterData {
    pub total_players: usize,
    pub by_position: BTreeMap<String, Vec<RosterEntry>>,
    pub all_players: Vec<RosterPlayerSummary>,
}

/// The short form used inside the position groups.
#[derive(Debug, Clone, Serialize)]
pub struct RosterEntry {
    pub name: String,
    pub jersey: Option<i32>,
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RosterPlayerSummary {
    pub name: String,
    pub jersey: Option<i32>,
    pub position: String,
    pub year: Option<i32>,
    pub height: Option<f64>,
    pub weight: Option<i32>,
    pub hometown: String,
}

/// Build the flat player list and the per-position grouping.
pub(crate) fn organize_roster(rows: Vec<RosterPlayer>) -> RosterData {
    let mut by_position: BTreeMap<String, Vec<RosterEntry>> = BTreeMap::new();
    let mut all_players = Vec::with_capacity(rows.len());

    for player in &rows {
        let position = player
            .position
            .clone()
            .unwrap_or_else(|| "Unknown".to_string());

        by_position
            .entry(position.clone())
            .or_default()
            .push(RosterEntry {
                name: player.full_name(),
                jersey: player.jersey,
                year: player.year,
            });

        all_players.push(RosterPlayerSummary {
            name: player.full_name(),
            jersey: player.jersey,
            position,
            year: player.year,
            height: player.height,
            weight: player.weight,
            hometown: player.hometown(),
        });
    }

    RosterData {
        total_players: rows.len(),
        by_position,
        all_players,
    }
}

pub async fn fetch_roster(
    ctx: &FetchContext,
    team: &str,
    year: Option<u16>,
) -> FetchResult<RosterData> {
    let team = normalize_team(team);
    let year = year.unwrap_or_else(current_year);

    let key = format!("roster_{}_{}", team, year);
    if let Some(hit) = ctx.cache.roster.get(&key) {
        tracing::debug!(%key, "cache hit");
        return hit;
    }

    let params = [("team", team.clone()), ("year", year.to_string())];
    let rows: Vec<RosterPlayer> = match ctx.client.get("/roster", &params).await {
        Ok(rows) => rows,
        Err(e) => return FetchResult::failure(team, year, e.to_string()),
    };

    if rows.is_empty() {
        let message = format!("No roster found for {} in {}", team, year);
        return FetchResult::failure(team, year, message);
    }

    let result = FetchResult::success(team, year, organize_roster(rows));
    ctx.cache.roster.put(key, result.clone());
    result
}
