//! Roster talent composite (`/talent`).
//!
//! CFBD only exposes the full per-year talent list, so this fetcher
//! queries by year alone and searches the list for the requested team.

use serde::Serialize;

use crate::cfbd::types::TeamTalent;
use crate::fetch::{current_year, FetchContext, FetchResult};
use crate::teams::normalize_team;

#[derive(Debug, Clone, Serialize)]
pub struct TalentData {
    pub talent_rating: f64,
    pub national_rank: usize,
    pub total_teams_ranked: usize,
}

/// National rank is the 1-based position of the first exact school match
/// in the order the API returned, not re-sorted by rating.
pub(crate) fn find_talent(rows: &[TeamTalent], team: &str) -> Option<TalentData> {
    let index = rows.iter().position(|t| t.school == team)?;
    Some(TalentData {
        talent_rating: rows[index].talent,
        national_rank: index + 1,
        total_teams_ranked: rows.len(),
    })
}

pub async fn fetch_talent_rating(
    ctx: &FetchContext,
    team: &str,
    year: Option<u16>,
) -> FetchResult<TalentData> {
    let team = normalize_team(team);
    let year = year.unwrap_or_else(current_year);

    let key = format!("talent_{}_{}", team, year);
    if let Some(hit) = ctx.cache.talent.get(&key) {
        tracing::debug!(%key, "cache hit");
        return hit;
    }

    let params = [("year", year.to_string())];
    let rows: Vec<TeamTalent> = match ctx.client.get("/talent", &params).await {
        Ok(rows) => rows,
        Err(e) => return FetchResult::failure(team, year, e.to_string()),
    };

    let Some(data) = find_talent(&rows, &team) else {
        let message = format!("No talent data found for {} in {}", team, year);
        return FetchResult::failure(team, year, message);
    };

    let result = FetchResult::success(team, year, data);
    ctx.cache.talent.put(key, result.clone());
    result
}
