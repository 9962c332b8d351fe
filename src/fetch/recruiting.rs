//! Recruiting class rankings (`/recruiting/teams`) and individual
//! recruits (`/recruiting/players`).

use serde::Serialize;

use crate::cfbd::types::{Recruit, TeamRecruitingRank};
use crate::fetch::{current_year, FetchContext, FetchResult};
use crate::teams::normalize_team;

#[derive(Debug, Clone, Serialize)]
pub struct RecruitingRankData {
    pub ranking: TeamRecruitingRank,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecruitsData {
    pub total_commits: usize,
    pub five_stars: Vec<Recruit>,
    pub four_stars: Vec<Recruit>,
    pub three_stars: Vec<Recruit>,
    pub all_recruits: Vec<RecruitSummary>,
}

/// A recruit with normalized field names for display.
#[derive(Debug, Clone, Serialize)]
pub struct RecruitSummary {
    pub name: Option<String>,
    pub position: Option<String>,
    pub hometown: String,
    pub high_school: String,
    pub stars: u8,
    pub rating: f64,
    pub rank_overall: Option<u32>,
    pub rank_position: Option<u32>,
    pub rank_state: Option<u32>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
}

/// Partition the class by star rating (exact equality) and build the
/// normalized full list.
pub(crate) fn organize_recruits(rows: Vec<Recruit>) -> RecruitsData {
    let star_subset = |stars: u8| -> Vec<Recruit> {
        rows.iter()
            .filter(|r| r.stars == Some(stars))
            .cloned()
            .collect()
    };

    let all_recruits = rows
        .iter()
        .map(|r| RecruitSummary {
            name: r.name.clone(),
            position: r.position.clone(),
            hometown: r.hometown(),
            high_school: r.school.clone().unwrap_or_else(|| "Unknown".to_string()),
            stars: r.stars.unwrap_or(0),
            rating: r.rating.unwrap_or(0.0),
            rank_overall: r.ranking,
            rank_position: r.position_ranking,
            rank_state: r.state_ranking,
            height: r.height,
            weight: r.weight,
        })
        .collect();

    RecruitsData {
        total_commits: rows.len(),
        five_stars: star_subset(5),
        four_stars: star_subset(4),
        three_stars: star_subset(3),
        all_recruits,
    }
}

pub async fn fetch_recruiting_rankings(
    ctx: &FetchContext,
    team: &str,
    year: Option<u16>,
) -> FetchResult<RecruitingRankData> {
    let team = normalize_team(team);
    let year = year.unwrap_or_else(current_year);

    let key = format!("recruiting_rank_{}_{}", team, year);
    if let Some(hit) = ctx.cache.recruiting_ranks.get(&key) {
        tracing::debug!(%key, "cache hit");
        return hit;
    }

    let params = [("year", year.to_string()), ("team", team.clone())];
    let mut rows: Vec<TeamRecruitingRank> =
        match ctx.client.get("/recruiting/teams", &params).await {
            Ok(rows) => rows,
            Err(e) => return FetchResult::failure(team, year, e.to_string()),
        };

    if rows.is_empty() {
        let message = format!("No recruiting rankings found for {} in {}", team, year);
        return FetchResult::failure(team, year, message);
    }

    let ranking = rows.swap_remove(0);
    let result = FetchResult::success(team, year, RecruitingRankData { ranking });
    ctx.cache.recruiting_ranks.put(key, result.clone());
    result
}

pub async fn fetch_recruits(
    ctx: &FetchContext,
    team: &str,
    year: Option<u16>,
    position: Option<&str>,
) -> FetchResult<RecruitsData> {
    let team = normalize_team(team);
    let year = year.unwrap_or_else(current_year);

    let key = format!("recruits_{}_{}_{}", team, year, position.unwrap_or("all"));
    if let Some(hit) = ctx.cache.recruits.get(&key) {
        tracing::debug!(%key, "cache hit");
        return hit;
    }

    let mut params = vec![("year", year.to_string()), ("team", team.clone())];
    if let Some(position) = position {
        params.push(("position", position.to_string()));
    }

    let rows: Vec<Recruit> = match ctx.client.get("/recruiting/players", &params).await {
        Ok(rows) => rows,
        Err(e) => return FetchResult::failure(team, year, e.to_string()),
    };

    if rows.is_empty() {
        let suffix = position.map(|p| format!(" at {}", p)).unwrap_or_default();
        let message = format!("No recruits found for {} in {}{}", team, year, suffix);
        return FetchResult::failure(team, year, message);
    }

    let result = FetchResult::success(team, year, organize_recruits(rows));
    ctx.cache.recruits.put(key, result.clone());
    result
}
