//! Game-by-game results (`/games/teams`).

use serde::Serialize;
use serde_json::Value;

use crate::cfbd::types::TeamGame;
use crate::fetch::{current_year, FetchContext, FetchResult};
use crate::teams::normalize_team;

#[derive(Debug, Clone, Serialize)]
pub struct GameStatsData {
    pub games: Vec<GameSummary>,
}

/// One game from the queried team's point of view.
#[derive(Debug, Clone, Serialize)]
pub struct GameSummary {
    pub week: Option<u16>,
    pub date: Option<String>,
    pub opponent: String,
    pub home_away: String,
    pub result: String,
    pub score_us: Option<i64>,
    pub score_them: Option<i64>,
    pub stats: Value,
}

/// Derive opponent, venue, W/L and both scores by comparing the
/// canonical team name against the game's home/away fields. Missing
/// scores compare as 0, so an unplayed game reads as a loss.
pub(crate) fn summarize_game(game: TeamGame, team: &str) -> GameSummary {
    let is_home = game.home_team == team;
    let (score_us, score_them) = if is_home {
        (game.home_points, game.away_points)
    } else {
        (game.away_points, game.home_points)
    };
    let result = if score_us.unwrap_or(0) > score_them.unwrap_or(0) {
        "W"
    } else {
        "L"
    };

    GameSummary {
        week: game.week,
        date: game.start_date,
        opponent: if is_home { game.away_team } else { game.home_team },
        home_away: if is_home { "home" } else { "away" }.to_string(),
        result: result.to_string(),
        score_us,
        score_them,
        stats: game.stats,
    }
}

pub async fn fetch_game_stats(
    ctx: &FetchContext,
    team: &str,
    year: Option<u16>,
) -> FetchResult<GameStatsData> {
    let team = normalize_team(team);
    let year = year.unwrap_or_else(current_year);

    let key = format!("games_{}_{}", team, year);
    if let Some(hit) = ctx.cache.game_stats.get(&key) {
        tracing::debug!(%key, "cache hit");
        return hit;
    }

    let params = [("year", year.to_string()), ("team", team.clone())];
    let rows: Vec<TeamGame> = match ctx.client.get("/games/teams", &params).await {
        Ok(rows) => rows,
        Err(e) => return FetchResult::failure(team, year, e.to_string()),
    };

    if rows.is_empty() {
        let message = format!("No game stats found for {} in {}", team, year);
        return FetchResult::failure(team, year, message);
    }

    let games = rows
        .into_iter()
        .map(|game| summarize_game(game, &team))
        .collect();

    let result = FetchResult::success(team, year, GameStatsData { games });
    ctx.cache.game_stats.put(key, result.clone());
    result
}
