//! Win/loss records (`/records`).

use serde::Serialize;

use crate::cfbd::types::{RecordSplit, TeamRecord};
use crate::fetch::{current_year, FetchContext, FetchResult};
use crate::teams::normalize_team;

#[derive(Debug, Clone, Serialize)]
pub struct RecordsData {
    pub overall: RecordSplit,
    pub conference: RecordSplit,
    pub home: RecordSplit,
    pub away: RecordSplit,
}

/// Extract the four win/loss/tie splits, defaulting any missing one to
/// all zeros.
pub(crate) fn summarize_record(record: TeamRecord) -> RecordsData {
    RecordsData {
        overall: record.total.unwrap_or_default(),
        conference: record.conference_games.unwrap_or_default(),
        home: record.home_games.unwrap_or_default(),
        away: record.away_games.unwrap_or_default(),
    }
}

pub async fn fetch_team_records(
    ctx: &FetchContext,
    team: &str,
    year: Option<u16>,
) -> FetchResult<RecordsData> {
    let team = normalize_team(team);
    let year = year.unwrap_or_else(current_year);

    let key = format!("records_{}_{}", team, year);
    if let Some(hit) = ctx.cache.records.get(&key) {
        tracing::debug!(%key, "cache hit");
        return hit;
    }

    let params = [("year", year.to_string()), ("team", team.clone())];
    let mut rows: Vec<TeamRecord> = match ctx.client.get("/records", &params).await {
        Ok(rows) => rows,
        Err(e) => return FetchResult::failure(team, year, e.to_string()),
    };

    if rows.is_empty() {
        let message = format!("No records found for {} in {}", team, year);
        return FetchResult::failure(team, year, message);
    }

    let record = rows.swap_remove(0);
    let result = FetchResult::success(team, year, summarize_record(record));
    ctx.cache.records.put(key, result.clone());
    result
}
