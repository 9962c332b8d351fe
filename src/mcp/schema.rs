//! The static tool catalog.
//!
//! `tools/list` is answered from this fixed data; nothing here touches
//! the fetchers.

use serde_json::json;

use crate::mcp::protocol::ToolSchema;

fn team_property() -> serde_json::Value {
    json!({
        "type": "string",
        "description": "Team name (e.g., \"Oklahoma\", \"Texas\")"
    })
}

fn year_property(description: &str) -> serde_json::Value {
    json!({
        "type": "number",
        "description": description
    })
}

fn schema(
    name: &str,
    description: &str,
    properties: serde_json::Value,
    required: &[&str],
) -> ToolSchema {
    ToolSchema {
        name: name.to_string(),
        description: description.to_string(),
        input_schema: json!({
            "type": "object",
            "properties": properties,
            "required": required,
        }),
    }
}

/// All eight supported tools, in the order clients see them.
pub fn tool_schemas() -> Vec<ToolSchema> {
    vec![
        schema(
            "get_player_stats",
            "Get individual player statistics (passing, rushing, receiving, etc.) for a specific team. \
             Use this when asked about a specific player or \"player stats\".",
            json!({
                "team": team_property(),
                "year": year_property("Season year (defaults to current year)"),
                "category": {
                    "type": "string",
                    "description": "Stat category: \"passing\", \"rushing\", \"receiving\", \"defensive\", \"kicking\" (optional - returns all if omitted)"
                }
            }),
            &["team"],
        ),
        schema(
            "get_team_stats",
            "Get team season totals (total yards, points, turnovers, etc.). \
             Use this when asked about team performance or \"team stats\".",
            json!({
                "team": team_property(),
                "year": year_property("Season year (defaults to current year)"),
            }),
            &["team"],
        ),
        schema(
            "get_game_stats",
            "Get game-by-game results and statistics for a team. \
             Use this when asked about \"game by game\" or \"results by game\".",
            json!({
                "team": team_property(),
                "year": year_property("Season year (defaults to current year)"),
            }),
            &["team"],
        ),
        schema(
            "get_recruiting_rankings",
            "Get team recruiting class rankings with total commits, average rating, and star distribution. \
             Use when asked about \"recruiting class\", \"recruiting ranking\", or \"how many stars\".",
            json!({
                "team": team_property(),
                "year": year_property("Recruiting class year (defaults to current year)"),
            }),
            &["team"],
        ),
        schema(
            "get_recruits",
            "Get individual recruits with names, positions, hometowns, star ratings, and rankings. \
             Use when asked about \"who did we sign\", \"show me recruits\", or asking about specific recruit names.",
            json!({
                "team": team_property(),
                "year": year_property("Recruiting class year (defaults to current year)"),
                "position": {
                    "type": "string",
                    "description": "Filter by position (e.g., \"QB\", \"RB\", \"WR\") - optional"
                }
            }),
            &["team"],
        ),
        schema(
            "get_talent_rating",
            "Get team roster talent composite rating and national ranking. \
             Use when asked about \"how talented is the roster\", \"talent rating\", or \"how stacked are we\".",
            json!({
                "team": team_property(),
                "year": year_property("Season year (defaults to current year)"),
            }),
            &["team"],
        ),
        schema(
            "get_team_records",
            "Get team win-loss records (overall, conference, home, away). \
             Use when asked about \"our record\", \"conference record\", \"home record\", or \"away record\".",
            json!({
                "team": team_property(),
                "year": year_property("Season year (defaults to current year)"),
            }),
            &["team"],
        ),
        schema(
            "get_roster",
            "Get complete team roster with player names, positions, jersey numbers, year (Fr/So/Jr/Sr), and hometowns. \
             Use when asked \"who's on the team\", \"show me the roster\", or asking about specific position groups.",
            json!({
                "team": team_property(),
                "year": year_property("Season year (defaults to current year)"),
            }),
            &["team"],
        ),
    ]
}
