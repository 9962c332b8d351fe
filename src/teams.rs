//! Team name normalization.
//!
//! The CFBD API expects canonical school names ("Oklahoma", "Ohio State").
//! Callers tend to use nicknames and abbreviations, so every fetcher runs
//! its `team` argument through [`normalize_team`] before building a query.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Colloquial name -> canonical CFBD school name. Keys are lowercase.
static TEAM_ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("oklahoma", "Oklahoma"),
        ("ou", "Oklahoma"),
        ("sooners", "Oklahoma"),
        ("texas", "Texas"),
        ("longhorns", "Texas"),
        ("alabama", "Alabama"),
        ("crimson tide", "Alabama"),
        ("georgia", "Georgia"),
        ("bulldogs", "Georgia"),
        ("ohio state", "Ohio State"),
        ("buckeyes", "Ohio State"),
        ("michigan", "Michigan"),
        ("wolverines", "Michigan"),
    ])
});

/// Map a colloquial team name to its canonical form.
///
/// Unknown (or already-canonical) names pass through unchanged, so this
/// is total and idempotent.
pub fn normalize_team(raw: &str) -> String {
    match TEAM_ALIASES.get(raw.to_lowercase().as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => raw.to_string(),
    }
}
