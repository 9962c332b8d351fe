//! Short-lived response caching for CFBD lookups.
//!
//! Every fetcher caches its reshaped result under a deterministic key for
//! five minutes, so repeated questions about the same team/season do not
//! re-hit the upstream API. The cache is best-effort: a miss (or an
//! expired entry) just means the upstream client gets called again.
//!
//! Entries expire by age only. There is no size bound and no invalidation
//! API; expired entries are simply overwritten by the next successful
//! fetch for their key.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::fetch::{
    FetchResult, GameStatsData, PlayerStatsData, RecordsData, RecruitingRankData, RecruitsData,
    RosterData, TalentData, TeamStatsData,
};

/// How long a cached result stays servable.
pub const CACHE_TTL: Duration = Duration::from_secs(5 * 60);

struct Entry<V> {
    value: V,
    stored_at: Instant,
}

/// A TTL-expiring key/value map.
///
/// Reads and writes are independent per cache; a single mutex guards the
/// map, which is enough for the read-mostly tool workload. Values are
/// cloned out on hit.
pub struct TtlCache<V: Clone> {
    entries: Mutex<HashMap<String, Entry<V>>>,
    ttl: Duration,
}

impl<V: Clone> TtlCache<V> {
    pub fn new() -> Self {
        Self::with_ttl(CACHE_TTL)
    }

    /// Create a cache with a custom TTL. Tests use this to force
    /// immediate expiry without waiting out the clock.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Return the stored value if an entry exists and is younger than the
    /// TTL. An expired entry reads as a miss; it is not removed.
    pub fn get(&self, key: &str) -> Option<V> {
        let entries = self.entries.lock().unwrap();
        let entry = entries.get(key)?;
        if entry.stored_at.elapsed() < self.ttl {
            Some(entry.value.clone())
        } else {
            None
        }
    }

    /// Store or overwrite the entry for `key` with a fresh timestamp.
    pub fn put(&self, key: impl Into<String>, value: V) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(
            key.into(),
            Entry {
                value,
                stored_at: Instant::now(),
            },
        );
    }

    /// Entry count, expired entries included. Test support only; nothing
    /// in the fetch path inspects cache size.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V: Clone> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// One typed cache per statistic kind.
///
/// Owned by the dispatcher and passed down to fetchers, never a global:
/// tests construct an isolated instance (usually with a custom TTL) per
/// case. Keys are deterministic functions of the normalized query, so
/// identical logical lookups always land in the same entry.
pub struct StatsCache {
    pub player_stats: TtlCache<FetchResult<PlayerStatsData>>,
    pub team_stats: TtlCache<FetchResult<TeamStatsData>>,
    pub game_stats: TtlCache<FetchResult<GameStatsData>>,
    pub recruiting_ranks: TtlCache<FetchResult<RecruitingRankData>>,
    pub recruits: TtlCache<FetchResult<RecruitsData>>,
    pub talent: TtlCache<FetchResult<TalentData>>,
    pub records: TtlCache<FetchResult<RecordsData>>,
    pub roster: TtlCache<FetchResult<RosterData>>,
}

impl StatsCache {
    pub fn new() -> Self {
        Self::with_ttl(CACHE_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            player_stats: TtlCache::with_ttl(ttl),
            team_stats: TtlCache::with_ttl(ttl),
            game_stats: TtlCache::with_ttl(ttl),
            recruiting_ranks: TtlCache::with_ttl(ttl),
            recruits: TtlCache::with_ttl(ttl),
            talent: TtlCache::with_ttl(ttl),
            records: TtlCache::with_ttl(ttl),
            roster: TtlCache::with_ttl(ttl),
        }
    }
}

impl Default for StatsCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
