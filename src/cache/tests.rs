//! Unit tests for the TTL response cache

use super::*;

#[test]
fn test_put_then_get_returns_value() {
    let cache: TtlCache<String> = TtlCache::new();

    cache.put("team_Oklahoma_2024", "cached".to_string());
    assert_eq!(
        cache.get("team_Oklahoma_2024"),
        Some("cached".to_string())
    );
}

#[test]
fn test_missing_key_is_a_miss() {
    let cache: TtlCache<String> = TtlCache::new();
    assert_eq!(cache.get("team_Texas_2024"), None);
}

#[test]
fn test_expired_entry_is_a_miss() {
    let cache: TtlCache<String> = TtlCache::with_ttl(Duration::ZERO);

    cache.put("talent_Georgia_2024", "stale".to_string());
    assert_eq!(cache.get("talent_Georgia_2024"), None);
    // The entry stays in the map; expiry only affects reads.
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_put_overwrites_existing_entry() {
    let cache: TtlCache<u32> = TtlCache::new();

    cache.put("records_Michigan_2023", 1);
    cache.put("records_Michigan_2023", 2);

    assert_eq!(cache.get("records_Michigan_2023"), Some(2));
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_keys_are_independent() {
    let cache: TtlCache<u32> = TtlCache::new();

    cache.put("games_Oklahoma_2024", 10);
    cache.put("games_Oklahoma_2023", 20);

    assert_eq!(cache.get("games_Oklahoma_2024"), Some(10));
    assert_eq!(cache.get("games_Oklahoma_2023"), Some(20));
}

#[test]
fn test_stats_cache_starts_empty() {
    let cache = StatsCache::new();

    assert!(cache.player_stats.is_empty());
    assert!(cache.team_stats.is_empty());
    assert!(cache.game_stats.is_empty());
    assert!(cache.recruiting_ranks.is_empty());
    assert!(cache.recruits.is_empty());
    assert!(cache.talent.is_empty());
    assert!(cache.records.is_empty());
    assert!(cache.roster.is_empty());
}

#[test]
fn test_concurrent_access() {
    use std::sync::Arc;
    use std::thread;

    let cache: Arc<TtlCache<u64>> = Arc::new(TtlCache::new());

    let handles: Vec<_> = (0..8u64)
        .map(|i| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                let key = format!("key_{}", i % 2);
                cache.put(key.clone(), i);
                cache.get(&key);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    // Both keys exist; last write for each wins, whichever thread it was.
    assert_eq!(cache.len(), 2);
    assert!(cache.get("key_0").is_some());
    assert!(cache.get("key_1").is_some());
}
