//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the cache's capacity, expiry and recency rules over
//! generated operation sequences.

use proptest::prelude::*;
use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::cache::ResponseCache;

// == Test Configuration ==
const TEST_DEFAULT_TTL: Duration = Duration::from_secs(600);

// == Strategies ==
/// Generates URL-like cache keys
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,6}".prop_map(|q| format!("https://api.test/search.php?s={}", q))
}

/// Generates a set of distinct keys
fn distinct_keys(min: usize, max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set(key_strategy(), min..max).prop_map(|set| set.into_iter().collect())
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: u32 },
    Get { key: String },
    Clear,
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        6 => (key_strategy(), any::<u32>()).prop_map(|(key, value)| CacheOp::Set { key, value }),
        6 => key_strategy().prop_map(|key| CacheOp::Get { key }),
        1 => Just(CacheOp::Clear),
    ]
}

fn new_cache(capacity: usize) -> ResponseCache<u32> {
    ResponseCache::new(capacity, TEST_DEFAULT_TTL).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any operation sequence, hit and miss counters match what the
    // caller observed, and the entry count never exceeds capacity.
    #[test]
    fn prop_statistics_accuracy(
        capacity in 1usize..20,
        ops in prop::collection::vec(cache_op_strategy(), 1..80)
    ) {
        let mut cache = new_cache(capacity);
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Set { key, value } => cache.set(key, value, None),
                CacheOp::Get { key } => match cache.get(&key) {
                    Some(_) => expected_hits += 1,
                    None => expected_misses += 1,
                },
                CacheOp::Clear => {
                    cache.clear();
                }
            }
            prop_assert!(cache.len() <= capacity);
        }

        let stats = cache.stats();
        prop_assert_eq!(stats.hits, expected_hits);
        prop_assert_eq!(stats.misses, expected_misses);
        prop_assert_eq!(stats.total_entries, cache.len());
    }

    // The cache agrees with a simple reference model of LRU behaviour.
    #[test]
    fn prop_matches_reference_model(
        capacity in 1usize..8,
        ops in prop::collection::vec(cache_op_strategy(), 1..120)
    ) {
        let mut cache = new_cache(capacity);
        // Most recently used at the back
        let mut model: Vec<(String, u32)> = Vec::new();

        for op in ops {
            match op {
                CacheOp::Set { key, value } => {
                    if let Some(pos) = model.iter().position(|(k, _)| *k == key) {
                        model.remove(pos);
                    } else if model.len() >= capacity {
                        model.remove(0);
                    }
                    model.push((key.clone(), value));
                    cache.set(key, value, None);
                }
                CacheOp::Get { key } => {
                    let expected = model.iter().position(|(k, _)| *k == key).map(|pos| {
                        let entry = model.remove(pos);
                        let value = entry.1;
                        model.push(entry);
                        value
                    });
                    prop_assert_eq!(cache.get(&key), expected);
                }
                CacheOp::Clear => {
                    model.clear();
                    cache.clear();
                }
            }
            prop_assert_eq!(cache.len(), model.len());
        }
    }

    // Setting the same key twice leaves one entry holding the newer value.
    #[test]
    fn prop_replacement_semantics(key in key_strategy(), first in any::<u32>(), second in any::<u32>()) {
        let mut cache = new_cache(10);

        cache.set(key.clone(), first, None);
        cache.set(key.clone(), second, None);

        prop_assert_eq!(cache.get(&key), Some(second));
        prop_assert_eq!(cache.len(), 1);
    }

    // Filling to capacity never evicts; only the next distinct key does,
    // and it removes exactly the oldest one.
    #[test]
    fn prop_no_premature_eviction(keys in distinct_keys(2, 30), extra in "[0-9]{3}") {
        let capacity = keys.len();
        let mut cache = new_cache(capacity);

        for (i, key) in keys.iter().enumerate() {
            cache.set(key.clone(), i as u32, None);
            prop_assert_eq!(cache.stats().evictions, 0);
        }

        // Digits never collide with the lowercase generated keys
        cache.set(extra, 0, None);
        prop_assert_eq!(cache.stats().evictions, 1);
        prop_assert_eq!(cache.len(), capacity);
        prop_assert!(!cache.contains_key(&keys[0]));
        for key in keys.iter().skip(1) {
            prop_assert!(cache.contains_key(key));
        }
    }

    // A GET on the oldest key protects it; the second oldest goes instead.
    #[test]
    fn prop_lru_access_tracking(keys in distinct_keys(3, 12), new_key in "[0-9]{3}") {
        let capacity = keys.len();
        let mut cache = new_cache(capacity);

        for key in &keys {
            cache.set(key.clone(), 1, None);
        }

        prop_assert_eq!(cache.get(&keys[0]), Some(1));
        cache.set(new_key.clone(), 2, None);

        prop_assert!(cache.contains_key(&keys[0]));
        prop_assert!(!cache.contains_key(&keys[1]));
        prop_assert_eq!(cache.get(&new_key), Some(2));
    }

    // A key read before its TTL is live; after the TTL it is absent and gone.
    #[test]
    fn prop_ttl_expiration(key in key_strategy(), value in any::<u32>(), ttl_ms in 1u64..10_000) {
        let mut cache = new_cache(10);
        let start = Instant::now();
        let ttl = Duration::from_millis(ttl_ms);

        cache.set_at(key.clone(), value, Some(ttl), start);

        prop_assert_eq!(cache.get_at(&key, start + ttl), Some(value));
        prop_assert_eq!(cache.get_at(&key, start + ttl + Duration::from_millis(1)), None);
        prop_assert!(cache.is_empty());
    }

    // After clear, nothing previously set is readable and a full refill
    // causes no eviction.
    #[test]
    fn prop_clear_resets_fully(keys in distinct_keys(1, 20)) {
        let capacity = keys.len();
        let mut cache = new_cache(capacity);

        for key in &keys {
            cache.set(key.clone(), 1, None);
        }
        cache.clear();

        for key in &keys {
            prop_assert_eq!(cache.get(key), None);
        }

        let evictions_before = cache.stats().evictions;
        for key in &keys {
            cache.set(key.clone(), 2, None);
        }
        prop_assert_eq!(cache.stats().evictions, evictions_before);
        prop_assert_eq!(cache.len(), capacity);
    }
}

// == Concurrent Access ==
proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    // Interleaved tasks sharing one lock never break the capacity bound and
    // only ever observe values that were actually written.
    #[test]
    fn prop_concurrent_operation_correctness(
        ops in prop::collection::vec(cache_op_strategy(), 10..60)
    ) {
        let written: HashSet<u32> = ops
            .iter()
            .filter_map(|op| match op {
                CacheOp::Set { value, .. } => Some(*value),
                _ => None,
            })
            .collect();

        // Worker threads so spawned operations really contend for the lock
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(4)
            .enable_all()
            .build()
            .unwrap();

        let outcome: Result<(), String> = runtime.block_on(async {
            let cache = ResponseCache::<u32>::shared(8, TEST_DEFAULT_TTL).unwrap();
            let mut handles = vec![];

            for op in ops {
                let cache = cache.clone();
                handles.push(tokio::spawn(async move {
                    let mut guard = cache.lock().await;
                    let seen = match op {
                        CacheOp::Set { key, value } => {
                            guard.set(key, value, None);
                            None
                        }
                        CacheOp::Get { key } => guard.get(&key),
                        CacheOp::Clear => {
                            guard.clear();
                            None
                        }
                    };
                    (seen, guard.len())
                }));
            }

            for handle in handles {
                let (seen, len) = handle.await.map_err(|e| e.to_string())?;
                if len > 8 {
                    return Err(format!("cache grew to {} entries", len));
                }
                if let Some(value) = seen {
                    if !written.contains(&value) {
                        return Err(format!("read unknown value {}", value));
                    }
                }
            }
            Ok(())
        });

        prop_assert!(outcome.is_ok(), "{:?}", outcome);
    }
}
