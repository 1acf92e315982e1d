//! Property tests for loading and cross-field validation

#[path = "../common/mod.rs"]
mod common;

use common::typed_with;
use proptest::prelude::*;
use sharegroup::config::*;
use sharegroup::core::{ConfigValue, ShareGroupError};

/// (min, value, max) with min <= value <= max inside `lo..=hi`
fn ordered_triple(lo: i32, hi: i32) -> impl Strategy<Value = (i32, i32, i32)> {
    (lo..=hi, lo..=hi, lo..=hi).prop_map(|(a, b, c)| {
        let mut v = [a, b, c];
        v.sort_unstable();
        (v[0], v[1], v[2])
    })
}

proptest! {
    #[test]
    fn valid_inputs_round_trip(
        enabled in any::<bool>(),
        locks in 100i32..=10000,
        delivery in 2i32..=10,
        groups in 1i16..=100,
        size in 10i16..=1000,
        (min_session, session, max_session) in ordered_triple(1, 600_000),
        (min_heartbeat, heartbeat, max_heartbeat) in ordered_triple(1, 60_000),
        min_lock in 1000i32..=30000,
        max_lock in 30000i32..=3_600_000,
        lock_seed in 0i32..=59000,
    ) {
        let lock = (min_lock + lock_seed).min(60000).min(max_lock);

        let mut values = typed_with(&[
            (SHARE_GROUP_PARTITION_MAX_RECORD_LOCKS_CONFIG, locks),
            (SHARE_GROUP_DELIVERY_COUNT_LIMIT_CONFIG, delivery),
            (SHARE_GROUP_SESSION_TIMEOUT_MS_CONFIG, session),
            (SHARE_GROUP_MIN_SESSION_TIMEOUT_MS_CONFIG, min_session),
            (SHARE_GROUP_MAX_SESSION_TIMEOUT_MS_CONFIG, max_session),
            (SHARE_GROUP_HEARTBEAT_INTERVAL_MS_CONFIG, heartbeat),
            (SHARE_GROUP_MIN_HEARTBEAT_INTERVAL_MS_CONFIG, min_heartbeat),
            (SHARE_GROUP_MAX_HEARTBEAT_INTERVAL_MS_CONFIG, max_heartbeat),
            (SHARE_GROUP_RECORD_LOCK_DURATION_MS_CONFIG, lock),
            (SHARE_GROUP_MIN_RECORD_LOCK_DURATION_MS_CONFIG, min_lock),
            (SHARE_GROUP_MAX_RECORD_LOCK_DURATION_MS_CONFIG, max_lock),
        ]);
        values.insert(SHARE_GROUP_ENABLE_CONFIG.to_string(), ConfigValue::Bool(enabled));
        values.insert(SHARE_GROUP_MAX_GROUPS_CONFIG.to_string(), ConfigValue::Short(groups));
        values.insert(SHARE_GROUP_MAX_SIZE_CONFIG.to_string(), ConfigValue::Short(size));

        let config = ShareGroupConfig::new(&values).unwrap();
        prop_assert_eq!(config.is_share_group_enabled(), enabled);
        prop_assert_eq!(config.share_group_partition_max_record_locks(), locks);
        prop_assert_eq!(config.share_group_delivery_count_limit(), delivery);
        prop_assert_eq!(config.share_group_max_groups(), groups);
        prop_assert_eq!(config.share_group_max_size(), size);
        prop_assert_eq!(config.share_group_session_timeout_ms(), session);
        prop_assert_eq!(config.share_group_min_session_timeout_ms(), min_session);
        prop_assert_eq!(config.share_group_max_session_timeout_ms(), max_session);
        prop_assert_eq!(config.share_group_heartbeat_interval_ms(), heartbeat);
        prop_assert_eq!(config.share_group_min_heartbeat_interval_ms(), min_heartbeat);
        prop_assert_eq!(config.share_group_max_heartbeat_interval_ms(), max_heartbeat);
        prop_assert_eq!(config.share_group_record_lock_duration_ms(), lock);
        prop_assert_eq!(config.share_group_min_record_lock_duration_ms(), min_lock);
        prop_assert_eq!(config.share_group_max_record_lock_duration_ms(), max_lock);
    }

    #[test]
    fn max_heartbeat_below_min_always_fails(min in 2i32..=100_000, gap in 1i32..=1000) {
        let max = (min - gap).max(1);
        let values = typed_with(&[
            (SHARE_GROUP_MIN_HEARTBEAT_INTERVAL_MS_CONFIG, min),
            (SHARE_GROUP_MAX_HEARTBEAT_INTERVAL_MS_CONFIG, max),
        ]);
        let err = ShareGroupConfig::new(&values).unwrap_err();
        prop_assert_eq!(
            err.keys(),
            vec![SHARE_GROUP_MAX_HEARTBEAT_INTERVAL_MS_CONFIG, SHARE_GROUP_MIN_HEARTBEAT_INTERVAL_MS_CONFIG]
        );
    }

    #[test]
    fn heartbeat_outside_bounds_fails(heartbeat in prop_oneof![1i32..5000, 15001i32..=100_000]) {
        let values = typed_with(&[(SHARE_GROUP_HEARTBEAT_INTERVAL_MS_CONFIG, heartbeat)]);
        let is_constraint = matches!(ShareGroupConfig::new(&values), Err(ShareGroupError::Constraint { .. }));
        prop_assert!(is_constraint);
    }

    #[test]
    fn session_timeout_outside_bounds_fails(timeout in prop_oneof![1i32..45000, 60001i32..=1_000_000]) {
        let values = typed_with(&[(SHARE_GROUP_SESSION_TIMEOUT_MS_CONFIG, timeout)]);
        let err = ShareGroupConfig::new(&values).unwrap_err();
        prop_assert_eq!(err.keys()[0], SHARE_GROUP_SESSION_TIMEOUT_MS_CONFIG);
    }

    #[test]
    fn record_lock_outside_bounds_fails(lock in prop_oneof![1000i32..15000, 60001i32..=3_600_000]) {
        let values = typed_with(&[(SHARE_GROUP_RECORD_LOCK_DURATION_MS_CONFIG, lock)]);
        let err = ShareGroupConfig::new(&values).unwrap_err();
        prop_assert!(err.keys().contains(&SHARE_GROUP_RECORD_LOCK_DURATION_MS_CONFIG));
    }
}
