//! Integration tests for the share group configuration

#[path = "../common/mod.rs"]
mod common;

use common::{raw, typed_with};
use sharegroup::config::*;
use sharegroup::core::{Relation, ShareGroupError};
use sharegroup::resolve_raw;
use tempfile::TempDir;

#[test]
fn test_defaults_satisfy_all_checks() {
    let config = resolve_raw(&RawConfig::new()).unwrap();

    assert!(!config.is_share_group_enabled());
    assert_eq!(config.share_group_session_timeout_ms(), config.share_group_min_session_timeout_ms());
    assert_eq!(config.share_group_heartbeat_interval_ms(), config.share_group_min_heartbeat_interval_ms());
    assert!(ORDERING_CHECKS.iter().all(|check| check.holds(&config)));
}

#[test]
fn test_delivery_count_limit_boundaries() {
    for accepted in ["2", "10"] {
        let config = resolve_raw(&raw(&[(SHARE_GROUP_DELIVERY_COUNT_LIMIT_CONFIG, accepted)])).unwrap();
        assert_eq!(config.share_group_delivery_count_limit().to_string(), accepted);
    }

    for rejected in ["1", "11"] {
        let err = resolve_raw(&raw(&[(SHARE_GROUP_DELIVERY_COUNT_LIMIT_CONFIG, rejected)])).unwrap_err();
        assert!(matches!(err, ShareGroupError::InvalidValue { .. }));
        assert_eq!(err.keys(), vec![SHARE_GROUP_DELIVERY_COUNT_LIMIT_CONFIG]);
    }
}

#[test]
fn test_schema_ranges_rejected_at_registry() {
    let cases = [
        (SHARE_GROUP_RECORD_LOCK_DURATION_MS_CONFIG, "999"),
        (SHARE_GROUP_RECORD_LOCK_DURATION_MS_CONFIG, "60001"),
        (SHARE_GROUP_MIN_RECORD_LOCK_DURATION_MS_CONFIG, "30001"),
        (SHARE_GROUP_MAX_RECORD_LOCK_DURATION_MS_CONFIG, "29999"),
        (SHARE_GROUP_MAX_RECORD_LOCK_DURATION_MS_CONFIG, "3600001"),
        (SHARE_GROUP_PARTITION_MAX_RECORD_LOCKS_CONFIG, "99"),
        (SHARE_GROUP_PARTITION_MAX_RECORD_LOCKS_CONFIG, "10001"),
        (SHARE_GROUP_MAX_GROUPS_CONFIG, "0"),
        (SHARE_GROUP_MAX_GROUPS_CONFIG, "101"),
        (SHARE_GROUP_MAX_SIZE_CONFIG, "9"),
        (SHARE_GROUP_MAX_SIZE_CONFIG, "1001"),
        (SHARE_GROUP_SESSION_TIMEOUT_MS_CONFIG, "0"),
        (SHARE_GROUP_MIN_HEARTBEAT_INTERVAL_MS_CONFIG, "-5"),
    ];

    for (key, value) in cases {
        let result = resolve_raw(&raw(&[(key, value)]));
        match result {
            Err(ShareGroupError::InvalidValue { key: k, .. }) => assert_eq!(k, key),
            other => panic!("{} = {} should be rejected, got {:?}", key, value, other),
        }
    }
}

#[test]
fn test_heartbeat_scenario() {
    let base = [
        (SHARE_GROUP_HEARTBEAT_INTERVAL_MS_CONFIG, "5000"),
        (SHARE_GROUP_MIN_HEARTBEAT_INTERVAL_MS_CONFIG, "5000"),
        (SHARE_GROUP_MAX_HEARTBEAT_INTERVAL_MS_CONFIG, "15000"),
    ];
    assert!(resolve_raw(&raw(&base)).is_ok());

    let mut mutated = raw(&base);
    mutated.insert(SHARE_GROUP_MIN_HEARTBEAT_INTERVAL_MS_CONFIG.to_string(), "6000".to_string());
    let err = resolve_raw(&mutated).unwrap_err();
    assert_eq!(
        err,
        ShareGroupError::Constraint {
            key: SHARE_GROUP_HEARTBEAT_INTERVAL_MS_CONFIG,
            relation: Relation::AtLeast,
            other: SHARE_GROUP_MIN_HEARTBEAT_INTERVAL_MS_CONFIG,
        }
    );
}

#[test]
fn test_record_lock_below_min_even_without_range() {
    let accessor = typed_with(&[
        (SHARE_GROUP_RECORD_LOCK_DURATION_MS_CONFIG, 500),
        (SHARE_GROUP_MIN_RECORD_LOCK_DURATION_MS_CONFIG, 1000),
    ]);
    let err = ShareGroupConfig::new(&accessor).unwrap_err();
    assert_eq!(
        err.keys(),
        vec![SHARE_GROUP_RECORD_LOCK_DURATION_MS_CONFIG, SHARE_GROUP_MIN_RECORD_LOCK_DURATION_MS_CONFIG]
    );
}

#[test]
fn test_session_timeout_family() {
    let err = resolve_raw(&raw(&[(SHARE_GROUP_MAX_SESSION_TIMEOUT_MS_CONFIG, "30000")])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "group.share.max.session.timeout.ms must be greater than or equals to group.share.min.session.timeout.ms"
    );

    let err = resolve_raw(&raw(&[(SHARE_GROUP_SESSION_TIMEOUT_MS_CONFIG, "70000")])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "group.share.session.timeout.ms must be less than or equals to group.share.max.session.timeout.ms"
    );
}

#[test]
fn test_load_from_file_and_environment() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("sharegroup.toml");
    std::fs::write(
        &config_path,
        r#"
        [group.share]
        enable = true
        max.groups = 50
        max.size = 20
        record.lock.duration.ms = 20000
        "#,
    )
    .unwrap();

    std::env::set_var("SGINTEGRATION_GROUP_SHARE_MAX_GROUPS", "75");

    let raw = SourceLoader::new().with_env_prefix("SGINTEGRATION").with_file(&config_path).load().unwrap();
    let config = resolve_raw(&raw).unwrap();

    assert!(config.is_share_group_enabled());
    assert_eq!(config.share_group_max_groups(), 75); // From environment
    assert_eq!(config.share_group_max_size(), 20); // From file
    assert_eq!(config.share_group_record_lock_duration_ms(), 20000);
    assert_eq!(config.share_group_delivery_count_limit(), 5); // Default

    std::env::remove_var("SGINTEGRATION_GROUP_SHARE_MAX_GROUPS");
}

#[test]
fn test_resolved_config_shared_across_threads() {
    let config = std::sync::Arc::new(resolve_raw(&RawConfig::new()).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let config = std::sync::Arc::clone(&config);
            std::thread::spawn(move || config.share_group_record_lock_duration_ms())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 30000);
    }
}
