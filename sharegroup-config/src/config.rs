//! Resolved share group configuration

use std::time::Duration;

use sharegroup_core::{ConfigValue, Result};

use crate::schema::*;
use crate::{ConfigAccessor, ConfigValidator};

/// Immutable snapshot of every share group setting.
///
/// Built once from a [`ConfigAccessor`] and validated before it is returned,
/// so an instance always satisfies the cross-field ordering constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareGroupConfig {
    is_share_group_enabled: bool,
    share_group_partition_max_record_locks: i32,
    share_group_delivery_count_limit: i32,
    share_group_max_groups: i16,
    share_group_max_size: i16,
    share_group_session_timeout_ms: i32,
    share_group_min_session_timeout_ms: i32,
    share_group_max_session_timeout_ms: i32,
    share_group_heartbeat_interval_ms: i32,
    share_group_min_heartbeat_interval_ms: i32,
    share_group_max_heartbeat_interval_ms: i32,
    share_group_record_lock_duration_ms: i32,
    share_group_min_record_lock_duration_ms: i32,
    share_group_max_record_lock_duration_ms: i32,
}

impl ShareGroupConfig {
    /// Extract every share group key from `config` and validate the result.
    ///
    /// Single-field ranges are the accessor's responsibility and are not
    /// re-checked here.
    pub fn new<A: ConfigAccessor + ?Sized>(config: &A) -> Result<Self> {
        let resolved = Self {
            is_share_group_enabled: config.get_bool(SHARE_GROUP_ENABLE_CONFIG)?,
            share_group_partition_max_record_locks: config.get_int(SHARE_GROUP_PARTITION_MAX_RECORD_LOCKS_CONFIG)?,
            share_group_delivery_count_limit: config.get_int(SHARE_GROUP_DELIVERY_COUNT_LIMIT_CONFIG)?,
            share_group_max_groups: config.get_short(SHARE_GROUP_MAX_GROUPS_CONFIG)?,
            share_group_max_size: config.get_short(SHARE_GROUP_MAX_SIZE_CONFIG)?,
            share_group_session_timeout_ms: config.get_int(SHARE_GROUP_SESSION_TIMEOUT_MS_CONFIG)?,
            share_group_min_session_timeout_ms: config.get_int(SHARE_GROUP_MIN_SESSION_TIMEOUT_MS_CONFIG)?,
            share_group_max_session_timeout_ms: config.get_int(SHARE_GROUP_MAX_SESSION_TIMEOUT_MS_CONFIG)?,
            share_group_heartbeat_interval_ms: config.get_int(SHARE_GROUP_HEARTBEAT_INTERVAL_MS_CONFIG)?,
            share_group_min_heartbeat_interval_ms: config.get_int(SHARE_GROUP_MIN_HEARTBEAT_INTERVAL_MS_CONFIG)?,
            share_group_max_heartbeat_interval_ms: config.get_int(SHARE_GROUP_MAX_HEARTBEAT_INTERVAL_MS_CONFIG)?,
            share_group_record_lock_duration_ms: config.get_int(SHARE_GROUP_RECORD_LOCK_DURATION_MS_CONFIG)?,
            share_group_min_record_lock_duration_ms: config
                .get_int(SHARE_GROUP_MIN_RECORD_LOCK_DURATION_MS_CONFIG)?,
            share_group_max_record_lock_duration_ms: config
                .get_int(SHARE_GROUP_MAX_RECORD_LOCK_DURATION_MS_CONFIG)?,
        };

        ConfigValidator::validate(&resolved)?;

        tracing::info!(
            enabled = resolved.is_share_group_enabled,
            max_groups = resolved.share_group_max_groups,
            max_size = resolved.share_group_max_size,
            "share group configuration resolved"
        );

        Ok(resolved)
    }

    pub fn is_share_group_enabled(&self) -> bool {
        self.is_share_group_enabled
    }

    pub fn share_group_partition_max_record_locks(&self) -> i32 {
        self.share_group_partition_max_record_locks
    }

    pub fn share_group_delivery_count_limit(&self) -> i32 {
        self.share_group_delivery_count_limit
    }

    pub fn share_group_max_groups(&self) -> i16 {
        self.share_group_max_groups
    }

    pub fn share_group_max_size(&self) -> i16 {
        self.share_group_max_size
    }

    pub fn share_group_session_timeout_ms(&self) -> i32 {
        self.share_group_session_timeout_ms
    }

    pub fn share_group_min_session_timeout_ms(&self) -> i32 {
        self.share_group_min_session_timeout_ms
    }

    pub fn share_group_max_session_timeout_ms(&self) -> i32 {
        self.share_group_max_session_timeout_ms
    }

    pub fn share_group_heartbeat_interval_ms(&self) -> i32 {
        self.share_group_heartbeat_interval_ms
    }

    pub fn share_group_min_heartbeat_interval_ms(&self) -> i32 {
        self.share_group_min_heartbeat_interval_ms
    }

    pub fn share_group_max_heartbeat_interval_ms(&self) -> i32 {
        self.share_group_max_heartbeat_interval_ms
    }

    pub fn share_group_record_lock_duration_ms(&self) -> i32 {
        self.share_group_record_lock_duration_ms
    }

    pub fn share_group_min_record_lock_duration_ms(&self) -> i32 {
        self.share_group_min_record_lock_duration_ms
    }

    pub fn share_group_max_record_lock_duration_ms(&self) -> i32 {
        self.share_group_max_record_lock_duration_ms
    }

    /// Get session timeout as Duration
    pub fn share_group_session_timeout(&self) -> Duration {
        millis(self.share_group_session_timeout_ms)
    }

    /// Get heartbeat interval as Duration
    pub fn share_group_heartbeat_interval(&self) -> Duration {
        millis(self.share_group_heartbeat_interval_ms)
    }

    /// Get record lock duration as Duration
    pub fn share_group_record_lock_duration(&self) -> Duration {
        millis(self.share_group_record_lock_duration_ms)
    }

    /// Every resolved value paired with its wire key, in schema order
    pub fn values(&self) -> Vec<(&'static str, ConfigValue)> {
        SHARE_GROUP_CONFIG_DEF
            .keys()
            .iter()
            .filter_map(|key| self.value(key.name).map(|value| (key.name, value)))
            .collect()
    }

    /// Resolved value of a single wire key
    pub fn value(&self, key: &str) -> Option<ConfigValue> {
        use ConfigValue::{Bool, Int, Short};

        let value = match key {
            SHARE_GROUP_ENABLE_CONFIG => Bool(self.is_share_group_enabled),
            SHARE_GROUP_PARTITION_MAX_RECORD_LOCKS_CONFIG => Int(self.share_group_partition_max_record_locks),
            SHARE_GROUP_DELIVERY_COUNT_LIMIT_CONFIG => Int(self.share_group_delivery_count_limit),
            SHARE_GROUP_MAX_GROUPS_CONFIG => Short(self.share_group_max_groups),
            SHARE_GROUP_MAX_SIZE_CONFIG => Short(self.share_group_max_size),
            SHARE_GROUP_SESSION_TIMEOUT_MS_CONFIG => Int(self.share_group_session_timeout_ms),
            SHARE_GROUP_MIN_SESSION_TIMEOUT_MS_CONFIG => Int(self.share_group_min_session_timeout_ms),
            SHARE_GROUP_MAX_SESSION_TIMEOUT_MS_CONFIG => Int(self.share_group_max_session_timeout_ms),
            SHARE_GROUP_HEARTBEAT_INTERVAL_MS_CONFIG => Int(self.share_group_heartbeat_interval_ms),
            SHARE_GROUP_MIN_HEARTBEAT_INTERVAL_MS_CONFIG => Int(self.share_group_min_heartbeat_interval_ms),
            SHARE_GROUP_MAX_HEARTBEAT_INTERVAL_MS_CONFIG => Int(self.share_group_max_heartbeat_interval_ms),
            SHARE_GROUP_RECORD_LOCK_DURATION_MS_CONFIG => Int(self.share_group_record_lock_duration_ms),
            SHARE_GROUP_MIN_RECORD_LOCK_DURATION_MS_CONFIG => Int(self.share_group_min_record_lock_duration_ms),
            SHARE_GROUP_MAX_RECORD_LOCK_DURATION_MS_CONFIG => Int(self.share_group_max_record_lock_duration_ms),
            _ => return None,
        };
        Some(value)
    }
}

// Ranges are at least 1 for every timing key, so the conversion never clamps
// a value the registry accepted.
fn millis(ms: i32) -> Duration {
    Duration::from_millis(u64::try_from(ms).unwrap_or(0))
}
