//! Cross-field validation of the resolved configuration

use sharegroup_core::{Relation, Result, ShareGroupError};

use crate::schema::*;
use crate::ShareGroupConfig;

/// One ordering requirement between two independently configured keys
#[derive(Debug, Clone, Copy)]
pub struct OrderingCheck {
    pub key: &'static str,
    pub relation: Relation,
    pub other: &'static str,
    left: fn(&ShareGroupConfig) -> i32,
    right: fn(&ShareGroupConfig) -> i32,
}

impl OrderingCheck {
    const fn new(
        key: &'static str,
        left: fn(&ShareGroupConfig) -> i32,
        relation: Relation,
        other: &'static str,
        right: fn(&ShareGroupConfig) -> i32,
    ) -> Self {
        Self { key, relation, other, left, right }
    }

    pub fn holds(&self, config: &ShareGroupConfig) -> bool {
        self.relation.holds((self.left)(config), (self.right)(config))
    }

    pub fn check(&self, config: &ShareGroupConfig) -> Result<()> {
        if self.holds(config) {
            Ok(())
        } else {
            Err(ShareGroupError::constraint(self.key, self.relation, self.other))
        }
    }
}

/// Ordering checks in evaluation order: heartbeat, session timeout, record lock duration
pub const ORDERING_CHECKS: [OrderingCheck; 8] = [
    OrderingCheck::new(
        SHARE_GROUP_MAX_HEARTBEAT_INTERVAL_MS_CONFIG,
        ShareGroupConfig::share_group_max_heartbeat_interval_ms,
        Relation::AtLeast,
        SHARE_GROUP_MIN_HEARTBEAT_INTERVAL_MS_CONFIG,
        ShareGroupConfig::share_group_min_heartbeat_interval_ms,
    ),
    OrderingCheck::new(
        SHARE_GROUP_HEARTBEAT_INTERVAL_MS_CONFIG,
        ShareGroupConfig::share_group_heartbeat_interval_ms,
        Relation::AtLeast,
        SHARE_GROUP_MIN_HEARTBEAT_INTERVAL_MS_CONFIG,
        ShareGroupConfig::share_group_min_heartbeat_interval_ms,
    ),
    OrderingCheck::new(
        SHARE_GROUP_HEARTBEAT_INTERVAL_MS_CONFIG,
        ShareGroupConfig::share_group_heartbeat_interval_ms,
        Relation::AtMost,
        SHARE_GROUP_MAX_HEARTBEAT_INTERVAL_MS_CONFIG,
        ShareGroupConfig::share_group_max_heartbeat_interval_ms,
    ),
    OrderingCheck::new(
        SHARE_GROUP_MAX_SESSION_TIMEOUT_MS_CONFIG,
        ShareGroupConfig::share_group_max_session_timeout_ms,
        Relation::AtLeast,
        SHARE_GROUP_MIN_SESSION_TIMEOUT_MS_CONFIG,
        ShareGroupConfig::share_group_min_session_timeout_ms,
    ),
    OrderingCheck::new(
        SHARE_GROUP_SESSION_TIMEOUT_MS_CONFIG,
        ShareGroupConfig::share_group_session_timeout_ms,
        Relation::AtLeast,
        SHARE_GROUP_MIN_SESSION_TIMEOUT_MS_CONFIG,
        ShareGroupConfig::share_group_min_session_timeout_ms,
    ),
    OrderingCheck::new(
        SHARE_GROUP_SESSION_TIMEOUT_MS_CONFIG,
        ShareGroupConfig::share_group_session_timeout_ms,
        Relation::AtMost,
        SHARE_GROUP_MAX_SESSION_TIMEOUT_MS_CONFIG,
        ShareGroupConfig::share_group_max_session_timeout_ms,
    ),
    OrderingCheck::new(
        SHARE_GROUP_RECORD_LOCK_DURATION_MS_CONFIG,
        ShareGroupConfig::share_group_record_lock_duration_ms,
        Relation::AtLeast,
        SHARE_GROUP_MIN_RECORD_LOCK_DURATION_MS_CONFIG,
        ShareGroupConfig::share_group_min_record_lock_duration_ms,
    ),
    OrderingCheck::new(
        SHARE_GROUP_MAX_RECORD_LOCK_DURATION_MS_CONFIG,
        ShareGroupConfig::share_group_max_record_lock_duration_ms,
        Relation::AtLeast,
        SHARE_GROUP_RECORD_LOCK_DURATION_MS_CONFIG,
        ShareGroupConfig::share_group_record_lock_duration_ms,
    ),
];

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Run every ordering check, stopping at the first violation
    pub fn validate(config: &ShareGroupConfig) -> Result<()> {
        for check in &ORDERING_CHECKS {
            check.check(config)?;
        }

        tracing::debug!(checks = ORDERING_CHECKS.len(), "share group configuration passed ordering checks");
        Ok(())
    }
}
