//! Share group configuration keys, defaults and documentation

use std::sync::LazyLock;

use sharegroup_core::{ConfigValue, Importance};

use crate::{ConfigDef, ValidRange};

// Internal configuration used by integration and system tests.
pub const SHARE_GROUP_ENABLE_CONFIG: &str = "group.share.enable";
pub const SHARE_GROUP_ENABLE_DEFAULT: bool = false;
pub const SHARE_GROUP_ENABLE_DOC: &str = "Enable share groups on the broker.";

pub const SHARE_GROUP_PARTITION_MAX_RECORD_LOCKS_CONFIG: &str = "group.share.partition.max.record.locks";
pub const SHARE_GROUP_PARTITION_MAX_RECORD_LOCKS_DEFAULT: i32 = 200;
pub const SHARE_GROUP_PARTITION_MAX_RECORD_LOCKS_DOC: &str =
    "Share-group record lock limit per share-partition.";

pub const SHARE_GROUP_DELIVERY_COUNT_LIMIT_CONFIG: &str = "group.share.delivery.count.limit";
pub const SHARE_GROUP_DELIVERY_COUNT_LIMIT_DEFAULT: i32 = 5;
pub const SHARE_GROUP_DELIVERY_COUNT_LIMIT_DOC: &str =
    "The maximum number of delivery attempts for a record delivered to a share group.";

pub const SHARE_GROUP_MAX_GROUPS_CONFIG: &str = "group.share.max.groups";
pub const SHARE_GROUP_MAX_GROUPS_DEFAULT: i16 = 10;
pub const SHARE_GROUP_MAX_GROUPS_DOC: &str = "The maximum number of share groups.";

pub const SHARE_GROUP_MAX_SIZE_CONFIG: &str = "group.share.max.size";
pub const SHARE_GROUP_MAX_SIZE_DEFAULT: i16 = 200;
pub const SHARE_GROUP_MAX_SIZE_DOC: &str =
    "The maximum number of consumers that a single share group can accommodate.";

pub const SHARE_GROUP_SESSION_TIMEOUT_MS_CONFIG: &str = "group.share.session.timeout.ms";
pub const SHARE_GROUP_SESSION_TIMEOUT_MS_DEFAULT: i32 = 45000;
pub const SHARE_GROUP_SESSION_TIMEOUT_MS_DOC: &str =
    "The timeout to detect client failures when using the share group protocol.";

pub const SHARE_GROUP_MIN_SESSION_TIMEOUT_MS_CONFIG: &str = "group.share.min.session.timeout.ms";
pub const SHARE_GROUP_MIN_SESSION_TIMEOUT_MS_DEFAULT: i32 = 45000;
pub const SHARE_GROUP_MIN_SESSION_TIMEOUT_MS_DOC: &str =
    "The minimum allowed session timeout for share group members.";

pub const SHARE_GROUP_MAX_SESSION_TIMEOUT_MS_CONFIG: &str = "group.share.max.session.timeout.ms";
pub const SHARE_GROUP_MAX_SESSION_TIMEOUT_MS_DEFAULT: i32 = 60000;
pub const SHARE_GROUP_MAX_SESSION_TIMEOUT_MS_DOC: &str =
    "The maximum allowed session timeout for share group members.";

pub const SHARE_GROUP_HEARTBEAT_INTERVAL_MS_CONFIG: &str = "group.share.heartbeat.interval.ms";
pub const SHARE_GROUP_HEARTBEAT_INTERVAL_MS_DEFAULT: i32 = 5000;
pub const SHARE_GROUP_HEARTBEAT_INTERVAL_MS_DOC: &str =
    "The heartbeat interval given to the members of a share group.";

pub const SHARE_GROUP_MIN_HEARTBEAT_INTERVAL_MS_CONFIG: &str = "group.share.min.heartbeat.interval.ms";
pub const SHARE_GROUP_MIN_HEARTBEAT_INTERVAL_MS_DEFAULT: i32 = 5000;
pub const SHARE_GROUP_MIN_HEARTBEAT_INTERVAL_MS_DOC: &str =
    "The minimum heartbeat interval for share group members.";

pub const SHARE_GROUP_MAX_HEARTBEAT_INTERVAL_MS_CONFIG: &str = "group.share.max.heartbeat.interval.ms";
pub const SHARE_GROUP_MAX_HEARTBEAT_INTERVAL_MS_DEFAULT: i32 = 15000;
pub const SHARE_GROUP_MAX_HEARTBEAT_INTERVAL_MS_DOC: &str =
    "The maximum heartbeat interval for share group members.";

pub const SHARE_GROUP_RECORD_LOCK_DURATION_MS_CONFIG: &str = "group.share.record.lock.duration.ms";
pub const SHARE_GROUP_RECORD_LOCK_DURATION_MS_DEFAULT: i32 = 30000;
pub const SHARE_GROUP_RECORD_LOCK_DURATION_MS_DOC: &str =
    "The record acquisition lock duration in milliseconds for share groups.";

pub const SHARE_GROUP_MIN_RECORD_LOCK_DURATION_MS_CONFIG: &str = "group.share.min.record.lock.duration.ms";
pub const SHARE_GROUP_MIN_RECORD_LOCK_DURATION_MS_DEFAULT: i32 = 15000;
pub const SHARE_GROUP_MIN_RECORD_LOCK_DURATION_MS_DOC: &str =
    "The record acquisition lock minimum duration in milliseconds for share groups.";

pub const SHARE_GROUP_MAX_RECORD_LOCK_DURATION_MS_CONFIG: &str = "group.share.max.record.lock.duration.ms";
pub const SHARE_GROUP_MAX_RECORD_LOCK_DURATION_MS_DEFAULT: i32 = 60000;
pub const SHARE_GROUP_MAX_RECORD_LOCK_DURATION_MS_DOC: &str =
    "The record acquisition lock maximum duration in milliseconds for share groups.";

/// Every share group key, built once and never mutated
pub static SHARE_GROUP_CONFIG_DEF: LazyLock<ConfigDef> = LazyLock::new(|| {
    use ConfigValue::{Bool, Int, Short};
    use Importance::Medium;

    ConfigDef::new()
        .define_internal(
            SHARE_GROUP_ENABLE_CONFIG,
            Bool(SHARE_GROUP_ENABLE_DEFAULT),
            None,
            Medium,
            SHARE_GROUP_ENABLE_DOC,
        )
        .define(
            SHARE_GROUP_DELIVERY_COUNT_LIMIT_CONFIG,
            Int(SHARE_GROUP_DELIVERY_COUNT_LIMIT_DEFAULT),
            Some(ValidRange::between(2, 10)),
            Medium,
            SHARE_GROUP_DELIVERY_COUNT_LIMIT_DOC,
        )
        .define(
            SHARE_GROUP_RECORD_LOCK_DURATION_MS_CONFIG,
            Int(SHARE_GROUP_RECORD_LOCK_DURATION_MS_DEFAULT),
            Some(ValidRange::between(1000, 60000)),
            Medium,
            SHARE_GROUP_RECORD_LOCK_DURATION_MS_DOC,
        )
        .define(
            SHARE_GROUP_MIN_RECORD_LOCK_DURATION_MS_CONFIG,
            Int(SHARE_GROUP_MIN_RECORD_LOCK_DURATION_MS_DEFAULT),
            Some(ValidRange::between(1000, 30000)),
            Medium,
            SHARE_GROUP_MIN_RECORD_LOCK_DURATION_MS_DOC,
        )
        .define(
            SHARE_GROUP_MAX_RECORD_LOCK_DURATION_MS_CONFIG,
            Int(SHARE_GROUP_MAX_RECORD_LOCK_DURATION_MS_DEFAULT),
            Some(ValidRange::between(30000, 3_600_000)),
            Medium,
            SHARE_GROUP_MAX_RECORD_LOCK_DURATION_MS_DOC,
        )
        .define(
            SHARE_GROUP_PARTITION_MAX_RECORD_LOCKS_CONFIG,
            Int(SHARE_GROUP_PARTITION_MAX_RECORD_LOCKS_DEFAULT),
            Some(ValidRange::between(100, 10000)),
            Medium,
            SHARE_GROUP_PARTITION_MAX_RECORD_LOCKS_DOC,
        )
        .define(
            SHARE_GROUP_SESSION_TIMEOUT_MS_CONFIG,
            Int(SHARE_GROUP_SESSION_TIMEOUT_MS_DEFAULT),
            Some(ValidRange::at_least(1)),
            Medium,
            SHARE_GROUP_SESSION_TIMEOUT_MS_DOC,
        )
        .define(
            SHARE_GROUP_MIN_SESSION_TIMEOUT_MS_CONFIG,
            Int(SHARE_GROUP_MIN_SESSION_TIMEOUT_MS_DEFAULT),
            Some(ValidRange::at_least(1)),
            Medium,
            SHARE_GROUP_MIN_SESSION_TIMEOUT_MS_DOC,
        )
        .define(
            SHARE_GROUP_MAX_SESSION_TIMEOUT_MS_CONFIG,
            Int(SHARE_GROUP_MAX_SESSION_TIMEOUT_MS_DEFAULT),
            Some(ValidRange::at_least(1)),
            Medium,
            SHARE_GROUP_MAX_SESSION_TIMEOUT_MS_DOC,
        )
        .define(
            SHARE_GROUP_HEARTBEAT_INTERVAL_MS_CONFIG,
            Int(SHARE_GROUP_HEARTBEAT_INTERVAL_MS_DEFAULT),
            Some(ValidRange::at_least(1)),
            Medium,
            SHARE_GROUP_HEARTBEAT_INTERVAL_MS_DOC,
        )
        .define(
            SHARE_GROUP_MIN_HEARTBEAT_INTERVAL_MS_CONFIG,
            Int(SHARE_GROUP_MIN_HEARTBEAT_INTERVAL_MS_DEFAULT),
            Some(ValidRange::at_least(1)),
            Medium,
            SHARE_GROUP_MIN_HEARTBEAT_INTERVAL_MS_DOC,
        )
        .define(
            SHARE_GROUP_MAX_HEARTBEAT_INTERVAL_MS_CONFIG,
            Int(SHARE_GROUP_MAX_HEARTBEAT_INTERVAL_MS_DEFAULT),
            Some(ValidRange::at_least(1)),
            Medium,
            SHARE_GROUP_MAX_HEARTBEAT_INTERVAL_MS_DOC,
        )
        .define(
            SHARE_GROUP_MAX_GROUPS_CONFIG,
            Short(SHARE_GROUP_MAX_GROUPS_DEFAULT),
            Some(ValidRange::between(1, 100)),
            Medium,
            SHARE_GROUP_MAX_GROUPS_DOC,
        )
        .define(
            SHARE_GROUP_MAX_SIZE_CONFIG,
            Short(SHARE_GROUP_MAX_SIZE_DEFAULT),
            Some(ValidRange::between(10, 1000)),
            Medium,
            SHARE_GROUP_MAX_SIZE_DOC,
        )
});
