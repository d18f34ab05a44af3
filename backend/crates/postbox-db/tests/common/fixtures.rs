use postbox_core::Identity;

use chrono::{DateTime, Utc};

pub fn alice() -> Identity {
    Identity::parse("alice-fingerprint").unwrap()
}

pub fn bob() -> Identity {
    Identity::parse("bob-fingerprint").unwrap()
}

pub fn carol() -> Identity {
    Identity::parse("carol-fingerprint").unwrap()
}

/// Fixed point in time so ordering tests do not depend on the wall clock
pub fn at(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(1_760_000_000 + secs, 0).unwrap()
}
