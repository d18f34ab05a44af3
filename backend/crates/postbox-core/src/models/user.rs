use crate::Identity;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub identity: Identity,

    // Audit
    pub first_seen: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
}
