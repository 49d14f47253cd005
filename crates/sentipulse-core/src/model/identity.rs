//! Authenticated identity models.

use serde::{Deserialize, Serialize};

/// The authenticated user identity backing a user-surface session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: i64,
    pub username: String,
}

/// The authenticated operator identity backing an admin-surface session.
///
/// Admin sessions carry no database id; the backend identifies the
/// operator by its configured username alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminIdentity {
    pub username: String,
}

/// One row of the admin user table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    /// Stored as 0/1 by the backend
    #[serde(default)]
    pub is_admin: i64,
    pub created_at: String,
}

impl UserRecord {
    pub fn admin(&self) -> bool {
        self.is_admin != 0
    }
}
