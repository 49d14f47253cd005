//! Auth endpoint responses.

use sentipulse_core::model::{AdminIdentity, UserIdentity};
use serde::{Deserialize, Serialize};

/// `/auth/me`: the silent session probe.
///
/// `user` is `null` when no session exists; the probe never errors on it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MeResponse {
    #[serde(default)]
    pub user: Option<UserIdentity>,
}

/// `/auth/login` and `/auth/signup` on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub ok: bool,
    pub user: UserIdentity,
}

/// `/admin/me`: the admin-surface session probe.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AdminMeResponse {
    #[serde(default)]
    pub admin: Option<AdminIdentity>,
}

/// Bare `{ok}` acknowledgements (logout, admin login).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Acknowledged {
    #[serde(default)]
    pub ok: bool,
}
