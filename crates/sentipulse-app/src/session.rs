//! Session surfaces.
//!
//! The user and admin surfaces are separate roots, each owning its own
//! session value and lifecycle; one can never hold the other's identity.

use crate::api::BackendApi;
use sentipulse_core::Result;
use sentipulse_core::model::{AdminIdentity, UserIdentity};
use std::sync::Arc;

/// The user-facing surface: session probe, login/signup/logout.
pub struct UserSurface<A: BackendApi> {
    api: Arc<A>,
    session: Option<UserIdentity>,
}

impl<A: BackendApi> UserSurface<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api, session: None }
    }

    /// Probes the backend once for an existing session.
    ///
    /// A silent probe: any failure (network, status, missing identity)
    /// just leaves the surface unauthenticated, logged at debug level.
    pub async fn resolve(&mut self) {
        match self.api.me().await {
            Ok(response) => self.session = response.user,
            Err(err) => tracing::debug!("User session probe failed: {err}"),
        }
    }

    /// Starts a session with existing credentials.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<UserIdentity> {
        let response = self.api.login(username, password).await?;
        self.session = Some(response.user.clone());
        Ok(response.user)
    }

    /// Creates an account; the backend signs the new user straight in.
    pub async fn signup(&mut self, username: &str, password: &str) -> Result<UserIdentity> {
        let response = self.api.signup(username, password).await?;
        self.session = Some(response.user.clone());
        Ok(response.user)
    }

    /// Ends the session.
    ///
    /// The local session is cleared even when the backend call fails; the
    /// cookie may outlive the process, but the surface owns only its own
    /// state.
    pub async fn logout(&mut self) {
        if let Err(err) = self.api.logout().await {
            tracing::warn!("Logout request failed: {err}");
        }
        self.session = None;
    }

    pub fn session(&self) -> Option<&UserIdentity> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

/// The admin surface: operator session probe, login/logout.
pub struct AdminSurface<A: BackendApi> {
    api: Arc<A>,
    session: Option<AdminIdentity>,
}

impl<A: BackendApi> AdminSurface<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api, session: None }
    }

    /// Probes the backend once for an existing admin session. Silent, like
    /// the user probe.
    pub async fn resolve(&mut self) {
        match self.api.admin_me().await {
            Ok(response) => self.session = response.admin,
            Err(err) => tracing::debug!("Admin session probe failed: {err}"),
        }
    }

    /// Starts an operator session. The login endpoint only acknowledges,
    /// so the identity is the username that just authenticated.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<AdminIdentity> {
        self.api.admin_login(username, password).await?;
        let identity = AdminIdentity {
            username: username.to_string(),
        };
        self.session = Some(identity.clone());
        Ok(identity)
    }

    /// Ends the operator session; local state clears unconditionally.
    pub async fn logout(&mut self) {
        if let Err(err) = self.api.admin_logout().await {
            tracing::warn!("Admin logout request failed: {err}");
        }
        self.session = None;
    }

    pub fn session(&self) -> Option<&AdminIdentity> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockBackend;
    use sentipulse_client::dto::{Acknowledged, AdminMeResponse, AuthResponse, MeResponse};
    use sentipulse_core::PulseError;

    #[tokio::test]
    async fn test_resolve_sets_session_when_identity_present() {
        let api = Arc::new(MockBackend::new());
        api.push_me(Ok(MeResponse {
            user: Some(UserIdentity {
                id: 1,
                username: "nisar".into(),
            }),
        }));
        let mut surface = UserSurface::new(api);
        surface.resolve().await;
        assert_eq!(surface.session().unwrap().username, "nisar");
    }

    #[tokio::test]
    async fn test_resolve_swallows_failures() {
        let api = Arc::new(MockBackend::new());
        api.push_me(Err(PulseError::network("connection refused")));
        let mut surface = UserSurface::new(api);
        surface.resolve().await;
        assert!(!surface.is_authenticated());
    }

    #[tokio::test]
    async fn test_resolve_with_null_identity_stays_unauthenticated() {
        let api = Arc::new(MockBackend::new());
        api.push_me(Ok(MeResponse { user: None }));
        let mut surface = UserSurface::new(api);
        surface.resolve().await;
        assert!(!surface.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_populates_session() {
        let api = Arc::new(MockBackend::new());
        api.push_login(Ok(AuthResponse {
            ok: true,
            user: UserIdentity {
                id: 7,
                username: "nisar".into(),
            },
        }));
        let mut surface = UserSurface::new(api);
        let identity = surface.login("nisar", "secret123").await.unwrap();
        assert_eq!(identity.username, "nisar");
        assert!(surface.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_failure_leaves_surface_unauthenticated() {
        let api = Arc::new(MockBackend::new());
        api.push_login(Err(PulseError::status(401, "invalid credentials")));
        let mut surface = UserSurface::new(api);
        let err = surface.login("nisar", "wrong").await.unwrap_err();
        assert_eq!(err.to_string(), "invalid credentials");
        assert!(!surface.is_authenticated());
    }

    #[tokio::test]
    async fn test_logout_clears_session_even_on_failure() {
        let api = Arc::new(MockBackend::new());
        api.push_login(Ok(AuthResponse {
            ok: true,
            user: UserIdentity {
                id: 7,
                username: "nisar".into(),
            },
        }));
        api.push_logout(Err(PulseError::network("connection reset")));
        let mut surface = UserSurface::new(api);
        surface.login("nisar", "secret123").await.unwrap();
        surface.logout().await;
        assert!(!surface.is_authenticated());
    }

    #[tokio::test]
    async fn test_admin_session_never_touches_user_surface() {
        let api = Arc::new(MockBackend::new());
        api.push_admin_me(Ok(AdminMeResponse {
            admin: Some(AdminIdentity {
                username: "admin".into(),
            }),
        }));
        api.push_me(Ok(MeResponse { user: None }));

        let mut admin = AdminSurface::new(api.clone());
        let mut user = UserSurface::new(api);
        admin.resolve().await;
        user.resolve().await;

        assert!(admin.is_authenticated());
        assert!(!user.is_authenticated());
    }

    #[tokio::test]
    async fn test_admin_login_uses_authenticated_username() {
        let api = Arc::new(MockBackend::new());
        api.push_admin_login(Ok(Acknowledged { ok: true }));
        let mut surface = AdminSurface::new(api);
        let identity = surface.login("admin", "hunter2").await.unwrap();
        assert_eq!(identity.username, "admin");
    }
}
