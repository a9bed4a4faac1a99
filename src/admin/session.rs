//! Admin session gate.
//!
//! Protected surfaces consult the gate before acting. While the initial
//! token check is still in flight the state is [`SessionState::Loading`]
//! and the decision is to wait, never to deny; denying early would bounce
//! a valid session to the login screen on every page load.

use crate::domain::AdminUserResponse;

/// Resolution of the current session.
#[derive(Debug, Clone)]
pub enum SessionState {
    /// Token check in flight; nothing is known yet.
    Loading,
    /// Valid session for this admin.
    Authenticated(AdminUserResponse),
    /// No session, or the token failed verification.
    Unauthenticated,
}

/// What a protected surface should do right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Hold rendering, show nothing protected, do not redirect.
    Wait,
    /// Send to login.
    Deny,
    Allow,
}

/// Session gate for the admin area. Starts in `Loading` and moves to a
/// terminal state once the token check resolves.
#[derive(Debug, Clone)]
pub struct SessionGate {
    state: SessionState,
}

impl Default for SessionGate {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionGate {
    pub fn new() -> Self {
        Self {
            state: SessionState::Loading,
        }
    }

    /// Token verified; remember who this is.
    pub fn resolve_authenticated(&mut self, user: AdminUserResponse) {
        self.state = SessionState::Authenticated(user);
    }

    /// Token missing, expired, or rejected.
    pub fn resolve_unauthenticated(&mut self) {
        self.state = SessionState::Unauthenticated;
    }

    /// Drop back to `Loading`, e.g. when re-checking after a token refresh.
    pub fn reset(&mut self) {
        self.state = SessionState::Loading;
    }

    /// Explicit sign-out: forget the user and deny immediately, without
    /// passing through `Loading`.
    pub fn logout(&mut self) {
        self.state = SessionState::Unauthenticated;
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn user(&self) -> Option<&AdminUserResponse> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn decision(&self) -> GateDecision {
        match self.state {
            SessionState::Loading => GateDecision::Wait,
            SessionState::Unauthenticated => GateDecision::Deny,
            SessionState::Authenticated(_) => GateDecision::Allow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn admin() -> AdminUserResponse {
        AdminUserResponse {
            id: Uuid::new_v4(),
            email: "admin@example.com".to_string(),
            name: "Admin".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_loading_waits_instead_of_denying() {
        let gate = SessionGate::new();
        assert_eq!(gate.decision(), GateDecision::Wait);
    }

    #[test]
    fn test_resolved_session_allows() {
        let mut gate = SessionGate::new();
        gate.resolve_authenticated(admin());
        assert_eq!(gate.decision(), GateDecision::Allow);
        assert!(gate.user().is_some());
    }

    #[test]
    fn test_failed_check_denies() {
        let mut gate = SessionGate::new();
        gate.resolve_unauthenticated();
        assert_eq!(gate.decision(), GateDecision::Deny);
        assert!(gate.user().is_none());
    }

    #[test]
    fn test_logout_denies_without_reloading() {
        let mut gate = SessionGate::new();
        gate.resolve_authenticated(admin());
        gate.logout();
        assert_eq!(gate.decision(), GateDecision::Deny);
        assert!(gate.user().is_none());
    }

    #[test]
    fn test_reset_returns_to_wait() {
        let mut gate = SessionGate::new();
        gate.resolve_authenticated(admin());
        gate.reset();
        assert_eq!(gate.decision(), GateDecision::Wait);
    }
}
