// ============================================================================
// AUTH STATE - Unauthenticated / Validating / Authenticated
// ============================================================================

use crate::models::Session;
use crate::services::auth_service::GuardOutcome;
use crate::state::route::Route;

#[derive(Clone, Debug, PartialEq, Default)]
pub enum AuthStatus {
    #[default]
    Unauthenticated,
    Validating,
    Authenticated(Session),
}

impl AuthStatus {
    /// Status on first render. A protected route waits for the guard; a
    /// public one may show the locally decoded session in the chrome.
    pub fn initial(route: Route, peeked: Option<Session>) -> AuthStatus {
        if !route.is_public() {
            return AuthStatus::Validating;
        }
        match peeked {
            Some(session) => AuthStatus::Authenticated(session),
            None => AuthStatus::Unauthenticated,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthStatus::Authenticated(session) => Some(session),
            AuthStatus::Unauthenticated | AuthStatus::Validating => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthStatus::Authenticated(_))
    }

    pub fn is_validating(&self) -> bool {
        matches!(self, AuthStatus::Validating)
    }

    /// State after the guard has decided. Public routes keep whatever
    /// was already known.
    pub fn after_guard(&self, outcome: &GuardOutcome) -> AuthStatus {
        match outcome {
            GuardOutcome::Public | GuardOutcome::Superseded => self.clone(),
            GuardOutcome::Authenticated(session) => AuthStatus::Authenticated(session.clone()),
            GuardOutcome::Rejected(_) => AuthStatus::Unauthenticated,
        }
    }

    /// Session a protected view may use: only once the guard has run for
    /// that route. A session from `peek` or login alone is not enough.
    pub fn guarded_session(&self, guarded: Option<Route>, route: Route) -> Option<&Session> {
        if guarded != Some(route) {
            return None;
        }
        self.session()
    }
}
