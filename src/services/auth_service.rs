// ============================================================================
// AUTH SERVICE - Session guard, login and logout
// ============================================================================
// The guard only decides. Navigation and toasts are executed by the caller
// (see hooks::use_auth), after the credential has been written or cleared.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Utc};

use crate::error::AppError;
use crate::models::Session;
use crate::services::gateway::Gateway;
use crate::services::session_decoder::{decode_session, validate_session};
use crate::services::token_store::TokenStore;
use crate::state::route::Route;

/// Why a protected route was refused
#[derive(Clone, Debug, PartialEq)]
pub enum Rejection {
    MissingCredential,
    Invalid(String),
    Expired,
    /// `getAuth` refused the session or could not be reached
    Revalidation(AppError),
}

impl Rejection {
    /// Text shown in the notification that accompanies the redirect
    pub fn message(&self) -> String {
        match self {
            Rejection::MissingCredential => "User not logged in".to_string(),
            Rejection::Invalid(_) => "Invalid session. Log in again".to_string(),
            Rejection::Expired => AppError::Expired.to_string(),
            Rejection::Revalidation(error) => error.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum GuardOutcome {
    /// Route is on the public allow-list
    Public,
    Authenticated(Session),
    /// Credential already cleared; the caller must redirect
    Rejected(Rejection),
    /// The stored credential changed while `getAuth` was pending. Nothing
    /// was written; the caller drops this result.
    Superseded,
}

impl GuardOutcome {
    pub fn redirect(&self) -> Option<Route> {
        match self {
            GuardOutcome::Rejected(_) => Some(Route::Login),
            GuardOutcome::Public | GuardOutcome::Authenticated(_) | GuardOutcome::Superseded => None,
        }
    }
}

/// Local checks only: presence, structure, expiry
pub fn check_credential(credential: Option<&str>, now: DateTime<Utc>) -> Result<Session, Rejection> {
    let Some(token) = credential else {
        return Err(Rejection::MissingCredential);
    };

    match decode_session(Some(token)).and_then(|session| validate_session(session, now)) {
        Ok(session) => Ok(session),
        Err(AppError::Expired) => Err(Rejection::Expired),
        Err(e) => Err(Rejection::Invalid(e.to_string())),
    }
}

/// Application-scoped owner of the session. All credential reads go
/// through the injected store.
pub struct SessionProvider {
    tokens: Rc<dyn TokenStore>,
    gateway: Gateway,
    revalidate: bool,
    /// Credential already confirmed by login or `getAuth`
    verified: RefCell<Option<String>>,
}

impl SessionProvider {
    pub fn new(tokens: Rc<dyn TokenStore>, gateway: Gateway, revalidate: bool) -> Self {
        Self {
            tokens,
            gateway,
            revalidate,
            verified: RefCell::new(None),
        }
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    /// Local view of the stored session, used for chrome on public pages.
    /// Never clears or revalidates anything.
    pub fn peek(&self, now: DateTime<Utc>) -> Option<Session> {
        check_credential(self.tokens.get_credential().as_deref(), now).ok()
    }

    /// Runs when a route mounts
    pub async fn guard(&self, route: Route, now: DateTime<Utc>) -> GuardOutcome {
        if route.is_public() {
            return GuardOutcome::Public;
        }

        let credential = self.tokens.get_credential();
        let session = match check_credential(credential.as_deref(), now) {
            Ok(session) => session,
            Err(rejection) => return self.reject(rejection),
        };

        let already_verified = self.verified.borrow().as_deref() == credential.as_deref();
        if self.revalidate && !already_verified {
            log::debug!("🔐 Revalidating session for user {}", session.subject_id);
            let revalidated = self.gateway.get_auth(session.subject_id).await;

            // Logout or a new login may have happened during the round trip
            if self.tokens.get_credential() != credential {
                log::debug!("⏭️ Credential changed during revalidation, dropping result");
                return GuardOutcome::Superseded;
            }

            let profile = match revalidated {
                Ok(profile) => profile,
                Err(e) => return self.reject(Rejection::Revalidation(e)),
            };
            if let Some(code) = profile.role.and_then(|role| role.id) {
                if code != session.role.code() {
                    log::warn!("⚠️ getAuth reports role {} but token says {}", code, session.role.code());
                }
            }
            *self.verified.borrow_mut() = credential;
        }

        log::info!("✅ Session valid for user {} ({})", session.subject_id, session.role);
        GuardOutcome::Authenticated(session)
    }

    /// Stores the credential before returning, so the caller can navigate
    /// straight to a protected route. On failure nothing changes.
    pub async fn login(&self, email: &str, password: &str, now: DateTime<Utc>) -> Result<Session, AppError> {
        let payload = self.gateway.login(email, password).await?;

        let session = validate_session(decode_session(Some(&payload.token))?, now)?;
        if payload.user_id != session.subject_id.to_string() {
            log::warn!(
                "⚠️ Login returned user {} but token names {}",
                payload.user_id,
                session.subject_id
            );
        }

        self.tokens.set_credential(&payload.token)?;
        *self.verified.borrow_mut() = Some(payload.token);

        log::info!("✅ Login successful for user {}", session.subject_id);
        Ok(session)
    }

    /// Clears the credential; the caller navigates to the returned route
    pub fn logout(&self) -> Route {
        self.tokens.clear_credential();
        *self.verified.borrow_mut() = None;
        log::info!("👋 Logout");
        Route::Login
    }

    fn reject(&self, rejection: Rejection) -> GuardOutcome {
        self.tokens.clear_credential();
        *self.verified.borrow_mut() = None;
        log::warn!("🚫 Session rejected: {:?}", rejection);
        GuardOutcome::Rejected(rejection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::services::session_decoder::test_tokens::token_for;
    use crate::services::testing::RecordingTransport;
    use crate::services::token_store::MemoryTokenStore;
    use chrono::Duration;
    use futures::executor::block_on;
    use serde_json::json;

    struct Fixture {
        transport: Rc<RecordingTransport>,
        store: Rc<MemoryTokenStore>,
        provider: SessionProvider,
    }

    fn fixture(stored: Option<&str>, revalidate: bool) -> Fixture {
        let transport = Rc::new(RecordingTransport::new());
        let store = Rc::new(match stored {
            Some(token) => MemoryTokenStore::with_credential(token),
            None => MemoryTokenStore::new(),
        });
        let gateway = Gateway::new(transport.clone(), store.clone());
        let provider = SessionProvider::new(store.clone(), gateway, revalidate);
        Fixture {
            transport,
            store,
            provider,
        }
    }

    fn auth_ok() -> serde_json::Value {
        json!({ "getAuth": { "name": "Ana", "email": "a@x.io", "role": { "id": "0" } } })
    }

    #[test]
    fn undecodable_credentials_are_rejected_and_cleared() {
        for bad in ["garbage", "a.b.c", "x.e30.y"] {
            let f = fixture(Some(bad), true);
            let outcome = block_on(f.provider.guard(Route::Dashboard, Utc::now()));

            assert!(matches!(outcome, GuardOutcome::Rejected(Rejection::Invalid(_))), "{}", bad);
            assert_eq!(outcome.redirect(), Some(Route::Login));
            assert_eq!(f.store.get_credential(), None);
            assert!(f.transport.calls().is_empty());
        }
    }

    #[test]
    fn missing_credential_is_rejected() {
        let f = fixture(None, true);
        let outcome = block_on(f.provider.guard(Route::Dashboard, Utc::now()));
        assert_eq!(outcome, GuardOutcome::Rejected(Rejection::MissingCredential));
        assert_eq!(Rejection::MissingCredential.message(), "User not logged in");
    }

    #[test]
    fn token_expired_one_second_ago_redirects_without_network() {
        let now = Utc::now();
        let token = token_for(42, "0", now.timestamp() - 1);
        let f = fixture(Some(&token), true);
        f.transport.respond("GetAuth", Ok(auth_ok()));

        let outcome = block_on(f.provider.guard(Route::Dashboard, now));

        assert_eq!(outcome, GuardOutcome::Rejected(Rejection::Expired));
        assert_eq!(outcome.redirect(), Some(Route::Login));
        assert_eq!(f.store.get_credential(), None);
        assert_eq!(f.transport.count("GetAuth"), 0);
    }

    #[test]
    fn expiry_equal_to_now_counts_as_expired() {
        let now = DateTime::<Utc>::from_timestamp(1_900_000_000, 0).unwrap();
        let token = token_for(1, "2", now.timestamp());
        assert_eq!(check_credential(Some(&token), now), Err(Rejection::Expired));
        assert!(check_credential(Some(&token), now - Duration::seconds(1)).is_ok());
    }

    #[test]
    fn valid_token_is_revalidated_once() {
        let now = Utc::now();
        let token = token_for(42, "0", now.timestamp() + 3600);
        let f = fixture(Some(&token), true);
        f.transport.respond("GetAuth", Ok(auth_ok()));

        let outcome = block_on(f.provider.guard(Route::Dashboard, now));
        let GuardOutcome::Authenticated(session) = outcome else {
            panic!("expected an authenticated session");
        };
        assert_eq!(session.subject_id, 42);
        assert_eq!(session.role, Role::Admin);

        let call = &f.transport.calls()[0];
        assert_eq!(call.operation, "GetAuth");
        assert_eq!(call.variables["userId"], 42);
        assert_eq!(call.bearer.as_deref(), Some(token.as_str()));

        // Same credential on the next mount: no second round trip
        block_on(f.provider.guard(Route::Dashboard, now));
        assert_eq!(f.transport.count("GetAuth"), 1);
    }

    #[test]
    fn failed_revalidation_rejects_and_clears() {
        let now = Utc::now();
        let token = token_for(42, "1", now.timestamp() + 3600);
        let f = fixture(Some(&token), true);
        f.transport.respond("GetAuth", Err(AppError::Remote("Unauthenticated".into())));

        let outcome = block_on(f.provider.guard(Route::Dashboard, now));

        assert_eq!(
            outcome,
            GuardOutcome::Rejected(Rejection::Revalidation(AppError::Remote("Unauthenticated".into())))
        );
        assert_eq!(f.store.get_credential(), None);
    }

    #[test]
    fn credential_cleared_during_revalidation_is_dropped() {
        let now = Utc::now();
        let token = token_for(42, "0", now.timestamp() + 3600);
        let f = fixture(Some(&token), true);
        f.transport.respond("GetAuth", Ok(auth_ok()));
        let store = f.store.clone();
        f.transport.during_call(move || store.clear_credential());

        let outcome = block_on(f.provider.guard(Route::Dashboard, now));

        assert_eq!(outcome, GuardOutcome::Superseded);
        assert_eq!(outcome.redirect(), None);
        assert_eq!(f.store.get_credential(), None);
        assert!(f.provider.verified.borrow().is_none());
    }

    #[test]
    fn new_login_during_revalidation_keeps_the_new_credential() {
        let now = Utc::now();
        let old = token_for(42, "0", now.timestamp() + 3600);
        let new = token_for(7, "1", now.timestamp() + 3600);
        let f = fixture(Some(&old), true);
        f.transport.respond("GetAuth", Err(AppError::Remote("Unauthenticated".into())));
        let store = f.store.clone();
        let replacement = new.clone();
        f.transport.during_call(move || {
            let _ = store.set_credential(&replacement);
        });

        let outcome = block_on(f.provider.guard(Route::Dashboard, now));

        assert_eq!(outcome, GuardOutcome::Superseded);
        assert_eq!(f.store.get_credential().as_deref(), Some(new.as_str()));
        assert!(f.provider.verified.borrow().is_none());
    }

    #[test]
    fn verified_marker_always_matches_the_store() {
        let now = Utc::now();
        let token = token_for(42, "0", now.timestamp() + 3600);
        let f = fixture(Some(&token), true);
        f.transport.respond("GetAuth", Ok(auth_ok()));

        block_on(f.provider.guard(Route::Dashboard, now));
        assert_eq!(f.provider.verified.borrow().as_deref(), Some(token.as_str()));

        f.provider.logout();
        assert!(f.provider.verified.borrow().is_none());

        // Same token stored again is not trusted without a new round trip
        f.store.set_credential(&token).unwrap();
        block_on(f.provider.guard(Route::Dashboard, now));
        assert_eq!(f.transport.count("GetAuth"), 2);
        assert_eq!(f.provider.verified.borrow().as_deref(), f.store.get_credential().as_deref());
    }

    #[test]
    fn revalidation_can_be_disabled() {
        let now = Utc::now();
        let token = token_for(7, "2", now.timestamp() + 60);
        let f = fixture(Some(&token), false);

        let outcome = block_on(f.provider.guard(Route::Dashboard, now));
        assert!(matches!(outcome, GuardOutcome::Authenticated(_)));
        assert!(f.transport.calls().is_empty());
    }

    #[test]
    fn public_routes_bypass_the_guard() {
        let f = fixture(Some("garbage"), true);
        for route in [Route::Home, Route::Login, Route::Register] {
            assert_eq!(block_on(f.provider.guard(route, Utc::now())), GuardOutcome::Public);
        }
        assert_eq!(f.store.get_credential().as_deref(), Some("garbage"));
    }

    #[test]
    fn login_then_protected_mount_needs_no_revalidation() {
        let now = Utc::now();
        let token = token_for(42, "1", now.timestamp() + 3600);
        let f = fixture(None, true);
        f.transport.respond(
            "Login",
            Ok(json!({ "login": { "userId": 42, "token": token, "tokenExpiration": 1, "role": "1" } })),
        );

        let session = block_on(f.provider.login("a@x.io", "pw", now)).unwrap();
        assert_eq!(session.role, Role::Customer);
        assert_eq!(f.store.get_credential().as_deref(), Some(token.as_str()));

        let outcome = block_on(f.provider.guard(Route::Dashboard, now));
        assert_eq!(outcome, GuardOutcome::Authenticated(session));
        assert_eq!(f.transport.count("GetAuth"), 0);
    }

    #[test]
    fn failed_login_leaves_storage_untouched() {
        let f = fixture(Some("previous"), true);
        f.transport.respond("Login", Err(AppError::Remote("Invalid credentials".into())));

        let result = block_on(f.provider.login("a@x.io", "wrong", Utc::now()));

        assert_eq!(result, Err(AppError::Remote("Invalid credentials".into())));
        assert_eq!(f.store.get_credential().as_deref(), Some("previous"));
    }

    #[test]
    fn login_with_undecodable_token_stores_nothing() {
        let f = fixture(None, true);
        f.transport.respond(
            "Login",
            Ok(json!({ "login": { "userId": 1, "token": "opaque", "role": "1" } })),
        );

        let result = block_on(f.provider.login("a@x.io", "pw", Utc::now()));
        assert!(matches!(result, Err(AppError::Decode(_))));
        assert_eq!(f.store.get_credential(), None);
    }

    #[test]
    fn peek_is_local_and_side_effect_free() {
        let now = Utc::now();
        let expired = fixture(Some(&token_for(1, "0", now.timestamp() - 10)), true);
        assert_eq!(expired.provider.peek(now), None);
        assert!(expired.store.get_credential().is_some());

        let live = fixture(Some(&token_for(1, "0", now.timestamp() + 10)), true);
        assert_eq!(live.provider.peek(now).map(|s| s.subject_id), Some(1));
        assert!(live.transport.calls().is_empty());
    }

    #[test]
    fn logout_clears_the_credential() {
        let token = token_for(42, "0", Utc::now().timestamp() + 3600);
        let f = fixture(Some(&token), true);

        assert_eq!(f.provider.logout(), Route::Login);
        assert_eq!(f.store.get_credential(), None);
    }
}
