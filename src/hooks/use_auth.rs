// ============================================================================
// USE AUTH HOOK - Runs the guard on route changes, executes its effects
// ============================================================================
// The provider decides; this hook toasts and navigates. The credential is
// already written (login) or cleared (rejection, logout) when we navigate.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use yew::prelude::*;

use crate::hooks::use_route::UseRouteHandle;
use crate::hooks::use_toast::{Toast, UseToastHandle};
use crate::models::Session;
use crate::services::{AppServices, GuardOutcome};
use crate::state::{AuthStatus, Route};

#[derive(Clone, PartialEq)]
pub struct UseAuthHandle {
    pub status: UseStateHandle<AuthStatus>,
    /// Route the current status was confirmed for by the guard
    pub guarded: UseStateHandle<Option<Route>>,
    pub pending: UseStateHandle<bool>,
    pub login: Callback<(String, String)>,
    pub logout: Callback<()>,
}

impl UseAuthHandle {
    /// Session for a protected view, available only after its guard ran
    pub fn session_for(&self, route: Route) -> Option<Session> {
        self.status.guarded_session(*self.guarded, route).cloned()
    }
}

fn bump(generation: &Rc<RefCell<u64>>) -> u64 {
    let mut counter = generation.borrow_mut();
    *counter += 1;
    *counter
}

#[hook]
pub fn use_auth(services: &AppServices, router: &UseRouteHandle, toast: &UseToastHandle) -> UseAuthHandle {
    let status = {
        let services = services.clone();
        let route = *router.route;
        use_state(move || AuthStatus::initial(route, services.auth.peek(Utc::now())))
    };
    let guarded = use_state(|| None::<Route>);
    let pending = use_state(|| false);
    // Bumped on every route change, login and logout; a guard result
    // carrying an older ticket is dropped
    let generation: Rc<RefCell<u64>> = use_mut_ref(|| 0);

    // Guard every protected route on mount
    {
        let status = status.clone();
        let guarded = guarded.clone();
        let generation = generation.clone();
        let services = services.clone();
        let navigate = router.navigate.clone();
        let open_toast = toast.open.clone();

        use_effect_with(*router.route, move |route: &Route| {
            let route = *route;
            let ticket = bump(&generation);
            if !route.is_public() {
                status.set(AuthStatus::Validating);
                guarded.set(None);
                wasm_bindgen_futures::spawn_local(async move {
                    let outcome = services.auth.guard(route, Utc::now()).await;
                    if *generation.borrow() != ticket || outcome == GuardOutcome::Superseded {
                        log::debug!("⏭️ Dropping guard result for {}", route.path());
                        return;
                    }

                    status.set(AuthStatus::Validating.after_guard(&outcome));
                    if let GuardOutcome::Authenticated(_) = &outcome {
                        guarded.set(Some(route));
                    }
                    if let GuardOutcome::Rejected(rejection) = &outcome {
                        open_toast.emit(Toast::error("auth", rejection.message()));
                    }
                    if let Some(target) = outcome.redirect() {
                        navigate.emit(target);
                    }
                });
            }
            || ()
        });
    }

    let login = {
        let status = status.clone();
        let pending = pending.clone();
        let generation = generation.clone();
        let services = services.clone();
        let navigate = router.navigate.clone();
        let open_toast = toast.open.clone();

        Callback::from(move |(email, password): (String, String)| {
            let status = status.clone();
            let pending = pending.clone();
            let generation = generation.clone();
            let services = services.clone();
            let navigate = navigate.clone();
            let open_toast = open_toast.clone();

            pending.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match services.auth.login(&email, &password, Utc::now()).await {
                    Ok(session) => {
                        bump(&generation);
                        status.set(AuthStatus::Authenticated(session));
                        open_toast.emit(Toast::success("login", "Logged in successfully"));
                        navigate.emit(Route::Dashboard);
                    }
                    Err(e) => {
                        log::error!("❌ Login failed: {}", e);
                        open_toast.emit(Toast::error("login", e.to_string()));
                    }
                }
                pending.set(false);
            });
        })
    };

    let logout = {
        let status = status.clone();
        let guarded = guarded.clone();
        let generation = generation.clone();
        let services = services.clone();
        let navigate = router.navigate.clone();

        Callback::from(move |_| {
            bump(&generation);
            let next = services.auth.logout();
            status.set(AuthStatus::Unauthenticated);
            guarded.set(None);
            navigate.emit(next);
        })
    };

    UseAuthHandle {
        status,
        guarded,
        pending,
        login,
        logout,
    }
}
