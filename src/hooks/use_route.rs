// ============================================================================
// USE ROUTE HOOK - Current page, history push and back/forward
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::window;
use yew::prelude::*;

use crate::state::Route;

fn current_route() -> Route {
    window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or(Route::Home)
}

#[derive(Clone, PartialEq)]
pub struct UseRouteHandle {
    pub route: UseStateHandle<Route>,
    pub navigate: Callback<Route>,
}

#[hook]
pub fn use_route() -> UseRouteHandle {
    let route = use_state(current_route);

    // Back/forward buttons
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|win| {
                let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    route.set(current_route());
                }) as Box<dyn FnMut(web_sys::Event)>);
                if let Err(e) = win.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref()) {
                    log::error!("❌ popstate listener not registered: {:?}", e);
                }
                (win, closure)
            });

            move || {
                if let Some((win, closure)) = listener {
                    let _ = win.remove_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
                }
            }
        });
    }

    let navigate = {
        let route = route.clone();
        Callback::from(move |next: Route| {
            if let Some(history) = window().and_then(|w| w.history().ok()) {
                if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(next.path())) {
                    log::error!("❌ history.pushState failed: {:?}", e);
                }
            }
            log::debug!("🧭 Navigating to {}", next.path());
            route.set(next);
        })
    };

    UseRouteHandle { route, navigate }
}
