// ============================================================================
// APP - Root component: services, router, toasts and the auth guard
// ============================================================================

use yew::prelude::*;

use crate::components::{Dashboard, LoginScreen, NavBar, NotFound, RegisterScreen, ToastView, TrackShipment};
use crate::config::CONFIG;
use crate::hooks::{use_auth, use_route, use_toast, AppContext, AppContextProvider};
use crate::services::AppServices;
use crate::state::Route;

#[function_component(App)]
pub fn app() -> Html {
    let services = use_memo((), |_| AppServices::from_config(&CONFIG));
    let router = use_route();
    let toast = use_toast();
    let auth = use_auth(&services, &router, &toast);

    let context = AppContext {
        services: (*services).clone(),
        auth,
        router: router.clone(),
        toast,
    };

    let page = match *router.route {
        Route::Home => html! { <TrackShipment /> },
        Route::Login => html! { <LoginScreen /> },
        Route::Register => html! { <RegisterScreen /> },
        Route::Dashboard => html! { <Dashboard /> },
        Route::NotFound => html! { <NotFound /> },
    };

    html! {
        <AppContextProvider {context}>
            <div class="app-container">
                <NavBar />
                <main class="app-main">{page}</main>
                <ToastView />
            </div>
        </AppContextProvider>
    }
}
