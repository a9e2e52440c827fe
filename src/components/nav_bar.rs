use yew::prelude::*;

use crate::hooks::use_app_context;
use crate::state::Route;

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let ctx = use_app_context();
    let Some(ctx) = ctx else {
        return html! {};
    };

    let current = *ctx.router.route;
    let link = |route: Route, label: &'static str| {
        let navigate = ctx.router.navigate.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigate.emit(route);
        });
        html! {
            <a
                href={route.path()}
                class={classes!("nav-link", (current == route).then_some("active"))}
                {onclick}
            >
                {label}
            </a>
        }
    };

    let signed_in = ctx.auth.status.is_authenticated();
    let on_logout = ctx.auth.logout.reform(|e: MouseEvent| e.prevent_default());

    html! {
        <header class="nav-bar">
            <div class="nav-brand">{"📦 Courier Service"}</div>
            <nav class="nav-links">
                {link(Route::Home, "Home")}
                if signed_in {
                    <>
                        {link(Route::Dashboard, "Dashboard")}
                        <a href="#" class="nav-link" onclick={on_logout}>{"Logout"}</a>
                    </>
                } else {
                    {link(Route::Login, "Login")}
                }
            </nav>
        </header>
    }
}
