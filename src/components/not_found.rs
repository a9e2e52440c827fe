use yew::prelude::*;

use crate::hooks::use_app_context;
use crate::state::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let ctx = use_app_context();
    let Some(ctx) = ctx else {
        return html! {};
    };

    let on_home = {
        let navigate = ctx.router.navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigate.emit(Route::Home);
        })
    };

    html! {
        <section class="not-found">
            <h1>{"404"}</h1>
            <p>{"Page not found"}</p>
            <a href={Route::Home.path()} onclick={on_home}>{"Back to tracking"}</a>
        </section>
    }
}
