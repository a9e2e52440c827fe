use yew::prelude::*;

use crate::hooks::{use_app_context, Toast};
use crate::state::Route;
use crate::viewmodels::RegisterForm;

#[function_component(RegisterScreen)]
pub fn register_screen() -> Html {
    let ctx = use_app_context();
    let form = use_state(RegisterForm::default);
    let loading = use_state(|| false);
    let Some(ctx) = ctx else {
        return html! {};
    };

    let field = |set: fn(&mut RegisterForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            set(&mut next, input.value());
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let loading = loading.clone();
        let gateway = ctx.services.gateway.clone();
        let open_toast = ctx.toast.open.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let input = match form.validate() {
                Ok(input) => input,
                Err(e) => {
                    open_toast.emit(Toast::error("register", e.to_string()));
                    return;
                }
            };

            let form = form.clone();
            let loading = loading.clone();
            let gateway = gateway.clone();
            let open_toast = open_toast.clone();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match gateway.create_user(&input).await {
                    Ok(user) => {
                        log::info!("✅ User registered: {}", user.email);
                        open_toast.emit(Toast::success("register", "User registered successfully"));
                        form.set(RegisterForm::default());
                    }
                    Err(e) => {
                        log::error!("❌ Registration failed: {}", e);
                        open_toast.emit(Toast::error("register", e.to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_login = {
        let navigate = ctx.router.navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigate.emit(Route::Login);
        })
    };

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <h1>{"Register"}</h1>
                    <p>{"Create an account to send and follow shipments"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="name">{"Name"}</label>
                        <input id="name" type="text" placeholder="Name"
                            value={form.name.clone()}
                            oninput={field(|f, v| f.name = v)} />
                    </div>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input id="email" type="email" placeholder="Email"
                            value={form.email.clone()}
                            oninput={field(|f, v| f.email = v)} />
                    </div>
                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input id="password" type="password" placeholder="Password"
                            value={form.password.clone()}
                            oninput={field(|f, v| f.password = v)} />
                    </div>
                    <div class="form-group">
                        <label for="confirm-password">{"Confirm Password"}</label>
                        <input id="confirm-password" type="password" placeholder="Confirm Password"
                            value={form.confirm_password.clone()}
                            oninput={field(|f, v| f.confirm_password = v)} />
                    </div>
                    <div class="form-group">
                        <label for="address">{"Address"}</label>
                        <input id="address" type="text" placeholder="Address"
                            value={form.address.clone()}
                            oninput={field(|f, v| f.address = v)} />
                    </div>

                    <button type="submit" class="btn-primary" disabled={*loading}>
                        {"Register"}
                    </button>

                    <p class="form-footer">
                        {"Already have an account? "}
                        <a href={Route::Login.path()} onclick={on_login}>{"Login"}</a>
                    </p>
                </form>
            </div>
        </div>
    }
}
