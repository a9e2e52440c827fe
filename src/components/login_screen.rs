use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::{use_app_context, Toast};
use crate::state::Route;
use crate::viewmodels::LoginForm;

#[function_component(LoginScreen)]
pub fn login_screen() -> Html {
    let ctx = use_app_context();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let Some(ctx) = ctx else {
        return html! {};
    };

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let on_login = ctx.auth.login.clone();
        let open_toast = ctx.toast.open.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                let form = LoginForm {
                    email: email_input.value(),
                    password: password_input.value(),
                };
                match form.validate() {
                    Ok(credentials) => on_login.emit(credentials),
                    Err(e) => open_toast.emit(Toast::error("login", e.to_string())),
                }
            }
        })
    };

    let on_register = {
        let navigate = ctx.router.navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigate.emit(Route::Register);
        })
    };

    let pending = *ctx.auth.pending;

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <h1>{"Login"}</h1>
                    <p>{"Sign in to manage your shipments"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            placeholder="Email"
                            ref={email_ref}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            placeholder="Password"
                            ref={password_ref}
                            required=true
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled={pending}>
                        {if pending { "Signing in..." } else { "Login" }}
                    </button>

                    <p class="form-footer">
                        {"Don't have an account? "}
                        <a href={Route::Register.path()} onclick={on_register}>{"Register now"}</a>
                    </p>
                </form>
            </div>
        </div>
    }
}
