use yew::prelude::*;

use crate::hooks::{use_app_context, ToastKind};

#[function_component(ToastView)]
pub fn toast_view() -> Html {
    let ctx = use_app_context();
    let Some(ctx) = ctx else {
        return html! {};
    };

    match &*ctx.toast.current {
        Some(toast) => {
            let (kind_class, icon) = match toast.kind {
                ToastKind::Success => ("toast-success", "✅"),
                ToastKind::Error => ("toast-error", "❌"),
            };
            let on_close = ctx.toast.close.reform(|_: MouseEvent| ());
            html! {
                <div class={classes!("toast", kind_class)} role="status" data-key={toast.key.clone()}>
                    <span class="toast-icon">{icon}</span>
                    <span class="toast-content">{toast.content.clone()}</span>
                    <button type="button" class="btn-close" onclick={on_close}>{"✕"}</button>
                </div>
            }
        }
        None => html! {},
    }
}
