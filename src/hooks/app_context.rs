// ============================================================================
// APP CONTEXT - Shares services, auth, router and toasts with the tree
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_auth::UseAuthHandle;
use crate::hooks::use_route::UseRouteHandle;
use crate::hooks::use_toast::UseToastHandle;
use crate::services::AppServices;

#[derive(Clone, PartialEq)]
pub struct AppContext {
    pub services: AppServices,
    pub auth: UseAuthHandle,
    pub router: UseRouteHandle,
    pub toast: UseToastHandle,
}

#[derive(Properties, PartialEq)]
pub struct AppContextProviderProps {
    pub context: AppContext,
    pub children: Children,
}

#[function_component(AppContextProvider)]
pub fn app_context_provider(props: &AppContextProviderProps) -> Html {
    html! {
        <ContextProvider<AppContext> context={props.context.clone()}>
            {props.children.clone()}
        </ContextProvider<AppContext>>
    }
}

/// Context of the enclosing `AppContextProvider`
#[hook]
pub fn use_app_context() -> Option<AppContext> {
    use_context::<AppContext>()
}
