pub mod use_toast;
pub mod use_route;
pub mod use_auth;
pub mod app_context;

pub use use_toast::{use_toast, Toast, ToastKind, UseToastHandle};
pub use use_route::{use_route, UseRouteHandle};
pub use use_auth::{use_auth, UseAuthHandle};
pub use app_context::{use_app_context, AppContext, AppContextProvider};
