// ============================================================================
// STATE MODULE - Route and authentication state
// ============================================================================

pub mod route;
pub mod auth_state;

pub use route::Route;
pub use auth_state::AuthStatus;
