// ============================================================================
// ROUTE - Pages of the app and the public allow-list
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    Dashboard,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.split(|c: char| c == '?' || c == '#').next().unwrap_or("");
        let trimmed = trimmed.trim_end_matches('/');
        match trimmed {
            "" => Route::Home,
            "/login" => Route::Login,
            "/register" => Route::Register,
            "/dashboard" => Route::Dashboard,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Dashboard => "/dashboard",
            Route::NotFound => "/404",
        }
    }

    /// Public routes skip the session guard entirely
    pub fn is_public(&self) -> bool {
        match self {
            Route::Home | Route::Login | Route::Register | Route::NotFound => true,
            Route::Dashboard => false,
        }
    }
}
