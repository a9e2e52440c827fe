/// localStorage key holding the bearer credential
pub const STORAGE_KEY_TOKEN: &str = "courier_token";

/// Default lifetime of a toast, in seconds
pub const DEFAULT_TOAST_SECONDS: u32 = 2;
