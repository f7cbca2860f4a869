/// API base URL used when `API_BASE_URL` is not set at build time
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// localStorage key holding the raw bearer token
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Shown when the login endpoint fails without a usable message
pub const LOGIN_ERROR_FALLBACK: &str = "Invalid login credentials";

pub const APP_TITLE: &str = "eShop Admin";
