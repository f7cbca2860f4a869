use super::api_client::{ApiClient, ApiError};
use crate::models::LoginResponse;
use crate::utils::constants::LOGIN_ERROR_FALLBACK;

/// Validates the login form before anything goes over the wire
pub fn validate_credentials(username: &str, password: &str) -> Result<(), String> {
    if username.trim().is_empty() || password.is_empty() {
        return Err("Please enter your username and password".to_string());
    }
    Ok(())
}

/// Message shown under the login form when the request fails
pub fn login_error_message(error: &ApiError) -> String {
    error.user_message(LOGIN_ERROR_FALLBACK)
}

/// Token from a successful response; an empty token counts as a failed login
pub fn token_from_response(response: LoginResponse) -> Result<String, String> {
    if response.token.trim().is_empty() {
        log::error!("❌ Login response carried an empty token");
        return Err(LOGIN_ERROR_FALLBACK.to_string());
    }
    Ok(response.token)
}

/// Exchanges credentials for a bearer token.
/// Errors are already phrased for the login form.
pub async fn perform_login(username: &str, password: &str) -> Result<String, String> {
    validate_credentials(username, password)?;
    let response = ApiClient::anonymous()
        .login(username.trim(), password)
        .await
        .map_err(|e| {
            log::error!("❌ Login failed: {}", e);
            login_error_message(&e)
        })?;
    token_from_response(response)
}
