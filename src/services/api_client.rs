// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No business rules here: build the request, attach the bearer token, decode
// the response. Authorized clients can only be built from a present token.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::config::CONFIG;
use crate::models::{
    Category, ErrorBody, LoginRequest, LoginResponse, Resource, ResourceKind, SelectOption,
    ShippingOption, Statistics, StockItem, TaxationRate,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("not logged in")]
    Unauthenticated,
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}{}", .message.as_ref().map(|m| format!(": {}", m)).unwrap_or_default())]
    Http { status: u16, message: Option<String> },
    #[error("unexpected response: {0}")]
    Parse(String),
}

impl ApiError {
    /// Message for the user: the server's own message when it sent one,
    /// otherwise `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Http { message: Some(message), .. } => message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// The token was refused by the API (expired or revoked)
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthenticated | ApiError::Http { status: 401, .. })
    }
}

/// `Authorization` header value for a token
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Client for public endpoints (login)
    pub fn anonymous() -> Self {
        Self::with_base_url(CONFIG.api_base_url(), None)
    }

    /// Client for authenticated endpoints. Refuses to exist without a token.
    pub fn authorized(token: Option<&str>) -> Result<Self, ApiError> {
        match token.filter(|t| !t.trim().is_empty()) {
            Some(token) => Ok(Self::with_base_url(CONFIG.api_base_url(), Some(token.to_string()))),
            None => Err(ApiError::Unauthenticated),
        }
    }

    fn with_base_url(base_url: &str, token: Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Headers attached to every request
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![("Accept", "application/json".to_string())];
        if let Some(token) = &self.token {
            headers.push(("Authorization", bearer(token)));
        }
        headers
    }

    fn prepare(&self, builder: RequestBuilder) -> RequestBuilder {
        self.headers()
            .into_iter()
            .fold(builder, |builder, (name, value)| builder.header(name, &value))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        log::debug!("🌐 GET {}", url);
        let response = self
            .prepare(Request::get(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let url = self.url(path);
        log::debug!("🌐 POST {}", url);
        let response = self
            .prepare(Request::post(&url))
            .json(body)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(response).await
    }

    /// `POST /api/Auth/login`
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        log::info!("🔐 Logging in as {}", username);
        self.post_json("/api/Auth/login", &request).await
    }

    pub async fn list<R: Resource>(&self) -> Result<Vec<R>, ApiError> {
        let items: Option<Vec<R>> = self.get_json(R::COLLECTION_PATH).await?;
        let items = items.unwrap_or_default();
        log::info!("✅ {} {} loaded", items.len(), R::TITLE);
        Ok(items)
    }

    pub async fn get<R: Resource>(&self, id: i64) -> Result<R, ApiError> {
        self.get_json(&R::item_path(id)).await
    }

    pub async fn create<R: Resource>(&self, draft: &R::Draft) -> Result<R, ApiError> {
        let created: R = self.post_json(&R::create_path(), draft).await?;
        log::info!("✅ {} {} created", R::SINGULAR, created.id());
        Ok(created)
    }

    /// Drop-down entries for a form field backed by `kind`
    pub async fn options(&self, kind: ResourceKind) -> Result<Vec<SelectOption>, ApiError> {
        match kind {
            ResourceKind::Categories => self.options_of::<Category>().await,
            ResourceKind::Shipping => self.options_of::<ShippingOption>().await,
            ResourceKind::Taxation => self.options_of::<TaxationRate>().await,
            ResourceKind::Stock => self.options_of::<StockItem>().await,
        }
    }

    async fn options_of<R: Resource>(&self) -> Result<Vec<SelectOption>, ApiError> {
        Ok(self.list::<R>().await?.iter().map(SelectOption::of).collect())
    }

    /// `GET /statistics`
    pub async fn statistics(&self) -> Result<Statistics, ApiError> {
        self.get_json("/statistics").await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let error = http_error(status, &body);
        log::error!("❌ {}", error);
        return Err(error);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Builds the error for a non-2xx response, extracting the server message if any
pub fn http_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message)
        .or_else(|| {
            let text = body.trim();
            // Plain-text bodies are passed through, HTML error pages are not
            (!text.is_empty() && !text.starts_with('<') && !text.starts_with('{') && text.len() <= 200)
                .then(|| text.to_string())
        });
    ApiError::Http { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorized_client_requires_a_token() {
        assert_eq!(ApiClient::authorized(None), Err(ApiError::Unauthenticated));
        assert_eq!(ApiClient::authorized(Some("  ")), Err(ApiError::Unauthenticated));
    }

    #[test]
    fn authorized_client_sends_bearer_header() {
        let client = ApiClient::authorized(Some("abc")).unwrap();
        assert!(client
            .headers()
            .contains(&("Authorization", "Bearer abc".to_string())));
    }

    #[test]
    fn anonymous_client_sends_no_credentials() {
        let client = ApiClient::anonymous();
        assert!(client.headers().iter().all(|(name, _)| *name != "Authorization"));
    }

    #[test]
    fn urls_join_base_and_resource_paths() {
        let client = ApiClient::with_base_url("https://api.shop.test/", Some("t".into()));
        assert_eq!(client.url(Category::COLLECTION_PATH), "https://api.shop.test/api/Categories");
        assert_eq!(
            client.url(&StockItem::create_path()),
            "https://api.shop.test/api/Items/CreateWithPrices"
        );
    }

    #[test]
    fn server_message_is_extracted_from_json_body() {
        let error = http_error(401, r#"{"message":"Invalid username or password"}"#);
        assert_eq!(
            error,
            ApiError::Http { status: 401, message: Some("Invalid username or password".into()) }
        );
        assert_eq!(error.user_message("Invalid login credentials"), "Invalid username or password");
        assert!(error.is_unauthorized());
    }

    #[test]
    fn html_bodies_fall_back_to_default_message() {
        let error = http_error(502, "<html><body>Bad gateway</body></html>");
        assert_eq!(error, ApiError::Http { status: 502, message: None });
        assert_eq!(error.user_message("Invalid login credentials"), "Invalid login credentials");
    }

    #[test]
    fn plain_text_bodies_are_kept() {
        assert_eq!(
            http_error(400, "Username is required"),
            ApiError::Http { status: 400, message: Some("Username is required".into()) }
        );
    }

    #[test]
    fn network_errors_use_fallback() {
        let error = ApiError::Network("connection refused".into());
        assert_eq!(error.user_message("Failed to fetch categories."), "Failed to fetch categories.");
        assert_eq!(error.to_string(), "network error: connection refused");
    }

    #[test]
    fn http_error_display_includes_message() {
        assert_eq!(http_error(404, "").to_string(), "HTTP 404");
        assert_eq!(http_error(403, r#"{"message":"Forbidden"}"#).to_string(), "HTTP 403: Forbidden");
    }
}
