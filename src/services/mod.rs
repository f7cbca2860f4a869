pub mod api_client;
pub mod auth_service;
pub mod storage;

pub use api_client::{ApiClient, ApiError};
pub use auth_service::*;
pub use storage::{LocalTokenStorage, MemoryTokenStorage, TokenStorage};
