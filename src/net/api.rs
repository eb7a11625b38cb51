//! REST client for the external auth endpoints.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: `HttpAuthApi` reports `ApiError::Unavailable`, since these
//! endpoints are only meaningful in the browser. Page logic is exercised
//! natively through a fake `AuthApi` instead.
//!
//! ERROR HANDLING
//! ==============
//! The backend answers rejected requests with a JSON body and a 4xx/5xx
//! status, so the body is decoded regardless of status. Only transport and
//! decode failures surface as `ApiError`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{ApiResponse, LoginRequest, RegisterRequest};
use crate::config::UiConfig;

pub const REGISTER_PATH: &str = "/api/register";
pub const LOGIN_PATH: &str = "/api/login";

/// Failures that never reached a usable server response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

/// The two calls the auth page makes.
///
/// Browser futures are `!Send`, hence `?Send`.
#[async_trait(?Send)]
pub trait AuthApi {
    async fn register(&self, request: &RegisterRequest) -> Result<ApiResponse, ApiError>;
    async fn login(&self, request: &LoginRequest) -> Result<ApiResponse, ApiError>;
}

/// `AuthApi` over `fetch`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpAuthApi {
    register_url: String,
    login_url: String,
}

impl HttpAuthApi {
    #[must_use]
    pub fn new(config: &UiConfig) -> Self {
        Self {
            register_url: config.endpoint(REGISTER_PATH),
            login_url: config.endpoint(LOGIN_PATH),
        }
    }

    #[must_use]
    pub fn register_url(&self) -> &str {
        &self.register_url
    }

    #[must_use]
    pub fn login_url(&self) -> &str {
        &self.login_url
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn register(&self, request: &RegisterRequest) -> Result<ApiResponse, ApiError> {
        post_json(&self.register_url, request).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<ApiResponse, ApiError> {
        post_json(&self.login_url, request).await
    }
}

async fn post_json<T: serde::Serialize>(url: &str, body: &T) -> Result<ApiResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(url)
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            leptos::logging::log!("{url} answered {}", resp.status());
        }
        resp.json::<ApiResponse>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (url, body);
        Err(ApiError::Unavailable)
    }
}
