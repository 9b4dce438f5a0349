//! API client for the uiform backend

use gloo_net::http::Request;
use serde::Deserialize;
use uiform_core::SessionOptions;

const API_BASE: &str = "/api";

/// Generic API response wrapper
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

/// Fetch the session tunables the server was started with
pub async fn get_session_options() -> Result<SessionOptions, String> {
    let url = format!("{}/settings", API_BASE);
    fetch_json::<SessionOptions>(&url).await
}

async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let api_response: ApiResponse<T> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    if api_response.success {
        api_response.data.ok_or_else(|| "No data in response".to_string())
    } else {
        Err(api_response.error.unwrap_or_else(|| "Unknown error".to_string()))
    }
}
