//! Shared HTTP plumbing for the school backend.
//!
//! Every request carries the browser's credentials so the backend session
//! cookie travels along.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::RequestCredentials;

use crate::{AppError, AppResult, API_URL};

/// Build an absolute backend URL from an endpoint path.
pub fn endpoint(path: &str) -> String {
    format!("{}{}", API_URL.trim_end_matches('/'), path)
}

fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
    builder.credentials(RequestCredentials::Include)
}

/// GET a JSON document.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> AppResult<T> {
    let url = endpoint(path);
    log::debug!("GET {}", url);

    let response = with_credentials(Request::get(&url))
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    let response = ensure_success(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| AppError::Decode(e.to_string()))
}

/// POST a JSON body. The response body is handed back unread.
pub async fn post_json<B: Serialize + ?Sized>(path: &str, body: &B) -> AppResult<Response> {
    let url = endpoint(path);
    log::debug!("POST {}", url);

    let request = with_credentials(Request::post(&url))
        .json(body)
        .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    ensure_success(response).await
}

async fn ensure_success(response: Response) -> AppResult<Response> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(AppError::Server { status, body })
}
