//! Task Service Client
//!
//! Thin HTTP wrappers over the remote task and suggestion endpoints.
//! Every call is a single attempt; failures surface as [`ApiError`] with
//! no partial data.

use reqwest::Client;
use serde::Deserialize;
use std::sync::OnceLock;
use thiserror::Error;

use crate::config;
use crate::models::{SuggestionResponse, Task, TaskPayload};

/// Failure raised by any remote call
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("server returned {status} for {path}: {}", detail.as_deref().unwrap_or("no detail"))]
    Status {
        status: u16,
        path: String,
        detail: Option<String>,
    },
}

/// Error body shape of the service (`{"detail": ...}`)
#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

static CLIENT: OnceLock<Client> = OnceLock::new();

fn client() -> &'static Client {
    CLIENT.get_or_init(Client::new)
}

async fn expect_success(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status().as_u16();
    let path = resp.url().path().to_string();
    let detail = resp
        .text()
        .await
        .ok()
        .and_then(|body| serde_json::from_str::<ErrorBody>(&body).ok())
        .map(|body| body.detail);
    Err(ApiError::Status {
        status,
        path,
        detail,
    })
}

// ========================
// Task Endpoints
// ========================

pub async fn list_tasks() -> Result<Vec<Task>, ApiError> {
    let resp = client()
        .get(format!("{}/tasks/", config::api_base()))
        .send()
        .await?;
    Ok(expect_success(resp).await?.json().await?)
}

pub async fn create_task(title: &str) -> Result<Task, ApiError> {
    let resp = client()
        .post(format!("{}/tasks/", config::api_base()))
        .json(&TaskPayload {
            title,
            completed: false,
        })
        .send()
        .await?;
    Ok(expect_success(resp).await?.json().await?)
}

pub async fn update_task(id: u32, payload: &TaskPayload<'_>) -> Result<Task, ApiError> {
    let resp = client()
        .put(format!("{}/tasks/{id}", config::api_base()))
        .json(payload)
        .send()
        .await?;
    Ok(expect_success(resp).await?.json().await?)
}

pub async fn delete_task(id: u32) -> Result<(), ApiError> {
    let resp = client()
        .delete(format!("{}/tasks/{id}", config::api_base()))
        .send()
        .await?;
    expect_success(resp).await?;
    Ok(())
}

// ========================
// Suggestion Endpoint
// ========================

pub async fn fetch_suggestion(title: &str) -> Result<String, ApiError> {
    let resp = client()
        .post(format!("{}/suggestions/", config::api_base()))
        .query(&[("title", title)])
        .send()
        .await?;
    let body: SuggestionResponse = expect_success(resp).await?.json().await?;
    Ok(body.suggestion)
}
