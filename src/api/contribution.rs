//! Contribution Endpoint
//!
//! `POST /api/contribuir` with `{ item_key, status, link, comment }`

use leptos::logging::log;

use super::fetch::{read_error_body, send};
use crate::config::PageConfig;
use crate::error::ApiError;
use crate::models::ContributionRequest;

const FALLBACK_MESSAGE: &str = "Erro ao enviar contribuição.";

pub(super) async fn contribute(config: &PageConfig, request: &ContributionRequest) -> Result<(), ApiError> {
    let body = serde_json::to_string(request).map_err(|e| ApiError::Browser(e.to_string()))?;
    log!("[VOTE] POST {} item={} status={}", config.contribute_url(), request.item_key, request.status.as_str());

    let resp = send("POST", &config.contribute_url(), Some(body)).await?;
    if !resp.ok() {
        let status = resp.status();
        return Err(ApiError::rejected(status, read_error_body(&resp).await, |_| FALLBACK_MESSAGE.to_string()));
    }
    Ok(())
}
