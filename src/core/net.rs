// src/core/net.rs

// Blocking GET for the source page. One request, no retries.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::RunError;

pub fn http_get(url: &str) -> Result<Vec<u8>, RunError> {
    let fetch_err = |source| RunError::Fetch { url: s!(url), source };

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()
        .map_err(fetch_err)?;

    info!(url, "fetching document");
    let resp = client.get(url).send().map_err(fetch_err)?;

    let status = resp.status();
    if !status.is_success() {
        return Err(RunError::Status { url: s!(url), status: status.as_u16() });
    }

    let body = resp.bytes().map_err(fetch_err)?;
    debug!(bytes = body.len(), "document received");
    Ok(body.to_vec())
}
