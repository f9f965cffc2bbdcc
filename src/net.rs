// src/net.rs
//
// Plain HTTP GET for the published CSV. Blocking: always called from a
// loader worker thread, never from the UI thread.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::LoadError;

/// Build the client once per source; it pools connections between refreshes.
pub fn client() -> Result<Client, LoadError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// GET `url` and return the body as text. Any non-2xx status is an error.
pub fn http_get(client: &Client, url: &str) -> Result<String, LoadError> {
    let resp = client.get(url).send()?;

    let status = resp.status();
    if !status.is_success() {
        return Err(LoadError::Status { status: status.as_u16(), url: s!(url) });
    }

    Ok(resp.text()?)
}
