use std::time::Duration;

use serde_json::Value;

use super::Fetch;
use crate::pre::*;

/// Blocking client backed by `reqwest`.
///
/// Idle connections are not kept around, so every call opens its own connection.
#[derive(Debug, Clone)]
pub struct BlockingClient(reqwest::blocking::Client);

impl BlockingClient {
    /// Build the client. `timeout` applies to each request as a whole, `None` waits forever.
    ///
    /// Do not call this (or drop the client) inside an async runtime.
    pub fn new(timeout: Option<Duration>) -> crate::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(super::USER_AGENT)
            .pool_max_idle_per_host(0)
            .timeout(timeout)
            .build()
            .context("failed to build blocking http client")?;
        Ok(Self(client))
    }
}

impl Fetch for BlockingClient {
    fn get_json(&self, url: &str) -> crate::Result<Value> {
        crate::trace!("GET {url}");
        let response = crate::check!(self.0.get(url).send(), "failed to send request to '{url}'")?;
        let status = response.status();
        crate::trace!("GET {url} -> {status}");
        let response = crate::check!(response.error_for_status(), "request to '{url}' failed")?;
        let body = crate::check!(response.bytes(), "failed to read response body from '{url}'")?;
        crate::check!(
            crate::parse_json_bytes(&body),
            "response body from '{url}' is not json"
        )
    }
}
