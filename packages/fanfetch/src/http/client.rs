use std::time::Duration;

use serde_json::Value;

use super::CoFetch;
use crate::pre::*;

/// Async client backed by `reqwest`.
///
/// Cloning is cheap, and clones share one connection pool, so one client
/// can be handed to every task of a fan-out.
#[derive(Debug, Clone)]
pub struct Client(reqwest::Client);

impl Client {
    /// Build the client. `timeout` applies to each request as a whole, `None` waits forever.
    pub fn new(timeout: Option<Duration>) -> crate::Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(super::USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("failed to build http client")?;
        Ok(Self(client))
    }
}

impl CoFetch for Client {
    async fn co_get_json(&self, url: &str) -> crate::Result<Value> {
        crate::trace!("GET {url}");
        let response = crate::check!(
            self.0.get(url).send().await,
            "failed to send request to '{url}'"
        )?;
        let status = response.status();
        crate::trace!("GET {url} -> {status}");
        let response = crate::check!(response.error_for_status(), "request to '{url}' failed")?;
        let body = crate::check!(
            response.bytes().await,
            "failed to read response body from '{url}'"
        )?;
        crate::check!(
            crate::parse_json_bytes(&body),
            "response body from '{url}' is not json"
        )
    }
}
