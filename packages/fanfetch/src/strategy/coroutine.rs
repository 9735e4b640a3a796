//! A single request/response round trip through a hand-driven coroutine
//!
//! The coroutine is [`RoundTrip`], an explicit state machine with two suspension points:
//! 1. Started by the scheduler, it hands out the URL it wants fetched
//!    and suspends in [`State::AwaitingResult`].
//! 2. The scheduler performs the request and sends the body back in.
//!    The coroutine takes the result and is [`State::Complete`].
//!
//! There is no concurrency here: the scheduler ([`drive`]) and the coroutine
//! take turns on one thread, and exactly one send-resume cycle happens.
//!
//! ```rust
//! use fanfetch::strategy::coroutine::{RoundTrip, State};
//! # fn main() -> fanfetch::Result<()> {
//! let mut co = RoundTrip::new("https://example.com/posts");
//! let url = co.start()?;
//! assert_eq!(co.state(), State::AwaitingResult);
//! let fetched = co.send(fanfetch::json::json!([{"id": 1}]))?;
//! assert_eq!(fetched.url, url);
//! assert!(co.is_complete());
//! assert!(co.send(fanfetch::json::Value::Null).is_err());
//! # Ok(()) }
//! ```
use serde_json::Value;

use super::{Fetched, Report};
use crate::{Config, Fetch};

/// Where a [`RoundTrip`] is suspended
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum State {
    /// Not started. The scheduler has not asked for the URL yet
    #[display("awaiting url")]
    AwaitingUrl,
    /// The URL was handed out, waiting for the response to be sent back
    #[display("awaiting result")]
    AwaitingResult,
    /// The response was received
    #[display("complete")]
    Complete,
}

#[derive(Debug)]
enum Inner {
    AwaitingUrl(String),
    AwaitingResult(String),
    Complete,
}

/// One request/response round trip, driven by an external scheduler
#[derive(Debug)]
pub struct RoundTrip {
    inner: Inner,
}

impl RoundTrip {
    /// Create the coroutine. Nothing happens until [`start`](Self::start)
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            inner: Inner::AwaitingUrl(url.into()),
        }
    }

    /// Where the coroutine is suspended
    pub fn state(&self) -> State {
        match self.inner {
            Inner::AwaitingUrl(_) => State::AwaitingUrl,
            Inner::AwaitingResult(_) => State::AwaitingResult,
            Inner::Complete => State::Complete,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.inner, Inner::Complete)
    }

    /// First resume: run until the first suspension point, which yields the URL to fetch
    pub fn start(&mut self) -> crate::Result<String> {
        let Inner::AwaitingUrl(url) = &self.inner else {
            crate::bail!("cannot start round trip: it is {}", self.state());
        };
        let url = url.clone();
        crate::info!("make a request to {url}");
        self.inner = Inner::AwaitingResult(url.clone());
        Ok(url)
    }

    /// Second resume: send the response in. The coroutine completes.
    pub fn send(&mut self, response: Value) -> crate::Result<Fetched> {
        let Inner::AwaitingResult(url) = &self.inner else {
            crate::bail!("cannot send a result to round trip: it is {}", self.state());
        };
        let url = url.clone();
        match response.as_array() {
            Some(x) => crate::info!("got result from {url}: {} item(s)", x.len()),
            None => crate::info!("got result from {url}"),
        }
        self.inner = Inner::Complete;
        Ok(Fetched {
            url,
            body: response,
        })
    }
}

/// The scheduler: start the coroutine, fetch what it asks for, send the result back
pub fn drive(client: &impl Fetch, mut co: RoundTrip) -> crate::Result<Fetched> {
    let url = co.start()?;
    let response = super::fetch_one(client, url)?;
    co.send(response.body)
}

/// Fetch the collection through one [`RoundTrip`]. There is no fan-out.
pub fn run(client: &impl Fetch, config: &Config) -> crate::Result<Report> {
    let co = RoundTrip::new(config.endpoint.collection_url());
    let fetched = drive(client, co)?;
    Ok(Report {
        list_url: fetched.url.clone(),
        total: fetched.len().unwrap_or_default(),
        fetched: vec![fetched],
    })
}
