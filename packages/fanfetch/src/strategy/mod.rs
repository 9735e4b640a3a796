//! The four ways of running the fetch-list, select, fan-out, join flow.
//!
//! Every strategy takes a client and a [`Config`], and returns a [`Report`].
//!
//! | strategy | model | join |
//! |-|-|-|
//! | [`sequential`] | one thread, blocking | none, requests never overlap |
//! | [`threads`] | one OS thread per request | barrier: all threads joined |
//! | [`coroutine`] | explicit state machine, one round trip | no fan-out |
//! | [`concurrent`] | tasks on a single-threaded event loop | wait for all, first error aborts |
use serde_json::Value;

use crate::{CoFetch, Config, Fetch, Record};

pub mod concurrent;
pub mod coroutine;
pub mod sequential;
pub mod threads;

/// Which strategy to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Strategy {
    #[display("sequential")]
    Sequential,
    #[display("threads")]
    Threads,
    #[display("coroutine")]
    Coroutine,
    #[display("async")]
    Async,
}

impl Strategy {
    /// Every strategy, in the order they are introduced
    pub const ALL: [Strategy; 4] = [
        Strategy::Sequential,
        Strategy::Threads,
        Strategy::Coroutine,
        Strategy::Async,
    ];
}

/// One completed request
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched {
    pub url: String,
    pub body: Value,
}

impl Fetched {
    /// Number of elements if the body is an array
    pub fn len(&self) -> Option<usize> {
        self.body.as_array().map(Vec::len)
    }
}

/// What a strategy did
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// URL of the collection
    pub list_url: String,
    /// Number of records in the collection
    pub total: usize,
    /// The fan-out requests.
    ///
    /// `sequential` and `threads` keep selection order, `concurrent` has completion order.
    /// `coroutine` has the one collection request.
    pub fetched: Vec<Fetched>,
}

impl Report {
    /// URLs of [`fetched`](Self::fetched), in the same order
    pub fn urls(&self) -> Vec<&str> {
        self.fetched.iter().map(|x| x.url.as_str()).collect()
    }
}

/// Select the first `config.limit` elements of the collection and derive their child URLs
///
/// Only the selected elements are looked at. Each must be an object with an `id`.
///
/// ```rust
/// # fn main() -> fanfetch::Result<()> {
/// let elements: Vec<_> = (1..=15).map(|id| fanfetch::json::json!({"id": id})).collect();
/// let urls = fanfetch::strategy::plan(&fanfetch::Config::default(), &elements)?;
/// assert_eq!(urls.len(), 10);
/// assert_eq!(urls[0], "https://jsonplaceholder.typicode.com/posts/1/comments");
/// # Ok(()) }
/// ```
pub fn plan(config: &Config, elements: &[Value]) -> crate::Result<Vec<String>> {
    crate::record::select(elements, config.limit)
        .iter()
        .enumerate()
        .map(|(i, element)| {
            let record = Record::from_element(element, i)?;
            Ok(config.endpoint.child_url(record.require_id(i)?))
        })
        .collect()
}

/// The collection must be an array. Its elements are not inspected here
fn decode_list(url: &str, body: Value) -> crate::Result<Vec<Value>> {
    let Value::Array(elements) = body else {
        crate::bail!("collection from '{url}' is not an array");
    };
    crate::debug!("collection from '{url}' has {} element(s)", elements.len());
    Ok(elements)
}

/// GET the collection and decode it
pub(crate) fn fetch_list(client: &impl Fetch, config: &Config) -> crate::Result<(String, Vec<Value>)> {
    let url = config.endpoint.collection_url();
    let fetched = fetch_one(client, url)?;
    let records = decode_list(&fetched.url, fetched.body)?;
    Ok((fetched.url, records))
}

/// GET the collection and decode it, async
pub(crate) async fn co_fetch_list(
    client: &impl CoFetch,
    config: &Config,
) -> crate::Result<(String, Vec<Value>)> {
    let url = config.endpoint.collection_url();
    let fetched = co_fetch_one(client, url).await?;
    let records = decode_list(&fetched.url, fetched.body)?;
    Ok((fetched.url, records))
}

pub(crate) fn fetch_one(client: &impl Fetch, url: String) -> crate::Result<Fetched> {
    let body = client.get_json(&url)?;
    Ok(done(Fetched { url, body }))
}

pub(crate) async fn co_fetch_one(client: &impl CoFetch, url: String) -> crate::Result<Fetched> {
    let body = client.co_get_json(&url).await?;
    Ok(done(Fetched { url, body }))
}

/// Print the completion line of a request
fn done(fetched: Fetched) -> Fetched {
    crate::print!("{} Done", fetched.url);
    match fetched.len() {
        Some(n) => crate::debug!("{}: {n} item(s)", fetched.url),
        None => crate::debug!("{}: not an array", fetched.url),
    }
    crate::trace!("{}: {}", fetched.url, fetched.body);
    fetched
}
