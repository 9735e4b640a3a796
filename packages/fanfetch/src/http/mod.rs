//! HTTP collaborators
//!
//! Strategies only need "GET this URL and give me the JSON body". The
//! [`Fetch`] trait is the blocking version used by the sequential, threads and
//! coroutine strategies. [`CoFetch`] is the async version used by the async strategy.
use serde_json::Value;

mod blocking;
pub use blocking::BlockingClient;
mod client;
pub use client::Client;

/// `User-Agent` header sent with every request
pub(crate) const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Blocking JSON GET
pub trait Fetch {
    /// GET `url` and decode the body as JSON.
    ///
    /// A transport failure, a non-2xx status or a body that is not JSON is an error.
    fn get_json(&self, url: &str) -> crate::Result<Value>;
}

impl<T: Fetch + ?Sized> Fetch for &T {
    fn get_json(&self, url: &str) -> crate::Result<Value> {
        (**self).get_json(url)
    }
}

/// Async JSON GET
pub trait CoFetch {
    /// GET `url` and decode the body as JSON.
    ///
    /// A transport failure, a non-2xx status or a body that is not JSON is an error.
    fn co_get_json(&self, url: &str) -> impl Future<Output = crate::Result<Value>> + Send;
}
