//! Configuration: endpoint, limit, timeout, and the env vars that set them
use std::time::Duration;

use reqwest::Url;

use crate::RecordId;
use crate::pre::*;

/// Base URL used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
/// Collection fetched when nothing else is configured
pub const DEFAULT_COLLECTION: &str = "posts";
/// Sub-resource fetched per record when nothing else is configured
pub const DEFAULT_SUBRESOURCE: &str = "comments";
/// How many records are selected from the collection by default
pub const DEFAULT_LIMIT: usize = 10;

/// Env var for [`Endpoint`] base URL
pub const ENV_BASE_URL: &str = "FANFETCH_BASE_URL";
/// Env var for [`Config::limit`]
pub const ENV_LIMIT: &str = "FANFETCH_LIMIT";
/// Env var for [`Config::timeout`], in seconds
pub const ENV_TIMEOUT: &str = "FANFETCH_TIMEOUT";

/// Where the collection lives, and how child URLs are derived from it
///
/// ```rust
/// # fn main() -> fanfetch::Result<()> {
/// let endpoint = fanfetch::Endpoint::new("https://example.com/api/", "posts", "comments")?;
/// assert_eq!(endpoint.collection_url(), "https://example.com/api/posts");
/// assert_eq!(endpoint.child_url(&7i64.into()), "https://example.com/api/posts/7/comments");
/// # Ok(()) }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base: Url,
    collection: Vec<String>,
    subresource: Vec<String>,
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            base: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
            collection: vec![DEFAULT_COLLECTION.to_string()],
            subresource: vec![DEFAULT_SUBRESOURCE.to_string()],
        }
    }
}

impl Endpoint {
    /// Create an endpoint. `base` must be an absolute `http` or `https` URL.
    ///
    /// `collection` and `subresource` may have more than one path segment (`users/1/posts`).
    pub fn new(base: &str, collection: &str, subresource: &str) -> crate::Result<Self> {
        let base = parse_base(base)?;
        let collection = segments(collection);
        crate::ensure!(!collection.is_empty(), "collection path cannot be empty")?;
        let subresource = segments(subresource);
        crate::ensure!(!subresource.is_empty(), "sub-resource path cannot be empty")?;
        Ok(Self {
            base,
            collection,
            subresource,
        })
    }

    /// The base URL, normalized. A URL with an empty path gains a trailing `/`
    pub fn base(&self) -> &str {
        self.base.as_str()
    }

    /// The collection path, segments joined with `/`
    pub fn collection(&self) -> String {
        self.collection.join("/")
    }

    /// The sub-resource path, segments joined with `/`
    pub fn subresource(&self) -> String {
        self.subresource.join("/")
    }

    /// `{base}/{collection}`
    pub fn collection_url(&self) -> String {
        self.join(std::iter::empty::<&str>())
    }

    /// `{base}/{collection}/{id}/{subresource}`
    ///
    /// The id is percent-encoded as one path segment.
    pub fn child_url(&self, id: &RecordId) -> String {
        let id = id.to_string();
        self.join(std::iter::once(id.as_str()).chain(self.subresource.iter().map(String::as_str)))
    }

    fn join<'a>(&'a self, rest: impl IntoIterator<Item = &'a str>) -> String {
        let mut url = self.base.clone();
        // base was checked to be a base when constructed
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty()
                .extend(self.collection.iter().map(String::as_str))
                .extend(rest);
        }
        url.into()
    }
}

fn parse_base(base: &str) -> crate::Result<Url> {
    let url = crate::check!(Url::parse(base.trim()), "invalid base url '{base}'")?;
    if !matches!(url.scheme(), "http" | "https") {
        crate::bail!("base url must be http or https: '{base}'");
    }
    if url.cannot_be_a_base() {
        crate::bail!("base url cannot have paths appended: '{base}'");
    }
    if url.query().is_some() || url.fragment().is_some() {
        crate::bail!("base url cannot have a query or fragment: '{base}'");
    }
    Ok(url)
}

fn segments(path: &str) -> Vec<String> {
    path.split('/')
        .map(str::trim)
        .filter(|x| !x.is_empty())
        .map(str::to_string)
        .collect()
}

/// Configuration shared by every strategy
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Where to fetch from
    pub endpoint: Endpoint,
    /// How many records to fan out to, from the start of the collection
    pub limit: usize,
    /// Timeout for each request. `None` waits forever
    pub timeout: Option<Duration>,
    /// Max requests in flight for the async strategy, see [`co::pool`](crate::co::pool).
    /// `None` is unlimited
    pub concurrency: Option<isize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: Endpoint::default(),
            limit: DEFAULT_LIMIT,
            timeout: None,
            concurrency: None,
        }
    }
}

impl Config {
    /// Default config, with values from the `FANFETCH_*` env vars applied on top.
    ///
    /// Empty env vars are ignored.
    pub fn from_env() -> crate::Result<Self> {
        let mut config = Self::default();
        let base = crate::env_var(ENV_BASE_URL)?;
        if !base.trim().is_empty() {
            config.endpoint = crate::check!(
                Endpoint::new(&base, DEFAULT_COLLECTION, DEFAULT_SUBRESOURCE),
                "invalid value for env var '{ENV_BASE_URL}'"
            )?;
        }
        if let Some(limit) = crate::env_var_parsed::<usize>(ENV_LIMIT)? {
            config.limit = limit;
        }
        if let Some(secs) = crate::env_var_parsed::<f64>(ENV_TIMEOUT)? {
            config.timeout = Some(crate::check!(
                timeout_from_secs(secs),
                "invalid value for env var '{ENV_TIMEOUT}'"
            )?);
        }
        Ok(config)
    }
}

/// Convert a timeout in seconds. Must be positive and finite.
pub fn timeout_from_secs(secs: f64) -> crate::Result<Duration> {
    crate::ensure!(secs > 0.0, "timeout must be positive, got {secs}")?;
    let timeout = Duration::try_from_secs_f64(secs)
        .with_context(|| format!("timeout out of range: {secs}"))?;
    Ok(timeout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_urls() {
        let endpoint = Endpoint::default();
        assert_eq!(
            endpoint.collection_url(),
            "https://jsonplaceholder.typicode.com/posts"
        );
        assert_eq!(
            endpoint.child_url(&RecordId::Int(3)),
            "https://jsonplaceholder.typicode.com/posts/3/comments"
        );
    }

    #[test]
    fn base_is_normalized() {
        let endpoint = Endpoint::new("http://localhost:8080", "posts", "comments").unwrap();
        assert_eq!(endpoint.base(), "http://localhost:8080/");
        let endpoint = Endpoint::new("http://localhost:8080/v1", "posts", "comments").unwrap();
        assert_eq!(endpoint.base(), "http://localhost:8080/v1");
    }

    #[test]
    fn base_with_path_and_nested_segments() {
        let endpoint = Endpoint::new("http://localhost:8080/v1", "/users/", "albums/photos").unwrap();
        assert_eq!(endpoint.collection(), "users");
        assert_eq!(endpoint.subresource(), "albums/photos");
        assert_eq!(
            endpoint.child_url(&RecordId::Str("a b".to_string())),
            "http://localhost:8080/v1/users/a%20b/albums/photos"
        );
    }

    #[test]
    fn rejects_bad_base() {
        assert!(Endpoint::new("not a url", "posts", "comments").is_err());
        assert!(Endpoint::new("ftp://example.com", "posts", "comments").is_err());
        assert!(Endpoint::new("mailto:someone@example.com", "posts", "comments").is_err());
        assert!(Endpoint::new("https://example.com?x=1", "posts", "comments").is_err());
        assert!(Endpoint::new("https://example.com", "", "comments").is_err());
        assert!(Endpoint::new("https://example.com", "posts", "/").is_err());
    }

    #[test]
    fn timeout_must_be_positive() {
        assert_eq!(timeout_from_secs(1.5).unwrap(), Duration::from_millis(1500));
        assert!(timeout_from_secs(0.0).is_err());
        assert!(timeout_from_secs(-1.0).is_err());
        assert!(timeout_from_secs(f64::NAN).is_err());
        assert!(timeout_from_secs(f64::INFINITY).is_err());
    }
}
