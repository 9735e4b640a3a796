//! In-memory API shared by the strategy tests
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use fanfetch::json::{Value, json};
use fanfetch::{CoFetch, Config, Endpoint, Fetch};

pub const BASE: &str = "http://fake.test";

pub fn config(limit: usize) -> Config {
    Config {
        endpoint: Endpoint::new(BASE, "posts", "comments").unwrap(),
        limit,
        ..Config::default()
    }
}

pub fn comments_url(id: i64) -> String {
    format!("{BASE}/posts/{id}/comments")
}

/// Serves `/posts` and `/posts/{id}/comments`, and records what was asked
#[derive(Clone)]
pub struct FakeApi(Arc<Inner>);

struct Inner {
    posts: Value,
    delay: Duration,
    fail_id: Option<i64>,
    panic_id: Option<i64>,
    started: Mutex<Vec<String>>,
    completed: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

pub struct FakeApiBuilder {
    posts: Value,
    delay: Duration,
    fail_id: Option<i64>,
    panic_id: Option<i64>,
}

impl FakeApiBuilder {
    /// Each child request takes this long. The collection request is instant
    pub fn delay(mut self, ms: u64) -> Self {
        self.delay = Duration::from_millis(ms);
        self
    }
    /// The child request of this post fails right away
    pub fn fail_on(mut self, id: i64) -> Self {
        self.fail_id = Some(id);
        self
    }
    /// The child request of this post panics right away
    pub fn panic_on(mut self, id: i64) -> Self {
        self.panic_id = Some(id);
        self
    }
    pub fn build(self) -> FakeApi {
        FakeApi(Arc::new(Inner {
            posts: self.posts,
            delay: self.delay,
            fail_id: self.fail_id,
            panic_id: self.panic_id,
            started: Mutex::new(Vec::new()),
            completed: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }))
    }
}

impl FakeApi {
    /// Posts with ids `1..=n`
    pub fn posts(n: i64) -> FakeApiBuilder {
        let posts = (1..=n)
            .map(|id| json!({"userId": 1, "id": id, "title": format!("post {id}")}))
            .collect();
        Self::raw(Value::Array(posts))
    }

    /// Serve this exact value as the collection
    pub fn raw(posts: Value) -> FakeApiBuilder {
        FakeApiBuilder {
            posts,
            delay: Duration::ZERO,
            fail_id: None,
            panic_id: None,
        }
    }

    /// Every URL requested, in the order the requests started
    pub fn started(&self) -> Vec<String> {
        self.0.started.lock().unwrap().clone()
    }

    /// Child URLs whose request finished successfully, in completion order
    pub fn completed(&self) -> Vec<String> {
        self.0.completed.lock().unwrap().clone()
    }

    /// Child URLs requested, in the order the requests started
    pub fn child_requests(&self) -> Vec<String> {
        self.started()
            .into_iter()
            .filter(|x| x.ends_with("/comments"))
            .collect()
    }

    /// Most child requests that were in flight at the same time
    pub fn max_in_flight(&self) -> usize {
        self.0.max_in_flight.load(Ordering::SeqCst)
    }

    /// Decide the response. `Ok(Err(id))` is a child request to be finished after the delay
    fn begin(&self, url: &str) -> fanfetch::Result<Result<Value, i64>> {
        self.0.started.lock().unwrap().push(url.to_string());
        if url == format!("{BASE}/posts") {
            return Ok(Ok(self.0.posts.clone()));
        }
        let id = url
            .strip_prefix(&format!("{BASE}/posts/"))
            .and_then(|x| x.strip_suffix("/comments"))
            .and_then(|x| x.parse::<i64>().ok());
        let Some(id) = id else {
            fanfetch::bail!("404 not found: {url}");
        };
        if self.0.panic_id == Some(id) {
            panic!("fake api panicked on post {id}");
        }
        if self.0.fail_id == Some(id) {
            fanfetch::bail!("500 internal server error: {url}");
        }
        let now = self.0.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.0.max_in_flight.fetch_max(now, Ordering::SeqCst);
        Ok(Err(id))
    }

    fn finish(&self, url: &str, id: i64) -> Value {
        self.0.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.0.completed.lock().unwrap().push(url.to_string());
        json!([
            {"postId": id, "id": id * 10, "body": "first"},
            {"postId": id, "id": id * 10 + 1, "body": "second"},
        ])
    }
}

impl Fetch for FakeApi {
    fn get_json(&self, url: &str) -> fanfetch::Result<Value> {
        match self.begin(url)? {
            Ok(value) => Ok(value),
            Err(id) => {
                std::thread::sleep(self.0.delay);
                Ok(self.finish(url, id))
            }
        }
    }
}

impl CoFetch for FakeApi {
    async fn co_get_json(&self, url: &str) -> fanfetch::Result<Value> {
        match self.begin(url)? {
            Ok(value) => Ok(value),
            Err(id) => {
                tokio::time::sleep(self.0.delay).await;
                Ok(self.finish(url, id))
            }
        }
    }
}
