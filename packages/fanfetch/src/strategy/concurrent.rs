//! Cooperative tasks on a single-threaded event loop
//!
//! After the collection is fetched, every fan-out request is spawned as its own task.
//! All tasks share one client (and its connection pool), and run concurrently on
//! the current-thread runtime. The join waits for every task, in whatever order they finish.
//! The first task that fails aborts the others, and its error is returned.
//!
//! [`Config::concurrency`] optionally limits how many tasks run at the same time,
//! through a [`co::Pool`](crate::co::Pool).
use super::Report;
use crate::{CoFetch, Config, co};

/// Fetch the collection, then gather all selected child URLs concurrently
///
/// Must be awaited inside a `tokio` runtime.
pub async fn co_run<C>(client: &C, config: &Config) -> crate::Result<Report>
where
    C: CoFetch + Clone + Send + Sync + 'static,
{
    let (list_url, records) = super::co_fetch_list(client, config).await?;
    let urls = super::plan(config, &records)?;
    let mut set = match config.concurrency {
        Some(capacity) => {
            let pool = co::pool(capacity);
            crate::info!(
                "spawning {} task(s), at most {} at a time",
                urls.len(),
                pool.capacity()
            );
            pool.set()
        }
        None => {
            crate::info!("spawning {} task(s)", urls.len());
            co::set()
        }
    };
    for url in urls {
        let client = client.clone();
        set.co_spawn(async move { super::co_fetch_one(&client, url).await });
    }
    let fetched = set.co_join_all().await?;
    Ok(Report {
        list_url,
        total: records.len(),
        fetched,
    })
}

/// Blocking entry point: run [`co_run`] on the current-thread runtime
///
/// # Panics
/// Panics if called from inside an async runtime, use [`co_run`] there.
pub fn run<C>(client: &C, config: &Config) -> crate::Result<Report>
where
    C: CoFetch + Clone + Send + Sync + 'static,
{
    co::block(co_run(client, config))
}
