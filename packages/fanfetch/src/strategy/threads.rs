//! One OS thread per request
//!
//! Every fan-out request gets its own scoped thread, named `fetch-{i}`. All threads
//! are joined before [`run`] returns, which is the barrier: nothing after `run` can
//! observe a request that is still in flight.
//!
//! A failing request does not stop the others. Its error is logged from its own
//! thread right away, and once every thread is joined, `run` returns an error
//! saying how many requests failed, with the first failure as the cause.
//! A panicking thread counts as a failed request.
use std::thread::ScopedJoinHandle;

use super::{Fetched, Report};
use crate::pre::*;
use crate::{Config, Fetch};

/// Fetch the collection, then all selected child URLs in parallel, one thread each
pub fn run<C>(client: &C, config: &Config) -> crate::Result<Report>
where
    C: Fetch + Sync,
{
    let (list_url, records) = super::fetch_list(client, config)?;
    let urls = super::plan(config, &records)?;
    let total = urls.len();
    crate::info!("spawning {total} thread(s)");

    let outcomes = fork_join(client, urls);

    let mut fetched = Vec::with_capacity(total);
    let mut errors = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(x) => fetched.push(x),
            Err(e) => errors.push(e),
        }
    }
    let failed = errors.len();
    if let Some(first) = errors.into_iter().next() {
        return Err(first).context(format!("{failed} of {total} request(s) failed"));
    }
    Ok(Report {
        list_url,
        total: records.len(),
        fetched,
    })
}

/// Spawn one thread per URL, then join all of them.
///
/// Outcomes are in the same order as `urls`.
fn fork_join<C>(client: &C, urls: Vec<String>) -> Vec<crate::Result<Fetched>>
where
    C: Fetch + Sync,
{
    std::thread::scope(|s| {
        // fork: every thread must be spawned before any is joined
        let mut spawned: Vec<crate::Result<ScopedJoinHandle<'_, crate::Result<Fetched>>>> =
            Vec::with_capacity(urls.len());
        for (i, url) in urls.into_iter().enumerate() {
            let name = format!("fetch-{i}");
            let thread_name = name.clone();
            let handle = std::thread::Builder::new()
                .name(name.clone())
                .spawn_scoped(s, move || {
                    crate::set_thread_print_name(&thread_name);
                    let result = super::fetch_one(client, url);
                    if let Err(e) = &result {
                        crate::error!("{e:?}");
                    }
                    result
                });
            spawned.push(crate::check!(handle, "failed to spawn thread '{name}'"));
        }
        // join: the barrier
        spawned
            .into_iter()
            .map(|handle| {
                let handle = handle?;
                let name = handle.thread().name().unwrap_or("fetch").to_string();
                match handle.join() {
                    Ok(result) => result,
                    Err(payload) => {
                        let info = crate::panic_message(payload.as_ref());
                        crate::bailand!(error!("thread '{name}' panicked: {info}"));
                    }
                }
            })
            .collect()
    })
}
