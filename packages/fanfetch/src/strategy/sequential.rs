//! Blocking requests, one after the other
//!
//! The fan-out requests are issued in the order the records appear in the collection,
//! and each one finishes before the next one starts.
use super::Report;
use crate::{Config, Fetch};

/// Fetch the collection, then each selected record's child URL in order
pub fn run(client: &impl Fetch, config: &Config) -> crate::Result<Report> {
    let (list_url, records) = super::fetch_list(client, config)?;
    let urls = super::plan(config, &records)?;
    crate::info!("fetching {} url(s) one by one", urls.len());
    let mut fetched = Vec::with_capacity(urls.len());
    for url in urls {
        fetched.push(super::fetch_one(client, url)?);
    }
    Ok(Report {
        list_url,
        total: records.len(),
        fetched,
    })
}
