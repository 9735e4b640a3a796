use fanfetch::Config;
use fanfetch::pre::*;
use fanfetch::strategy::{Report, Strategy, concurrent, coroutine, sequential, threads};

#[derive(clap::Parser)]
#[clap(version, about = "Fetch a collection, then fan out to one sub-resource per record")]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    #[clap(flatten)]
    endpoint: EndpointArgs,

    #[clap(flatten)]
    flags: fanfetch::cli::Flags,
}

impl AsRef<fanfetch::cli::Flags> for Cli {
    fn as_ref(&self) -> &fanfetch::cli::Flags {
        &self.flags
    }
}

#[derive(clap::Subcommand)]
enum Command {
    /// Blocking requests, one after the other
    Sequential,
    /// One OS thread per request, joined as a barrier
    Threads,
    /// Fetch the collection through a single coroutine round trip
    Coroutine,
    /// Tasks on a single-threaded event loop, waiting for all of them
    #[clap(alias = "gather")]
    Async {
        /// Max requests in flight. 0 is the number of CPUs, negative is CPUs minus N.
        /// Unlimited if not set
        #[clap(long, allow_negative_numbers = true)]
        concurrency: Option<isize>,
    },
    /// Run every strategy, in order
    All {
        /// Max requests in flight for the async strategy
        #[clap(long, allow_negative_numbers = true)]
        concurrency: Option<isize>,
    },
}

/// Overrides for the endpoint. Anything not set comes from the
/// `FANFETCH_*` environment variables, then the defaults.
#[derive(clap::Args)]
struct EndpointArgs {
    /// Base URL of the API
    #[clap(long, global = true)]
    base_url: Option<String>,
    /// Path of the collection, relative to the base URL
    #[clap(long, global = true)]
    collection: Option<String>,
    /// Path of the sub-resource, relative to each record
    #[clap(long, global = true)]
    subresource: Option<String>,
    /// How many records to fan out to
    #[clap(short = 'n', long, global = true)]
    limit: Option<usize>,
    /// Timeout for each request, in seconds
    #[clap(long, global = true)]
    timeout: Option<f64>,
}

impl EndpointArgs {
    fn resolve(&self, concurrency: Option<isize>) -> fanfetch::Result<Config> {
        let mut config = Config::from_env()?;
        if self.base_url.is_some() || self.collection.is_some() || self.subresource.is_some() {
            let endpoint = &config.endpoint;
            let base = self.base_url.as_deref().unwrap_or(endpoint.base());
            let collection = match &self.collection {
                Some(x) => x.clone(),
                None => endpoint.collection(),
            };
            let subresource = match &self.subresource {
                Some(x) => x.clone(),
                None => endpoint.subresource(),
            };
            config.endpoint = fanfetch::check!(
                fanfetch::Endpoint::new(base, &collection, &subresource),
                "invalid endpoint"
            )?;
        }
        if let Some(limit) = self.limit {
            config.limit = limit;
        }
        if let Some(secs) = self.timeout {
            config.timeout = Some(fanfetch::check!(
                fanfetch::config::timeout_from_secs(secs),
                "invalid value for --timeout"
            )?);
        }
        config.concurrency = concurrency;
        Ok(config)
    }
}

fn main() -> std::process::ExitCode {
    // SAFETY: nothing else is running before main_internal
    unsafe { fanfetch::cli::run(main_internal) }
}

fn main_internal(args: Cli) -> fanfetch::Result<()> {
    let (strategies, concurrency) = match args.command {
        Command::Sequential => (vec![Strategy::Sequential], None),
        Command::Threads => (vec![Strategy::Threads], None),
        Command::Coroutine => (vec![Strategy::Coroutine], None),
        Command::Async { concurrency } => (vec![Strategy::Async], concurrency),
        Command::All { concurrency } => (Strategy::ALL.to_vec(), concurrency),
    };
    let config = args.endpoint.resolve(concurrency)?;
    fanfetch::debug!("collection url: {}", config.endpoint.collection_url());
    fanfetch::debug!("limit: {}, timeout: {:?}", config.limit, config.timeout);

    let show_header = strategies.len() > 1;
    for strategy in strategies {
        if show_header {
            fanfetch::print!("== {strategy} ==");
        }
        let report = fanfetch::check!(run(strategy, &config), "strategy '{strategy}' failed")?;
        fanfetch::print!("Done");
        summarize(strategy, &report);
    }
    Ok(())
}

fn run(strategy: Strategy, config: &Config) -> fanfetch::Result<Report> {
    match strategy {
        Strategy::Sequential => {
            let client = fanfetch::BlockingClient::new(config.timeout)?;
            sequential::run(&client, config)
        }
        Strategy::Threads => {
            let client = fanfetch::BlockingClient::new(config.timeout)?;
            threads::run(&client, config)
        }
        Strategy::Coroutine => {
            let client = fanfetch::BlockingClient::new(config.timeout)?;
            coroutine::run(&client, config)
        }
        Strategy::Async => {
            let client = fanfetch::Client::new(config.timeout)?;
            concurrent::run(&client, config)
        }
    }
}

fn summarize(strategy: Strategy, report: &Report) {
    match strategy {
        Strategy::Coroutine => fanfetch::info!(
            "{strategy}: fetched '{}' in one round trip, {} record(s)",
            report.list_url,
            report.total
        ),
        _ => fanfetch::info!(
            "{strategy}: fetched {} of {} record(s) from '{}'",
            report.fetched.len(),
            report.total,
            report.list_url
        ),
    }
}
