//! Fetch a collection, then fan out to one sub-resource per record
//!
//! # Overview
//! The same flow is implemented four times, once per concurrency model:
//! 1. Fetch the collection (for example `/posts`) and decode it as a JSON array
//! 2. Select the first `limit` records (10 by default)
//! 3. Derive `{base}/{collection}/{id}/{subresource}` for each record and GET it
//! 4. Wait for the requests to finish, printing one line per request
//!
//! The strategies live under [`strategy`]:
//! - [`strategy::sequential`]: blocking calls, one after the other
//! - [`strategy::threads`]: one OS thread per request, joined as a barrier
//! - [`strategy::coroutine`]: a single round trip through an explicit state machine
//! - [`strategy::concurrent`]: tasks on a single-threaded `tokio` event loop
//!
//! Common imports are in the prelude:
//! ```rust
//! use fanfetch::pre::*;
//! ```
//!
//! # HTTP
//! Strategies talk to the network through the [`Fetch`] (blocking) and
//! [`CoFetch`] (async) traits. [`BlockingClient`] and [`Client`] implement them
//! with `reqwest`. Anything else implementing the traits can be plugged in,
//! which is how the strategies are tested without a network.
//!
//! # `log` integration
//! In addition to the common `error`, `warn`, `info`, `debug`, `trace`
//! log types, `fanfetch` provides 2 extra types:
//! - `print`: like `info`, but has a higher importance
//! - `hint`: like `print`, but specifically for hinting actions the user can take
//!
//! |         | `-qq` | ` -q` | `   ` | ` -v` | `-vv` |
//! |-|-      |-     |-       |-     |-      |
//! | [`error!`](crate::error) | ❌ | ✅ | ✅ | ✅ | ✅ |
//! | [`hint!`](crate::hint) | ❌ | ✅ | ✅ | ✅ | ✅ |
//! | [`print!`](macro@crate::print) | ❌ | ✅ | ✅ | ✅ | ✅ |
//! | [`warn!`](crate::warn)  | ❌ | ❌ | ✅ | ✅ | ✅ |
//! | [`info!`](crate::info)  | ❌ | ❌ | ✅ | ✅ | ✅ |
//! | [`debug!`](crate::debug) | ❌ | ❌ | ❌ | ✅ | ✅ |
//! | [`trace!`](crate::trace) | ❌ | ❌ | ❌ | ❌ | ✅ |
//!
//! The `RUST_LOG` environment variable is also supported in the same
//! way as in [`env_logger`](https://docs.rs/env_logger/latest/env_logger/#enabling-logging).
//!
//! When setting up test, you can use [`log_init`] to quickly initialize logging.
//!
//! [`set_thread_print_name`] can be used to add a prefix to all messages printed
//! by the current thread. The `threads` strategy names each worker this way.

mod error_handling;
mod misc;
pub use misc::*;

mod env_var;
pub use env_var::*;

mod parse;
pub use parse::*;

/// Printing and `log` integration
mod print;
pub use print::{
    ColorLevel, PrintLevel, color_enabled, init_print_options, log_enabled, log_init,
    set_thread_print_name,
};

pub mod cli;
pub mod co;

pub mod config;
pub use config::{Config, Endpoint};

mod record;
pub use record::{Record, RecordId, select};

mod http;
pub use http::{BlockingClient, Client, CoFetch, Fetch};

pub mod strategy;

/// Level shorthand for message/events
pub mod lv {
    /// Error
    pub const E: crate::__priv::Lv = crate::__priv::Lv::Error;
    /// Hint
    pub const H: crate::__priv::Lv = crate::__priv::Lv::Hint;
    /// Print
    pub const P: crate::__priv::Lv = crate::__priv::Lv::Print;
    /// Warn
    pub const W: crate::__priv::Lv = crate::__priv::Lv::Warn;
    /// Info
    pub const I: crate::__priv::Lv = crate::__priv::Lv::Info;
    /// Debug
    pub const D: crate::__priv::Lv = crate::__priv::Lv::Debug;
    /// Trace
    pub const T: crate::__priv::Lv = crate::__priv::Lv::Trace;
}

// re-exports from libraries
pub use anyhow::{Context, Error, Ok, Result, anyhow as fmterr, bail};
pub use log::{debug, error, info, trace, warn};

#[doc(hidden)]
pub mod __priv {
    pub use crate::print::{__print_with_level, Lv};
}

/// Prelude imports
pub mod pre {
    pub use crate::Context as _;
    pub use crate::{CoFetch as _, Fetch as _};
}
