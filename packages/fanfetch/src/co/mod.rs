//! # Coroutines (Async)
//!
//! The async strategy runs on a single-threaded (current-thread) [`tokio`](https://docs.rs/tokio)
//! runtime. The entry point from synchronous code is [`block`]. Inside the runtime,
//! tasks are spawned with [`co_spawn`] or collected into a [`Set`] to be joined together.
//!
//! ```rust
//! let sum = fanfetch::co::block(async {
//!     let mut set = fanfetch::co::set();
//!     for i in 1..=3 {
//!         set.co_spawn(async move { fanfetch::Ok(i) });
//!     }
//!     set.co_join_all().await
//! })
//! .map(|v: Vec<i32>| v.into_iter().sum::<i32>());
//! assert_eq!(sum.unwrap(), 6);
//! ```
//!
//! It is crucial that we never block an async runtime. This means to wait for a future:
//! - If we are not in an async runtime, call [`block`] to block
//!   the current thread while letting the runtime run until the future is finished.
//! - If we are already in an async runtime, we must `.await` instead.
//!   Otherwise tokio will detect it and panic.
//!
//! This is why APIs come in pairs, for example [`Handle::join`] and [`Handle::co_join`].
//!
//! # Limiting
//! A [`Pool`] is a semaphore that limits how many tasks spawned through it
//! run at the same time. See [`pool`].

mod runtime;
pub use runtime::{block, co_spawn};

mod handle;
pub use handle::Handle;

mod pool;
pub use pool::{Pool, Set, pool, set};

mod co_util;
