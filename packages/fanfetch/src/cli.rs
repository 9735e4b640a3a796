//! # Command Line Interface
//!
//! The [`Flags`] struct implement `clap::Args` to provide common
//! options that integrates with the rest of the crate:
//! - `--verbose`/`-v` to increase verbose level.
//! - `--quiet`/`-q` to decrease verbose level.
//! - `--color` to set color mode
//!
//! Flatten it into the program's own args, and hand the main function to [`run`]:
//! ```rust,no_run
//! #[derive(clap::Parser)]
//! struct Args {
//!     /// Base URL of the API
//!     #[clap(long)]
//!     base_url: Option<String>,
//!     #[clap(flatten)]
//!     flags: fanfetch::cli::Flags,
//! }
//! impl AsRef<fanfetch::cli::Flags> for Args {
//!     fn as_ref(&self) -> &fanfetch::cli::Flags {
//!         &self.flags
//!     }
//! }
//! fn main() -> std::process::ExitCode {
//!     // SAFETY: only the main thread is running
//!     unsafe { fanfetch::cli::run(main_internal) }
//! }
//! fn main_internal(args: Args) -> fanfetch::Result<()> {
//!     fanfetch::info!("base url: {:?}", args.base_url);
//!     Ok(())
//! }
//! ```
use std::time::Instant;

use crate::{ColorLevel, PrintLevel};

/// Common flags for printing
#[derive(Debug, Clone, Default, PartialEq, clap::Args)]
pub struct Flags {
    /// Verbose. More -v makes it more verbose (opposite of --quiet)
    #[clap(short = 'v', long, action(clap::ArgAction::Count), global = true)]
    pub verbose: u8,
    /// Quiet. More -q makes it more quiet (opposite of --verbose)
    #[clap(short = 'q', long, action(clap::ArgAction::Count), global = true)]
    pub quiet: u8,
    /// Set the color mode for this program
    #[clap(long, global = true)]
    pub color: Option<ColorLevel>,
}

impl AsRef<Flags> for Flags {
    fn as_ref(&self) -> &Flags {
        self
    }
}

impl Flags {
    /// The print level from the `-v` and `-q` counts
    pub fn print_level(&self) -> PrintLevel {
        PrintLevel::from_flags(self.verbose, self.quiet)
    }

    /// Apply the CLI Flags
    ///
    /// This is unsafe because it modifies environment variables.
    /// Only call it while the program only has the main thread.
    pub unsafe fn apply(&self) {
        let level = self.print_level();
        if level == PrintLevel::VerboseVerbose
            && std::env::var("RUST_BACKTRACE")
                .unwrap_or_default()
                .is_empty()
        {
            unsafe { std::env::set_var("RUST_BACKTRACE", "1") }
        }
        crate::init_print_options(self.color.unwrap_or_default(), level);
    }
}

/// Entry point
///
/// Parse the args, apply the [`Flags`], run `f`, then report the result.
///
/// # Safety
/// Must be called while the program only has the main thread, see [`Flags::apply`].
#[inline(always)]
pub unsafe fn run<T, F>(f: F) -> std::process::ExitCode
where
    T: clap::Parser + AsRef<Flags>,
    F: FnOnce(T) -> crate::Result<()>,
{
    let start = Instant::now();
    let args = <T as clap::Parser>::parse();
    unsafe { args.as_ref().apply() };
    let result = f(args);
    handle_result(start, result)
}

fn handle_result(start: Instant, result: crate::Result<()>) -> std::process::ExitCode {
    let elapsed = start.elapsed().as_secs_f32();
    if let Err(e) = result {
        crate::debug!("finished in {elapsed:.2}s");
        crate::error!("fatal: {e:?}");
        if std::env::var("RUST_BACKTRACE")
            .unwrap_or_default()
            .is_empty()
        {
            crate::hint!("use -vv or set RUST_BACKTRACE=1 to get backtrace for the error above.");
        }
        std::process::ExitCode::FAILURE
    } else {
        crate::info!("finished in {elapsed:.2}s");
        std::process::ExitCode::SUCCESS
    }
}
