/// # Error Handling
/// Errors are [`anyhow`](https://docs.rs/anyhow) errors, with context
/// naming the URL or the env var involved.
///
/// The re-exports:
/// - `anyhow::Result` is `fanfetch::Result`
/// - `anyhow::bail!`  is `fanfetch::bail!`
/// - `anyhow::Ok`     is `fanfetch::Ok`
/// - `anyhow::anyhow` is `fanfetch::fmterr`
///
/// `fanfetch::check!` wraps `.with_context()`:
/// ```rust
/// use fanfetch::pre::*;
///
/// fn fetch_title() -> fanfetch::Result<String> {
///     Ok("sunt aut facere".to_string())
/// }
/// fn main() -> fanfetch::Result<()> {
///     let id = 1;
///     let title = fanfetch::check!(fetch_title(), "failed to fetch post {id}")?;
///     // with anyhow, this would be:
///     // let title = fetch_title().with_context(|| format!("failed to fetch post {id}"))?;
///     assert_eq!(title, "sunt aut facere");
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! check {
    ($result:expr, $($args:tt)*) => {{
        { $result }.with_context(|| format!($($args)*))
    }};
}

/// Rethrow an `Err`, optionally with additional context
///
/// Prelude import is required to bring in the Context trait.
#[macro_export]
macro_rules! rethrow {
    ($result:expr) => {
        return Err($result.into());
    };
    ($result:expr, $($args:tt)*) => {{
        return Err($result).context(format!($($args)*));
    }};
}

/// Check if an expression is `true`
///
/// Unlike `anyhow::ensure`, if the condition fail, this will generate an `Error`
/// instead of returning an error directly, so you need to add a `?`.
///
/// ```rust
/// let limit = 0usize;
/// assert!(fanfetch::ensure!(limit > 0, "limit must be positive").is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($result:expr) => {{
        if !bool::from($result) {
            Err($crate::fmterr!("condition failed: `{}`", stringify!($result)))
        } else {
            Ok(())
        }
    }};
    ($result:expr, $($args:tt)*) => {{
        if !bool::from($result) {
            Err($crate::fmterr!("condition failed: `{}`: {}", stringify!($result), format_args!($($args)*)))
        } else {
            Ok(())
        }
    }};
}

/// Invoke a print macro, then bail with the same message
///
/// ```rust
/// fn fetch() -> fanfetch::Result<()> {
///     fanfetch::bailand!(error!("found {} bad records", 3));
/// }
/// assert!(fetch().is_err()); // will also log error "found 3 bad records"
/// ```
#[macro_export]
macro_rules! bailand {
    ($mac:ident !( $($fmt_args:tt)* )) => {{
        let s = format!($($fmt_args)*);
        $crate::$mac!("{s}");
        $crate::bail!(s);
    }}
}
