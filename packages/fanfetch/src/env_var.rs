use std::ffi::OsStr;

use crate::pre::*;

/// Like [`std::env::var`], but treat not-set as empty string.
/// Tracing and reporting is built-in.
///
/// ```rust
/// # fn main() -> fanfetch::Result<()> {
/// assert!(fanfetch::env_var("FANFETCH_NOT_SET")?.is_empty());
/// # Ok(()) }
/// ```
#[inline(always)]
pub fn env_var(var: impl AsRef<OsStr>) -> crate::Result<String> {
    env_var_impl(var.as_ref())
}
fn env_var_impl(var: &OsStr) -> crate::Result<String> {
    crate::trace!("reading env var '{}'", var.display());
    match std::env::var(var) {
        Ok(v) => Ok(v),
        Err(std::env::VarError::NotPresent) => Ok(String::new()),
        Err(e) => {
            crate::rethrow!(e, "failed to read env var '{}'", var.display());
        }
    }
}

/// Read an env var and parse it, `None` if the var is not set or empty
///
/// The error names the variable, so a bad value is easy to find.
pub fn env_var_parsed<T>(var: &str) -> crate::Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = env_var(var)?;
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    let parsed = crate::check!(
        value.parse::<T>(),
        "invalid value for env var '{var}': '{value}'"
    )?;
    Ok(Some(parsed))
}
