use serde::Deserialize;

use crate::Context as _;

/// Parse a JSON document from a `&str`
///
/// The error names the target type, which tells a "wrong shape" error
/// apart from a "not JSON at all" error.
///
/// ```rust
/// # fn main() -> fanfetch::Result<()> {
/// let records: Vec<fanfetch::Record> = fanfetch::parse_json(r#"[{"id": 1}, {"id": 2}]"#)?;
/// assert_eq!(records.len(), 2);
/// # Ok(()) }
/// ```
#[inline(always)]
pub fn parse_json<T: for<'a> Deserialize<'a>>(x: &str) -> crate::Result<T> {
    serde_json::from_str(x).with_context(|| {
        format!(
            "failed to parse input as json into {}",
            std::any::type_name::<T>()
        )
    })
}

/// Parse a JSON document from raw bytes, like a response body
#[inline(always)]
pub fn parse_json_bytes<T: for<'a> Deserialize<'a>>(x: &[u8]) -> crate::Result<T> {
    serde_json::from_slice(x).with_context(|| {
        format!(
            "failed to parse input as json into {}",
            std::any::type_name::<T>()
        )
    })
}

/// Convert an already decoded JSON value into `T`
#[inline(always)]
pub fn from_json_value<T: for<'a> Deserialize<'a>>(x: serde_json::Value) -> crate::Result<T> {
    serde_json::from_value(x).with_context(|| {
        format!(
            "failed to convert json value into {}",
            std::any::type_name::<T>()
        )
    })
}

pub mod json {
    pub use serde_json::{Map, Value, json};
}
