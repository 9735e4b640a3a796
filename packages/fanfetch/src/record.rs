use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::pre::*;

/// Identifier of a [`Record`]. APIs use either numbers or strings.
///
/// Displayed without quotes, so `7` and `"7"` derive the same URL.
/// Numbers that do not fit `i64` (floats, large unsigned) are kept as they are.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
    Serialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(untagged)]
pub enum RecordId {
    #[display("{_0}")]
    Int(i64),
    #[display("{_0}")]
    Num(Number),
    #[display("{_0}")]
    Str(String),
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// One element of a collection.
///
/// Only `id` is looked at. Everything else is kept as-is in `fields`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Record {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Record {
    /// A record with only an id
    pub fn with_id(id: impl Into<RecordId>) -> Self {
        Self {
            id: Some(id.into()),
            fields: Map::new(),
        }
    }

    /// Decode one element of the collection. `position` is only for the error message
    pub fn from_element(element: &Value, position: usize) -> crate::Result<Self> {
        if !element.is_object() {
            crate::bail!("record #{position} in the collection is not an object: {element}");
        }
        crate::check!(
            crate::from_json_value(element.clone()),
            "record #{position} in the collection has an invalid 'id'"
        )
    }

    /// The id, or an error naming the record's position in the collection
    pub fn require_id(&self, position: usize) -> crate::Result<&RecordId> {
        match &self.id {
            Some(id) => Ok(id),
            None => crate::bail!("record #{position} in the collection has no 'id'"),
        }
    }
}

/// The first `limit` elements, or all of them if there are fewer
#[inline]
pub fn select<T>(elements: &[T], limit: usize) -> &[T] {
    &elements[..limit.min(elements.len())]
}
