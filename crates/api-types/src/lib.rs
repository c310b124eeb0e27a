//! Data types for the Circonus API.
//!
//! These structs model the JSON documents exchanged with the Circonus v2
//! API. They are provided in a separate crate so that consumers can depend
//! on the shapes without pulling in the HTTP client.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A check-bundle record as returned by `/check_bundle/<id>`.
///
/// Only the `tags` field is interpreted by this workspace. Everything else
/// the API sends (`_cid`, `config`, `metrics`, ...) round-trips untouched
/// through `rest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckBundle {
    /// `category:value` labels attached to the bundle. `None` when the
    /// source document has no `tags` key at all, which is distinct from an
    /// empty list and round-trips as an absent key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Passthrough for fields this workspace does not interpret.
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl CheckBundle {
    /// The bundle's `_cid` reference, when the API supplied one.
    pub fn cid(&self) -> Option<&str> {
        self.rest.get("_cid").and_then(Value::as_str)
    }
}
