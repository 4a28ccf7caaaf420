//! Stored item envelope
//!
//! Every item value is the JSON form of an [`Entry`]:
//!
//! ```text
//! {"d": 3, "t": "i64", "v": 42}
//! ```
//!
//! `d` is the expiration in whole seconds that was also sent to the server,
//! so a sliding cache can touch the item with the same duration on read.

use std::time::Duration;

use memstash_domain::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Expiration envelope around an encoded value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Expiration in whole seconds
    #[serde(rename = "d")]
    pub expiration_secs: i32,
    /// Codec tag of the value type
    #[serde(rename = "t")]
    pub tag: String,
    /// Encoded value
    #[serde(rename = "v")]
    pub payload: Value,
}

impl Entry {
    /// Build an entry, truncating `ttl` to whole seconds
    pub fn new(ttl: Duration, tag: String, payload: Value) -> Self {
        Self {
            expiration_secs: expiration_secs(ttl),
            tag,
            payload,
        }
    }

    /// Expiration to pass to the server
    pub fn protocol_expiration(&self) -> u32 {
        u32::try_from(self.expiration_secs).unwrap_or_default()
    }

    /// Serialize into `buffer`
    pub fn write_to(&self, buffer: &mut Vec<u8>) -> Result<()> {
        serde_json::to_writer(buffer, self)
            .map_err(|e| Error::serialization_with_source("failed to encode entry", e))
    }

    /// Deserialize stored item bytes
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes)
            .map_err(|e| Error::serialization_with_source("failed to decode entry", e))
    }
}

/// Whole seconds of `ttl`, saturating at `i32::MAX`
pub fn expiration_secs(ttl: Duration) -> i32 {
    i32::try_from(ttl.as_secs()).unwrap_or(i32::MAX)
}
