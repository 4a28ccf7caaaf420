//! Explicit value codec
//!
//! Each cache carries its own [`ValueCodec`]: the set of concrete value
//! types it is allowed to store, each under a stable tag written next to the
//! payload. Putting a value whose type is not registered fails with
//! [`Error::TypeNotRegistered`] before anything reaches the server.
//!
//! ## Example
//!
//! ```
//! use memstash_domain::value_objects::{CacheValue, ValueCodec};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
//! struct Session {
//!     user: String,
//! }
//!
//! let codec = ValueCodec::builder()
//!     .with_builtins()
//!     .register::<Session>("session")
//!     .build();
//!
//! let (tag, payload) = codec.encode(&CacheValue::new(Session { user: "ana".into() })).unwrap();
//! assert_eq!(tag, "session");
//!
//! let decoded = codec.decode(&tag, payload).unwrap();
//! assert_eq!(decoded.downcast_ref::<Session>().map(|s| s.user.as_str()), Some("ana"));
//! ```

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::CacheValue;
use crate::constants::{
    VALUE_TAG_BOOL, VALUE_TAG_BYTES, VALUE_TAG_F64, VALUE_TAG_I32, VALUE_TAG_I64, VALUE_TAG_STRING,
    VALUE_TAG_U32, VALUE_TAG_U64,
};
use crate::error::{Error, Result};

type EncodeFn = fn(&(dyn Any + Send + Sync)) -> Result<Value>;
type DecodeFn = fn(Value) -> Result<CacheValue>;

#[derive(Clone)]
struct Registration {
    tag: String,
    encode: EncodeFn,
    decode: DecodeFn,
}

fn encode_as<T>(value: &(dyn Any + Send + Sync)) -> Result<Value>
where
    T: Serialize + DeserializeOwned + 'static,
{
    let typed = value
        .downcast_ref::<T>()
        .ok_or_else(|| Error::internal(format!("codec entry mismatch for {}", type_name::<T>())))?;
    let payload = serde_json::to_value(typed).map_err(|e| {
        Error::serialization_with_source(format!("failed to encode {}", type_name::<T>()), e)
    })?;

    // Non-finite floats encode as null and would not decode again
    if contains_null(&payload)
        && let Err(e) = serde_json::from_value::<T>(payload.clone())
    {
        return Err(Error::serialization_with_source(
            format!("{} does not survive encoding", type_name::<T>()),
            e,
        ));
    }
    Ok(payload)
}

fn contains_null(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.iter().any(contains_null),
        Value::Object(fields) => fields.values().any(contains_null),
        _ => false,
    }
}

fn decode_as<T>(payload: Value) -> Result<CacheValue>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    let typed: T = serde_json::from_value(payload).map_err(|e| {
        Error::serialization_with_source(format!("failed to decode {}", type_name::<T>()), e)
    })?;
    Ok(CacheValue::new(typed))
}

/// Per-cache registry of storable value types.
///
/// `ValueCodec::default()` knows the built-in scalar types (`i32`, `i64`,
/// `u32`, `u64`, `f64`, `bool`, `String`, `Vec<u8>`); application types are
/// added through [`ValueCodec::builder`].
#[derive(Clone)]
pub struct ValueCodec {
    by_type: Arc<HashMap<TypeId, Registration>>,
    by_tag: Arc<HashMap<String, Registration>>,
}

impl ValueCodec {
    /// Start building a codec with no registered types
    pub fn builder() -> ValueCodecBuilder {
        ValueCodecBuilder::default()
    }

    /// A codec that rejects every value
    pub fn empty() -> Self {
        Self::builder().build()
    }

    /// Whether `T` can be stored
    pub fn is_registered<T: Any>(&self) -> bool {
        self.by_type.contains_key(&TypeId::of::<T>())
    }

    /// Tag registered for `T`, if any
    pub fn tag_of<T: Any>(&self) -> Option<&str> {
        self.by_type
            .get(&TypeId::of::<T>())
            .map(|registration| registration.tag.as_str())
    }

    /// All registered tags, sorted
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.by_tag.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Encode a value into its tag and JSON payload
    pub fn encode(&self, value: &CacheValue) -> Result<(String, Value)> {
        let registration = self
            .by_type
            .get(&value.value_type_id())
            .ok_or_else(|| Error::type_not_registered(value.type_name()))?;
        let payload = (registration.encode)(value.as_any())?;
        Ok((registration.tag.clone(), payload))
    }

    /// Decode a tagged JSON payload back into a value
    pub fn decode(&self, tag: &str, payload: Value) -> Result<CacheValue> {
        let registration = self
            .by_tag
            .get(tag)
            .ok_or_else(|| Error::serialization(format!("unknown value tag '{tag}'")))?;
        (registration.decode)(payload)
    }
}

impl Default for ValueCodec {
    fn default() -> Self {
        Self::builder().with_builtins().build()
    }
}

impl fmt::Debug for ValueCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueCodec")
            .field("tags", &self.tags())
            .finish()
    }
}

/// Builder for [`ValueCodec`]
#[derive(Default)]
pub struct ValueCodecBuilder {
    registrations: Vec<(TypeId, Registration)>,
}

impl ValueCodecBuilder {
    /// Register `T` under `tag`.
    ///
    /// Registering the same type or tag again replaces the earlier entry.
    #[must_use]
    pub fn register<T>(mut self, tag: impl Into<String>) -> Self
    where
        T: Serialize + DeserializeOwned + Send + Sync + 'static,
    {
        let tag = tag.into();
        self.registrations
            .retain(|(type_id, existing)| *type_id != TypeId::of::<T>() && existing.tag != tag);
        self.registrations.push((
            TypeId::of::<T>(),
            Registration {
                tag,
                encode: encode_as::<T>,
                decode: decode_as::<T>,
            },
        ));
        self
    }

    /// Register the built-in scalar types
    #[must_use]
    pub fn with_builtins(self) -> Self {
        self.register::<i64>(VALUE_TAG_I64)
            .register::<i32>(VALUE_TAG_I32)
            .register::<u64>(VALUE_TAG_U64)
            .register::<u32>(VALUE_TAG_U32)
            .register::<f64>(VALUE_TAG_F64)
            .register::<bool>(VALUE_TAG_BOOL)
            .register::<String>(VALUE_TAG_STRING)
            .register::<Vec<u8>>(VALUE_TAG_BYTES)
    }

    /// Finish the codec
    pub fn build(self) -> ValueCodec {
        let mut by_type = HashMap::with_capacity(self.registrations.len());
        let mut by_tag = HashMap::with_capacity(self.registrations.len());
        for (type_id, registration) in self.registrations {
            by_tag.insert(registration.tag.clone(), registration.clone());
            by_type.insert(type_id, registration);
        }
        ValueCodec {
            by_type: Arc::new(by_type),
            by_tag: Arc::new(by_tag),
        }
    }
}
