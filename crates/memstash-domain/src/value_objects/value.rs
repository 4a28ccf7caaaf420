//! Opaque application values

use std::any::{Any, TypeId, type_name};
use std::fmt;
use std::sync::Arc;

/// An opaque application value stored in a cache.
///
/// The cache never inspects the value itself; the owning cache's
/// [`ValueCodec`](super::ValueCodec) decides whether the concrete type can be
/// serialized. Cloning is cheap, the value is shared behind an `Arc`.
///
/// # Example
///
/// ```
/// use memstash_domain::value_objects::CacheValue;
///
/// let value = CacheValue::new(42_i64);
/// assert_eq!(value.downcast_ref::<i64>(), Some(&42));
/// assert!(value.downcast_ref::<String>().is_none());
/// ```
#[derive(Clone)]
pub struct CacheValue {
    inner: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl CacheValue {
    /// Wrap a concrete value
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            inner: Arc::new(value),
            type_name: type_name::<T>(),
        }
    }

    /// Borrow the value as `T` if that is its concrete type
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Whether the concrete type is `T`
    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    /// `TypeId` of the wrapped value
    pub fn value_type_id(&self) -> TypeId {
        (*self.inner).type_id()
    }

    /// Rust type name of the wrapped value
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Borrow the wrapped value as `dyn Any`
    pub fn as_any(&self) -> &(dyn Any + Send + Sync) {
        &*self.inner
    }
}

impl fmt::Debug for CacheValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheValue")
            .field("type", &self.type_name)
            .finish_non_exhaustive()
    }
}
