//! Domain layer constants
//!
//! Value tags written next to every stored payload. Changing a tag makes
//! previously stored items of that type unreadable.

// ============================================================================
// BUILT-IN VALUE TAGS
// ============================================================================

/// Tag for `i64` values
pub const VALUE_TAG_I64: &str = "i64";

/// Tag for `i32` values
pub const VALUE_TAG_I32: &str = "i32";

/// Tag for `u64` values
pub const VALUE_TAG_U64: &str = "u64";

/// Tag for `u32` values
pub const VALUE_TAG_U32: &str = "u32";

/// Tag for `f64` values
pub const VALUE_TAG_F64: &str = "f64";

/// Tag for `bool` values
pub const VALUE_TAG_BOOL: &str = "bool";

/// Tag for `String` values
pub const VALUE_TAG_STRING: &str = "string";

/// Tag for raw byte values
pub const VALUE_TAG_BYTES: &str = "bytes";
