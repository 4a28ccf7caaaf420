//! Application Layer - memstash
//!
//! Orchestrates cache providers on behalf of a host application:
//!
//! - `ports::registry`: compile-time registry of provider kinds, filled by
//!   `memstash-providers` through `linkme` distributed slices
//! - `use_cases::CacheManager`: owns the configured providers and the caches
//!   created from them
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `memstash-domain`: For port traits, value objects and errors
//! - Pure Rust libraries for logging and registration

pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
