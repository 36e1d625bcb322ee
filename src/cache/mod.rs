//! Cache Module
//!
//! Provides the in-memory cache engine with TTL expiration and atomic counters.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use stats::{CacheStats, StatsCounters};
pub use store::CacheStore;

// == Public Constants ==
/// Maximum allowed value size in bytes for Set requests
pub const MAX_VALUE_SIZE: usize = 1_000_000;
