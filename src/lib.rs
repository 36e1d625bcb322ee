//! kv_cache - An in-memory key-value cache service
//!
//! Provides Get/Set/Delete with TTL expiration and atomic Increment/Decrement
//! counters over a sharded concurrent store.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::CacheStore;
pub use config::Config;
pub use error::{CacheError, Result};
pub use tasks::spawn_cleanup_task;
