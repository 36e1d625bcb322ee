//! Request DTOs for the cache service API
//!
//! Defines the structure of incoming HTTP request bodies and their
//! protocol-level validation.

use serde::Deserialize;

use crate::cache::MAX_VALUE_SIZE;

/// Message returned when a request carries an empty key
pub const MISSING_KEY: &str = "missing key";

/// Message returned when a Set value exceeds [`MAX_VALUE_SIZE`]
pub const VALUE_TOO_BIG: &str = "value is too big";

/// Request body carrying only a key (POST /cache/get, POST /cache/delete)
#[derive(Debug, Clone, Deserialize)]
pub struct KeyRequest {
    /// The cache key
    #[serde(default)]
    pub key: String,
}

impl KeyRequest {
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_key(&self.key)
    }
}

/// Request body for the SET operation (POST /cache/set)
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    /// The cache key
    #[serde(default)]
    pub key: String,
    /// The value to store
    #[serde(default)]
    pub value: String,
    /// TTL in seconds, 0 or absent means no expiry
    #[serde(default)]
    pub ttl: u64,
}

impl SetRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if let Some(error) = validate_key(&self.key) {
            return Some(error);
        }
        if self.value.len() > MAX_VALUE_SIZE {
            return Some(VALUE_TOO_BIG.to_string());
        }
        None
    }
}

/// Request body for INCREMENT and DECREMENT (POST /cache/increment, /cache/decrement)
#[derive(Debug, Clone, Deserialize)]
pub struct CounterRequest {
    /// The cache key
    #[serde(default)]
    pub key: String,
    /// Amount to add or subtract
    #[serde(default)]
    pub value: i64,
}

impl CounterRequest {
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_key(&self.key)
    }
}

fn validate_key(key: &str) -> Option<String> {
    if key.is_empty() {
        Some(MISSING_KEY.to_string())
    } else {
        None
    }
}
