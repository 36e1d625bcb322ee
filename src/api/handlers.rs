//! API Handlers
//!
//! HTTP request handlers for each cache service endpoint. Handlers validate
//! requests before they reach the cache engine and let `CacheError` map
//! engine outcomes to HTTP responses.

use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::debug;

use crate::cache::CacheStore;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    CounterRequest, CounterResponse, GetResponse, HealthResponse, KeyRequest, SetRequest,
    StatsResponse, StatusResponse,
};

/// Application state shared across all handlers.
///
/// The cache store synchronizes internally, so it is shared through a plain `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache store
    pub cache: Arc<CacheStore>,
}

impl AppState {
    /// Creates a new AppState with the given cache store.
    pub fn new(cache: CacheStore) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        let cache = match config.cache_shards {
            0 => CacheStore::new(),
            shards => CacheStore::with_shards(shards),
        };
        Self::new(cache)
    }
}

fn reject_invalid(error: Option<String>) -> Result<()> {
    match error {
        Some(message) => Err(CacheError::InvalidRequest(message)),
        None => Ok(()),
    }
}

/// Handler for POST /cache/get
pub async fn get_handler(
    State(state): State<AppState>,
    Json(req): Json<KeyRequest>,
) -> Result<Json<GetResponse>> {
    reject_invalid(req.validate())?;

    let value = state.cache.get(&req.key)?;
    Ok(Json(GetResponse::new(req.key, value)))
}

/// Handler for POST /cache/set
///
/// Stores a value, replacing any previous entry and its TTL.
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<SetRequest>,
) -> Result<Json<StatusResponse>> {
    reject_invalid(req.validate())?;

    debug!(key = %req.key, ttl = req.ttl, "set");
    state.cache.set(&req.key, req.value, req.ttl)?;
    Ok(Json(StatusResponse::ok()))
}

/// Handler for POST /cache/delete
///
/// Deleting a missing key still answers "ok".
pub async fn delete_handler(
    State(state): State<AppState>,
    Json(req): Json<KeyRequest>,
) -> Result<Json<StatusResponse>> {
    reject_invalid(req.validate())?;

    let removed = state.cache.delete(&req.key)?;
    debug!(key = %req.key, removed, "delete");
    Ok(Json(StatusResponse::ok()))
}

/// Handler for POST /cache/increment
pub async fn increment_handler(
    State(state): State<AppState>,
    Json(req): Json<CounterRequest>,
) -> Result<Json<CounterResponse>> {
    reject_invalid(req.validate())?;

    let value = state.cache.increment(&req.key, req.value)?;
    Ok(Json(CounterResponse::new(req.key, value)))
}

/// Handler for POST /cache/decrement
pub async fn decrement_handler(
    State(state): State<AppState>,
    Json(req): Json<CounterRequest>,
) -> Result<Json<CounterResponse>> {
    reject_invalid(req.validate())?;

    let value = state.cache.decrement(&req.key, req.value)?;
    Ok(Json(CounterResponse::new(req.key, value)))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.cache.stats().into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MAX_VALUE_SIZE;
    use crate::models::{MISSING_KEY, VALUE_TOO_BIG};

    fn key(key: &str) -> Json<KeyRequest> {
        Json(KeyRequest {
            key: key.to_string(),
        })
    }

    fn counter(key: &str, value: i64) -> Json<CounterRequest> {
        Json(CounterRequest {
            key: key.to_string(),
            value,
        })
    }

    #[tokio::test]
    async fn test_set_and_get_handler() {
        let state = AppState::new(CacheStore::new());

        let req = SetRequest {
            key: "test_key".to_string(),
            value: "test_value".to_string(),
            ttl: 0,
        };
        let response = set_handler(State(state.clone()), Json(req)).await.unwrap();
        assert_eq!(response.status, "ok");

        let response = get_handler(State(state), key("test_key")).await.unwrap();
        assert_eq!(response.key, "test_key");
        assert_eq!(response.value, "test_value");
    }

    #[tokio::test]
    async fn test_get_nonexistent_key() {
        let state = AppState::new(CacheStore::new());

        let result = get_handler(State(state), key("nonexistent")).await;
        assert!(matches!(result, Err(CacheError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_handler_is_idempotent() {
        let state = AppState::new(CacheStore::new());

        let req = SetRequest {
            key: "to_delete".to_string(),
            value: "value".to_string(),
            ttl: 0,
        };
        set_handler(State(state.clone()), Json(req)).await.unwrap();

        let response = delete_handler(State(state.clone()), key("to_delete"))
            .await
            .unwrap();
        assert_eq!(response.status, "ok");

        let response = delete_handler(State(state.clone()), key("to_delete"))
            .await
            .unwrap();
        assert_eq!(response.status, "ok");

        let result = get_handler(State(state), key("to_delete")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_counter_handlers() {
        let state = AppState::new(CacheStore::new());

        let response = increment_handler(State(state.clone()), counter("counter", 5))
            .await
            .unwrap();
        assert_eq!(response.value, 5);

        let response = increment_handler(State(state.clone()), counter("counter", 3))
            .await
            .unwrap();
        assert_eq!(response.value, 8);

        let response = decrement_handler(State(state), counter("counter", 2))
            .await
            .unwrap();
        assert_eq!(response.key, "counter");
        assert_eq!(response.value, 6);
    }

    #[tokio::test]
    async fn test_increment_type_mismatch() {
        let state = AppState::new(CacheStore::new());
        state.cache.set("s", "not-a-number".to_string(), 0).unwrap();

        let result = increment_handler(State(state), counter("s", 1)).await;
        assert!(matches!(result, Err(CacheError::TypeMismatch(_))));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_increment_handlers() {
        let state = AppState::new(CacheStore::new());

        let tasks: Vec<_> = (0..100)
            .map(|_| {
                let state = state.clone();
                tokio::spawn(async move {
                    increment_handler(State(state), counter("hits", 1))
                        .await
                        .unwrap();
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(state.cache.get("hits").unwrap(), "100");
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = AppState::new(CacheStore::new());
        let _ = get_handler(State(state.clone()), key("missing")).await;

        let response = stats_handler(State(state)).await;
        assert_eq!(response.hits, 0);
        assert_eq!(response.misses, 1);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }

    #[tokio::test]
    async fn test_empty_key_rejected_before_engine() {
        let state = AppState::new(CacheStore::new());

        let result = get_handler(State(state.clone()), key("")).await;
        assert_eq!(
            result.unwrap_err(),
            CacheError::InvalidRequest(MISSING_KEY.to_string())
        );

        let result = increment_handler(State(state.clone()), counter("", 1)).await;
        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));

        assert_eq!(state.cache.stats().misses, 0);
    }

    #[tokio::test]
    async fn test_set_value_too_big() {
        let state = AppState::new(CacheStore::new());

        let req = SetRequest {
            key: "big".to_string(),
            value: "x".repeat(MAX_VALUE_SIZE + 1),
            ttl: 0,
        };
        let result = set_handler(State(state.clone()), Json(req)).await;
        assert_eq!(
            result.unwrap_err(),
            CacheError::InvalidRequest(VALUE_TOO_BIG.to_string())
        );
        assert!(state.cache.is_empty());
    }

    #[test]
    fn test_from_config_shards() {
        let config = Config {
            cache_shards: 8,
            ..Config::default()
        };
        let state = AppState::from_config(&config);
        assert!(state.cache.is_empty());
    }
}
