//! Request and Response models for the cache service API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{CounterRequest, KeyRequest, SetRequest, MISSING_KEY, VALUE_TOO_BIG};
pub use responses::{
    CounterResponse, ErrorResponse, GetResponse, HealthResponse, StatsResponse, StatusResponse,
};
