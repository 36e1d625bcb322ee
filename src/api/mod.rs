//! API Module
//!
//! HTTP handlers and routing for the cache service.
//!
//! # Endpoints
//! - `POST /cache/get` - Retrieve a value by key
//! - `POST /cache/set` - Store a value with optional TTL
//! - `POST /cache/delete` - Delete a key
//! - `POST /cache/increment` - Add to an integer counter
//! - `POST /cache/decrement` - Subtract from an integer counter
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
