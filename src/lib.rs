//! # Safar Backend
//!
//! Rust backend for the Safar tourist-location listing service.
//!
//! Safar serves tourist-location data for India, grouped by state and
//! category, from a relational store to a browser frontend via a small
//! REST API with server-side pagination. Images are rendered from external
//! URLs that pass through this service unchanged.
//!
//! ## Features
//!
//! - **Location Queries**: filtered, paginated listings ordered by id
//! - **Catalog Queries**: distinct states and categories for filter dropdowns
//! - **Featured Selection**: random image-carrying locations for the landing page
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Typed records and query contracts shared across layers
//! - [`db`]: Database operations, repository pattern, and backends
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! The service is read-only: records are created and maintained by an
//! out-of-scope administrative process.

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;

pub mod db;

#[cfg(feature = "http-server")]
pub mod http;
