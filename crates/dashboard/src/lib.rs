//! Stockdesk Dashboard library.
//!
//! This crate provides the dashboard functionality as a library, allowing
//! it to be tested and reused. The binary in `main.rs` wires the router,
//! middleware, and background startup around these modules.
//!
//! # Architecture
//!
//! - [`api`] - HTTP client for the upstream products REST API
//! - [`store`] - Canonical in-memory product list with loading/error state
//! - [`routes`] - Page handlers and templates
//! - [`config`] / [`state`] / [`error`] - Environment config, shared state,
//!   and the unified error type

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod store;

pub use state::AppState;
