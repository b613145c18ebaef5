//! Stockdesk Core - Shared product domain library.
//!
//! This crate provides the types and pure logic used across all Stockdesk
//! components:
//! - `dashboard` - Server-rendered product management UI
//! - `cli` - Command-line tools for seeding and catalog management
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`product`] - The product record and its enumerated fields
//! - [`mapper`] - Draft validation, numeric coercion, and timestamp stamping
//! - [`view`] - The derived-view pipeline (filter, then sort)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod mapper;
pub mod product;
pub mod view;

pub use mapper::*;
pub use product::*;
pub use view::*;
