//! Car Doctor API - booking backend for the car workshop
//!
//! A small REST API over two MongoDB collections: the catalog of
//! offered services (read-only) and customer bookings (CRUD), with a
//! bearer-token gate on the booking listing.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Sort direction and write-acknowledgment types
//! - **services**: Token, catalog and booking services
//! - **infra**: Infrastructure concerns (MongoDB connection)
//! - **api**: HTTP handlers, middleware, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use errors::{AppError, AppResult};
