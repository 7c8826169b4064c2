//! Structured logging setup.
//!
//! The engine reports through `tracing` spans and events; this module installs
//! the subscriber that prints them. Library users who already run their own
//! subscriber never need to call it.
//!
//! # Configuration
//!
//! The level is resolved from:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` configuration option
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! ```rust
//! use facetpage::observability::init_tracing;
//! use facetpage::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("engine initialized");
//! ```

mod init;

pub use init::init_tracing;
