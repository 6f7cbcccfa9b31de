//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the tracker configuration
//! from TOML files.
//!
//! # Configuration Structure
//!
//! The main configuration file (`config.toml`) contains:
//! - **log_level** / **log_console_interval**: logging verbosity and stats output cadence
//! - **tracker_config**: announce intervals, numwant limits, the shared HMAC key,
//!   reaper cadence and the directory of `.torrent` files to register
//! - **http_server**: HTTP server instances
//! - **users**: accounts and their announce secrets
//!
//! # Example
//!
//! ```rust,ignore
//! use private_tracker::config::structs::configuration::Configuration;
//!
//! // Load configuration from file, creating a default one when asked to
//! let config = Configuration::load_from_file("config.toml", false)?;
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

/// Unit tests for configuration handling.
pub mod tests;
