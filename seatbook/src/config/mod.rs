//! Configuration system for seatbook.
//!
//! This module provides layered configuration with support for:
//! - A YAML configuration file in the data directory
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of the merged result
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`SEATBOOK_*`)
//! 3. User config (`~/.seatbook/config.yaml`, or `config.yaml` in the data directory)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use seatbook::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let data_dir = Path::new("/var/lib/seatbook");
//! let config = ConfigBuilder::new()
//!     .with_data_dir(data_dir)
//!     .build()
//!     .unwrap();
//!
//! let database = config.database_config(data_dir);
//! println!("Store: {:?}", database.path);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat};
pub use validator::ConfigValidator;
