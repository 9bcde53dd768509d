//! Database connectors for the catalog services.
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB client bootstrap and health probes
//! - `config` - `core_config::FromEnv` support for connection settings
//!
//! ## MongoDB
//!
//! ```ignore
//! use database::mongodb::{self, MongoConfig};
//!
//! let config = MongoConfig::with_database("mongodb://localhost:27017", "product_db");
//! let client = mongodb::connect_from_config_with_retry(&config, None).await?;
//! let db = client.database(config.database());
//! ```

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{DatabaseError, DatabaseResult, RetryConfig};
