//! Configuration for Products API

use core_config::{AppInfo, FromEnv, app_info, env_or_default, server::ServerConfig};
use database::RetryConfig;
use database::mongodb::MongoConfig;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Backoff for the startup connection only
    pub connect_retry: RetryConfig,
    pub products_collection: String,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;
        let connect_retry = RetryConfig::from_env()?;

        let products_collection = env_or_default(
            "PRODUCTS_COLLECTION",
            domain_products::mongodb::DEFAULT_COLLECTION,
        );

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            environment,
            connect_retry,
            products_collection,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_defaults() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", Some("mongodb://localhost:27017")),
                ("MONGODB_DATABASE", Some("product_db")),
                ("MONGO_URL", None),
                ("MONGO_DATABASE", None),
                ("PRODUCTS_COLLECTION", None),
                ("PORT", None),
                ("APP_ENV", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.mongodb.database(), "product_db");
                assert_eq!(config.products_collection, "products");
                assert_eq!(config.server.port, 8080);
                assert_eq!(config.environment, Environment::Development);
                assert_eq!(config.app.name, "products_api");
            },
        );
    }

    #[test]
    fn test_collection_override() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", Some("mongodb://localhost:27017")),
                ("MONGODB_DATABASE", Some("product_db")),
                ("PRODUCTS_COLLECTION", Some("catalog")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.products_collection, "catalog");
            },
        );
    }

    #[test]
    fn test_missing_mongo_url_fails() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", None::<&str>),
                ("MONGO_URL", None),
                ("MONGODB_DATABASE", Some("product_db")),
            ],
            || {
                assert!(Config::from_env().is_err());
            },
        );
    }
}
