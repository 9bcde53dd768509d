use mongodb::{Client, bson::doc, options::ClientOptions};
use std::time::Duration;
use tracing::{info, instrument};

use super::MongoConfig;
use crate::common::{RetryConfig, retry_with_backoff};

/// Error type for MongoDB bootstrap
#[derive(Debug, thiserror::Error)]
pub enum MongoError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

/// Driver options derived from `config`.
///
/// Parsing the connection string is the only step that can fail.
pub async fn client_options(config: &MongoConfig) -> Result<ClientOptions, MongoError> {
    let mut options = ClientOptions::parse(&config.url).await?;

    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));

    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    Ok(options)
}

/// Build a client from `options` and verify the server answers a `ping`.
///
/// The driver connects lazily, so the ping is what surfaces an unreachable
/// server at startup instead of on the first request.
async fn connect_and_ping(options: ClientOptions, database: &str) -> Result<Client, MongoError> {
    let client = Client::with_options(options)?;

    client
        .database(database)
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| MongoError::ConnectionFailed(e.to_string()))?;

    Ok(client)
}

/// Connect with `config` and verify the server answers a `ping`.
#[instrument(skip(config), fields(url = %config.redacted_url(), database = %config.database))]
pub async fn connect_from_config(config: &MongoConfig) -> Result<Client, MongoError> {
    info!("Attempting to connect to MongoDB");

    let client = connect_and_ping(client_options(config).await?, &config.database).await?;

    info!("Successfully connected to MongoDB");
    Ok(client)
}

/// [`connect_from_config`] with exponential backoff.
///
/// A connection string that does not parse fails immediately; only the
/// connect and ping are retried. `None` uses [`RetryConfig::default`].
#[instrument(skip(config, retry_config), fields(url = %config.redacted_url(), database = %config.database))]
pub async fn connect_from_config_with_retry(
    config: &MongoConfig,
    retry_config: Option<RetryConfig>,
) -> Result<Client, MongoError> {
    let options = client_options(config).await?;

    info!("Attempting to connect to MongoDB");
    let client = retry_with_backoff(
        || connect_and_ping(options.clone(), &config.database),
        retry_config.unwrap_or_default(),
    )
    .await?;

    info!("Successfully connected to MongoDB");
    Ok(client)
}
