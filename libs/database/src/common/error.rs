/// Database error shared by connectors and health probes.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// The server did not answer a health ping
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
