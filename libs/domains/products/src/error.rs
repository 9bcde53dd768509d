use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// Failures of a repository operation.
///
/// A product that does not exist is not an error: `update` yields `None`
/// and `delete` yields `false`.
#[derive(Debug, Error)]
pub enum ProductError {
    /// The store was unreachable or rejected the operation.
    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Invalid product identifier: '{0}'")]
    InvalidIdentifier(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::Persistence(msg) => AppError::Persistence(msg),
            err @ ProductError::InvalidIdentifier(_) => {
                AppError::InvalidIdentifier(err.to_string())
            }
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for ProductError {
    fn from(err: mongodb::error::Error) -> Self {
        ProductError::Persistence(err.to_string())
    }
}
