//! Products API routes

use axum::Router;
use domain_products::{MongoDocumentStore, MongoProductRepository, handlers};

use crate::state::AppState;

/// Create products router
pub fn router(state: &AppState) -> Router {
    let store = MongoDocumentStore::with_collection(&state.db, &state.config.products_collection);
    handlers::router(MongoProductRepository::new(store))
}
