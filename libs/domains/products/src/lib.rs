//! Products Domain
//!
//! Create, list, replace and delete products kept in a document store.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, outcome → status code
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Identifier policy, one store call per operation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │    Store    │  ← DocumentStore capability (MongoDB, in-memory)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, stored document, request/response bodies
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, MongoDocumentStore, MongoProductRepository};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("product_db");
//!
//! let repository = MongoProductRepository::new(MongoDocumentStore::new(&db));
//! let router = handlers::router(repository);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod store;

pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryDocumentStore;
pub use models::{Product, ProductDocument, ProductFields, ProductId, ProductInput, ProductResponse};
pub use self::mongodb::MongoDocumentStore;
pub use repository::{DocumentProductRepository, ProductRepository};
pub use store::DocumentStore;

/// Repository backed by a MongoDB collection.
pub type MongoProductRepository = DocumentProductRepository<MongoDocumentStore>;

/// Repository backed by process memory.
pub type InMemoryProductRepository = DocumentProductRepository<InMemoryDocumentStore>;
