use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductDocument, ProductFields, ProductId};
use crate::store::DocumentStore;

/// Repository trait for Product persistence
///
/// The only place that assigns product identifiers. Each operation is a
/// single store call and is never retried; a missing product is reported
/// as a value, not an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Store `candidate` under a freshly generated id.
    ///
    /// Any id already on `candidate` is ignored.
    async fn create(&self, candidate: Product) -> ProductResult<Product>;

    /// Every stored product in store-native order.
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    /// Replace every field of the stored product with `target.id`.
    ///
    /// Returns the product as stored afterwards, or `None` if no product has
    /// that id.
    async fn update(&self, target: Product) -> ProductResult<Option<Product>>;

    /// Remove the product with `id`. `false` when nothing was removed.
    async fn delete(&self, id: &str) -> ProductResult<bool>;
}

/// [`ProductRepository`] over any [`DocumentStore`].
///
/// Holds nothing but the store handle.
#[derive(Clone)]
pub struct DocumentProductRepository<S> {
    store: S,
}

impl<S: DocumentStore> DocumentProductRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

fn parse_id(raw: &str) -> ProductResult<ObjectId> {
    ObjectId::parse_str(raw).map_err(|_| ProductError::InvalidIdentifier(raw.to_string()))
}

fn assigned_object_id(id: &ProductId) -> ProductResult<ObjectId> {
    match id {
        ProductId::Assigned(raw) => parse_id(raw),
        ProductId::Unassigned => Err(ProductError::InvalidIdentifier(id.to_string())),
    }
}

#[async_trait]
impl<S: DocumentStore> ProductRepository for DocumentProductRepository<S> {
    #[instrument(skip(self, candidate), fields(product_name = %candidate.name))]
    async fn create(&self, candidate: Product) -> ProductResult<Product> {
        let id = self.store.generate_id();
        let document = ProductDocument::from_parts(id, ProductFields::from(&candidate));

        self.store.insert(&document).await?;

        tracing::info!(product_id = %id, "Product created successfully");
        Ok(document.into())
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let documents = self.store.find_all().await?;
        tracing::debug!(count = documents.len(), "Fetched products");
        Ok(documents.into_iter().map(Product::from).collect())
    }

    #[instrument(skip(self, target), fields(product_id = %target.id))]
    async fn update(&self, target: Product) -> ProductResult<Option<Product>> {
        let id = assigned_object_id(&target.id)?;

        match self
            .store
            .find_and_replace(id, &ProductFields::from(&target))
            .await?
        {
            Some(document) => {
                tracing::info!(product_id = %id, "Product updated successfully");
                Ok(Some(document.into()))
            }
            None => {
                tracing::debug!(product_id = %id, "No product to update");
                Ok(None)
            }
        }
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> ProductResult<bool> {
        let object_id = parse_id(id)?;
        let deleted = self.store.delete_by_id(object_id).await? == 1;

        if deleted {
            tracing::info!(product_id = %object_id, "Product deleted successfully");
        } else {
            tracing::debug!(product_id = %object_id, "No product to delete");
        }

        Ok(deleted)
    }
}
