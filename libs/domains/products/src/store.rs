use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::ProductResult;
use crate::models::{ProductDocument, ProductFields};

/// Store primitives the product repository is allowed to use.
///
/// Every method is one atomic call against the backend. Implementations
/// must be safe for any number of concurrent callers without client-side
/// locking; concurrent writes to the same document are last-writer-wins.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a new document. Fails if its `_id` already exists.
    async fn insert(&self, document: &ProductDocument) -> ProductResult<()>;

    /// Every stored document in store-native order.
    async fn find_all(&self) -> ProductResult<Vec<ProductDocument>>;

    /// Replace the fields of the document with `id` and return it as it is
    /// after the replace, or `None` when nothing matched.
    async fn find_and_replace(
        &self,
        id: ObjectId,
        fields: &ProductFields,
    ) -> ProductResult<Option<ProductDocument>>;

    /// Remove the document with `id`, returning how many were removed.
    async fn delete_by_id(&self, id: ObjectId) -> ProductResult<u64>;

    /// A fresh, globally unique identifier.
    fn generate_id(&self) -> ObjectId {
        ObjectId::new()
    }
}
