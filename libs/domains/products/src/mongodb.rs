//! MongoDB implementation of DocumentStore

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{doc, oid::ObjectId},
    options::ReturnDocument,
};
use tracing::instrument;

use crate::error::ProductResult;
use crate::models::{ProductDocument, ProductFields};
use crate::store::DocumentStore;

pub const DEFAULT_COLLECTION: &str = "products";

/// Products collection accessed through the official driver.
///
/// The driver's `Collection` is a cheap handle over a shared connection
/// pool, so this store is `Clone` and shareable across tasks.
#[derive(Clone)]
pub struct MongoDocumentStore {
    collection: Collection<ProductDocument>,
}

impl MongoDocumentStore {
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, DEFAULT_COLLECTION)
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<ProductDocument>(collection_name);
        Self { collection }
    }
}

#[async_trait]
impl DocumentStore for MongoDocumentStore {
    #[instrument(skip(self, document), fields(product_id = %document.id))]
    async fn insert(&self, document: &ProductDocument) -> ProductResult<()> {
        self.collection.insert_one(document).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> ProductResult<Vec<ProductDocument>> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<ProductDocument> = cursor.try_collect().await?;
        Ok(documents)
    }

    #[instrument(skip_all, fields(product_id = %id))]
    async fn find_and_replace(
        &self,
        id: ObjectId,
        fields: &ProductFields,
    ) -> ProductResult<Option<ProductDocument>> {
        // The replacement carries the same _id, which the server accepts
        let replacement = ProductDocument::from_parts(id, fields.clone());

        let document = self
            .collection
            .find_one_and_replace(doc! { "_id": id }, replacement)
            .return_document(ReturnDocument::After)
            .await?;

        Ok(document)
    }

    #[instrument(skip(self), fields(product_id = %id))]
    async fn delete_by_id(&self, id: ObjectId) -> ProductResult<u64> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count)
    }
}
