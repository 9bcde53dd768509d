//! In-memory implementation of DocumentStore

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{ProductDocument, ProductFields};
use crate::store::DocumentStore;

/// Documents held in process memory, in insertion order.
///
/// Each operation holds the lock for its whole duration, which keeps it
/// atomic the same way a single server-side call is. Clones share the
/// same documents.
#[derive(Clone, Default)]
pub struct InMemoryDocumentStore {
    documents: Arc<RwLock<Vec<ProductDocument>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn insert(&self, document: &ProductDocument) -> ProductResult<()> {
        let mut documents = self.documents.write().await;

        if documents.iter().any(|d| d.id == document.id) {
            return Err(ProductError::Persistence(format!(
                "duplicate key: _id {}",
                document.id
            )));
        }

        documents.push(document.clone());
        Ok(())
    }

    async fn find_all(&self) -> ProductResult<Vec<ProductDocument>> {
        Ok(self.documents.read().await.clone())
    }

    async fn find_and_replace(
        &self,
        id: ObjectId,
        fields: &ProductFields,
    ) -> ProductResult<Option<ProductDocument>> {
        let mut documents = self.documents.write().await;

        Ok(documents.iter_mut().find(|d| d.id == id).map(|d| {
            *d = ProductDocument::from_parts(id, fields.clone());
            d.clone()
        }))
    }

    async fn delete_by_id(&self, id: ObjectId) -> ProductResult<u64> {
        let mut documents = self.documents.write().await;
        let before = documents.len();
        documents.retain(|d| d.id != id);
        Ok((before - documents.len()) as u64)
    }
}
