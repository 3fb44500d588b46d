//! Service catalog - read-only access to the services collection.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::Collection;

use crate::domain::SortDirection;
use crate::errors::AppResult;

/// Read access to the catalog of offered services.
///
/// Services are created and destroyed outside this API, so the trait
/// exposes only queries.
#[async_trait]
pub trait ServiceCatalog: Send + Sync {
    /// List services whose title contains `search` (case-insensitive,
    /// absent matches all), ordered by price.
    async fn list(&self, sort: SortDirection, search: Option<String>)
        -> AppResult<Vec<Document>>;

    /// Fetch a single service by id, projected down to the fields the
    /// booking page needs. `None` when the id matches nothing.
    async fn get_by_id(&self, id: ObjectId) -> AppResult<Option<Document>>;
}

/// MongoDB-backed catalog implementation.
pub struct MongoServiceCatalog {
    collection: Collection<Document>,
}

impl MongoServiceCatalog {
    pub fn new(collection: Collection<Document>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl ServiceCatalog for MongoServiceCatalog {
    async fn list(
        &self,
        sort: SortDirection,
        search: Option<String>,
    ) -> AppResult<Vec<Document>> {
        // An empty pattern matches every title
        let pattern = search.unwrap_or_default();
        let filter = doc! { "title": { "$regex": pattern, "$options": "i" } };

        let cursor = self
            .collection
            .find(filter)
            .sort(doc! { "price": sort.order() })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn get_by_id(&self, id: ObjectId) -> AppResult<Option<Document>> {
        let result = self
            .collection
            .find_one(doc! { "_id": id })
            .projection(doc! { "title": 1, "price": 1, "img": 1, "service_id": 1 })
            .await?;

        Ok(result)
    }
}
