//! Booking store - CRUD access to the bookings collection.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::Collection;

use crate::domain::{DeleteAck, InsertAck, UpdateAck};
use crate::errors::AppResult;

/// Booking persistence operations.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// List bookings, filtered by requester email when one is given.
    async fn list(&self, email: Option<&str>) -> AppResult<Vec<Document>>;

    /// Insert a booking document verbatim.
    async fn create(&self, booking: Document) -> AppResult<InsertAck>;

    /// Replace the status field of one booking.
    async fn update_status(&self, id: ObjectId, status: &str) -> AppResult<UpdateAck>;

    /// Delete one booking by id. Deleting a missing booking is not an
    /// error; the ack reports a zero count.
    async fn delete(&self, id: ObjectId) -> AppResult<DeleteAck>;
}

/// MongoDB-backed booking store implementation.
pub struct MongoBookingStore {
    collection: Collection<Document>,
}

impl MongoBookingStore {
    pub fn new(collection: Collection<Document>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl BookingStore for MongoBookingStore {
    async fn list(&self, email: Option<&str>) -> AppResult<Vec<Document>> {
        let filter = match email {
            Some(email) => doc! { "email": email },
            None => doc! {},
        };

        let cursor = self.collection.find(filter).await?;

        Ok(cursor.try_collect().await?)
    }

    async fn create(&self, booking: Document) -> AppResult<InsertAck> {
        let result = self.collection.insert_one(booking).await?;
        Ok(result.into())
    }

    async fn update_status(&self, id: ObjectId, status: &str) -> AppResult<UpdateAck> {
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": { "status": status } })
            .await?;

        Ok(result.into())
    }

    async fn delete(&self, id: ObjectId) -> AppResult<DeleteAck> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.into())
    }
}
