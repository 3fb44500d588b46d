//! Database connection and initialization.

use mongodb::bson::{doc, Document};
use mongodb::{Client, Collection};

use crate::config::{Config, COLLECTION_BOOKINGS, COLLECTION_SERVICES, DATABASE_NAME};
use crate::errors::AppResult;

/// Database wrapper for connection management.
///
/// Holds the single process-lifetime client; the driver handles
/// concurrent use internally, so handles are cloned freely.
#[derive(Clone)]
pub struct Database {
    client: Client,
}

impl Database {
    /// Initialize the database connection.
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let client = Client::with_uri_str(&config.database_url).await?;
        Ok(Self { client })
    }

    /// Check database connectivity with a ping command.
    pub async fn ping(&self) -> AppResult<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    /// Handle to the services collection.
    pub fn services(&self) -> Collection<Document> {
        self.client
            .database(DATABASE_NAME)
            .collection(COLLECTION_SERVICES)
    }

    /// Handle to the bookings collection.
    pub fn bookings(&self) -> Collection<Document> {
        self.client
            .database(DATABASE_NAME)
            .collection(COLLECTION_BOOKINGS)
    }
}
