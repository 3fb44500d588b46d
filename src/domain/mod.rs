//! Domain layer - Core types shared across services and handlers.
//!
//! The stored documents themselves are schemaless (`bson::Document`
//! pass-through); this module holds the typed values the application
//! does reason about.

pub mod ack;
pub mod sort;

pub use ack::{DeleteAck, InsertAck, UpdateAck};
pub use sort::SortDirection;
