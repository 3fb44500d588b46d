//! HTTP request handlers.

pub mod booking_handler;
pub mod service_handler;
pub mod token_handler;

pub use booking_handler::{
    create_booking, delete_booking, list_bookings, update_booking_status,
};
pub use service_handler::{get_service, list_services};
pub use token_handler::issue_token;

use mongodb::bson::oid::ObjectId;

use crate::errors::{AppError, AppResult};

/// Parse a path segment as a MongoDB object id.
///
/// A malformed id fails distinctly from not-found.
fn parse_object_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| AppError::bad_request(format!("invalid object id: {id}")))
}
