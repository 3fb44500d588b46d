//! Booking handlers.
//!
//! Only the listing endpoint is authorization-gated; creation, status
//! updates and deletion are open. That asymmetry matches the deployed
//! API and is preserved deliberately.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    Extension,
};
use mongodb::bson::{self, Document};
use serde::Deserialize;
use serde_json::Value;

use super::parse_object_id;
use crate::api::AppState;
use crate::domain::{DeleteAck, InsertAck, UpdateAck};
use crate::errors::{AppError, AppResult};
use crate::services::Claims;

/// Query parameters for the booking listing.
#[derive(Debug, Deserialize)]
pub struct BookingsQuery {
    pub email: Option<String>,
}

/// Status replacement request body.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// List bookings for the authenticated requester.
///
/// The email query parameter must equal the token's email claim;
/// mismatches are rejected rather than silently filtered. When neither
/// side carries an email the request passes and returns all bookings.
pub async fn list_bookings(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Query(params): Query<BookingsQuery>,
) -> AppResult<Json<Vec<Document>>> {
    if claims.email != params.email {
        return Err(AppError::Forbidden);
    }

    let bookings = state.bookings.list(params.email.as_deref()).await?;

    Ok(Json(bookings))
}

/// Insert the posted booking document verbatim.
pub async fn create_booking(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> AppResult<Json<InsertAck>> {
    let booking = bson::to_document(&payload)
        .map_err(|e| AppError::bad_request(format!("invalid booking payload: {e}")))?;

    let ack = state.bookings.create(booking).await?;

    Ok(Json(ack))
}

/// Replace the status field of one booking.
pub async fn update_booking_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateStatusRequest>,
) -> AppResult<Json<UpdateAck>> {
    let id = parse_object_id(&id)?;
    let ack = state.bookings.update_status(id, &payload.status).await?;

    Ok(Json(ack))
}

/// Delete one booking by id.
pub async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteAck>> {
    let id = parse_object_id(&id)?;
    let ack = state.bookings.delete(id).await?;

    Ok(Json(ack))
}
