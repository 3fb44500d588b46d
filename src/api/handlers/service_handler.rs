//! Service catalog handlers.

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use mongodb::bson::Document;
use serde::Deserialize;

use super::parse_object_id;
use crate::api::AppState;
use crate::domain::SortDirection;
use crate::errors::AppResult;

/// Query parameters for the service listing.
#[derive(Debug, Deserialize)]
pub struct ServicesQuery {
    /// `"ascending"` for cheapest-first, anything else is descending
    pub sort: Option<String>,
    /// Case-insensitive title substring
    pub search: Option<String>,
}

/// List services, optionally filtered by title and ordered by price.
pub async fn list_services(
    State(state): State<AppState>,
    Query(params): Query<ServicesQuery>,
) -> AppResult<Json<Vec<Document>>> {
    let sort = SortDirection::from(params.sort.as_deref());
    let services = state.catalog.list(sort, params.search).await?;

    Ok(Json(services))
}

/// Fetch a single service by id with a restricted field projection.
///
/// A well-formed id that matches nothing yields a 200 with a null
/// body; only a malformed id is an error.
pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Option<Document>>> {
    let id = parse_object_id(&id)?;
    let service = state.catalog.get_by_id(id).await?;

    Ok(Json(service))
}
