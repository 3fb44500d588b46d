//! Token issuance handler.

use axum::{extract::State, response::Json};
use serde_json::Value;

use crate::api::AppState;
use crate::errors::{AppError, AppResult};
use crate::services::TokenResponse;

/// Sign the posted claims object into a bearer token.
///
/// Issuance performs no credential verification; any JSON object can
/// be signed. Preserved for behavioral fidelity with the deployed API.
pub async fn issue_token(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> AppResult<Json<TokenResponse>> {
    let Value::Object(claims) = payload else {
        return Err(AppError::bad_request("claims payload must be a JSON object"));
    };

    Ok(Json(state.tokens.issue(claims)?))
}
