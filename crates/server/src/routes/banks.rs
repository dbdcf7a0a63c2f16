//! `/api/banks` handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use common::types::MessageBody;
use serde::Deserialize;
use service::{bank::{Bank, BankRecord}, errors::ServiceError};
use tracing::{error, info, warn};

use crate::{errors::ApiError, state::AppState};

pub const REQUIRED_FIELDS_MESSAGE: &str = "Both 'name' and 'location' fields are required.";
pub const CREATED_MESSAGE: &str = "Bank created successfully";
pub const DELETED_MESSAGE: &str = "Bank deleted successfully";
pub const NOT_FOUND_MESSAGE: &str = "Bank not found";

/// Create/update payload. Fields are optional here so that a missing field
/// is reported with our own message instead of a deserializer rejection.
#[derive(Debug, Default, Deserialize)]
pub struct BankInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl BankInput {
    /// The domain bank, if both fields are present and not blank.
    pub fn into_bank(self) -> Option<Bank> {
        match (self.name, self.location) {
            (Some(name), Some(location)) if !name.trim().is_empty() && !location.trim().is_empty() => {
                Some(Bank::new(name, location))
            }
            _ => None,
        }
    }
}

fn internal(op: &str, e: ServiceError) -> ApiError {
    error!(err = %e, op, "bank operation failed");
    ApiError::Internal(e.to_string())
}

#[utoipa::path(
    post, path = "/api/banks", tag = "banks",
    request_body = crate::openapi::BankInputDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::MessageDoc),
        (status = 400, description = "Missing name or location", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<BankInput>, JsonRejection>,
) -> Result<Json<MessageBody>, ApiError> {
    let Some(bank) = payload.ok().and_then(|Json(input)| input.into_bank()) else {
        warn!("create bank rejected: missing required fields");
        return Err(ApiError::BadRequest(REQUIRED_FIELDS_MESSAGE.into()));
    };

    match state.banks.create_bank(bank).await {
        Ok(()) => Ok(Json(MessageBody::new(CREATED_MESSAGE))),
        Err(e) if e.is_client_error() => Err(ApiError::BadRequest(e.to_string())),
        Err(e) => Err(internal("create", e)),
    }
}

#[utoipa::path(
    get, path = "/api/banks", tag = "banks",
    responses(
        (status = 200, description = "All banks", body = [crate::openapi::BankDoc]),
        (status = 500, description = "List Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<BankRecord>>, ApiError> {
    match state.banks.list_banks().await {
        Ok(banks) => {
            info!(count = banks.len(), "list banks");
            Ok(Json(banks))
        }
        Err(e) => Err(internal("list", e)),
    }
}

#[utoipa::path(
    get, path = "/api/banks/{id}", tag = "banks",
    params(("id" = String, Path, description = "Bank id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::BankDoc),
        (status = 404, description = "Not Found", body = crate::openapi::MessageDoc)
    )
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<BankRecord>, ApiError> {
    match state.banks.get_bank(&id).await {
        Ok(Some(bank)) => Ok(Json(bank)),
        Ok(None) => Err(ApiError::NotFound(NOT_FOUND_MESSAGE.into())),
        Err(e) => Err(internal("get", e)),
    }
}

/// Every failure here, including an unknown id, is a 400 carrying the
/// error's message.
#[utoipa::path(
    put, path = "/api/banks/{id}", tag = "banks",
    params(("id" = String, Path, description = "Bank id")),
    request_body = crate::openapi::BankInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::BankDoc),
        (status = 400, description = "Update Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<BankInput>, JsonRejection>,
) -> Result<Json<BankRecord>, ApiError> {
    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => return Err(ApiError::BadRequest(rejection.body_text())),
    };
    let Some(bank) = input.into_bank() else {
        // an unknown id is reported before the missing fields
        return match state.banks.get_bank(&id).await {
            Ok(Some(_)) => Err(ApiError::BadRequest(REQUIRED_FIELDS_MESSAGE.into())),
            Ok(None) => Err(ApiError::BadRequest(NOT_FOUND_MESSAGE.into())),
            Err(e) => Err(update_failed(&id, e)),
        };
    };

    match state.banks.update_bank(&id, bank).await {
        Ok(updated) => Ok(Json(updated)),
        Err(e) => Err(update_failed(&id, e)),
    }
}

fn update_failed(id: &str, e: ServiceError) -> ApiError {
    if !e.is_client_error() {
        error!(err = %e, bank_id = %id, "update bank failed");
    }
    ApiError::BadRequest(e.to_string())
}

#[utoipa::path(
    delete, path = "/api/banks/{id}", tag = "banks",
    params(("id" = String, Path, description = "Bank id")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Not Found", body = crate::openapi::MessageDoc)
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<MessageBody>, ApiError> {
    match state.banks.delete_bank(&id).await {
        Ok(true) => Ok(Json(MessageBody::new(DELETED_MESSAGE))),
        Ok(false) => Err(ApiError::NotFound(NOT_FOUND_MESSAGE.into())),
        Err(e) => Err(internal("delete", e)),
    }
}
