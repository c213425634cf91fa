//! JSON mirror of the contact operations for programmatic clients.

use super::AppState;
use super::protocol::{DeleteResponse, SearchParams};
use crate::contacts::{Contact, ContactError, ContactUpdate};

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

type ApiResult<T> = Result<T, (StatusCode, String)>;

fn api_error(err: ContactError) -> (StatusCode, String) {
    match err {
        ContactError::NotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
        ContactError::Storage(e) => {
            tracing::error!("API storage failure: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

pub async fn api_list(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Vec<Contact>>> {
    let contacts = state.contacts.list(params.query()).await.map_err(api_error)?;
    Ok(Json(contacts))
}

pub async fn api_create(State(state): State<AppState>) -> ApiResult<(StatusCode, Json<Contact>)> {
    let contact = state.contacts.create().await.map_err(api_error)?;
    Ok((StatusCode::CREATED, Json(contact)))
}

pub async fn api_get(
    State(state): State<AppState>,
    Path(contact_id): Path<String>,
) -> ApiResult<Json<Contact>> {
    match state.contacts.get(&contact_id).await.map_err(api_error)? {
        Some(contact) => Ok(Json(contact)),
        None => Err(api_error(ContactError::NotFound(contact_id))),
    }
}

pub async fn api_update(
    State(state): State<AppState>,
    Path(contact_id): Path<String>,
    Json(updates): Json<ContactUpdate>,
) -> ApiResult<Json<Contact>> {
    let contact = state
        .contacts
        .update(&contact_id, updates)
        .await
        .map_err(api_error)?;
    Ok(Json(contact))
}

pub async fn api_delete(
    State(state): State<AppState>,
    Path(contact_id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let deleted = state.contacts.delete(&contact_id).await.map_err(api_error)?;
    Ok(Json(DeleteResponse { deleted }))
}

pub async fn health() -> &'static str {
    "ok"
}
