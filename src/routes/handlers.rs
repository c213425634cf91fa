//! Loaders and actions for the HTML routes.
//!
//! Loaders answer GET and render a page inside the layout. Actions answer POST,
//! mutate, then redirect so the next GET re-runs every loader on the page.
//!
//! The root route fails with the standalone error page. The contact routes
//! nest under the layout, so their failures render in the detail pane and the
//! sidebar stays usable.

use super::AppState;
use super::error::AppError;
use super::protocol::{EditForm, FavoriteForm, SearchParams, contact_path, edit_path};
use crate::contacts::{Contact, ContactUpdate};
use crate::views;

use axum::Form;
use axum::extract::rejection::FormRejection;
use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};

/// Sidebar data: the (optionally filtered) list and the query that produced it.
async fn load_sidebar(
    state: &AppState,
    params: &SearchParams,
) -> Result<Vec<Contact>, AppError> {
    Ok(state.contacts.list(params.query()).await?)
}

async fn load_contact(state: &AppState, id: &str) -> Result<Contact, AppError> {
    state.contacts.get(id).await?.ok_or(AppError::NotFound)
}

/// What a failing contact route shows in the detail pane.
#[derive(Debug, Clone, Copy)]
enum Outlet {
    Contact,
    Destroy,
}

/// Renders `err` inside the layout. Falls back to the standalone page when
/// the sidebar itself cannot load.
async fn child_error(
    state: &AppState,
    params: &SearchParams,
    outlet: Outlet,
    err: AppError,
) -> Response {
    let contacts = match load_sidebar(state, params).await {
        Ok(contacts) => contacts,
        Err(root_err) => {
            err.log();
            return root_err.into_response();
        }
    };

    err.log();
    let fragment = match outlet {
        Outlet::Contact => views::error_fragment(&err.detail()),
        Outlet::Destroy => views::destroy_error(),
    };
    let page = views::layout(&contacts, params.query(), None, &fragment);
    (err.status(), Html(page)).into_response()
}

async fn respond<T: IntoResponse>(
    state: &AppState,
    params: &SearchParams,
    outlet: Outlet,
    result: Result<T, AppError>,
) -> Response {
    match result {
        Ok(ok) => ok.into_response(),
        Err(err) => child_error(state, params, outlet, err).await,
    }
}

// --- Root ---

pub async fn root_loader(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, AppError> {
    let contacts = load_sidebar(&state, &params).await?;
    Ok(Html(views::layout(
        &contacts,
        params.query(),
        None,
        &views::index(),
    )))
}

pub async fn root_action(State(state): State<AppState>) -> Result<Redirect, AppError> {
    let contact = state.contacts.create().await?;
    Ok(Redirect::to(&edit_path(&contact.id)))
}

// --- Contact ---

async fn contact_page(
    state: &AppState,
    contact_id: &str,
    params: &SearchParams,
) -> Result<Html<String>, AppError> {
    let contact = load_contact(state, contact_id).await?;
    let contacts = load_sidebar(state, params).await?;
    Ok(Html(views::layout(
        &contacts,
        params.query(),
        Some(&contact.id),
        &views::contact_detail(&contact),
    )))
}

pub async fn contact_loader(
    State(state): State<AppState>,
    Path(contact_id): Path<String>,
    Query(params): Query<SearchParams>,
) -> Response {
    let result = contact_page(&state, &contact_id, &params).await;
    respond(&state, &params, Outlet::Contact, result).await
}

async fn toggle_favorite(
    state: &AppState,
    contact_id: &str,
    form: Result<Form<FavoriteForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    let Form(form) = form?;
    let favorite = form.parse().ok_or_else(|| {
        AppError::BadRequest(format!("Invalid favorite value: {}", form.favorite))
    })?;
    state
        .contacts
        .update(contact_id, ContactUpdate::favorite(favorite))
        .await?;
    Ok(Redirect::to(&contact_path(contact_id)))
}

/// Favorite toggle. Stays on the contact page.
pub async fn contact_action(
    State(state): State<AppState>,
    Path(contact_id): Path<String>,
    Query(params): Query<SearchParams>,
    form: Result<Form<FavoriteForm>, FormRejection>,
) -> Response {
    let result = toggle_favorite(&state, &contact_id, form).await;
    respond(&state, &params, Outlet::Contact, result).await
}

// --- Edit ---

async fn edit_page(
    state: &AppState,
    contact_id: &str,
    params: &SearchParams,
) -> Result<Html<String>, AppError> {
    let contact = load_contact(state, contact_id).await?;
    let contacts = load_sidebar(state, params).await?;
    Ok(Html(views::layout(
        &contacts,
        params.query(),
        Some(&contact.id),
        &views::edit_form(&contact),
    )))
}

pub async fn edit_loader(
    State(state): State<AppState>,
    Path(contact_id): Path<String>,
    Query(params): Query<SearchParams>,
) -> Response {
    let result = edit_page(&state, &contact_id, &params).await;
    respond(&state, &params, Outlet::Contact, result).await
}

async fn save_edit(
    state: &AppState,
    contact_id: &str,
    form: Result<Form<EditForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    let Form(form) = form?;
    state
        .contacts
        .update(contact_id, ContactUpdate::from(form))
        .await?;
    Ok(Redirect::to(&contact_path(contact_id)))
}

pub async fn edit_action(
    State(state): State<AppState>,
    Path(contact_id): Path<String>,
    Query(params): Query<SearchParams>,
    form: Result<Form<EditForm>, FormRejection>,
) -> Response {
    let result = save_edit(&state, &contact_id, form).await;
    respond(&state, &params, Outlet::Contact, result).await
}

// --- Destroy ---

async fn destroy(state: &AppState, contact_id: &str) -> Result<Redirect, AppError> {
    if !state.contacts.delete(contact_id).await? {
        tracing::debug!("Destroy requested for unknown contact {}", contact_id);
    }
    Ok(Redirect::to("/"))
}

pub async fn destroy_action(
    State(state): State<AppState>,
    Path(contact_id): Path<String>,
    Query(params): Query<SearchParams>,
) -> Response {
    let result = destroy(&state, &contact_id).await;
    respond(&state, &params, Outlet::Destroy, result).await
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}
