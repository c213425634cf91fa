//! Routes Module
//!
//! Maps URL paths to views. Each route pairs an optional loader (GET, runs
//! before rendering) with an optional action (POST, runs on form submission
//! and redirects).
//!
//! ## Route Table
//! - **`/`**: list/search loader, create action.
//! - **`/contacts/:id`**: detail loader, favorite-toggle action.
//! - **`/contacts/:id/edit`**: edit-form loader, save action.
//! - **`/contacts/:id/destroy`**: delete action.
//! - **`/api/...`**: JSON mirror of the same operations.
//!
//! Unknown paths render the standalone error page with 404. Failures on the
//! contact routes render inside the layout, keeping the sidebar.

pub mod api;
pub mod error;
pub mod handlers;
pub mod protocol;


use crate::contacts::ContactService;

use axum::Router;
use axum::routing::{get, post};
use protocol::*;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub contacts: Arc<ContactService>,
}

impl AppState {
    pub fn new(contacts: Arc<ContactService>) -> Self {
        Self { contacts }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            ROUTE_ROOT,
            get(handlers::root_loader).post(handlers::root_action),
        )
        .route(
            ROUTE_CONTACT,
            get(handlers::contact_loader).post(handlers::contact_action),
        )
        .route(
            ROUTE_EDIT,
            get(handlers::edit_loader).post(handlers::edit_action),
        )
        .route(ROUTE_DESTROY, post(handlers::destroy_action))
        .route(
            ENDPOINT_CONTACTS,
            get(api::api_list).post(api::api_create),
        )
        .route(
            ENDPOINT_CONTACT,
            get(api::api_get)
                .patch(api::api_update)
                .delete(api::api_delete),
        )
        .route(ENDPOINT_HEALTH, get(api::health))
        .fallback(handlers::not_found)
        .with_state(state)
}
