//! Route Table & Form Payloads
//!
//! Path constants for every routed view, plus the DTOs carried by query
//! strings, form posts and the JSON API.

use crate::contacts::ContactUpdate;
use serde::{Deserialize, Serialize};

// --- HTML routes ---

/// Root layout. GET lists and searches, POST creates.
pub const ROUTE_ROOT: &str = "/";
/// Contact detail. POST toggles the favorite flag.
pub const ROUTE_CONTACT: &str = "/contacts/:contact_id";
/// Edit form. POST saves the form fields.
pub const ROUTE_EDIT: &str = "/contacts/:contact_id/edit";
/// Delete action. POST only.
pub const ROUTE_DESTROY: &str = "/contacts/:contact_id/destroy";

// --- JSON API ---

pub const ENDPOINT_CONTACTS: &str = "/api/contacts";
pub const ENDPOINT_CONTACT: &str = "/api/contacts/:contact_id";
pub const ENDPOINT_HEALTH: &str = "/health";

pub fn contact_path(id: &str) -> String {
    format!("/contacts/{}", id)
}

pub fn edit_path(id: &str) -> String {
    format!("/contacts/{}/edit", id)
}

pub fn destroy_path(id: &str) -> String {
    format!("/contacts/{}/destroy", id)
}

// --- Payloads ---

/// `?q=` search parameter shared by every page that renders the sidebar.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

impl SearchParams {
    pub fn query(&self) -> Option<&str> {
        self.q.as_deref()
    }
}

/// Body of the favorite toggle: `favorite=true` or `favorite=false`.
#[derive(Debug, Deserialize)]
pub struct FavoriteForm {
    pub favorite: String,
}

impl FavoriteForm {
    pub fn parse(&self) -> Option<bool> {
        match self.favorite.as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }
}

/// Body of the edit form. Fields missing from the post stay unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct EditForm {
    pub first: Option<String>,
    pub last: Option<String>,
    pub twitter: Option<String>,
    pub avatar: Option<String>,
    pub notes: Option<String>,
}

impl From<EditForm> for ContactUpdate {
    fn from(form: EditForm) -> Self {
        ContactUpdate {
            first: form.first,
            last: form.last,
            twitter: form.twitter,
            avatar: form.avatar,
            notes: form.notes,
            favorite: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}
