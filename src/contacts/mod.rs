//! Contacts Module
//!
//! The query layer: everything the route handlers can ask of the contact
//! collection.
//!
//! ## Responsibilities
//! - **CRUD**: list, create, get, update and delete over the stored collection.
//! - **Search**: fuzzy ranking of first/last names against a query string.
//! - **Ordering**: results always sorted by last name, then creation time.
//! - **Latency**: a simulated network delay in front of every call.
//!
//! ## Submodules
//! - **`service`**: `ContactService`, the five operations and the write lock.
//! - **`ranking`**: match tiers used to filter search results.
//! - **`network`**: the fake network delay with its read cache.
//! - **`types`**: the `Contact` record and `ContactUpdate` patch.
//! - **`error`**: `ContactError`.

pub mod error;
pub mod network;
pub mod ranking;
pub mod service;
pub mod types;


pub use error::ContactError;
pub use service::ContactService;
pub use types::{Contact, ContactUpdate};
