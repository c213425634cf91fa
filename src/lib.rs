//! Contact Manager Library
//!
//! This library crate defines the modules behind the contact manager server.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! Layered bottom-up, each depending only on the ones above it:
//!
//! - **`storage`**: The injected key-value store (`KeyValueStore`) with an
//!   in-memory and a directory-backed implementation.
//! - **`contacts`**: The query layer. CRUD over the contact collection, fuzzy
//!   search, ordering, and the simulated network delay.
//! - **`routes`**: The router. Binds URL paths to loader/action pairs and maps
//!   failures to HTTP responses.
//! - **`views`**: Server-rendered HTML for lists, detail views, forms and errors.
//! - **`config`**: Command-line and environment configuration.

pub mod config;
pub mod contacts;
pub mod routes;
pub mod storage;
pub mod views;
