//! Contact Service
//!
//! The query layer over the key-value store. The whole collection lives under
//! one key and is read, modified and rewritten wholesale on every mutation.
//!
//! ## Consistency
//! Mutations hold `write_lock` for their entire read-modify-write, so writes
//! issued through one service never interleave. Reads skip the lock and see
//! the last completed write.

use super::error::{ContactError, Result};
use super::network::FakeNetwork;
use super::ranking::{MATCHES, best_rank};
use super::types::{Contact, ContactUpdate, generate_id, now_ms};
use crate::storage::{KeyValueStore, load_json, save_json};

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Storage key holding the serialized contact array.
pub const CONTACTS_KEY: &str = "contacts";

pub struct ContactService {
    store: Arc<dyn KeyValueStore>,
    network: FakeNetwork,
    write_lock: Mutex<()>,
}

impl ContactService {
    pub fn new(store: Arc<dyn KeyValueStore>, max_latency: Duration) -> Self {
        Self {
            store,
            network: FakeNetwork::new(max_latency),
            write_lock: Mutex::new(()),
        }
    }

    pub fn network(&self) -> &FakeNetwork {
        &self.network
    }

    /// Lists contacts, optionally filtered by a fuzzy match on first/last name.
    ///
    /// The result is always ordered by last name, then creation time.
    pub async fn list(&self, query: Option<&str>) -> Result<Vec<Contact>> {
        self.network
            .simulate(Some(&format!("getContacts:{}", query.unwrap_or_default())))
            .await;

        let mut contacts = self.read_all().await?.unwrap_or_default();
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            contacts.retain(|c| best_rank([c.first.as_str(), c.last.as_str()], query) >= MATCHES);
        }
        sort_contacts(&mut contacts);

        tracing::debug!("Listed {} contacts (query: {:?})", contacts.len(), query);
        Ok(contacts)
    }

    /// Creates a blank contact and stores it at the front of the collection.
    pub async fn create(&self) -> Result<Contact> {
        self.network.simulate(None).await;
        let _guard = self.write_lock.lock().await;

        let mut contacts = self.read_all().await?.unwrap_or_default();
        sort_contacts(&mut contacts);

        let id = loop {
            let candidate = generate_id();
            if !contacts.iter().any(|c| c.id == candidate) {
                break candidate;
            }
        };
        let contact = Contact::blank(id, now_ms());
        contacts.insert(0, contact.clone());
        self.write_all(&contacts).await?;

        tracing::info!("Created contact {}", contact.id);
        Ok(contact)
    }

    pub async fn get(&self, id: &str) -> Result<Option<Contact>> {
        self.network.simulate(Some(&format!("contact:{}", id))).await;

        let contacts = self.read_all().await?.unwrap_or_default();
        Ok(contacts.into_iter().find(|c| c.id == id))
    }

    /// Merges `updates` into the contact with `id`.
    ///
    /// Fails with `ContactError::NotFound` if there is no such contact; the
    /// collection is left untouched in that case. An empty update skips the write.
    pub async fn update(&self, id: &str, updates: ContactUpdate) -> Result<Contact> {
        self.network.simulate(None).await;
        let _guard = self.write_lock.lock().await;

        let mut contacts = self.read_all().await?.unwrap_or_default();
        let contact = contacts
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ContactError::NotFound(id.to_string()))?;
        if updates.is_empty() {
            tracing::debug!("Empty update for contact {}", id);
            return Ok(contact.clone());
        }
        updates.apply_to(contact);
        let updated = contact.clone();
        self.write_all(&contacts).await?;

        tracing::info!("Updated contact {}", id);
        Ok(updated)
    }

    /// Removes the contact with `id`. Returns whether anything was removed.
    pub async fn delete(&self, id: &str) -> Result<bool> {
        let _guard = self.write_lock.lock().await;

        let Some(mut contacts) = self.read_all().await? else {
            return Ok(false);
        };
        let Some(index) = contacts.iter().position(|c| c.id == id) else {
            tracing::debug!("Delete of unknown contact {}", id);
            return Ok(false);
        };
        contacts.remove(index);
        self.write_all(&contacts).await?;

        tracing::info!("Deleted contact {}", id);
        Ok(true)
    }

    async fn read_all(&self) -> Result<Option<Vec<Contact>>> {
        Ok(load_json(self.store.as_ref(), CONTACTS_KEY).await?)
    }

    async fn write_all(&self, contacts: &[Contact]) -> Result<()> {
        save_json(self.store.as_ref(), CONTACTS_KEY, contacts).await?;
        Ok(())
    }
}

/// Orders by last name, then creation time. Stable.
pub fn sort_contacts(contacts: &mut [Contact]) {
    contacts.sort_by(|a, b| {
        a.last
            .cmp(&b.last)
            .then_with(|| a.created_at.cmp(&b.created_at))
    });
}
