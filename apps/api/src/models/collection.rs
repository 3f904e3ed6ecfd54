//! Ordered, id-keyed entity collections.
//!
//! One generic `Collection<T>` backs all twelve repeatable record types. The
//! `CollectionEntity` trait is the seam that lets a single handler trio serve
//! every collection: each entity names its draft (fields without id) and patch
//! (partial fields) types and knows where it lives inside `ResumeData`.
#![allow(dead_code)]

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::resume::ResumeData;

/// A repeatable resume record with a store-assigned identifier.
pub trait CollectionEntity: Clone + Serialize + Send + Sync + 'static {
    /// Creation payload: the entity's fields without the id.
    type Draft: DeserializeOwned + Send + 'static;
    /// Partial-update payload: every field optional, no id.
    type Patch: DeserializeOwned + Send + 'static;

    /// Stable kind label used in routes and log lines ("experience", …).
    const KIND: &'static str;

    fn from_draft(id: Uuid, draft: Self::Draft) -> Self;

    /// Merges only the fields present in the patch. Implementations never
    /// touch the id.
    fn apply_patch(&mut self, patch: Self::Patch);

    fn id(&self) -> Uuid;

    fn collection(data: &ResumeData) -> &Collection<Self>;

    fn collection_mut(data: &mut ResumeData) -> &mut Collection<Self>;
}

/// Insertion-ordered list keyed by identifier.
///
/// Identifiers are assigned here at creation time (UUID v4 — unique among
/// concurrently-created records, unlike the coarse-timestamp scheme this
/// replaces) and never reassigned or reused for the session lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection<T>(Vec<T>);

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Collection(Vec::new())
    }
}

impl<T: CollectionEntity> Collection<T> {
    /// Assigns a fresh identifier, appends to the end, returns the new id.
    pub fn add(&mut self, draft: T::Draft) -> Uuid {
        let id = Uuid::new_v4();
        self.0.push(T::from_draft(id, draft));
        id
    }

    /// Merges `patch` into the matching record. Collection order is left
    /// unchanged. Returns `false` (silent no-op) when the id is absent.
    pub fn update(&mut self, id: Uuid, patch: T::Patch) -> bool {
        match self.0.iter_mut().find(|entry| entry.id() == id) {
            Some(entry) => {
                entry.apply_patch(patch);
                true
            }
            None => false,
        }
    }

    /// Removes exactly the record with the matching id, if present.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.0.len();
        self.0.retain(|entry| entry.id() != id);
        self.0.len() != before
    }

    pub fn get(&self, id: Uuid) -> Option<&T> {
        self.0.iter().find(|entry| entry.id() == id)
    }
}

impl<T> Collection<T> {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
