//! In-memory record collections with snapshot semantics

use crate::core::entity::Record;
use indexmap::IndexMap;
use std::sync::{Arc, PoisonError, RwLock};
use uuid::Uuid;

/// Ordered, id-unique record collection.
///
/// The collection holds an `IndexMap` keyed by record id: ids are unique at
/// all times and insertion order is preserved. New records are prepended,
/// matching the back-office convention that the newest record is shown first.
///
/// Every mutation publishes a whole new snapshot (`Arc<IndexMap>`): readers
/// holding an earlier snapshot keep seeing that exact sequence, so a render
/// in progress never observes a half-mutated list.
///
/// Cheap to clone (Arc internally) and shared between the owning context and
/// the list controllers derived from it.
#[derive(Clone)]
pub struct Collection<T: Record> {
    records: Arc<RwLock<Arc<IndexMap<Uuid, T>>>>,
}

impl<T: Record> Collection<T> {
    /// Create an empty collection
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Arc::new(IndexMap::new()))),
        }
    }

    /// Create a collection from existing records, keeping the given order
    pub fn from_records(records: impl IntoIterator<Item = T>) -> Self {
        let map: IndexMap<Uuid, T> = records.into_iter().map(|r| (r.id(), r)).collect();
        Self {
            records: Arc::new(RwLock::new(Arc::new(map))),
        }
    }

    /// Get the current snapshot.
    ///
    /// The snapshot is immutable; later mutations swap in a new one and do
    /// not affect values already handed out.
    pub fn snapshot(&self) -> Arc<IndexMap<Uuid, T>> {
        Arc::clone(&self.records.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Look up a record by id
    pub fn get(&self, id: &Uuid) -> Option<T> {
        self.snapshot().get(id).cloned()
    }

    /// Number of records currently held
    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    /// Insert a new record at the head of the sequence.
    ///
    /// The caller constructs the record (constructors synthesize the id and
    /// creation timestamp), so insertion never fails under valid input.
    pub fn insert(&self, record: T) -> T {
        let mut guard = self.records.write().unwrap_or_else(PoisonError::into_inner);
        let mut map = IndexMap::clone(&guard);
        debug_assert!(
            !map.contains_key(&record.id()),
            "duplicate {} id {}",
            T::resource_name(),
            record.id()
        );
        map.shift_insert(0, record.id(), record.clone());
        *guard = Arc::new(map);
        tracing::debug!(resource = T::resource_name(), id = %record.id(), "record created");
        record
    }

    /// Replace the record matching `id` with the value produced by `f`.
    ///
    /// The replacement keeps the record's position in the sequence. Returns
    /// `None` when no record matches; an update against a missing id is
    /// benign, not an error.
    pub fn update(&self, id: &Uuid, f: impl FnOnce(&T) -> T) -> Option<T> {
        let mut guard = self.records.write().unwrap_or_else(PoisonError::into_inner);
        let current = guard.get(id)?;
        let updated = f(current);
        debug_assert_eq!(updated.id(), *id, "update must preserve the record id");
        let mut map = IndexMap::clone(&guard);
        // insert over an existing key keeps its position
        map.insert(*id, updated.clone());
        *guard = Arc::new(map);
        tracing::debug!(resource = T::resource_name(), id = %id, "record updated");
        Some(updated)
    }

    /// Remove the record matching `id`.
    ///
    /// Idempotent: removing an absent id is a no-op and leaves the current
    /// snapshot untouched, matching the end-user experience of a confirmed
    /// delete action.
    pub fn remove(&self, id: &Uuid) {
        let mut guard = self.records.write().unwrap_or_else(PoisonError::into_inner);
        if !guard.contains_key(id) {
            return;
        }
        let mut map = IndexMap::clone(&guard);
        map.shift_remove(id);
        *guard = Arc::new(map);
        tracing::debug!(resource = T::resource_name(), id = %id, "record deleted");
    }
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}
