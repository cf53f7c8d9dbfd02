//! In-memory entity collections
//!
//! Each collection is a process-wide shared list of entities guarded by its
//! own lock. The hub has no persistence engine; collections are constructed
//! once at startup by [`crate::core::ServerState`] and injected into the
//! engines.
//!
//! Locking discipline: a lock is held only for the duration of a single
//! read or mutation and is never held across an `.await` or across a call
//! into another engine. This reproduces the no-interleaving guarantee of the
//! original single-threaded runtime on a multi-threaded executor.

use parking_lot::RwLock;
use shared::{AppError, AppResult};

/// Entities stored in a [`Collection`] expose their string id.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// An ordered in-memory collection keyed by entity id.
///
/// Ordering is insertion order; `insert_front` keeps most-recent-first
/// listings for orders and shipments. Ids are generator-assigned, so no
/// collision check is performed on insert.
pub struct Collection<T> {
    /// Resource name used in log messages
    resource: &'static str,
    /// Constructor for the domain-specific not-found error
    not_found: fn(&str) -> AppError,
    items: RwLock<Vec<T>>,
}

impl<T: Keyed + Clone> Collection<T> {
    pub fn new(resource: &'static str, not_found: fn(&str) -> AppError) -> Self {
        Self {
            resource,
            not_found,
            items: RwLock::new(Vec::new()),
        }
    }

    /// Look up an entity by id, returning a cloned snapshot.
    pub fn find(&self, id: &str) -> AppResult<T> {
        self.items
            .read()
            .iter()
            .find(|item| item.key() == id)
            .cloned()
            .ok_or_else(|| (self.not_found)(id))
    }

    /// Append an entity at the end of the collection.
    pub fn push(&self, item: T) {
        self.items.write().push(item);
    }

    /// Insert an entity at the front (most-recent-first listings).
    pub fn insert_front(&self, item: T) {
        self.items.write().insert(0, item);
    }

    /// Apply a mutation to the entity with the given id and return the
    /// updated snapshot. Fails with the domain not-found error if absent.
    pub fn update(&self, id: &str, mutate: impl FnOnce(&mut T)) -> AppResult<T> {
        let mut items = self.items.write();
        let item = items
            .iter_mut()
            .find(|item| item.key() == id)
            .ok_or_else(|| {
                tracing::debug!(resource = self.resource, id, "update target not found");
                (self.not_found)(id)
            })?;
        mutate(item);
        Ok(item.clone())
    }

    /// Snapshot of all entities in listing order.
    pub fn all(&self) -> Vec<T> {
        self.items.read().clone()
    }

    /// Snapshot of all entities matching the predicate, in listing order.
    pub fn filter(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.items.read().iter().filter(|t| pred(t)).cloned().collect()
    }

    /// Number of entities matching the predicate.
    pub fn count(&self, pred: impl Fn(&T) -> bool) -> usize {
        self.items.read().iter().filter(|t| pred(t)).count()
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}

impl<T> std::fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collection")
            .field("resource", &self.resource)
            .finish()
    }
}
