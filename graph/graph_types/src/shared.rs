//! Thread-safe handle around a `TypeIndex`.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{Lookup, TypeId, TypeIndex, TypeIndexError};

/// Shared type index for graphs that register types from several threads.
///
/// A plain `TypeIndex` needs `&mut self` for every registration. This handle
/// serializes registrations behind one write lock, held across the whole
/// check-then-insert sequence, so two threads racing on the same absent name
/// always observe one identifier.
///
/// # Locking
/// - Read operations take the read lock and run in parallel with each other.
/// - Find-or-create first tries a read-lock fast path, then re-checks under
///   the write lock before allocating.
/// - `read()` and `write()` hand out guards for batching several calls under
///   one lock.
#[derive(Clone)]
pub struct SharedTypeIndex(Arc<RwLock<TypeIndex>>);

impl SharedTypeIndex {
    /// Create a shared index whose first identifier will be `root`.
    pub fn new(root: TypeId) -> Self {
        Self::from(TypeIndex::new(root))
    }

    pub fn len(&self) -> usize {
        self.0.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.read().is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.read().contains(name)
    }

    /// Strict lookup. See `TypeIndex::lookup`.
    pub fn lookup(&self, name: &str) -> Result<TypeId, TypeIndexError> {
        self.0.read().lookup(name)
    }

    /// Reverse lookup. Returns an owned name since the lock is released on
    /// return.
    pub fn type_name(&self, id: TypeId) -> Result<String, TypeIndexError> {
        self.0.read().type_name(id).map(str::to_owned)
    }

    /// Register an absent name. See `TypeIndex::register`.
    pub fn register(&self, name: &str) -> Result<TypeId, TypeIndexError> {
        self.0.write().register(name)
    }

    /// Find-or-create. See `TypeIndex::try_get_or_create`.
    pub fn try_get_or_create(&self, name: &str) -> Result<TypeId, TypeIndexError> {
        // Fast path: already registered
        {
            let guard = self.0.read();
            if let Some(id) = guard.lookup_existing(name) {
                return Ok(id);
            }
        }

        // Slow path: the write guard re-checks before allocating
        self.0.write().try_get_or_create(name)
    }

    /// Find-or-create.
    ///
    /// # Panics
    /// Panics if the identifier space is exhausted.
    pub fn get_or_create(&self, name: &str) -> TypeId {
        self.try_get_or_create(name).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Dual-mode lookup. See `TypeIndex::type_id`.
    pub fn type_id(&self, name: &str, mode: Lookup) -> Result<TypeId, TypeIndexError> {
        match mode {
            Lookup::Strict => self.lookup(name),
            Lookup::OrCreate => self.try_get_or_create(name),
        }
    }

    /// Hold the read lock across several lookups.
    pub fn read(&self) -> RwLockReadGuard<'_, TypeIndex> {
        self.0.read()
    }

    /// Hold the write lock across several registrations.
    pub fn write(&self) -> RwLockWriteGuard<'_, TypeIndex> {
        self.0.write()
    }
}

impl Default for SharedTypeIndex {
    fn default() -> Self {
        Self::new(TypeId::ROOT)
    }
}

impl From<TypeIndex> for SharedTypeIndex {
    fn from(index: TypeIndex) -> Self {
        SharedTypeIndex(Arc::new(RwLock::new(index)))
    }
}

impl std::fmt::Debug for SharedTypeIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let index = self.0.read();
        f.debug_struct("SharedTypeIndex")
            .field("root", &index.root())
            .field("len", &index.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
