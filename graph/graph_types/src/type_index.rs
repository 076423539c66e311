//! Two-way index between type names and `TypeId`s.
//!
//! Identifiers are allocated densely starting at a root supplied by the
//! owning graph, so the reverse table is a plain `Vec` offset by the root.
//!
//! # Design
//!
//! - `FxHashMap` for name → id, `Vec` for id → name
//! - Entries are never removed; identifiers are never reused
//! - All mutation takes `&mut self`; use `SharedTypeIndex` to share across threads

use rustc_hash::{FxBuildHasher, FxHashMap};

use crate::{TypeId, TypeIndexError};

/// How a by-name lookup treats a missing name.
///
/// `TypeIndex::type_id` takes this instead of a boolean so the choice reads
/// at the call site. Code that always wants one behaviour should call
/// `lookup` or `get_or_create` directly.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Lookup {
    /// Fail with `NameNotFound` on a miss.
    Strict,
    /// Register the name on a miss.
    #[default]
    OrCreate,
}

impl Lookup {
    /// Map a "fail when missing" flag to a mode.
    #[inline]
    pub const fn from_strict(strict: bool) -> Self {
        if strict {
            Lookup::Strict
        } else {
            Lookup::OrCreate
        }
    }
}

/// Bidirectional name ↔ `TypeId` index.
///
/// # Invariants
/// - `ids_by_name` and `names_by_id` are exact inverses.
/// - Every issued id lies in `root..next_id`; `names_by_id[i]` is the name of
///   `root + i`.
/// - `len()` equals the size of both tables.
///
/// # Duplicate registration
/// `register` rejects a name that is already present with
/// `TypeIndexError::AlreadyRegistered` and leaves the index untouched. Use
/// `get_or_create` for find-or-create semantics.
#[derive(Clone, Debug)]
pub struct TypeIndex {
    /// First identifier this index hands out.
    root: TypeId,
    /// Next identifier to allocate.
    next_id: TypeId,
    /// Name → id.
    ids_by_name: FxHashMap<Box<str>, TypeId>,
    /// Id → name, offset by `root`.
    names_by_id: Vec<Box<str>>,
}

impl TypeIndex {
    /// Create an empty index whose first identifier will be `root`.
    pub fn new(root: TypeId) -> Self {
        Self::with_capacity(root, 0)
    }

    /// Create an empty index with room for `capacity` names.
    pub fn with_capacity(root: TypeId, capacity: usize) -> Self {
        Self {
            root,
            next_id: root,
            ids_by_name: FxHashMap::with_capacity_and_hasher(capacity, FxBuildHasher),
            names_by_id: Vec::with_capacity(capacity),
        }
    }

    /// Number of registered names.
    #[inline]
    pub fn len(&self) -> usize {
        self.names_by_id.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names_by_id.is_empty()
    }

    /// The root identifier this index was created with.
    #[inline]
    pub fn root(&self) -> TypeId {
        self.root
    }

    /// The identifier the next registration will receive.
    #[inline]
    pub fn next_id(&self) -> TypeId {
        self.next_id
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ids_by_name.contains_key(name)
    }

    pub fn contains_id(&self, id: TypeId) -> bool {
        self.slot(id).is_some()
    }

    /// Register a name that is not yet present.
    ///
    /// Allocates the next identifier, records the pair in both tables and
    /// advances the counter by one.
    pub fn register(&mut self, name: &str) -> Result<TypeId, TypeIndexError> {
        if let Some(id) = self.lookup_existing(name) {
            tracing::debug!(name, %id, "rejected duplicate type registration");
            return Err(TypeIndexError::AlreadyRegistered {
                name: name.to_owned(),
                id,
            });
        }
        self.insert_new(name)
    }

    /// Strict lookup: the identifier for `name`, or `NameNotFound`.
    pub fn lookup(&self, name: &str) -> Result<TypeId, TypeIndexError> {
        match self.lookup_existing(name) {
            Some(id) => Ok(id),
            None => {
                tracing::debug!(name, "type name lookup missed");
                Err(TypeIndexError::NameNotFound {
                    name: name.to_owned(),
                })
            }
        }
    }

    /// Look up `name`, registering it if absent.
    ///
    /// The only possible error is `Exhausted`.
    pub fn try_get_or_create(&mut self, name: &str) -> Result<TypeId, TypeIndexError> {
        if let Some(id) = self.lookup_existing(name) {
            return Ok(id);
        }
        self.insert_new(name)
    }

    /// Look up `name`, registering it if absent.
    ///
    /// # Panics
    /// Panics if the identifier space is exhausted (no id can follow
    /// `TypeId::MAX`). Use `try_get_or_create` to handle that case.
    pub fn get_or_create(&mut self, name: &str) -> TypeId {
        self.try_get_or_create(name).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Look up `name` with the miss behaviour chosen by `mode`.
    ///
    /// `Lookup::Strict` behaves exactly like `lookup`, `Lookup::OrCreate`
    /// exactly like `try_get_or_create`.
    pub fn type_id(&mut self, name: &str, mode: Lookup) -> Result<TypeId, TypeIndexError> {
        match mode {
            Lookup::Strict => self.lookup(name),
            Lookup::OrCreate => self.try_get_or_create(name),
        }
    }

    /// The name registered under `id`.
    ///
    /// Fails with `IdNotFound` when `id` was never issued by this index,
    /// including ids issued by a different index.
    pub fn type_name(&self, id: TypeId) -> Result<&str, TypeIndexError> {
        match self.slot(id) {
            Some(slot) => Ok(&*self.names_by_id[slot]),
            None => {
                tracing::debug!(%id, "type id lookup missed");
                Err(TypeIndexError::IdNotFound { id })
            }
        }
    }

    /// Find-or-create every name in order, stopping at the first error.
    pub fn get_or_create_all<I>(&mut self, names: I) -> Result<Vec<TypeId>, TypeIndexError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| self.try_get_or_create(name.as_ref()))
            .collect()
    }

    /// Registered `(id, name)` pairs in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &str)> + '_ {
        (self.root.raw()..self.next_id.raw())
            .map(TypeId::from_raw)
            .zip(self.names_by_id.iter().map(Box::as_ref))
    }

    /// Silent lookup, no miss logging.
    #[inline]
    pub(crate) fn lookup_existing(&self, name: &str) -> Option<TypeId> {
        self.ids_by_name.get(name).copied()
    }

    /// Position of `id` in `names_by_id`, if this index issued it.
    #[inline]
    fn slot(&self, id: TypeId) -> Option<usize> {
        if id < self.root || id >= self.next_id {
            return None;
        }
        Some((id.raw() - self.root.raw()) as usize)
    }

    fn insert_new(&mut self, name: &str) -> Result<TypeId, TypeIndexError> {
        let id = self.next_id;
        // `next_id` must stay representable, so `TypeId::MAX` is never issued.
        let Some(next) = id.checked_next() else {
            tracing::debug!(name, %id, "type id space exhausted");
            return Err(TypeIndexError::Exhausted { next: id });
        };

        self.names_by_id.push(Box::from(name));
        self.ids_by_name.insert(Box::from(name), id);
        self.next_id = next;

        tracing::trace!(name, %id, "registered type");
        Ok(id)
    }
}

impl Default for TypeIndex {
    fn default() -> Self {
        Self::new(TypeId::ROOT)
    }
}
