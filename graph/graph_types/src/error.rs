//! Errors reported by the type index.

use crate::TypeId;

/// Error returned by `TypeIndex` operations.
///
/// The two not-found kinds are contract violations by the caller: asking
/// about something this index never registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeIndexError {
    /// Reverse lookup of an identifier this index never issued.
    IdNotFound { id: TypeId },
    /// Strict lookup of a name that was never registered.
    NameNotFound { name: String },
    /// `register` called with a name that already has an identifier.
    AlreadyRegistered { name: String, id: TypeId },
    /// Every identifier below `next` has been issued and `next` cannot
    /// advance. `TypeId::MAX` itself is never issued.
    Exhausted { next: TypeId },
}

impl TypeIndexError {
    /// Whether this is one of the two lookup misses.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TypeIndexError::IdNotFound { .. } | TypeIndexError::NameNotFound { .. }
        )
    }
}

impl std::fmt::Display for TypeIndexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeIndexError::IdNotFound { id } => {
                write!(f, "could not find type with id {id}")
            }
            TypeIndexError::NameNotFound { name } => {
                write!(f, "could not find type id for name `{name}`")
            }
            TypeIndexError::AlreadyRegistered { name, id } => {
                write!(f, "type `{name}` is already registered with id {id}")
            }
            TypeIndexError::Exhausted { next } => {
                write!(f, "type index exhausted: no id can be allocated at {next}")
            }
        }
    }
}

impl std::error::Error for TypeIndexError {}
