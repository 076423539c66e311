//! Compact type identifier handed out by `TypeIndex`.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Instance-local type identifier.
///
/// A `TypeId` is only meaningful for the index that issued it; two indexes
/// can hand out the same raw value for different names.
///
/// # Reserved values
/// - `NONE` (0) is the graph's "no type" sentinel and is never issued by a
///   default-rooted index.
/// - `ROOT` (1) is the default root, the first identifier a
///   `TypeIndex::default()` allocates.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    /// Sentinel for "no type".
    pub const NONE: TypeId = TypeId(0);

    /// Default root identifier supplied by the graph.
    pub const ROOT: TypeId = TypeId(1);

    /// Largest representable identifier.
    pub const MAX: TypeId = TypeId(u32::MAX);

    /// Create from raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        TypeId(raw)
    }

    /// Get raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Raw value widened for slice indexing.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The identifier directly after this one, or `None` past `MAX`.
    #[inline]
    pub const fn checked_next(self) -> Option<TypeId> {
        match self.0.checked_add(1) {
            Some(raw) => Some(TypeId(raw)),
            None => None,
        }
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == Self::NONE.0
    }
}

impl Hash for TypeId {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::NONE => write!(f, "TypeId::NONE"),
            _ => write!(f, "TypeId({})", self.0),
        }
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TypeId {
    fn from(raw: u32) -> Self {
        TypeId(raw)
    }
}

impl From<TypeId> for u32 {
    fn from(id: TypeId) -> Self {
        id.0
    }
}
