//! Graph Types - type name ↔ `TypeId` index
//!
//! The graph store tags every node and edge with a compact `TypeId` instead
//! of its type name. This crate owns the mapping between the two:
//! - `TypeId` for the identifier itself (a `u32` newtype)
//! - `TypeIndex` for allocating and resolving identifiers
//! - `SharedTypeIndex` for registering types from several threads
//!
//! # Allocation
//!
//! Each index starts handing out identifiers at a root supplied by the
//! owning graph (`TypeId::ROOT` by default) and counts up by one per new
//! name. Identifiers are dense, never reused, and only meaningful for the
//! index that issued them.
//!
//! ```
//! use graph_types::{Lookup, TypeId, TypeIndex};
//!
//! let mut index = TypeIndex::new(TypeId::from_raw(1000));
//! assert!(index.lookup("Person").is_err());
//!
//! let person = index.get_or_create("Person");
//! assert_eq!(person, TypeId::from_raw(1000));
//! assert_eq!(index.type_id("Person", Lookup::Strict), Ok(person));
//! assert_eq!(index.type_name(person), Ok("Person"));
//! ```

mod error;
mod shared;
mod tracing_setup;
mod type_id;
mod type_index;

pub use error::TypeIndexError;
pub use shared::SharedTypeIndex;
pub use tracing_setup::init_tracing;
pub use type_id::TypeId;
pub use type_index::{Lookup, TypeIndex};
