#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use super::*;
use pretty_assertions::assert_eq;
use rayon::prelude::*;

#[test]
fn test_shared_index_clones_share_state() {
    let index = SharedTypeIndex::new(TypeId::from_raw(1000));
    let index2 = index.clone();

    let id1 = index.get_or_create("shared");
    let id2 = index2.get_or_create("shared");

    assert_eq!(id1, id2);
    assert_eq!(id1, TypeId::from_raw(1000));
    assert_eq!(index2.len(), 1);
    assert_eq!(index.type_name(id1).unwrap(), "shared");
}

#[test]
fn test_shared_strict_and_reverse_misses() {
    let index = SharedTypeIndex::default();
    assert!(index.is_empty());
    assert!(index.lookup("Foo").unwrap_err().is_not_found());
    assert!(index.type_name(TypeId::ROOT).unwrap_err().is_not_found());

    assert_eq!(index.type_id("Foo", Lookup::OrCreate).unwrap(), TypeId::ROOT);
    assert_eq!(index.type_id("Foo", Lookup::Strict).unwrap(), TypeId::ROOT);
    assert!(index.contains("Foo"));
}

#[test]
fn test_shared_register_rejects_duplicate() {
    let index = SharedTypeIndex::new(TypeId::from_raw(0));
    index.register("A").unwrap();
    assert_eq!(
        index.register("A").unwrap_err(),
        TypeIndexError::AlreadyRegistered {
            name: "A".to_owned(),
            id: TypeId::from_raw(0),
        }
    );
}

#[test]
fn test_parallel_get_or_create_assigns_one_id_per_name() {
    let index = SharedTypeIndex::new(TypeId::from_raw(0));
    let names: Vec<String> = (0..64).map(|i| format!("Type{}", i % 16)).collect();

    let ids: Vec<TypeId> = names
        .par_iter()
        .map(|name| index.get_or_create(name))
        .collect();

    assert_eq!(index.len(), 16);
    for (name, id) in names.iter().zip(&ids) {
        assert_eq!(index.lookup(name).unwrap(), *id);
        assert_eq!(&index.type_name(*id).unwrap(), name);
    }

    let guard = index.read();
    let mut raw: Vec<u32> = guard.iter().map(|(id, _)| id.raw()).collect();
    raw.sort_unstable();
    assert_eq!(raw, (0..16).collect::<Vec<_>>());
}

#[test]
fn test_write_guard_batches_registrations() {
    let index = SharedTypeIndex::default();
    {
        let mut guard = index.write();
        guard.register("A").unwrap();
        guard.register("B").unwrap();
    }
    assert_eq!(index.len(), 2);
    assert_eq!(format!("{index:?}"), "SharedTypeIndex { root: TypeId(1), len: 2, .. }");
}

#[test]
fn test_from_existing_index() {
    let mut plain = TypeIndex::new(TypeId::from_raw(50));
    plain.get_or_create("Person");

    let shared = SharedTypeIndex::from(plain);
    assert_eq!(shared.lookup("Person").unwrap(), TypeId::from_raw(50));
    assert_eq!(shared.get_or_create("Company"), TypeId::from_raw(51));
}
