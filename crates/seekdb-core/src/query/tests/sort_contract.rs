use crate::{
    query::tests::ids,
    session::Session,
    sort::SortSpec,
    store::MemoryStore,
    test_support::{Person, Tag, seed_people, seed_tags},
};

#[test]
fn two_valued_label_with_descending_id_tiebreak() {
    let store = MemoryStore::new();
    seed_tags(&store);
    let session = Session::new(&store);

    let page = session
        .list::<Tag>()
        .sort(SortSpec::from_pairs([("label", "asc"), ("id", "desc")]))
        .count(100)
        .execute()
        .expect("listing should succeed");

    assert_eq!(page.len(), 100);

    let rows = page.items();
    assert_eq!((rows[0].label.as_str(), rows[0].id), ("a", 50));
    assert_eq!((rows[50].label.as_str(), rows[50].id), ("b", 100));

    // The full first half is label `a` with strictly descending ids.
    let first_half: Vec<u64> = rows[..50].iter().map(|row| row.id).collect();
    assert!(rows[..50].iter().all(|row| row.label == "a"));
    assert_eq!(first_half, (1..=50).rev().collect::<Vec<_>>());

    let second_half: Vec<u64> = rows[50..].iter().map(|row| row.id).collect();
    assert!(rows[50..].iter().all(|row| row.label == "b"));
    assert_eq!(second_half, (51..=100).rev().collect::<Vec<_>>());
}

#[test]
fn descending_name_sort_mirrors_descending_ids() {
    let store = MemoryStore::new();
    seed_people(&store);
    let session = Session::new(&store);

    let page = session
        .list::<Person>()
        .sort_by("name", "desc")
        .count(100)
        .execute()
        .expect("listing should succeed");

    // Zero-padded names sort exactly like their ids.
    assert_eq!(ids(&page), (1..=100).rev().collect::<Vec<_>>());
}

#[test]
fn duplicate_sort_keys_are_honored_in_declaration_order() {
    let store = MemoryStore::new();
    seed_people(&store);
    let session = Session::new(&store);

    // The second `id` key is redundant but legal; the first decides.
    let page = session
        .list::<Person>()
        .sort(SortSpec::from_pairs([("id", "asc"), ("id", "desc")]))
        .count(5)
        .execute()
        .expect("listing should succeed");

    assert_eq!(ids(&page), vec![1, 2, 3, 4, 5]);
}

#[test]
fn default_sort_is_primary_key_ascending() {
    let store = MemoryStore::new();
    // Insert out of id order; the default ordering must not be insertion order.
    store.insert_many([3u64, 1, 2].map(|id| Person {
        id,
        name: format!("Person {id:03}"),
        city: "Portland".to_string(),
    }));
    let session = Session::new(&store);

    let page = session
        .list::<Person>()
        .count(10)
        .execute()
        .expect("listing should succeed");

    assert_eq!(ids(&page), vec![1, 2, 3]);
}
