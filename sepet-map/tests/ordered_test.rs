use sepet_map::{OrderedMap, OrderedSet};

#[test]
fn test_map_iterates_in_insertion_order() {
    let mut map = OrderedMap::new();
    map.insert("c", 3);
    map.insert("a", 1);
    map.insert("b", 2);

    let keys: Vec<&str> = map.keys().copied().collect();
    assert_eq!(keys, ["c", "a", "b"]);

    // Overwriting keeps the position.
    map.insert("a", 10);
    let keys: Vec<&str> = map.keys().copied().collect();
    assert_eq!(keys, ["c", "a", "b"]);
    assert_eq!(map.get("a"), Some(&10));
}

#[test]
fn test_map_remove_keeps_order_dense() {
    let mut map: OrderedMap<u32, u32> = (0..6).map(|i| (i, i)).collect();
    assert_eq!(map.remove(&2), Some(2));
    assert_eq!(map.remove(&99), None);

    let keys: Vec<u32> = map.keys().copied().collect();
    assert_eq!(keys, [0, 1, 3, 4, 5]);
    assert_eq!(map.len(), 5);
}

#[test]
fn test_map_remove_at() {
    let mut map: OrderedMap<u32, u32> = (0..4).map(|i| (i, i * 10)).collect();
    assert_eq!(map.remove_at(1), Some((1, 10)));
    assert_eq!(map.remove_at(10), None);

    let keys: Vec<u32> = map.keys().copied().collect();
    assert_eq!(keys, [0, 2, 3]);
}

#[test]
fn test_map_insert_at_moves_existing() {
    let mut map = OrderedMap::new();
    map.insert("a", 1);
    map.insert("b", 2);
    map.insert("c", 3);

    // New key at a position.
    assert_eq!(map.insert_at(1, "x", 9), None);
    let keys: Vec<&str> = map.keys().copied().collect();
    assert_eq!(keys, ["a", "x", "b", "c"]);

    // Existing key moves.
    assert_eq!(map.insert_at(0, "c", 30), Some(3));
    let keys: Vec<&str> = map.keys().copied().collect();
    assert_eq!(keys, ["c", "a", "x", "b"]);
    assert_eq!(map.get("c"), Some(&30));
}

#[test]
fn test_map_positional_accessors() {
    let mut map = OrderedMap::new();
    map.insert("first", 1);
    map.insert("mid", 2);
    map.insert("last", 3);

    assert_eq!(map.first(), Some((&"first", &1)));
    assert_eq!(map.last(), Some((&"last", &3)));
    assert_eq!(map.get_index(1), Some((&"mid", &2)));
    assert_eq!(map.get_index(3), None);
    assert_eq!(map.position("mid"), Some(1));
    assert_eq!(map.position("nope"), None);
}

#[test]
fn test_map_iter_pairs() {
    let map: OrderedMap<u32, u32> = (0..5).map(|i| (i, i * i)).collect();
    let pairs: Vec<(u32, u32)> = map.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(pairs, [(0, 0), (1, 1), (2, 4), (3, 9), (4, 16)]);
}

#[test]
fn test_set_insertion_order() {
    let mut set = OrderedSet::new();
    assert!(set.insert("b"));
    assert!(set.insert("a"));
    assert!(!set.insert("b"));

    let values: Vec<&str> = set.iter().copied().collect();
    assert_eq!(values, ["b", "a"]);
}

#[test]
fn test_set_insert_at_and_remove() {
    let mut set: OrderedSet<u32> = (0..5).collect();
    assert!(set.insert_at(0, 100));
    let values: Vec<u32> = set.iter().copied().collect();
    assert_eq!(values, [100, 0, 1, 2, 3, 4]);

    // Moving an existing element.
    assert!(!set.insert_at(0, 4));
    let values: Vec<u32> = set.iter().copied().collect();
    assert_eq!(values, [4, 100, 0, 1, 2, 3]);

    assert!(set.remove(&100));
    assert!(!set.remove(&100));
    assert_eq!(set.remove_at(0), Some(4));
    let values: Vec<u32> = set.iter().copied().collect();
    assert_eq!(values, [0, 1, 2, 3]);
}

#[test]
fn test_both_halves_stay_in_lockstep() {
    let mut map = OrderedMap::new();
    for i in 0..200u32 {
        map.insert(i, i);
    }
    for i in (0..200u32).step_by(3) {
        map.remove(&i);
    }
    // Order array and hash table must agree entry for entry.
    let keys: Vec<u32> = map.keys().copied().collect();
    assert_eq!(keys.len(), map.len());
    for k in &keys {
        assert!(map.contains_key(k));
    }
    for i in 0..200u32 {
        assert_eq!(map.contains_key(&i), i % 3 != 0);
    }
}
