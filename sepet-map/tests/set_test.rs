use sepet_map::HashSet;

#[test]
fn test_insert_contains_remove() {
    let mut set = HashSet::new();
    assert!(set.insert(1));
    assert!(!set.insert(1));
    assert!(set.contains(&1));
    assert!(!set.contains(&2));
    assert!(set.remove(&1));
    assert!(!set.remove(&1));
    assert!(set.is_empty());
}

#[test]
fn test_take_returns_the_stored_element() {
    let mut set = HashSet::new();
    set.insert("value".to_string());
    assert_eq!(set.take("value"), Some("value".to_string()));
    assert_eq!(set.take("value"), None);
}

#[test]
fn test_growth_keeps_membership() {
    let mut set = HashSet::with_capacity(4);
    for i in 0..1_000u64 {
        assert!(set.insert(i));
    }
    assert_eq!(set.len(), 1000);
    for i in 0..1_000u64 {
        assert!(set.contains(&i));
    }
    assert!(!set.contains(&1_000));
}

#[test]
fn test_set_algebra() {
    let a: HashSet<u32> = (0..10).collect();
    let b: HashSet<u32> = (5..15).collect();

    let mut inter: Vec<u32> = a.intersection(&b).copied().collect();
    inter.sort_unstable();
    assert_eq!(inter, [5, 6, 7, 8, 9]);

    let mut diff: Vec<u32> = a.difference(&b).copied().collect();
    diff.sort_unstable();
    assert_eq!(diff, [0, 1, 2, 3, 4]);

    let mut uni: Vec<u32> = a.union(&b).copied().collect();
    uni.sort_unstable();
    let expected: Vec<u32> = (0..15).collect();
    assert_eq!(uni, expected);

    let c: HashSet<u32> = (20..25).collect();
    assert!(a.is_disjoint(&c));
    assert!(!a.is_disjoint(&b));

    let small: HashSet<u32> = (2..5).collect();
    assert!(small.is_subset(&a));
    assert!(!a.is_subset(&small));
}

#[test]
fn test_retain() {
    let mut set: HashSet<u32> = (0..100).collect();
    set.retain(|v| v % 10 == 0);
    assert_eq!(set.len(), 10);
    for v in (0..100).step_by(10) {
        assert!(set.contains(&v));
    }
}

#[test]
fn test_eq() {
    let a: HashSet<u32> = (0..10).collect();
    let b: HashSet<u32> = (0..10).rev().collect();
    assert_eq!(a, b);

    let c: HashSet<u32> = (0..9).collect();
    assert_ne!(a, c);
}

#[test]
fn test_into_iter() {
    let set: HashSet<u32> = (0..30).collect();
    let mut values: Vec<u32> = set.into_iter().collect();
    values.sort_unstable();
    let expected: Vec<u32> = (0..30).collect();
    assert_eq!(values, expected);
}
