//! Unit tests for the read outcome type

use memstash_domain::Lookup;

#[test]
fn test_hit_is_present() {
    let lookup = Lookup::Hit(7);
    assert!(lookup.is_hit());
    assert!(!lookup.is_absent());
    assert_eq!(lookup.as_option(), Some(&7));
    assert_eq!(lookup.into_option(), Some(7));
}

#[test]
fn test_miss_and_corrupt_are_absent() {
    let miss: Lookup<i32> = Lookup::Miss;
    let corrupt: Lookup<i32> = Lookup::Corrupt;

    assert!(miss.is_absent());
    assert!(!miss.is_corrupt());
    assert!(corrupt.is_absent());
    assert!(corrupt.is_corrupt());
    assert_eq!(Option::<i32>::from(corrupt), None);
}

#[test]
fn test_default_is_miss() {
    assert_eq!(Lookup::<String>::default(), Lookup::Miss);
}

#[test]
fn test_map_preserves_variant() {
    assert_eq!(Lookup::Hit(2).map(|v| v * 10), Lookup::Hit(20));
    assert_eq!(Lookup::<i32>::Miss.map(|v| v * 10), Lookup::Miss);
    assert_eq!(Lookup::<i32>::Corrupt.map(|v| v * 10), Lookup::Corrupt);
}
