use super::*;

#[test]
fn stale_handle_does_not_alias_reused_slot() {
    let mut arena = Arena::default();
    let a = arena.insert("a");
    assert_eq!(arena.remove(a), Some("a"));
    let b = arena.insert("b");
    assert_eq!(a.index, b.index);
    assert_ne!(a.generation, b.generation);
    assert_eq!(arena.get(a), None);
    assert_eq!(arena.get(b), Some(&"b"));
    assert_eq!(arena.remove(a), None);
    assert_eq!(arena.len(), 1);
}

#[test]
fn clear_invalidates_everything() {
    let mut arena = Arena::default();
    let a = arena.insert(1);
    let _b = arena.insert(2);
    arena.clear();
    assert!(arena.is_empty());
    assert_eq!(arena.get(a), None);
    assert_eq!(arena.iter().count(), 0);
    let c = arena.insert(3);
    assert_eq!(arena.get(c), Some(&3));
}
