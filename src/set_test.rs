use crate::set::Set;

fn sorted(set: &Set<i32>) -> Vec<i32> {
    let mut items = set.to_vec();
    items.sort();
    items
}

fn set_of(items: &[i32]) -> Set<i32> {
    items.iter().cloned().collect()
}

#[test]
fn test_new() {
    let set: Set<i32> = Set::new();
    assert_eq!(set.len(), 0);
    assert!(set.is_empty());

    let set: Set<i32> = Set::with_capacity(100);
    assert_eq!(set.len(), 0);

    let set: Set<i32> = Default::default();
    assert!(set.is_empty());
}

#[test]
fn test_from_iter_dedup() {
    let set = set_of(&[1, 2, 3, 2, 1]);
    assert_eq!(set.len(), 3);
    assert_eq!(sorted(&set), vec![1, 2, 3]);
}

#[test]
fn test_insert_remove_contains() {
    let mut set: Set<String> = Set::new();
    assert!(set.insert("a".to_string()));
    assert!(set.insert("b".to_string()));
    assert!(set.insert("c".to_string()));
    assert!(!set.insert("a".to_string()));
    assert_eq!(set.len(), 3);

    assert!(set.contains(&"b".to_string()));
    assert!(set.remove(&"b".to_string()));
    assert!(!set.remove(&"b".to_string()));
    assert!(!set.contains(&"b".to_string()));
    assert!(set.insert("b".to_string()));
    assert_eq!(set.len(), 3);
}

#[test]
fn test_extend() {
    let mut set: Set<i32> = Set::new();
    set.extend(vec![1, 2, 3, 2, 1]);
    assert_eq!(set.len(), 3);
    assert!(set.contains_all(&[1, 2, 3]));
}

#[test]
fn test_contains_all_any() {
    let set = set_of(&[1, 2, 3, 4, 5]);
    assert!(set.contains_all(&[1, 3, 5]));
    assert!(!set.contains_all(&[1, 6]));
    assert!(set.contains_all(&[]));

    assert!(set.contains_any(&[6, 7, 5]));
    assert!(!set.contains_any(&[6, 7]));
    assert!(!set.contains_any(&[]));
}

#[test]
fn test_clear_and_clone() {
    let mut set = set_of(&[1, 2, 3]);
    let cloned = set.clone();
    set.clear();
    assert!(set.is_empty());
    assert_eq!(cloned.len(), 3);

    // clone is independent of its source.
    let mut other = cloned.clone();
    other.insert(4);
    assert_eq!(cloned.len(), 3);
    assert_eq!(other.len(), 4);
}

#[test]
fn test_iter() {
    let set = set_of(&[10, 20, 30]);
    let mut items: Vec<i32> = set.iter().cloned().collect();
    items.sort();
    assert_eq!(items, vec![10, 20, 30]);

    let mut count = 0;
    for _ in &set {
        count += 1;
        if count == 2 {
            break;
        }
    }
    assert_eq!(count, 2);
}

#[test]
fn test_display() {
    assert_eq!(Set::<i32>::new().to_string(), "[]");
    assert_eq!(set_of(&[1]).to_string(), "[1]");

    let s = set_of(&[1, 2]).to_string();
    assert!(s == "[1, 2]" || s == "[2, 1]", "{}", s);
    assert_eq!(format!("{:?}", set_of(&[7])), "{7}");
}

#[test]
fn test_union() {
    let (a, b) = (set_of(&[1, 2, 3]), set_of(&[3, 4, 5]));
    assert_eq!(sorted(&a.union(&b)), vec![1, 2, 3, 4, 5]);

    // smaller receiver takes the other branch.
    let small = set_of(&[9]);
    assert_eq!(sorted(&small.union(&a)), vec![1, 2, 3, 9]);
    assert_eq!(a.len(), 3);
    assert_eq!(small.len(), 1);
}

#[test]
fn test_intersection() {
    let (a, b) = (set_of(&[1, 2, 3, 4]), set_of(&[3, 4, 5]));
    assert_eq!(sorted(&a.intersection(&b)), vec![3, 4]);
    assert_eq!(sorted(&b.intersection(&a)), vec![3, 4]);

    let c = set_of(&[7, 8]);
    assert!(a.intersection(&c).is_empty());
}

#[test]
fn test_difference() {
    let (a, b) = (set_of(&[1, 2, 3, 4]), set_of(&[3, 4, 5]));
    assert_eq!(sorted(&a.difference(&b)), vec![1, 2]);
    assert_eq!(sorted(&b.difference(&a)), vec![5]);
}

#[test]
fn test_symmetric_difference() {
    let (a, b) = (set_of(&[1, 2, 3, 4]), set_of(&[3, 4, 5]));
    assert_eq!(sorted(&a.symmetric_difference(&b)), vec![1, 2, 5]);
    assert!(a.symmetric_difference(&a).is_empty());
}

#[test]
fn test_subset_superset() {
    let (a, b) = (set_of(&[1, 2]), set_of(&[1, 2, 3]));
    assert!(a.is_subset(&b));
    assert!(!b.is_subset(&a));
    assert!(a.is_subset(&a));
    assert!(b.is_superset(&a));
    assert!(!a.is_superset(&b));
    assert!(a.is_superset(&a));

    assert!(a.is_proper_subset(&b));
    assert!(!a.is_proper_subset(&a));
    assert!(b.is_proper_superset(&a));
    assert!(!b.is_proper_superset(&b));

    let (c, d) = (set_of(&[1, 5]), set_of(&[1, 2, 3]));
    assert!(!c.is_subset(&d));
}

#[test]
fn test_equal() {
    assert!(set_of(&[1, 2, 3]) == set_of(&[3, 2, 1]));
    assert!(set_of(&[1, 2, 3]) != set_of(&[1, 2]));
    assert!(set_of(&[1, 2, 3]) != set_of(&[1, 2, 4]));
    assert!(Set::<i32>::new() == Set::new());
}

#[test]
fn test_is_disjoint() {
    let (a, b, c) = (set_of(&[1, 2]), set_of(&[3, 4]), set_of(&[2, 3, 5, 6]));
    assert!(a.is_disjoint(&b));
    assert!(!a.is_disjoint(&c));
    assert!(!c.is_disjoint(&a));
    assert!(a.is_disjoint(&Set::new()));
}

#[test]
fn test_extend_from() {
    let mut a = set_of(&[1, 2]);
    a.extend_from(&set_of(&[2, 3, 4]));
    assert_eq!(sorted(&a), vec![1, 2, 3, 4]);
}

#[test]
fn test_remove_all() {
    let mut a = set_of(&[1, 2, 3, 4]);
    a.remove_all(&set_of(&[2, 4]));
    assert_eq!(sorted(&a), vec![1, 3]);

    // other larger than receiver.
    let mut a = set_of(&[1, 2]);
    a.remove_all(&set_of(&[2, 3, 4, 5, 6]));
    assert_eq!(sorted(&a), vec![1]);
}

#[test]
fn test_retain_all() {
    let mut a = set_of(&[1, 2, 3, 4]);
    a.retain_all(&set_of(&[2, 4, 6]));
    assert_eq!(sorted(&a), vec![2, 4]);

    a.retain_all(&Set::new());
    assert!(a.is_empty());
}

#[test]
fn test_empty_set_operations() {
    let (e, a) = (Set::<i32>::new(), set_of(&[1, 2]));
    assert_eq!(sorted(&e.union(&a)), vec![1, 2]);
    assert!(e.intersection(&a).is_empty());
    assert!(e.difference(&a).is_empty());
    assert_eq!(sorted(&a.difference(&e)), vec![1, 2]);
    assert!(e.is_subset(&a));
    assert!(e.is_proper_subset(&a));
    assert!(e.is_disjoint(&e));
}
