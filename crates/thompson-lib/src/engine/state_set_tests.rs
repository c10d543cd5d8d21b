use super::StateSet;

#[test]
fn insert_reports_novelty() {
    let mut set = StateSet::new(4);
    assert!(set.insert(2));
    assert!(set.insert(0));
    assert!(!set.insert(2));
    assert_eq!(set.len(), 2);
}

#[test]
fn iteration_follows_insertion_order() {
    let mut set = StateSet::new(8);
    for id in [6, 4, 7, 0] {
        set.insert(id);
    }
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![6, 4, 7, 0]);
    assert_eq!(set.as_slice(), &[6, 4, 7, 0]);
}

#[test]
fn contains_out_of_range_is_false() {
    let set = StateSet::new(0);
    assert!(set.is_empty());
    assert!(!set.contains(3));
}
