use pretty_assertions::assert_eq;

use crate::prelude::*;

#[test]
fn iter_yields_front_to_back() {
    let sequence: LinkedSequence<i32> = (0..5).collect();

    assert_eq!(sequence.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    assert_eq!(sequence.iter().rev().copied().collect::<Vec<_>>(), vec![4, 3, 2, 1, 0]);
}

#[test]
fn iter_is_exact_size() {
    let sequence: LinkedSequence<i32> = (0..5).collect();

    let mut iter = sequence.iter();
    assert_eq!(iter.len(), 5);
    iter.next();
    iter.next_back();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.copied().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn iter_meets_in_the_middle() {
    let sequence: LinkedSequence<i32> = (0..4).collect();

    let mut iter = sequence.iter();
    assert_eq!(iter.next(), Some(&0));
    assert_eq!(iter.next_back(), Some(&3));
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&2));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
    // Fused: stays exhausted.
    assert_eq!(iter.next(), None);
}

#[test]
fn iter_mut_updates_in_place() {
    let mut sequence: LinkedSequence<i32> = (0..5).collect();

    for value in sequence.iter_mut() {
        *value *= 10;
    }
    assert_eq!(sequence.iter().copied().collect::<Vec<_>>(), vec![0, 10, 20, 30, 40]);
}

#[test]
fn into_iter_consumes_the_sequence() {
    let sequence: LinkedSequence<String> =
        ["a", "b", "c"].into_iter().map(String::from).collect();

    let collected: Vec<String> = sequence.into_iter().collect();
    assert_eq!(collected, vec!["a", "b", "c"]);
}

#[test]
fn into_iter_partial_consumption_drops_the_rest() {
    let sequence: LinkedSequence<i32> = (0..100).collect();

    let mut iter = sequence.into_iter();
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(99));
    assert_eq!(iter.size_hint(), (98, Some(98)));
    // The remaining links are freed when the iterator drops.
}

#[test]
fn extend_appends_in_order() {
    let mut sequence: LinkedSequence<i32> = [1].into_iter().collect();
    sequence.extend([2, 3, 4]);
    assert_eq!(sequence.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
}

#[test]
fn drop_frees_every_link() {
    use std::rc::Rc;

    // Shared counters observe that dropping the sequence drops every value.
    let witness = Rc::new(());
    let mut sequence = LinkedSequence::new();
    for _ in 0..50 {
        sequence.append(Rc::clone(&witness));
    }
    assert_eq!(Rc::strong_count(&witness), 51);

    drop(sequence);
    assert_eq!(Rc::strong_count(&witness), 1);
}

#[test]
fn clear_frees_every_link() {
    use std::rc::Rc;

    let witness = Rc::new(());
    let mut sequence = LinkedSequence::new();
    for _ in 0..50 {
        sequence.append(Rc::clone(&witness));
    }
    sequence.clear();
    assert_eq!(Rc::strong_count(&witness), 1);
}
