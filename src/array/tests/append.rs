use pretty_assertions::assert_eq;

use crate::prelude::*;

#[test]
fn append() {
    let mut sequence = ArraySequence::new();
    sequence.append(5);
    sequence.append(10);
    sequence.append(15);

    assert_eq!(sequence.len(), 3);
    assert_eq!(sequence.get(0), Some(&5));
    assert_eq!(sequence.get(1), Some(&10));
    assert_eq!(sequence.get(2), Some(&15));
    assert_eq!(sequence.get(3), None);
}

#[test]
fn third_append_doubles_the_initial_capacity() {
    let mut sequence = ArraySequence::new();
    sequence.append(5);
    sequence.append(10);
    assert_eq!(sequence.capacity(), 2);

    // The buffer is full; this append grows it first.
    sequence.append(15);
    assert_eq!(sequence.capacity(), 4);
    assert_eq!(sequence.len(), 3);
}

#[test]
fn growth_follows_the_doubling_ladder() {
    let mut sequence = ArraySequence::new();
    let mut observed = Vec::new();
    for value in 0..9 {
        sequence.append(value);
        observed.push(sequence.capacity());
    }
    assert_eq!(observed, vec![2, 2, 4, 4, 8, 8, 8, 8, 16]);
}

#[test]
fn prepend_shifts_everything_right() {
    let mut sequence = ArraySequence::new();
    sequence.prepend(3);
    sequence.prepend(2);
    sequence.prepend(1);

    assert_eq!(sequence.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn append_stress() {
    let mut sequence = ArraySequence::new();
    for value in 0..10_000 {
        sequence.append(value);
    }
    assert_eq!(sequence.len(), 10_000);
    assert!(sequence.capacity() >= 10_000);
    assert_eq!(sequence.get(0), Some(&0));
    assert_eq!(sequence.get(9_999), Some(&9_999));
}

#[test]
fn prepend_stress() {
    let mut sequence = ArraySequence::new();
    for value in 0..10_000 {
        sequence.prepend(value);
    }
    assert_eq!(sequence.len(), 10_000);
    assert_eq!(sequence.get(0), Some(&9_999));
    assert_eq!(sequence.get(9_999), Some(&0));
}
