use pretty_assertions::assert_eq;

use crate::prelude::*;

#[test]
fn clone_is_a_deep_copy() -> anyhow::Result<()> {
    let original: ArraySequence<i32> = [1, 2, 3].into_iter().collect();
    let mut copy = original.clone();

    assert_eq!(copy, original);

    copy.pop_first()?;
    copy.append(4);
    assert_eq!(original.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(copy.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
    assert_ne!(copy, original);
    Ok(())
}

#[test]
fn clone_keeps_the_capacity() {
    let mut original = ArraySequence::new();
    original.reserve(32).unwrap();
    original.append(1);

    let copy = original.clone();
    assert_eq!(copy.capacity(), original.capacity());
    assert_eq!(copy, original);
}

#[test]
fn take_leaves_a_fresh_empty_sequence() -> anyhow::Result<()> {
    let mut source: ArraySequence<i32> = [1, 2, 3].into_iter().collect();

    let moved = std::mem::take(&mut source);
    assert_eq!(moved.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);

    // The source is freshly initialized: empty, initial capacity, usable.
    assert!(source.is_empty());
    assert!(source.capacity() >= ArraySequence::<i32>::INITIAL_CAPACITY);
    source.append(9);
    assert_eq!(source.pop_last()?, 9);
    Ok(())
}

#[test]
fn equality_is_element_wise() {
    let left: ArraySequence<i32> = [1, 2, 3].into_iter().collect();
    let same: ArraySequence<i32> = [1, 2, 3].into_iter().collect();
    let shorter: ArraySequence<i32> = [1, 2].into_iter().collect();
    let reordered: ArraySequence<i32> = [3, 2, 1].into_iter().collect();

    assert_eq!(left, same);
    assert_ne!(left, shorter);
    assert_ne!(left, reordered);

    // Capacity plays no part in equality.
    let mut roomy: ArraySequence<i32> = [1, 2, 3].into_iter().collect();
    roomy.reserve(64).unwrap();
    assert_eq!(left, roomy);
}

#[test]
fn debug_formats_as_a_list() {
    let sequence: ArraySequence<i32> = [1, 2, 3].into_iter().collect();
    assert_eq!(format!("{sequence:?}"), "[1, 2, 3]");
    assert_eq!(format!("{:?}", ArraySequence::<i32>::new()), "[]");
}

#[test]
fn into_iter_consumes_the_sequence() {
    let sequence: ArraySequence<String> =
        ["a", "b", "c"].into_iter().map(String::from).collect();

    let collected: Vec<String> = sequence.into_iter().collect();
    assert_eq!(collected, vec!["a", "b", "c"]);
}

#[test]
fn iter_mut_updates_in_place() {
    let mut sequence: ArraySequence<i32> = (0..5).collect();

    for value in sequence.iter_mut() {
        *value *= 10;
    }
    assert_eq!(sequence.iter().copied().collect::<Vec<_>>(), vec![0, 10, 20, 30, 40]);
}
