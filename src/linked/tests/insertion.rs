use pretty_assertions::assert_eq;

use crate::prelude::*;

#[test]
fn insert_before_keeps_neighbours() -> anyhow::Result<()> {
    let mut sequence = LinkedSequence::new();
    sequence.append(5);
    sequence.append(10);
    sequence.append(15);

    let mut cursor = sequence.cursor_front_mut();
    cursor.seek_forward(2)?;
    assert_eq!(cursor.current()?, &15);
    cursor.insert_before(7);

    // The new value sits immediately before 15; everything ahead of it is
    // untouched.
    assert_eq!(sequence.iter().copied().collect::<Vec<_>>(), vec![5, 10, 7, 15]);
    Ok(())
}

#[test]
fn insert_before_at_front_prepends() -> anyhow::Result<()> {
    let mut sequence: LinkedSequence<i32> = [10, 20].into_iter().collect();

    let mut cursor = sequence.cursor_front_mut();
    cursor.insert_before(5);
    assert_eq!(cursor.current()?, &10);

    assert_eq!(sequence.iter().copied().collect::<Vec<_>>(), vec![5, 10, 20]);
    Ok(())
}

#[test]
fn insert_before_at_end_appends() {
    let mut sequence: LinkedSequence<i32> = [1, 2].into_iter().collect();

    let mut cursor = sequence.cursor_end_mut();
    cursor.insert_before(3);
    assert!(cursor.at_end());

    assert_eq!(sequence.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn insert_into_empty_sequence() -> anyhow::Result<()> {
    let mut sequence = LinkedSequence::new();
    let mut cursor = sequence.cursor_front_mut();
    assert!(cursor.at_end());
    cursor.insert_before(1);

    assert_eq!(sequence.len(), 1);
    assert_eq!(sequence.get(0), Some(&1));
    Ok(())
}

#[test]
fn insert_by_index() -> anyhow::Result<()> {
    let mut sequence: LinkedSequence<i32> = [1, 3].into_iter().collect();
    sequence.insert(1, 2)?;
    sequence.insert(3, 4)?; // index == len appends
    sequence.insert(0, 0)?;

    assert_eq!(sequence.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    Ok(())
}

#[test]
fn insert_out_of_bounds() {
    let mut sequence: LinkedSequence<i32> = [1].into_iter().collect();

    if let Err(error) = sequence.insert(2, 99) {
        assert_eq!(error, SequenceError::OutOfRange);
    } else {
        assert!(false, "Expected error when inserting out of bounds");
    }
    assert_eq!(sequence.iter().copied().collect::<Vec<_>>(), vec![1]);
}

#[test]
fn insert_stress_interleaved() -> anyhow::Result<()> {
    let mut sequence = LinkedSequence::new();
    for value in 0..1_000 {
        if value % 2 == 0 {
            sequence.append(value);
        } else {
            sequence.prepend(value);
        }
    }
    assert_eq!(sequence.len(), 1_000);

    // Odd values in descending order, then even values in ascending order.
    let collected: Vec<i32> = sequence.iter().copied().collect();
    assert_eq!(collected[0], 999);
    assert_eq!(collected[499], 1);
    assert_eq!(collected[500], 0);
    assert_eq!(collected[999], 998);
    Ok(())
}
