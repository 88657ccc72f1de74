use pretty_assertions::assert_eq;

use crate::prelude::*;

#[test]
fn insert_before_addresses_the_inserted_value() -> anyhow::Result<()> {
    let mut sequence = ArraySequence::new();
    sequence.append(5);
    sequence.append(10);
    sequence.append(15);

    let mut cursor = sequence.cursor_front_mut();
    cursor.seek_forward(2)?;
    assert_eq!(cursor.current()?, &15);
    cursor.insert_before(7);

    // The suffix shifted right and the cursor kept its offset, so it now
    // stands on the inserted value.
    assert_eq!(cursor.current()?, &7);
    assert_eq!(sequence.iter().copied().collect::<Vec<_>>(), vec![5, 10, 7, 15]);
    Ok(())
}

#[test]
fn insert_before_at_end_appends() {
    let mut sequence: ArraySequence<i32> = [1, 2].into_iter().collect();

    let mut cursor = sequence.cursor_end_mut();
    cursor.insert_before(3);

    assert_eq!(sequence.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn insert_into_empty_sequence() -> anyhow::Result<()> {
    let mut sequence = ArraySequence::new();
    let mut cursor = sequence.cursor_front_mut();
    assert!(cursor.at_end());
    cursor.insert_before(1);
    assert_eq!(cursor.current()?, &1);

    assert_eq!(sequence.len(), 1);
    Ok(())
}

#[test]
fn insert_by_index() -> anyhow::Result<()> {
    let mut sequence: ArraySequence<i32> = [1, 3].into_iter().collect();
    sequence.insert(1, 2)?;
    sequence.insert(3, 4)?; // index == len appends
    sequence.insert(0, 0)?;

    assert_eq!(sequence.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    Ok(())
}

#[test]
fn insert_out_of_bounds() {
    let mut sequence: ArraySequence<i32> = [1].into_iter().collect();

    if let Err(error) = sequence.insert(2, 99) {
        assert_eq!(error, SequenceError::OutOfRange);
    } else {
        assert!(false, "Expected error when inserting out of bounds");
    }
    assert_eq!(sequence.iter().copied().collect::<Vec<_>>(), vec![1]);
}

#[test]
fn insert_grows_a_full_buffer() -> anyhow::Result<()> {
    let mut sequence: ArraySequence<i32> = [1, 2, 3, 4].into_iter().collect();
    let capacity = sequence.capacity();
    assert_eq!(capacity, sequence.len()); // full

    sequence.insert(2, 99)?;
    assert_eq!(sequence.capacity(), capacity * 2);
    assert_eq!(sequence.iter().copied().collect::<Vec<_>>(), vec![1, 2, 99, 3, 4]);
    Ok(())
}
