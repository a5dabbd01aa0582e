//! Tests for no_std and no_alloc compatibility
//!
//! Everything here uses only `core`: the container never allocates, and its
//! length queries, checked access and compile-time element access all work
//! in const items.

use core::mem;

use fixed_array::{codes, fixed_array, ConstLen, FixedArray};

const TABLE: FixedArray<u16, 4> = FixedArray::new([2, 3, 5, 7]);
const LEN: usize = <FixedArray<u16, 4> as ConstLen>::LEN;
const THIRD: u16 = match TABLE.at(2) {
    Ok(value) => *value,
    Err(_) => 0,
};
const PAST_END_CODE: u16 = match TABLE.at(4) {
    Ok(_) => 0,
    Err(error) => error.code,
};

#[test]
fn test_const_evaluation() {
    assert_eq!(LEN, 4);
    assert_eq!(THIRD, 5);
    assert_eq!(PAST_END_CODE, codes::INDEX_OUT_OF_RANGE);
    assert_eq!(*TABLE.front(), 2);
    assert_eq!(*TABLE.get::<3>(), 7);
}

#[test]
fn test_inline_storage_layout() {
    assert_eq!(mem::size_of::<FixedArray<u32, 8>>(), 8 * mem::size_of::<u32>());
    assert_eq!(mem::align_of::<FixedArray<u64, 2>>(), mem::align_of::<u64>());
    assert_eq!(mem::size_of::<FixedArray<u64, 0>>(), 0);
}

#[test]
fn test_core_only_operations() {
    let mut a = fixed_array![1u8, 2, 3, 4];
    let mut b = fixed_array![0u8; 4];

    a.swap(&mut b);
    assert_eq!(a, [0, 0, 0, 0]);
    assert_eq!(b, [1, 2, 3, 4]);

    b.fill(9);
    assert!(b.iter().all(|&x| x == 9));

    let mut sum = 0u32;
    for value in b.iter_rev() {
        sum += u32::from(*value);
    }
    assert_eq!(sum, 36);
}
