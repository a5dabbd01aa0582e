//! Compile-Time Bounds Validation Integration Tests
//!
//! Exercises the validators behind element access at a compile-time index
//! and behind `front`/`back`. Rejected bounds are covered by the
//! `compile_fail` doctests on `IndexBound`, `NonEmpty` and `validate_index!`.

use fixed_array::{compile_time_bounds::*, fixed_array, get, validate_index, FixedArray};

validate_index!(0, 1);
validate_index!(15, 16);

const FIRST_OF_EIGHT: IndexBound<0, 8> = IndexBound::validate();
const ONE_ELEMENT: NonEmpty<1> = NonEmpty::validate();

/// Validators constructed in const context
#[test]
fn test_const_validators() {
    let _ = FIRST_OF_EIGHT;
    let _ = ONE_ELEMENT;
    assert_eq!(IndexBound::<0, 8>::index(), 0);
    assert_eq!(IndexBound::<7, 8>::index(), 7);
}

/// Every in-bounds compile-time index reaches the same element as `Index`
#[test]
fn test_static_access_across_length() {
    let a: FixedArray<u32, 4> = FixedArray::from_fn(|i| (i as u32 + 1) * 100);

    assert_eq!(*a.get::<0>(), a[0]);
    assert_eq!(*a.get::<1>(), a[1]);
    assert_eq!(*a.get::<2>(), a[2]);
    assert_eq!(*a.get::<3>(), a[3]);
    assert_eq!(*get::<3, _>(&a), 400);
}

/// The last index is `N - 1`, and `front`/`back` compile for any `N > 0`
#[test]
fn test_boundary_lengths() {
    let single = fixed_array![42u8];
    assert_eq!(*single.get::<0>(), 42);
    assert_eq!(single.front(), single.back());

    let wide: FixedArray<u16, 64> = FixedArray::from_fn(|i| i as u16);
    assert_eq!(*wide.get::<63>(), 63);
    assert_eq!(*wide.back(), 63);
}

/// Statically validated accesses in const items
#[test]
fn test_const_context_access() {
    const TABLE: FixedArray<&str, 3> = FixedArray::new(["zero", "one", "two"]);
    const LAST: &str = *TABLE.back();
    const MIDDLE: &str = *TABLE.get::<1>();

    assert_eq!(LAST, "two");
    assert_eq!(MIDDLE, "one");
}
