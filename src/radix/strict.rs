//! Strict value comparison.
//!
//! [`RadixMap`](super::RadixMap) compares values with two distinct
//! capabilities: ordinary value equality through `PartialEq` (used by
//! `==`, `key_of`, `contains_value`) and the stricter,
//! representation-distinguishing [`StrictEq`] (used by
//! [`RadixMap::strict_equals`](super::RadixMap::strict_equals)).
//!
//! For most types the two coincide and `StrictEq` simply delegates to
//! `==`. Floats are the exception: `strict_eq` compares bit patterns, so
//! `0.0` and `-0.0` are distinct while a NaN is strictly equal to itself.

/// A stricter equality than `PartialEq`: values must match in
/// representation, not merely compare equal.
///
/// # Examples
///
/// ```rust
/// use radixmap::radix::StrictEq;
///
/// assert!(1_i32.strict_eq(&1));
/// assert!(!0.0_f64.strict_eq(&-0.0));
/// assert!(f64::NAN.strict_eq(&f64::NAN));
/// ```
pub trait StrictEq {
    /// Compares two values under strict equality.
    fn strict_eq(&self, other: &Self) -> bool;
}

macro_rules! strict_eq_via_partial_eq {
    ($($target:ty),* $(,)?) => {
        $(
            impl StrictEq for $target {
                #[inline]
                fn strict_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

strict_eq_via_partial_eq!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    str,
    String,
);

impl StrictEq for f32 {
    #[inline]
    fn strict_eq(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

impl StrictEq for f64 {
    #[inline]
    fn strict_eq(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

impl<T: StrictEq + ?Sized> StrictEq for &T {
    #[inline]
    fn strict_eq(&self, other: &Self) -> bool {
        (**self).strict_eq(other)
    }
}

impl<T: StrictEq + ?Sized> StrictEq for Box<T> {
    #[inline]
    fn strict_eq(&self, other: &Self) -> bool {
        (**self).strict_eq(other)
    }
}

impl<T: StrictEq> StrictEq for Option<T> {
    fn strict_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(left), Some(right)) => left.strict_eq(right),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: StrictEq> StrictEq for [T] {
    fn strict_eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(left, right)| left.strict_eq(right))
    }
}

impl<T: StrictEq> StrictEq for Vec<T> {
    #[inline]
    fn strict_eq(&self, other: &Self) -> bool {
        self.as_slice().strict_eq(other.as_slice())
    }
}

// =============================================================================
// Tests
// =============================================================================
