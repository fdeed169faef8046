//! A `Number` is a general numeric type.
//!
//! Distance values are represented as `Number`s.

use core::{
    fmt::{Debug, Display},
    iter::Sum,
    ops::{Add, AddAssign, Sub, SubAssign},
};

/// Distance values are represented as `Number`s.
pub trait Number:
    Copy
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + Debug
    + Display
    + Default
    + Add<Output = Self>
    + AddAssign<Self>
    + Sum<Self>
    + Sub<Self, Output = Self>
    + SubAssign<Self>
{
    /// The additive identity.
    const ZERO: Self;

    /// The multiplicative identity.
    const ONE: Self;

    /// The maximum possible value.
    const MAX: Self;

    /// Casts a number to `Self`. This may be a lossy conversion.
    fn from<T: Number>(n: T) -> Self;

    /// Returns the number as a `u64`. This may be a lossy conversion.
    fn as_u64(self) -> u64;

    /// Returns the number as a `usize`. This may be a lossy conversion.
    #[allow(clippy::cast_possible_truncation)]
    fn as_usize(self) -> usize {
        self.as_u64() as usize
    }

    /// Returns a random `Number`.
    fn next_random<R: rand::Rng>(rng: &mut R) -> Self;

    /// Returns the smaller of two numbers.
    #[must_use]
    fn min(self, other: Self) -> Self {
        if self < other {
            self
        } else {
            other
        }
    }

    /// Returns the larger of two numbers.
    #[must_use]
    fn max(self, other: Self) -> Self {
        if self > other {
            self
        } else {
            other
        }
    }
}

/// A macro to implement the `Number` trait for primitive types.
macro_rules! impl_number_uint {
    ($($ty:ty),*) => {
        $(
            #[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
            impl Number for $ty {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = <$ty>::MAX;

                fn from<T: Number>(n: T) -> Self {
                    n.as_u64() as $ty
                }

                fn as_u64(self) -> u64 {
                    self as u64
                }

                fn next_random<R: rand::Rng>(rng: &mut R) -> Self {
                    rng.gen()
                }
            }
        )*
    }
}

impl_number_uint!(u8, u16, u32, u64, u128, usize);
