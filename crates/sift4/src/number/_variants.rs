//! Number variants for the unsigned integers used as distance values.

use core::hash::Hash;

use crate::Number;

/// Sub-trait of `Number` for all unsigned integer types.
pub trait UInt: Number + Hash + Eq + Ord {}

/// Macro to implement `UInt` for all unsigned integer types.
macro_rules! impl_uint {
    ($($ty:ty),*) => {
        $(
            impl UInt for $ty {}
        )*
    }
}

impl_uint!(u8, u16, u32, u64, u128, usize);
