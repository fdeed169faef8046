//! The `Number` trait is used to represent the values of distances.
//!
//! We provide implementations for the following types:
//!
//! * All primitive unsigned integers: `u8`, `u16`, `u32`, `u64`, `u128`, `usize`.

mod _number;
mod _variants;

pub use _number::Number;
pub use _variants::UInt;
