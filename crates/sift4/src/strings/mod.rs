//! Distance functions for strings and other sequences of symbols.

mod sift4;

pub use self::sift4::{sift4, sift4_str, sift4_with_buffer, Sift4Buffer};
