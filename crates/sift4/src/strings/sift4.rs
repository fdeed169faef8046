//! The Sift4 distance, a fast approximation of edit distance.
//!
//! This is the "common" variant of the algorithm: one forward pass over both
//! sequences, a bounded look-ahead to re-synchronize after mismatches, and a
//! window of recent match positions used to detect transpositions.

use crate::number::UInt;

/// One remembered match position, used to detect transpositions.
#[derive(Clone, Copy, Debug)]
struct OffsetRecord {
    /// Cursor into the first sequence when the match was found.
    c1: usize,
    /// Cursor into the second sequence when the match was found.
    c2: usize,
    /// Whether this record has already been counted as a transposition.
    trans: bool,
}

/// Reusable scratch space for [`sift4_with_buffer`].
///
/// The buffer holds the window of match positions used for transposition
/// bookkeeping. It is cleared at the start of every call, so no state flows
/// from one computation into the next; reusing one instance only amortizes
/// the allocation. Calls borrow the buffer mutably, so callers running
/// distances in parallel dedicate one buffer per thread.
///
/// # Examples
///
/// ```
/// use sift4::strings::{sift4_with_buffer, Sift4Buffer};
///
/// let mut buffer = Sift4Buffer::new();
///
/// let d1: u32 = sift4_with_buffer("kitten".as_bytes(), "sitting".as_bytes(), 100, 5, &mut buffer);
/// let d2: u32 = sift4_with_buffer("book".as_bytes(), "back".as_bytes(), 100, 5, &mut buffer);
///
/// assert_eq!(d1, 3);
/// assert_eq!(d2, 2);
/// ```
#[derive(Debug)]
pub struct Sift4Buffer {
    /// The window of match positions still relevant for transpositions.
    window: Vec<OffsetRecord>,
}

impl Sift4Buffer {
    /// Creates a new, empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self { window: Vec::new() }
    }

    /// Clears the window, reserving the initial capacity on first use.
    fn reset(&mut self, capacity: usize) {
        self.window.clear();
        if self.window.capacity() == 0 {
            self.window.reserve(capacity);
        }
    }
}

impl Default for Sift4Buffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the Sift4 distance between two sequences.
///
/// Sift4 approximates the Damerau-Levenshtein distance in a single forward
/// pass. Two cursors advance together through the sequences; after a
/// mismatch, up to `max_offset` symbols are searched on either side to
/// re-synchronize, and a window of recent match positions is kept so that
/// transposed symbols are counted once each. The approximation is close on
/// similar inputs but is not a minimum edit distance.
///
/// If `max_distance` is positive, the scan returns early as soon as the
/// distance provably exceeds it. The early value is a lower-bound estimate,
/// always greater than `max_distance`; any returned value less than or equal
/// to `max_distance` is the exact (unrestricted) distance.
///
/// Symbols are compared with `==` and are otherwise opaque, so the sequences
/// may be bytes, chars, tokens, or anything else that implements
/// [`PartialEq`].
///
/// # Arguments
///
/// * `x`: The first sequence.
/// * `y`: The second sequence.
/// * `max_offset`: The number of symbols to search when re-synchronizing
///   after a mismatch.
/// * `max_distance`: An early-exit threshold; 0 computes the full distance.
///
/// # Examples
///
/// ```
/// use sift4::strings::sift4;
///
/// let x = "kitten".as_bytes();
/// let y = "sitting".as_bytes();
///
/// let distance: u32 = sift4(x, y, 100, 5);
///
/// assert_eq!(distance, 3);
///
/// let x = ["the", "quick", "brown", "fox"];
/// let y = ["the", "quick", "fox"];
///
/// let distance: u32 = sift4(&x, &y, 5, 0);
///
/// assert_eq!(distance, 1);
/// ```
///
/// # References
///
/// * [Super fast and accurate string distance](https://siderite.dev/blog/super-fast-and-accurate-string-distance.html)
pub fn sift4<T: PartialEq, U: UInt>(x: &[T], y: &[T], max_offset: usize, max_distance: usize) -> U {
    let mut buffer = Sift4Buffer::new();
    sift4_with_buffer(x, y, max_offset, max_distance, &mut buffer)
}

/// Computes the Sift4 distance between the bytes of two strings.
///
/// This is [`sift4`] over UTF-8 bytes. Multi-byte characters count once per
/// byte; callers who want scalar-value symbols can collect `chars` and use
/// [`sift4`] directly.
///
/// # Arguments
///
/// * `x`: The first string.
/// * `y`: The second string.
/// * `max_offset`: The number of bytes to search when re-synchronizing after
///   a mismatch.
/// * `max_distance`: An early-exit threshold; 0 computes the full distance.
///
/// # Examples
///
/// ```
/// use sift4::strings::sift4_str;
///
/// let distance: u32 = sift4_str("book", "back", 100, 5);
///
/// assert_eq!(distance, 2);
///
/// let distance: u32 = sift4_str("sift", "swift", 100, 0);
///
/// assert_eq!(distance, 1);
/// ```
pub fn sift4_str<U: UInt>(x: &str, y: &str, max_offset: usize, max_distance: usize) -> U {
    sift4(x.as_bytes(), y.as_bytes(), max_offset, max_distance)
}

/// Computes the Sift4 distance between two sequences, reusing a buffer.
///
/// Behaves exactly like [`sift4`]; the caller-supplied [`Sift4Buffer`] is
/// cleared before the scan, so its prior contents never influence the
/// result. On the buffer's first use its window is sized to
/// `min(max_offset, x.len(), y.len())`.
///
/// # Arguments
///
/// * `x`: The first sequence.
/// * `y`: The second sequence.
/// * `max_offset`: The number of symbols to search when re-synchronizing
///   after a mismatch.
/// * `max_distance`: An early-exit threshold; 0 computes the full distance.
/// * `buffer`: Scratch space reused across calls.
///
/// # Examples
///
/// ```
/// use sift4::strings::{sift4_with_buffer, Sift4Buffer};
///
/// let mut buffer = Sift4Buffer::new();
///
/// let pairs = [("hello", "helo"), ("world", "word")];
/// for (x, y) in pairs {
///     let distance: u32 = sift4_with_buffer(x.as_bytes(), y.as_bytes(), 100, 5, &mut buffer);
///     assert_eq!(distance, 1);
/// }
/// ```
pub fn sift4_with_buffer<T: PartialEq, U: UInt>(
    x: &[T],
    y: &[T],
    max_offset: usize,
    max_distance: usize,
    buffer: &mut Sift4Buffer,
) -> U {
    if x.is_empty() {
        return U::from(y.len());
    }
    if y.is_empty() {
        return U::from(x.len());
    }
    if x == y {
        return U::ZERO;
    }

    buffer.reset(max_offset.min(x.len()).min(y.len()));

    let mut c1 = 0; // cursor into x
    let mut c2 = 0; // cursor into y
    let mut lcss = 0; // accumulated length of common substrings
    let mut local_cs = 0; // length of the common substring currently growing
    let mut trans = 0; // number of transpositions

    while c1 < x.len() && c2 < y.len() {
        if x[c1] == y[c2] {
            local_cs += 1;

            // The first record the current match does not strictly follow
            // decides whether this match is a transposition. Records passed
            // in both dimensions are stale and get dropped along the way.
            let mut is_trans = false;
            let mut i = 0;
            while i < buffer.window.len() {
                let rec = buffer.window[i];
                if c1 <= rec.c1 || c2 <= rec.c2 {
                    is_trans = c2.abs_diff(c1) >= rec.c2.abs_diff(rec.c1);
                    if is_trans {
                        trans += 1;
                    } else if !rec.trans {
                        // Count the stored record once and remember that.
                        buffer.window[i].trans = true;
                        trans += 1;
                    }
                    break;
                } else if c1 > rec.c2 && c2 > rec.c1 {
                    buffer.window.remove(i);
                } else {
                    i += 1;
                }
            }
            buffer.window.push(OffsetRecord {
                c1,
                c2,
                trans: is_trans,
            });

            c1 += 1;
            c2 += 1;
        } else {
            lcss += local_cs;
            local_cs = 0;
            if c1 != c2 {
                // min keeps later transpositions detectable after the
                // cursors drift apart.
                c1 = c1.min(c2);
                c2 = c1;
            }

            // Look ahead on both sides for the next agreeing symbol. A hit
            // lands the adjusted cursor on the discovered match; a miss
            // advances both cursors past the mismatch.
            let mut advanced = false;
            let mut i = 0;
            while i < max_offset && (c1 + i < x.len() || c2 + i < y.len()) {
                if c1 + i < x.len() && x[c1 + i] == y[c2] {
                    c1 += i;
                    advanced = true;
                    break;
                }
                if c2 + i < y.len() && x[c1] == y[c2 + i] {
                    c2 += i;
                    advanced = true;
                    break;
                }
                i += 1;
            }
            if !advanced {
                c1 += 1;
                c2 += 1;
            }
        }

        if max_distance > 0 {
            let d = c1.max(c2) - lcss + trans;
            if d > max_distance {
                return U::from(d);
            }
        }

        // A match run ending at either sequence's end still needs crediting,
        // and transpositions over the final symbols must stay detectable.
        if c1 >= x.len() || c2 >= y.len() {
            lcss += local_cs;
            local_cs = 0;
            c1 = c1.min(c2);
            c2 = c1;
        }
    }

    lcss += local_cs;
    U::from(x.len().max(y.len()) - lcss + trans)
}
