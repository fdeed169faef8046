//! Randomized properties of the Sift4 distance.

use rand::prelude::*;
use sift4::strings::{sift4, sift4_str, sift4_with_buffer, Sift4Buffer};
use symagen::random_data;

/// Alphabets exercised by the random tests, from near-degenerate to wide.
const ALPHABETS: [&str; 3] = ["ab", "ATCGN", "abcdefghijklmnopqrstuvwxyz"];

#[test]
fn identity() {
    for (i, alphabet) in ALPHABETS.into_iter().enumerate() {
        let strings = random_data::random_string(20, 1, 50, alphabet, 42 + i as u64);
        for s in &strings {
            for max_offset in [0, 1, 5, 100] {
                for max_distance in [0, 1, 10] {
                    assert_eq!(sift4_str::<u32>(s, s, max_offset, max_distance), 0);
                }
            }
        }
    }
}

#[test]
fn empty_sides() {
    let strings = random_data::random_string(20, 1, 30, "ATCGN", 42);
    for s in &strings {
        assert_eq!(sift4_str::<usize>("", s, 5, 0), s.len());
        assert_eq!(sift4_str::<usize>(s, "", 5, 0), s.len());
    }
}

#[test]
fn bounded_by_the_longer_length() {
    let mut rng = StdRng::seed_from_u64(42);
    for trial in 0..50u64 {
        let alphabet = ALPHABETS[(trial % 3) as usize];
        let vecs = random_data::random_string(2, 1, 200, alphabet, 100 + trial);
        let (x, y) = (&vecs[0], &vecs[1]);
        let max_offset = rng.gen_range(0..=20);

        let d: usize = sift4_str(x, y, max_offset, 0);

        assert!(d <= x.len().max(y.len()));
    }
}

#[test]
fn buffers_never_change_the_answer() {
    let mut reused = Sift4Buffer::new();
    for trial in 0..50u64 {
        let vecs = random_data::random_string(2, 1, 100, "abcde", trial);
        let (x, y) = (&vecs[0], &vecs[1]);
        for max_offset in [1, 5, 100] {
            for max_distance in [0, 3] {
                let plain: u64 = sift4_str(x, y, max_offset, max_distance);
                let mut fresh = Sift4Buffer::new();
                let with_fresh: u64 =
                    sift4_with_buffer(x.as_bytes(), y.as_bytes(), max_offset, max_distance, &mut fresh);
                let with_reused: u64 =
                    sift4_with_buffer(x.as_bytes(), y.as_bytes(), max_offset, max_distance, &mut reused);

                assert_eq!(plain, with_fresh);
                assert_eq!(plain, with_reused);
            }
        }
    }
}

#[test]
fn reuse_is_stable() {
    let vecs = random_data::random_string(16, 1, 60, "ATCGN", 42);
    let pairs = vecs.iter().zip(vecs.iter().rev()).collect::<Vec<_>>();

    let mut buffer = Sift4Buffer::new();
    let first = pairs
        .iter()
        .map(|(x, y)| sift4_with_buffer::<_, u32>(x.as_bytes(), y.as_bytes(), 10, 0, &mut buffer))
        .collect::<Vec<_>>();
    let second = pairs
        .iter()
        .map(|(x, y)| sift4_with_buffer::<_, u32>(x.as_bytes(), y.as_bytes(), 10, 0, &mut buffer))
        .collect::<Vec<_>>();

    assert_eq!(first, second);
}

#[test]
fn results_at_or_under_the_threshold_are_exact() {
    let mut rng = StdRng::seed_from_u64(7);
    for trial in 0..100u64 {
        let vecs = random_data::random_string(2, 1, 80, "abc", 1_000 + trial);
        let (x, y) = (&vecs[0], &vecs[1]);
        let max_offset = rng.gen_range(0..=10);
        let threshold = rng.gen_range(1..=30);

        let bounded: usize = sift4_str(x, y, max_offset, threshold);

        // An early exit only ever returns a value over the threshold, so a
        // result at or under it means the scan ran to completion.
        if bounded <= threshold {
            let full: usize = sift4_str(x, y, max_offset, 0);
            assert_eq!(bounded, full);
        }
    }
}

#[test]
fn str_wrapper_agrees_with_byte_slices() {
    for trial in 0..20u64 {
        let vecs = random_data::random_string(2, 1, 60, "abcdef", 500 + trial);
        let (x, y) = (&vecs[0], &vecs[1]);

        let via_str: u16 = sift4_str(x, y, 7, 0);
        let via_slice: u16 = sift4(x.as_bytes(), y.as_bytes(), 7, 0);

        assert_eq!(via_str, via_slice);
    }
}

#[test]
fn widths_agree_when_the_distance_fits() {
    for trial in 0..20u64 {
        let vecs = random_data::random_string(2, 1, 100, "ab", 9 + trial);
        let (x, y) = (&vecs[0], &vecs[1]);

        let wide: u64 = sift4_str(x, y, 5, 0);
        let narrow: u8 = sift4_str(x, y, 5, 0);

        assert_eq!(wide, u64::from(narrow));
    }
}
