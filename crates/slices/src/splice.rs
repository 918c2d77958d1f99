//! Structural edits on a growable sequence.
//!
//! Every public function here takes a possibly negative index and resolves it
//! against the length the vector has on entry. Out-of-range arguments panic
//! before anything is written where that can be detected up front.

use crate::index::{end_position, position};

/// Inserts `vals` so that the first of them ends up at position `idx`.
///
/// Elements at or after `idx` move right by the number of inserted values.
///
/// ```
/// let mut v = vec!['x', 'y', 'z'];
/// slices::insert(&mut v, 1, ['a', 'b', 'c']);
/// assert_eq!(v, ['x', 'a', 'b', 'c', 'y', 'z']);
/// ```
///
/// # Panics
///
/// Panics if the resolved index is greater than `v.len()`.
pub fn insert<T, I>(v: &mut Vec<T>, idx: isize, vals: I)
where
    I: IntoIterator<Item = T>,
{
    let len = v.len();
    insert_at(v, position(idx, len), vals);
}

pub(crate) fn insert_at<T, I>(v: &mut Vec<T>, idx: usize, vals: I)
where
    I: IntoIterator<Item = T>,
{
    let len = v.len();
    assert!(
        idx <= len,
        "insertion index (is {idx}) should be <= len (is {len})"
    );

    // Grow at the tail first, then rotate the old tail behind the new values.
    v.extend(vals);
    let added = v.len() - len;
    if added != 0 {
        v[idx..].rotate_right(added);
    }
}

/// Removes the `n` elements starting at `idx`.
///
/// ```
/// let mut v = vec!['a', 'b', 'c', 'd'];
/// slices::remove_n(&mut v, 1, 2);
/// assert_eq!(v, ['a', 'd']);
/// ```
///
/// # Panics
///
/// Panics if `idx + n` (after resolving `idx`) exceeds `v.len()`.
pub fn remove_n<T>(v: &mut Vec<T>, idx: isize, n: usize) {
    let len = v.len();
    remove_at(v, position(idx, len), n);
}

pub(crate) fn remove_at<T>(v: &mut Vec<T>, idx: usize, n: usize) {
    let len = v.len();
    // Both the slice and the rotation are bounds checked.
    v[idx..].rotate_left(n);
    v.truncate(len - n);
}

/// Removes the elements in `[from, to)`. A `to` of `0` means the end of `v`.
///
/// ```
/// let mut v = vec!['a', 'b', 'c', 'd'];
/// slices::remove_to(&mut v, 1, 3);
/// assert_eq!(v, ['a', 'd']);
/// ```
///
/// # Panics
///
/// Panics if the resolved span is inverted or runs past the end.
pub fn remove_to<T>(v: &mut Vec<T>, from: isize, to: isize) {
    let (from, to) = span(from, to, v.len());
    remove_at(v, from, to - from);
}

/// Replaces the `n` elements starting at `idx` with `vals`.
///
/// Afterwards `vals` occupies `[idx, idx + vals.len())` and everything that
/// followed the replaced span has shifted by `vals.len() - n`.
///
/// ```
/// let mut v = vec!['a', 'b', 'c', 'd'];
/// slices::replace_n(&mut v, 1, 2, ['x', 'y', 'z']);
/// assert_eq!(v, ['a', 'x', 'y', 'z', 'd']);
///
/// let mut v = vec!['a', 'b', 'c', 'd'];
/// slices::replace_n(&mut v, 1, 3, ['x']);
/// assert_eq!(v, ['a', 'x']);
/// ```
///
/// # Panics
///
/// Panics if `idx + n` (after resolving `idx`) exceeds `v.len()`.
pub fn replace_n<T, I>(v: &mut Vec<T>, idx: isize, n: usize, vals: I)
where
    I: IntoIterator<Item = T>,
    I::IntoIter: ExactSizeIterator,
{
    let len = v.len();
    replace_at(v, position(idx, len), n, vals);
}

pub(crate) fn replace_at<T, I>(v: &mut Vec<T>, mut idx: usize, n: usize, vals: I)
where
    I: IntoIterator<Item = T>,
    I::IntoIter: ExactSizeIterator,
{
    let len = v.len();
    assert!(
        idx <= len && n <= len - idx,
        "replace range of {n} at {idx} out of range for length {len}"
    );

    let mut vals = vals.into_iter();
    let m = vals.len();
    if n > m {
        remove_at(v, idx, n - m);
    } else if n < m {
        // The surplus values go in first; the rest overwrite the old span.
        let delta = m - n;
        insert_at(v, idx, vals.by_ref().take(delta));
        idx += delta;
    }

    let rest = vals.len();
    for (slot, val) in v[idx..idx + rest].iter_mut().zip(vals) {
        *slot = val;
    }
}

/// Replaces the elements in `[from, to)` with `vals`. A `to` of `0` means the end of `v`.
///
/// # Panics
///
/// Panics if the resolved span is inverted or runs past the end.
pub fn replace_to<T, I>(v: &mut Vec<T>, from: isize, to: isize, vals: I)
where
    I: IntoIterator<Item = T>,
    I::IntoIter: ExactSizeIterator,
{
    let (from, to) = span(from, to, v.len());
    replace_at(v, from, to - from, vals);
}

/// Appends `vals` to the end of `v`. Same as [`Extend::extend`].
pub fn append<T, I>(v: &mut Vec<T>, vals: I)
where
    I: IntoIterator<Item = T>,
{
    v.extend(vals);
}

fn span(from: isize, to: isize, len: usize) -> (usize, usize) {
    let from = position(from, len);
    let to = end_position(to, len);
    assert!(from <= to, "span starts at {from} but ends at {to}");
    (from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn insert_known_cases() {
        let mut v = vec!['x', 'y', 'z'];
        insert(&mut v, 1, ['a', 'b', 'c']);
        assert_eq!(v, ['x', 'a', 'b', 'c', 'y', 'z']);

        let mut v = vec![1, 2, 3];
        insert(&mut v, 0, [9]);
        assert_eq!(v, [9, 1, 2, 3]);

        let mut v = vec![1, 2, 3];
        insert(&mut v, 3, [9, 8]);
        assert_eq!(v, [1, 2, 3, 9, 8]);

        let mut v = vec![1, 2, 3];
        insert(&mut v, -1, [9]);
        assert_eq!(v, [1, 2, 9, 3]);

        let mut v: Vec<i32> = Vec::new();
        insert(&mut v, 0, [4, 5]);
        assert_eq!(v, [4, 5]);
    }

    #[test]
    fn insert_nothing_is_noop() {
        let mut v = vec![1, 2, 3];
        insert(&mut v, 1, std::iter::empty());
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    fn insert_longer_than_tail() {
        // Overlapping move: the inserted block is longer than what it displaces.
        let mut v = vec![0, 1];
        insert(&mut v, 1, 10..20);
        let expected: Vec<i32> = std::iter::once(0).chain(10..20).chain([1]).collect();
        assert_eq!(v, expected);
    }

    #[test]
    fn insert_non_copy() {
        let mut v = vec![String::from("a"), String::from("d")];
        insert(&mut v, 1, [String::from("b"), String::from("c")]);
        assert_eq!(v, ["a", "b", "c", "d"]);
    }

    #[test]
    #[should_panic(expected = "insertion index")]
    fn insert_past_end_panics() {
        let mut v = vec![1, 2];
        insert(&mut v, 3, [0]);
    }

    #[test]
    fn remove_known_cases() {
        let mut v = vec!['a', 'b', 'c', 'd'];
        remove_n(&mut v, 1, 2);
        assert_eq!(v, ['a', 'd']);

        let mut v = vec!['a', 'b', 'c', 'd'];
        remove_to(&mut v, 1, 3);
        assert_eq!(v, ['a', 'd']);

        let mut v = vec!['a', 'b', 'c', 'd'];
        remove_to(&mut v, -2, 0);
        assert_eq!(v, ['a', 'b']);

        let mut v = vec!['a', 'b', 'c', 'd'];
        remove_to(&mut v, 0, -1);
        assert_eq!(v, ['d']);

        let mut v = vec!['a', 'b', 'c', 'd'];
        remove_n(&mut v, -1, 1);
        assert_eq!(v, ['a', 'b', 'c']);
    }

    #[test]
    fn remove_zero_is_noop() {
        let mut v = vec![1, 2, 3];
        remove_n(&mut v, 1, 0);
        assert_eq!(v, [1, 2, 3]);
        remove_n(&mut v, 3, 0);
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    #[should_panic]
    fn remove_past_end_panics() {
        let mut v = vec![1, 2, 3];
        remove_n(&mut v, 2, 2);
    }

    #[test]
    #[should_panic(expected = "span starts at")]
    fn remove_inverted_span_panics() {
        let mut v = vec![1, 2, 3];
        remove_to(&mut v, 2, 1);
    }

    #[test]
    fn replace_known_cases() {
        let mut v = vec!['a', 'b', 'c', 'd'];
        replace_n(&mut v, 1, 2, ['x', 'y', 'z']);
        assert_eq!(v, ['a', 'x', 'y', 'z', 'd']);

        let mut v = vec!['a', 'b', 'c', 'd'];
        replace_n(&mut v, 1, 3, ['x']);
        assert_eq!(v, ['a', 'x']);

        let mut v = vec!['a', 'b', 'c', 'd'];
        replace_n(&mut v, 1, 2, ['x', 'y']);
        assert_eq!(v, ['a', 'x', 'y', 'd']);

        let mut v = vec!['a', 'b', 'c', 'd'];
        replace_n(&mut v, 2, 0, ['x']);
        assert_eq!(v, ['a', 'b', 'x', 'c', 'd']);

        let mut v = vec!['a', 'b', 'c', 'd'];
        replace_n(&mut v, 0, 4, []);
        assert!(v.is_empty());
    }

    #[test]
    fn replace_to_with_sentinel() {
        let mut v = vec![1, 2, 3, 4, 5];
        replace_to(&mut v, 2, 0, [7]);
        assert_eq!(v, [1, 2, 7]);

        let mut v = vec![1, 2, 3, 4, 5];
        replace_to(&mut v, -3, -1, [7, 8, 9]);
        assert_eq!(v, [1, 2, 7, 8, 9, 5]);

        let mut v = vec![1, 2, 3];
        replace_to(&mut v, 0, 0, [0]);
        assert_eq!(v, [0]);
    }

    #[test]
    #[should_panic(expected = "replace range")]
    fn replace_overlong_panics_before_writing() {
        let mut v = vec![1, 2];
        replace_n(&mut v, 1, 3, [7, 8, 9, 10]);
    }

    #[test]
    fn append_extends() {
        let mut v = vec![1];
        append(&mut v, [2, 3]);
        append(&mut v, []);
        assert_eq!(v, [1, 2, 3]);
    }

    fn random_vec(rng: &mut StdRng, max_len: usize) -> Vec<u32> {
        let len = rng.random_range(0..=max_len);
        (0..len).map(|_| rng.random_range(0..1_000)).collect()
    }

    #[test]
    fn insert_then_remove_restores() {
        let mut rng = StdRng::seed_from_u64(0x51_1CE5);
        for _ in 0..500 {
            let original = random_vec(&mut rng, 24);
            let vals = random_vec(&mut rng, 12);
            let idx = rng.random_range(0..=original.len());

            let mut v = original.clone();
            insert(&mut v, idx as isize, vals.iter().copied());
            assert_eq!(v.len(), original.len() + vals.len());
            assert_eq!(&v[idx..idx + vals.len()], &vals[..]);

            remove_n(&mut v, idx as isize, vals.len());
            assert_eq!(v, original);
        }
    }

    #[test]
    fn random_ops_match_vec_splice() {
        let mut rng = StdRng::seed_from_u64(0xDEAD_BEEF_CAFE_BABE);
        for _ in 0..2_000 {
            let original = random_vec(&mut rng, 24);
            let vals = random_vec(&mut rng, 12);
            let len = original.len();
            let idx = rng.random_range(0..=len);
            let n = rng.random_range(0..=len - idx);

            // Exercise both index forms.
            let raw = if idx < len && rng.random_bool(0.5) {
                idx as isize - len as isize
            } else {
                idx as isize
            };

            let mut expected = original.clone();
            expected.splice(idx..idx + n, vals.iter().copied());

            let mut v = original.clone();
            replace_n(&mut v, raw, n, vals.iter().copied());
            assert_eq!(v, expected, "replace_n idx={idx} n={n}");
            assert_eq!(v.len(), len - n + vals.len());

            // `0` is the end sentinel, so an empty span at the front needs `-len`.
            let to = if idx + n == len {
                0
            } else if idx + n == 0 {
                -(len as isize)
            } else {
                (idx + n) as isize
            };
            let mut v = original.clone();
            replace_to(&mut v, raw, to, vals.iter().copied());
            assert_eq!(v, expected, "replace_to idx={idx} n={n}");

            let mut expected = original.clone();
            expected.drain(idx..idx + n);
            let mut v = original.clone();
            remove_n(&mut v, raw, n);
            assert_eq!(v, expected, "remove_n idx={idx} n={n}");
            assert_eq!(v.len(), len - n);

            let mut v = original.clone();
            remove_to(&mut v, raw, to);
            assert_eq!(v, expected, "remove_to idx={idx} n={n}");
        }
    }
}
