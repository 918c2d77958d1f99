use crate::index::position;

/// Returns the `idx`'th element of `s`. Negative `idx` counts from the end.
///
/// # Panics
///
/// Panics if the resolved index is not in `0..s.len()`.
#[inline]
pub fn get<T>(s: &[T], idx: isize) -> &T {
    &s[position(idx, s.len())]
}

/// Mutable counterpart of [`get`].
#[inline]
pub fn get_mut<T>(s: &mut [T], idx: isize) -> &mut T {
    let i = position(idx, s.len());
    &mut s[i]
}

/// Overwrites the `idx`'th element of `s` with `val`. Negative `idx` counts from the end.
///
/// # Panics
///
/// Panics if the resolved index is not in `0..s.len()`.
#[inline]
pub fn put<T>(s: &mut [T], idx: isize, val: T) {
    *get_mut(s, idx) = val;
}
